//! Path geometry: outline, direction arrow and distance label.
//!
//! Pure functions of the path cells and grid description. The interaction
//! session writes the results into its transient items.

use std::f64::consts::PI;

use cthulu_domain::{Cell, CellShape, GridMetrics, GridScale, PathCommand, Point};

/// Conic weight of the arrow's bends through interior cells.
pub const ARROW_CURVE_WEIGHT: f64 = 0.9;

/// Arrow-head stroke angle either side of the final segment.
const ARROW_HEAD_ANGLE: f64 = PI / 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLabel {
    pub position: Point,
    pub text: String,
}

/// Everything drawn for one path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub outline: Vec<PathCommand>,
    pub arrow: Vec<PathCommand>,
    /// `None` for an empty path.
    pub label: Option<DistanceLabel>,
}

pub fn build(cells: &[Cell], metrics: GridMetrics, dpi: f64, scale: &GridScale) -> PathGeometry {
    PathGeometry {
        outline: outline_commands(cells),
        arrow: arrow_commands(cells, metrics),
        label: distance_label(cells, metrics, dpi, scale),
    }
}

/// One closed polygon per cell: move, four lines, close.
///
/// The opening move goes to `(corners[0].x, corners[1].y)`. The host draws
/// the highlight that way and the shape depends on it.
pub fn outline_commands(cells: &[Cell]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(cells.len() * 6);
    for cell in cells {
        let corners = cell.corners();
        commands.push(PathCommand::Move(Point::new(corners[0].x, corners[1].y)));
        commands.extend(corners.iter().map(|&corner| PathCommand::Line(corner)));
        commands.push(PathCommand::Close);
    }
    commands
}

/// Direction arrow through the cell centers. Empty below two cells.
///
/// Starts with a straight half-segment, bends through each interior center
/// with a conic, and ends with a straight half-segment plus a two-stroke
/// head sized to a sixth of the cell width.
pub fn arrow_commands(cells: &[Cell], metrics: GridMetrics) -> Vec<PathCommand> {
    if cells.len() < 2 {
        return Vec::new();
    }

    let centers: Vec<Point> = cells.iter().map(|c| c.center()).collect();
    let mut commands = vec![
        PathCommand::Move(centers[0]),
        PathCommand::Line(centers[0].midpoint(centers[1])),
    ];

    for pair in centers[1..].windows(2) {
        commands.push(PathCommand::Conic {
            control: pair[0],
            to: pair[0].midpoint(pair[1]),
            weight: ARROW_CURVE_WEIGHT,
        });
    }

    let n = centers.len();
    let to = centers[n - 1];
    let from = centers[n - 2].midpoint(to);
    let (left, right) = arrow_head(from, to, metrics.cell_width / 6.0);

    commands.extend([
        PathCommand::Move(from),
        PathCommand::Line(to),
        PathCommand::Move(to),
        PathCommand::Line(left),
        PathCommand::Move(to),
        PathCommand::Line(right),
    ]);
    commands
}

fn arrow_head(from: Point, to: Point, length: f64) -> (Point, Point) {
    let angle = from.angle_to(to);
    let stroke = |a: f64| Point::new(to.x - length * a.cos(), to.y - length * a.sin());
    (
        stroke(angle - ARROW_HEAD_ANGLE),
        stroke(angle + ARROW_HEAD_ANGLE),
    )
}

/// Travelled distance at the last cell, in grid units.
///
/// Distance counts whole cells of `cell_width`, including diagonals.
pub fn distance_label(
    cells: &[Cell],
    metrics: GridMetrics,
    dpi: f64,
    scale: &GridScale,
) -> Option<DistanceLabel> {
    let last = cells.last()?;
    let distance = (cells.len() - 1) as f64 * metrics.cell_width;
    Some(DistanceLabel {
        position: last.center(),
        text: scale.format_distance(distance, dpi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn metrics() -> GridMetrics {
        GridMetrics::new(50.0, 50.0).unwrap()
    }

    fn cells(centers: &[(f64, f64)]) -> Vec<Cell> {
        centers
            .iter()
            .map(|&(x, y)| Cell::synthetic(Point::new(x, y), 50.0))
            .collect()
    }

    fn ft() -> GridScale {
        GridScale::new(Some(1.0), Some("ft".into()))
    }

    #[test]
    fn outline_is_six_commands_per_cell() {
        let path = cells(&[(25.0, 25.0), (75.0, 25.0), (125.0, 75.0)]);
        let outline = outline_commands(&path);

        assert_eq!(outline.len(), 18);
        for (block, cell) in outline.chunks(6).zip(&path) {
            let corners = cell.corners();
            assert_eq!(
                block[0],
                PathCommand::Move(Point::new(corners[0].x, corners[1].y))
            );
            for (cmd, corner) in block[1..5].iter().zip(corners) {
                assert_eq!(*cmd, PathCommand::Line(corner));
            }
            assert_eq!(block[5], PathCommand::Close);
        }
    }

    #[test]
    fn outline_move_mixes_first_two_corners() {
        let skewed = Cell::grid(
            Point::new(0.0, 0.0),
            [
                Point::new(-10.0, -12.0),
                Point::new(10.0, -8.0),
                Point::new(10.0, 10.0),
                Point::new(-10.0, 10.0),
            ],
        );
        let outline = outline_commands(&[skewed]);
        assert_eq!(outline[0], PathCommand::Move(Point::new(-10.0, -8.0)));
    }

    #[test]
    fn arrow_is_empty_below_two_cells() {
        assert!(arrow_commands(&[], metrics()).is_empty());
        assert!(arrow_commands(&cells(&[(25.0, 25.0)]), metrics()).is_empty());
        assert!(!arrow_commands(&cells(&[(25.0, 25.0), (75.0, 25.0)]), metrics()).is_empty());
    }

    #[test]
    fn two_cell_arrow_is_straight_with_head() {
        let arrow = arrow_commands(&cells(&[(0.0, 0.0), (60.0, 0.0)]), metrics());

        assert_eq!(arrow.len(), 8);
        assert_eq!(arrow[0], PathCommand::Move(Point::new(0.0, 0.0)));
        assert_eq!(arrow[1], PathCommand::Line(Point::new(30.0, 0.0)));
        assert_eq!(arrow[2], PathCommand::Move(Point::new(30.0, 0.0)));
        assert_eq!(arrow[3], PathCommand::Line(Point::new(60.0, 0.0)));
        assert_eq!(arrow[4], PathCommand::Move(Point::new(60.0, 0.0)));
        assert_eq!(arrow[6], PathCommand::Move(Point::new(60.0, 0.0)));

        // Head strokes trail back from the tip at ±30°, length 50/6.
        let length = 50.0 / 6.0;
        let (PathCommand::Line(left), PathCommand::Line(right)) = (arrow[5], arrow[7]) else {
            panic!("arrow head should be two line strokes");
        };
        assert_abs_diff_eq!(left.x, 60.0 - length * (PI / 6.0).cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(left.y, length * (PI / 6.0).sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(right.x, left.x, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, -left.y, epsilon = 1e-9);
        assert_abs_diff_eq!(left.distance_to(Point::new(60.0, 0.0)), length, epsilon = 1e-9);
    }

    #[test]
    fn interior_cells_become_conics() {
        let path = cells(&[(25.0, 25.0), (75.0, 25.0), (75.0, 75.0), (125.0, 75.0)]);
        let arrow = arrow_commands(&path, metrics());

        assert_eq!(arrow.len(), 2 + 2 + 6);
        assert_eq!(
            arrow[2],
            PathCommand::Conic {
                control: Point::new(75.0, 25.0),
                to: Point::new(75.0, 50.0),
                weight: ARROW_CURVE_WEIGHT,
            }
        );
        assert_eq!(
            arrow[3],
            PathCommand::Conic {
                control: Point::new(75.0, 75.0),
                to: Point::new(100.0, 75.0),
                weight: ARROW_CURVE_WEIGHT,
            }
        );
        assert_eq!(arrow[4], PathCommand::Move(Point::new(100.0, 75.0)));
        assert_eq!(arrow[5], PathCommand::Line(Point::new(125.0, 75.0)));
    }

    #[test]
    fn label_for_three_cells_reads_two_feet() {
        let path = cells(&[(25.0, 25.0), (75.0, 25.0), (125.0, 25.0)]);
        let label = distance_label(&path, metrics(), 50.0, &ft()).unwrap();
        assert_eq!(label.text, "2ft");
        assert_eq!(label.position, Point::new(125.0, 25.0));
    }

    #[test]
    fn label_without_multiplier_reads_zero() {
        let path = cells(&[(25.0, 25.0), (75.0, 25.0), (125.0, 25.0)]);
        let scale = GridScale::new(None, Some("ft".into()));
        assert_eq!(distance_label(&path, metrics(), 50.0, &scale).unwrap().text, "0ft");
    }

    #[test]
    fn label_with_zero_dpi_reads_zero() {
        let path = cells(&[(25.0, 25.0), (75.0, 25.0)]);
        assert_eq!(distance_label(&path, metrics(), 0.0, &ft()).unwrap().text, "0ft");
    }

    #[test]
    fn empty_path_builds_nothing() {
        let geometry = build(&[], metrics(), 50.0, &ft());
        assert_eq!(geometry, PathGeometry::default());
    }

    #[test]
    fn single_seed_has_outline_and_zero_label() {
        let geometry = build(&cells(&[(25.0, 25.0)]), metrics(), 50.0, &ft());
        assert_eq!(geometry.outline.len(), 6);
        assert!(geometry.arrow.is_empty());
        assert_eq!(geometry.label.unwrap().text, "0ft");
    }
}

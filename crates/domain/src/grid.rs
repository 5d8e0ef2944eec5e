//! Grid metrics, grid-space coordinates and the real-world scale.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellShape, GridCell};
use crate::error::DomainError;
use crate::geometry::Point;

/// Cached width/height of one grid cell, in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridMetrics {
    pub fn new(cell_width: f64, cell_height: f64) -> Result<Self, DomainError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(cell_width) || !usable(cell_height) {
            return Err(DomainError::DegenerateGrid {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Measure a cell: width is corner 0 → 1, height is corner 0 → 3.
    pub fn from_cell(cell: &impl CellShape) -> Result<Self, DomainError> {
        let corners = cell.corners();
        Self::new(
            corners[0].distance_to(corners[1]),
            corners[0].distance_to(corners[3]),
        )
    }
}

/// Integer grid-space coordinate. Only used to compare proximity, never to
/// place geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
}

impl GridCoord {
    pub fn from_point(point: Point, metrics: GridMetrics) -> Self {
        Self {
            x: (point.x / metrics.cell_width).floor() as i64,
            y: (point.y / metrics.cell_height).floor() as i64,
        }
    }

    pub fn chebyshev_distance(&self, other: GridCoord) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Same cell or one of its eight neighbours.
    pub fn is_adjacent_to(&self, other: GridCoord) -> bool {
        self.chebyshev_distance(other) <= 1
    }
}

/// Real-world scale of the grid, e.g. "5ft" per cell.
///
/// Both fields are optional because the host may not have a parsed scale.
/// An unset multiplier counts as zero when converting distances.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridScale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl GridScale {
    pub fn new(multiplier: Option<f64>, unit: Option<String>) -> Self {
        Self { multiplier, unit }
    }

    /// Parse a host scale string like `"5ft"`, `"1.5 m"` or `"10"`.
    ///
    /// An empty string (or one with no leading number) yields an unset scale.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let split = raw
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(raw.len());
        let (number, unit) = raw.split_at(split);

        if number.is_empty() {
            return Ok(Self::default());
        }

        let multiplier: f64 = number
            .parse()
            .map_err(|_| DomainError::invalid_scale(raw))?;
        let unit = unit.trim();

        Ok(Self {
            multiplier: Some(multiplier),
            unit: (!unit.is_empty()).then(|| unit.to_string()),
        })
    }

    /// Render a scene-unit distance in grid units, rounded half-up, with the
    /// unit suffix. A missing multiplier zeroes the number.
    pub fn format_distance(&self, distance: f64, dpi: f64) -> String {
        let value = if dpi > 0.0 {
            distance / dpi * self.multiplier.unwrap_or(0.0)
        } else {
            0.0
        };
        let rounded = (value + 0.5).floor() as i64;
        format!("{}{}", rounded, self.unit.as_deref().unwrap_or(""))
    }
}

/// A plain square grid. Handy wherever the host grid is not available,
/// e.g. the in-memory host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGrid {
    cell_size: f64,
}

impl SquareGrid {
    pub fn new(cell_size: f64) -> Result<Self, DomainError> {
        GridMetrics::new(cell_size, cell_size)?;
        Ok(Self { cell_size })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn snap_to_center(&self, point: Point) -> Point {
        let s = self.cell_size;
        Point::new(
            ((point.x / s).floor() + 0.5) * s,
            ((point.y / s).floor() + 0.5) * s,
        )
    }

    /// The cell containing `point`.
    pub fn cell_at(&self, point: Point) -> Cell {
        let center = self.snap_to_center(point);
        let h = self.cell_size / 2.0;
        Cell::Grid(GridCell::new(
            center,
            [
                Point::new(center.x - h, center.y - h),
                Point::new(center.x + h, center.y - h),
                Point::new(center.x + h, center.y + h),
                Point::new(center.x - h, center.y + h),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::SyntheticCell;
    use approx::assert_abs_diff_eq;

    #[test]
    fn metrics_measure_adjacent_corners() {
        let metrics = GridMetrics::from_cell(&SyntheticCell::new(Point::new(5.0, 5.0), 70.0)).unwrap();
        assert_abs_diff_eq!(metrics.cell_width, 70.0);
        assert_abs_diff_eq!(metrics.cell_height, 70.0);
    }

    #[test]
    fn degenerate_metrics_are_rejected() {
        let err = GridMetrics::new(0.0, 50.0).unwrap_err();
        assert!(matches!(err, DomainError::DegenerateGrid { .. }));
        assert!(GridMetrics::new(f64::NAN, 50.0).is_err());
    }

    #[test]
    fn grid_coord_floors_including_negatives() {
        let metrics = GridMetrics::new(50.0, 50.0).unwrap();
        assert_eq!(
            GridCoord::from_point(Point::new(49.9, 50.0), metrics),
            GridCoord { x: 0, y: 1 }
        );
        assert_eq!(
            GridCoord::from_point(Point::new(-0.1, -50.1), metrics),
            GridCoord { x: -1, y: -2 }
        );
    }

    #[test]
    fn adjacency_is_chebyshev_and_symmetric() {
        let a = GridCoord { x: 3, y: 3 };
        for dx in -2i64..=2 {
            for dy in -2i64..=2 {
                let b = GridCoord { x: 3 + dx, y: 3 + dy };
                let expected = dx.abs() <= 1 && dy.abs() <= 1;
                assert_eq!(a.is_adjacent_to(b), expected, "dx={dx} dy={dy}");
                assert_eq!(b.is_adjacent_to(a), expected);
            }
        }
    }

    #[test]
    fn scale_parsing() {
        assert_eq!(
            GridScale::parse("5ft").unwrap(),
            GridScale::new(Some(5.0), Some("ft".into()))
        );
        assert_eq!(
            GridScale::parse(" 1.5 m ").unwrap(),
            GridScale::new(Some(1.5), Some("m".into()))
        );
        assert_eq!(GridScale::parse("10").unwrap(), GridScale::new(Some(10.0), None));
        assert_eq!(GridScale::parse("").unwrap(), GridScale::default());
        assert!(GridScale::parse("1.2.3ft").is_err());
    }

    #[test]
    fn distance_formatting_rounds_half_up() {
        let scale = GridScale::new(Some(5.0), Some("ft".into()));
        assert_eq!(scale.format_distance(150.0, 150.0), "5ft");
        assert_eq!(scale.format_distance(15.0, 150.0), "1ft");
        assert_eq!(scale.format_distance(14.0, 150.0), "0ft");
    }

    #[test]
    fn missing_multiplier_zeroes_distance() {
        let scale = GridScale::new(None, Some("ft".into()));
        assert_eq!(scale.format_distance(1000.0, 50.0), "0ft");
        assert_eq!(GridScale::default().format_distance(1000.0, 50.0), "0");
    }

    #[test]
    fn square_grid_snaps_into_containing_cell() {
        let grid = SquareGrid::new(50.0).unwrap();
        assert_eq!(grid.snap_to_center(Point::new(0.0, 0.0)), Point::new(25.0, 25.0));
        assert_eq!(grid.snap_to_center(Point::new(74.0, -1.0)), Point::new(75.0, -25.0));

        let cell = grid.cell_at(Point::new(60.0, 10.0));
        assert_eq!(cell.center(), Point::new(75.0, 25.0));
        assert!(cell.contains_point(Point::new(60.0, 10.0)));
    }
}

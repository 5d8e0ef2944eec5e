//! Grid cells.
//!
//! A cell is either looked up from the host grid ([`GridCell`]) or built
//! directly from a center and a size ([`SyntheticCell`]). The synthetic form
//! anchors a path at a token that is not sitting on a cell center.
//!
//! Both variants satisfy [`CellShape`]; [`Cell`] is the tagged union the path
//! stores.

use std::fmt;

use crate::geometry::{LineSegment, Point};

/// Shared contract for anything that behaves like a square grid cell.
///
/// Corners are ordered top-left, top-right, bottom-right, bottom-left.
pub trait CellShape {
    fn center(&self) -> Point;

    fn corners(&self) -> [Point; 4];

    fn contains_point(&self, point: Point) -> bool;

    /// Closest point on (or inside) the cell boundary box.
    fn nearest_point_on_edge(&self, point: Point) -> Point {
        let [min, _, max, _] = self.corners();
        Point::new(
            point.x.clamp(min.x.min(max.x), min.x.max(max.x)),
            point.y.clamp(min.y.min(max.y), min.y.max(max.y)),
        )
    }

    fn edges(&self) -> [LineSegment; 4] {
        let c = self.corners();
        [
            LineSegment::new(c[0], c[1]),
            LineSegment::new(c[1], c[2]),
            LineSegment::new(c[2], c[3]),
            LineSegment::new(c[3], c[0]),
        ]
    }
}

/// A cell as reported by the host grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    center: Point,
    corners: [Point; 4],
}

impl GridCell {
    pub fn new(center: Point, corners: [Point; 4]) -> Self {
        Self { center, corners }
    }
}

impl CellShape for GridCell {
    fn center(&self) -> Point {
        self.center
    }

    fn corners(&self) -> [Point; 4] {
        self.corners
    }

    fn contains_point(&self, point: Point) -> bool {
        let (min_x, max_x, min_y, max_y) = self.corners.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(min_x, max_x, min_y, max_y), c| {
                (min_x.min(c.x), max_x.max(c.x), min_y.min(c.y), max_y.max(c.y))
            },
        );
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

/// A square cell built from a center and a side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticCell {
    center: Point,
    size: f64,
}

impl SyntheticCell {
    pub fn new(center: Point, size: f64) -> Self {
        Self { center, size }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    fn half(&self) -> f64 {
        self.size / 2.0
    }
}

impl CellShape for SyntheticCell {
    fn center(&self) -> Point {
        self.center
    }

    fn corners(&self) -> [Point; 4] {
        let h = self.half();
        let Point { x, y } = self.center;
        [
            Point::new(x - h, y - h),
            Point::new(x + h, y - h),
            Point::new(x + h, y + h),
            Point::new(x - h, y + h),
        ]
    }

    fn contains_point(&self, point: Point) -> bool {
        let h = self.half();
        point.x >= self.center.x - h
            && point.x <= self.center.x + h
            && point.y >= self.center.y - h
            && point.y <= self.center.y + h
    }

    fn nearest_point_on_edge(&self, point: Point) -> Point {
        let h = self.half();
        Point::new(
            point.x.clamp(self.center.x - h, self.center.x + h),
            point.y.clamp(self.center.y - h, self.center.y + h),
        )
    }
}

impl fmt::Display for SyntheticCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.center.x, self.center.y)
    }
}

/// One entry of a movement path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Grid(GridCell),
    Synthetic(SyntheticCell),
}

impl Cell {
    pub fn synthetic(center: Point, size: f64) -> Self {
        Self::Synthetic(SyntheticCell::new(center, size))
    }

    pub fn grid(center: Point, corners: [Point; 4]) -> Self {
        Self::Grid(GridCell::new(center, corners))
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    fn shape(&self) -> &dyn CellShape {
        match self {
            Self::Grid(cell) => cell,
            Self::Synthetic(cell) => cell,
        }
    }
}

impl CellShape for Cell {
    fn center(&self) -> Point {
        self.shape().center()
    }

    fn corners(&self) -> [Point; 4] {
        self.shape().corners()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.shape().contains_point(point)
    }

    fn nearest_point_on_edge(&self, point: Point) -> Point {
        self.shape().nearest_point_on_edge(point)
    }
}

impl From<GridCell> for Cell {
    fn from(cell: GridCell) -> Self {
        Self::Grid(cell)
    }
}

impl From<SyntheticCell> for Cell {
    fn from(cell: SyntheticCell) -> Self {
        Self::Synthetic(cell)
    }
}

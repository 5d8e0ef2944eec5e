use cthulu_domain::{Cell, GridScale, Point};

/// Read access to the host's grid.
///
/// Lookups are synchronous: the host SDK keeps the grid description locally
/// and only notifies on change.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GridPort: Send + Sync {
    /// Center of the cell containing `point`.
    fn snap_to_center(&self, point: Point) -> Point;

    /// The cell whose center is `center`.
    fn get_cell(&self, center: Point) -> Cell;

    /// Scene units per grid cell.
    fn dpi(&self) -> f64;

    /// Parsed real-world scale of one cell.
    fn scale(&self) -> GridScale;
}

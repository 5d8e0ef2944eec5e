//! Grid geometry adapter.
//!
//! Wraps the host grid and caches the cell size so every pointer event does
//! not have to measure a cell again.

use std::sync::Arc;

use cthulu_domain::{Cell, DomainError, GridCoord, GridMetrics, GridScale, Point};

use crate::ports::outbound::GridPort;

pub struct GridAdapter {
    grid: Arc<dyn GridPort>,
    metrics: GridMetrics,
}

impl GridAdapter {
    /// Wrap `grid`, measuring the cell size up front.
    pub fn new(grid: Arc<dyn GridPort>) -> Result<Self, DomainError> {
        let metrics = Self::measure(grid.as_ref())?;
        Ok(Self { grid, metrics })
    }

    fn measure(grid: &dyn GridPort) -> Result<GridMetrics, DomainError> {
        let center = grid.snap_to_center(Point::ORIGIN);
        GridMetrics::from_cell(&grid.get_cell(center))
    }

    /// Measure the cell at the origin without touching the cache.
    pub fn cell_size(&self) -> Result<GridMetrics, DomainError> {
        Self::measure(self.grid.as_ref())
    }

    /// Re-measure and cache. On failure the previous metrics stay in place.
    pub fn refresh(&mut self) -> Result<GridMetrics, DomainError> {
        let metrics = self.cell_size()?;
        if metrics != self.metrics {
            tracing::debug!(
                width = metrics.cell_width,
                height = metrics.cell_height,
                "Grid cell size changed"
            );
        }
        self.metrics = metrics;
        Ok(metrics)
    }

    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// The host cell containing `point`.
    pub fn cell_at(&self, point: Point) -> Cell {
        self.grid.get_cell(self.grid.snap_to_center(point))
    }

    pub fn grid_coord(&self, point: Point) -> GridCoord {
        GridCoord::from_point(point, self.metrics)
    }

    pub fn dpi(&self) -> f64 {
        self.grid.dpi()
    }

    pub fn scale(&self) -> GridScale {
        self.grid.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockGridPort;
    use cthulu_domain::{CellShape, SquareGrid};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn square_grid_mock(size: f64) -> MockGridPort {
        let grid = SquareGrid::new(size).unwrap();
        let mut mock = MockGridPort::new();
        mock.expect_snap_to_center()
            .returning(move |p| grid.snap_to_center(p));
        mock.expect_get_cell().returning(move |p| grid.cell_at(p));
        mock
    }

    #[test]
    fn when_constructed_then_measures_cell_at_origin() {
        let square = SquareGrid::new(70.0).unwrap();
        let mut grid = MockGridPort::new();
        grid.expect_snap_to_center()
            .withf(|p| *p == Point::ORIGIN)
            .times(1)
            .returning(|_| Point::new(35.0, 35.0));
        grid.expect_get_cell()
            .withf(|p| *p == Point::new(35.0, 35.0))
            .times(1)
            .returning(move |p| square.cell_at(p));

        let adapter = GridAdapter::new(Arc::new(grid)).unwrap();
        assert_eq!(adapter.metrics(), GridMetrics::new(70.0, 70.0).unwrap());
    }

    #[test]
    fn when_grid_is_degenerate_then_construction_fails() {
        let mut grid = MockGridPort::new();
        grid.expect_snap_to_center().returning(|p| p);
        grid.expect_get_cell()
            .returning(|p| Cell::synthetic(p, 0.0));

        let err = GridAdapter::new(Arc::new(grid)).err();
        assert!(matches!(err, Some(DomainError::DegenerateGrid { .. })));
    }

    #[test]
    fn when_grid_changes_then_refresh_updates_metrics() {
        let size = Arc::new(AtomicU64::new(50f64.to_bits()));
        let size_for_cell = size.clone();

        let mut grid = MockGridPort::new();
        grid.expect_snap_to_center().returning(|p| p);
        grid.expect_get_cell().returning(move |p| {
            Cell::synthetic(p, f64::from_bits(size_for_cell.load(Ordering::SeqCst)))
        });

        let mut adapter = GridAdapter::new(Arc::new(grid)).unwrap();
        assert_eq!(adapter.metrics().cell_width, 50.0);

        size.store(80f64.to_bits(), Ordering::SeqCst);
        let refreshed = adapter.refresh().unwrap();
        assert_eq!(refreshed.cell_width, 80.0);
        assert_eq!(adapter.metrics().cell_height, 80.0);
    }

    #[test]
    fn when_refresh_fails_then_previous_metrics_are_kept() {
        let size = Arc::new(AtomicU64::new(50f64.to_bits()));
        let size_for_cell = size.clone();

        let mut grid = MockGridPort::new();
        grid.expect_snap_to_center().returning(|p| p);
        grid.expect_get_cell().returning(move |p| {
            Cell::synthetic(p, f64::from_bits(size_for_cell.load(Ordering::SeqCst)))
        });

        let mut adapter = GridAdapter::new(Arc::new(grid)).unwrap();
        size.store(0f64.to_bits(), Ordering::SeqCst);
        assert!(adapter.refresh().is_err());
        assert_eq!(adapter.metrics().cell_width, 50.0);
    }

    #[test]
    fn cell_at_snaps_before_lookup() {
        let adapter = GridAdapter::new(Arc::new(square_grid_mock(50.0))).unwrap();
        let cell = adapter.cell_at(Point::new(60.0, 10.0));
        assert_eq!(cell.center(), Point::new(75.0, 25.0));
        assert_eq!(
            adapter.grid_coord(Point::new(60.0, 10.0)),
            GridCoord { x: 1, y: 0 }
        );
    }
}

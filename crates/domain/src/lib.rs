//! Cthulu Domain - grid geometry for the movement tool.
//!
//! Everything in here is pure: no host access, no async. The extension crate
//! feeds host data (grid cells, token positions) into these types and turns
//! the results back into host items.

pub mod cell;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod ids;
pub mod path_command;

pub use cell::{Cell, CellShape, GridCell, SyntheticCell};
pub use color::Color;
pub use error::DomainError;
pub use geometry::{LineSegment, Point};
pub use grid::{GridCoord, GridMetrics, GridScale, SquareGrid};
pub use ids::ItemId;
pub use path_command::PathCommand;

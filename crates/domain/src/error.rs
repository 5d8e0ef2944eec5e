//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while building geometry value objects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A color string could not be read as `#rgb` / `#rrggbb`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The host grid produced a cell without a usable size
    #[error("Degenerate grid cell: width={width}, height={height}")]
    DegenerateGrid { width: f64, height: f64 },

    /// A grid scale string had a number that could not be parsed
    #[error("Invalid grid scale: {0}")]
    InvalidScale(String),
}

impl DomainError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor(value.into())
    }

    /// Create an invalid scale error
    pub fn invalid_scale(value: impl Into<String>) -> Self {
        Self::InvalidScale(value.into())
    }
}

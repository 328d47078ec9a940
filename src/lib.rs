//! shapemath: exact shape measurement with capability-based dispatch
//!
//! Immutable geometric value types (rectangle, circle, cube) and the
//! closed-form perimeter/area arithmetic over them. Measurement code
//! depends only on the [`Shape`] capability, never on the concrete
//! variant set.

pub mod measure;
pub mod precision;
pub mod shape;

// Re-exports for convenience
pub use measure::{area, perimeter, total_area};
pub use shape::{Circle, Cube, Rectangle, Shape};

/// Result type for shapemath operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(f64),
}

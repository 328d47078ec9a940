//! Shape variants and the area capability.
//!
//! One module per variant, re-exported flat. The [`Shape`] trait is the
//! only contract measurement code sees: adding a variant means defining
//! its data and implementing [`Shape`] for it, nothing else changes.

mod circle;
mod cube;
mod rectangle;

pub use circle::Circle;
pub use cube::Cube;
pub use rectangle::Rectangle;

/// Capability contract: a shape reports its own area.
pub trait Shape {
    /// Computes the area of the shape.
    fn area(&self) -> f64;
}

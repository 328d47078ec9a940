//! Measurement operations over shapes.
//!
//! The polymorphic entry points depend only on the [`Shape`] capability,
//! never on the concrete variant set.

use crate::shape::Shape;

/// Computes the perimeter of a width by height rectangle.
/// Inputs are not validated; negative values flow through unchanged.
#[inline]
pub fn perimeter(width: f64, height: f64) -> f64 {
    2.0 * (width + height)
}

/// Computes the area of any shape.
#[inline]
pub fn area(shape: &dyn Shape) -> f64 {
    shape.area()
}

/// Sums the areas of a heterogeneous collection of shapes.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Cube, Rectangle};

    #[test]
    fn test_perimeter() {
        assert_eq!(perimeter(10.0, 10.0), 40.0);
    }

    #[test]
    fn test_perimeter_commutative() {
        let cases = [(3.0, 4.0), (0.5, 12.25), (0.0, 9.0)];
        for (a, b) in cases {
            assert_eq!(perimeter(a, b), perimeter(b, a));
        }
    }

    #[test]
    fn test_perimeter_zero_dimension() {
        assert_eq!(perimeter(0.0, 7.0), 14.0);
        assert_eq!(perimeter(7.0, 0.0), 14.0);
    }

    #[test]
    fn test_area_dispatch() {
        let cases: &[(&dyn Shape, f64)] = &[
            (&Rectangle::new(12.0, 6.0), 72.0),
            (&Circle::new(10.0), 314.1592653589793),
            (&Cube::new(10.0), 600.0),
        ];
        for (shape, want) in cases {
            assert!((area(*shape) - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_total_area() {
        let rect = Rectangle::new(2.0, 3.0);
        let cube = Cube::new(1.0);
        let total = total_area(&[&rect, &cube]);

        assert!((total - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_area_empty() {
        assert_eq!(total_area(&[]), 0.0);
    }
}

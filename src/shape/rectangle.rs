//! Axis-aligned rectangle.

use serde::{Deserialize, Serialize};

use super::Shape;
use crate::precision;
use crate::{Error, Result};

/// A rectangle, defined by its width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle from width and height.
    /// Dimensions are not validated; negative values flow through the
    /// arithmetic unchanged.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a rectangle, rejecting negative dimensions.
    /// Zero dimensions are accepted (degenerate rectangle).
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        if width < 0.0 {
            return Err(Error::InvalidDimension(width));
        }
        if height < 0.0 {
            return Err(Error::InvalidDimension(height));
        }
        Ok(Self { width, height })
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Computes the area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Computes the perimeter of the rectangle.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Computes the diagonal length.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Returns true if width and height coincide within tolerance.
    #[inline]
    pub fn is_square(&self) -> bool {
        precision::is_equal(self.width, self.height)
    }

    /// Returns true if either dimension is zero within tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        precision::is_zero(self.width) || precision::is_zero(self.height)
    }

    /// Returns a scaled rectangle. Dimensions scale by |s|.
    pub fn scaled(&self, s: f64) -> Rectangle {
        Rectangle {
            width: (self.width * s).abs(),
            height: (self.height * s).abs(),
        }
    }
}

impl Shape for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }
}

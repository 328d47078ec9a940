//! Circle in the plane.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::Shape;
use crate::precision;
use crate::{Error, Result};

/// A circle, defined by its radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle from its radius.
    /// The radius is not validated; a negative value flows through the
    /// arithmetic unchanged.
    #[inline]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a circle, rejecting a negative radius.
    pub fn try_new(radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(Error::InvalidDimension(radius));
        }
        Ok(Self { radius })
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the diameter.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Computes the area of the circle.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Computes the circumference of the circle.
    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Returns true if the radius is zero within tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        precision::is_zero(self.radius)
    }

    /// Returns a scaled circle. The radius scales by |s|.
    pub fn scaled(&self, s: f64) -> Circle {
        Circle {
            radius: (self.radius * s).abs(),
        }
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        Circle::area(self)
    }
}

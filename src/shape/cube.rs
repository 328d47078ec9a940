//! Cube with a given edge length.

use serde::{Deserialize, Serialize};

use super::Shape;
use crate::precision;
use crate::{Error, Result};

/// A cube, defined by the edge length of one face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    length: f64,
}

impl Cube {
    /// Creates a cube from its edge length.
    /// The length is not validated; a negative value flows through the
    /// arithmetic unchanged.
    #[inline]
    pub const fn new(length: f64) -> Self {
        Self { length }
    }

    /// Creates a cube, rejecting a negative edge length.
    pub fn try_new(length: f64) -> Result<Self> {
        if length < 0.0 {
            return Err(Error::InvalidDimension(length));
        }
        Ok(Self { length })
    }

    /// Returns the edge length.
    #[inline]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Computes the area of the cube: the total surface area of its six
    /// faces, `6 * length^2`. Not the volume, and not a single face.
    #[inline]
    pub fn area(&self) -> f64 {
        6.0 * self.length * self.length
    }

    /// Computes the volume of the cube.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.length * self.length * self.length
    }

    /// Returns true if the edge length is zero within tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        precision::is_zero(self.length)
    }

    /// Returns a scaled cube. The edge length scales by |s|.
    pub fn scaled(&self, s: f64) -> Cube {
        Cube {
            length: (self.length * s).abs(),
        }
    }
}

impl Shape for Cube {
    #[inline]
    fn area(&self) -> f64 {
        Cube::area(self)
    }
}

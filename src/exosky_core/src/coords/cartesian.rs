use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, Mul, Sub};

/// A point in 3D space.
///
/// Units match whatever distance unit the point was projected from, this type
/// carries no unit information of its own.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct CartesianCoordinates {
    /// X-coordinate
    pub x: f64,

    /// Y-coordinate
    pub y: f64,

    /// Z-coordinate
    pub z: f64,
}

impl CartesianCoordinates {
    /// New Coordinates
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianCoordinates { x, y, z }
    }

    /// Squared euclidean distance from the origin.
    #[inline(always)]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance from the origin.
    #[inline(always)]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Are all components of the point finite valued.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Index<usize> for CartesianCoordinates {
    type Output = f64;
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a point has 3 components"),
        }
    }
}

impl Add<CartesianCoordinates> for CartesianCoordinates {
    type Output = CartesianCoordinates;
    #[inline(always)]
    fn add(self, rhs: CartesianCoordinates) -> Self::Output {
        CartesianCoordinates::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<CartesianCoordinates> for CartesianCoordinates {
    type Output = CartesianCoordinates;
    #[inline(always)]
    fn sub(self, rhs: CartesianCoordinates) -> Self::Output {
        CartesianCoordinates::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for CartesianCoordinates {
    type Output = CartesianCoordinates;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        CartesianCoordinates::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<CartesianCoordinates> for f64 {
    type Output = CartesianCoordinates;
    #[inline(always)]
    fn mul(self, rhs: CartesianCoordinates) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for CartesianCoordinates {
    type Output = CartesianCoordinates;
    #[inline(always)]
    fn div(self, rhs: f64) -> Self::Output {
        CartesianCoordinates::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for CartesianCoordinates {
    #[inline(always)]
    fn from(value: [f64; 3]) -> Self {
        CartesianCoordinates::new(value[0], value[1], value[2])
    }
}

impl From<CartesianCoordinates> for [f64; 3] {
    #[inline(always)]
    fn from(value: CartesianCoordinates) -> Self {
        [value.x, value.y, value.z]
    }
}

impl From<Vector3<f64>> for CartesianCoordinates {
    #[inline(always)]
    fn from(value: Vector3<f64>) -> Self {
        CartesianCoordinates::new(value.x, value.y, value.z)
    }
}

impl From<CartesianCoordinates> for Vector3<f64> {
    #[inline(always)]
    fn from(value: CartesianCoordinates) -> Self {
        Vector3::new(value.x, value.y, value.z)
    }
}

use std::ops::{Add, Mul, Sub};

/*
World positions are handed to a scene builder that uploads them as instance
data, so the layout stays plain:
   1. Standard layout (like C structs).
   2. Can be safely cast to [f32; 2] or bytes.
*/

/// A point or offset on the maze floor plane, in world units.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2([f32; 2]);

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2([x, y])
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }

    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn length(&self) -> f32 {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }

    pub fn distance_to(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn almost_equal(&self, other: &Self, tolerance: f32) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(values: [f32; 2]) -> Self {
        Vec2(values)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(vec: Vec2) -> Self {
        vec.0
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self([self.x() + other.x(), self.y() + other.y()])
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self([self.x() - other.x(), self.y() - other.y()])
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self([self.x() * scalar, self.y() * scalar])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 1.0);
        assert_eq!(a + b, Vec2::new(4.0, 5.0));
        assert_eq!(a - b, Vec2::new(2.0, 3.0));
        assert_eq!(b * 2.0, Vec2::new(2.0, 2.0));
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance_to(&Vec2::default()), 5.0);
    }

    #[test]
    fn test_cast_to_floats() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(floats, &[1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn test_almost_equal() {
        let a = Vec2::new(1.0, 1.0);
        assert!(a.almost_equal(&Vec2::new(1.05, 0.95), 0.1));
        assert!(!a.almost_equal(&Vec2::new(1.2, 1.0), 0.1));
    }
}

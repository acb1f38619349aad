//! Integer points in the plane.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Immutable 2D point with integer coordinates.
///
/// `Default` is the origin. Display renders `"x,y "` with a trailing space so
/// that a sequence of points prints as a space-separated list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Widened coordinates for exact cross products.
    #[inline]
    pub(crate) fn wide(self) -> Vector2<i128> {
        Vector2::new(i128::from(self.x), i128::from(self.y))
    }

    /// Squared Euclidean distance, exact.
    #[inline]
    pub fn distance_squared(self, other: Point) -> i128 {
        let d = other.wide() - self.wide();
        d.x * d.x + d.y * d.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} ", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Vector2<i32>> for Point {
    #[inline]
    fn from(v: Vector2<i32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<i32> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

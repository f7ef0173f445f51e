//! Planar vector type shared by positions and displacements.
//!
//! `Vec2` stores two `f64` components addressed by index.  Component 0 is the
//! row (y-like) axis and component 1 the column (x-like) axis; the torus start
//! point and bounds checks rely on this ordering, and renderers must map
//! component 1 to the horizontal axis.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

/// A 2D real-valued vector: `[row, column]`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub [f64; 2]);

impl Vec2 {
    pub const ZERO: Vec2 = Vec2([0.0, 0.0]);

    #[inline]
    pub const fn new(a: f64, b: f64) -> Self {
        Vec2([a, b])
    }

    /// Unit vector `(sin θ, cos θ)` for an angle in radians.
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Vec2([s, c])
    }

    /// Euclidean length, computed as `sqrt(a² + b²)` (not `f64::hypot`).
    /// Portal crossing compares sums of these norms with exact equality.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.0[0] * self.0[0] + self.0[1] * self.0[1]).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).norm()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1]
    }

    /// `true` when both components are finite (not NaN, not ±∞).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Component-wise floor modulo: every component lands in `[0, size)`.
    ///
    /// `f64::rem_euclid` can round a tiny negative input up to exactly
    /// `size`; such results are folded back to `0.0`.
    pub fn wrap(self, size: Vec2) -> Vec2 {
        let wrap_axis = |v: f64, s: f64| {
            let r = v.rem_euclid(s);
            if r >= s { 0.0 } else { r }
        };
        Vec2([wrap_axis(self.0[0], size.0[0]), wrap_axis(self.0[1], size.0[1])])
    }

    /// `true` if every component lies in `[0, size)`.
    #[inline]
    pub fn within(self, size: Vec2) -> bool {
        (0.0..size.0[0]).contains(&self.0[0]) && (0.0..size.0[1]).contains(&self.0[1])
    }

    /// Shortest distance from `self` to the closed segment `a`–`b`.
    pub fn distance_to_segment(self, a: Vec2, b: Vec2) -> f64 {
        let ab = b - a;
        let len_sq = ab.dot(ab);
        if len_sq == 0.0 {
            return self.distance(a);
        }
        let t = ((self - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.distance(a + ab * t)
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;
    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, k: f64) -> Vec2 {
        Vec2([self.0[0] * k, self.0[1] * k])
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2([-self.0[0], -self.0[1]])
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Vec2(a)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((a, b): (f64, f64)) -> Self {
        Vec2([a, b])
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.0[0], self.0[1])
    }
}

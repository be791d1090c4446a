//! 3D vector and quaternion math for the band simulation.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 3D vector used for positions, velocities, and curve points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self {
        Vec3 { x: F::zero(), y: F::zero(), z: F::zero() }
    }

    /// Vector with all components set to the same value.
    pub fn splat(value: F) -> Self {
        Vec3 { x: value, y: value, z: value }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// True if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

// ---- Quaternions ----

/// Unit quaternion representing a 3D rotation.
///
/// Convention: `w` is the scalar part, `(x, y, z)` the vector part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quat<F> {
    /// Identity rotation.
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `angle` radians about a unit `axis`.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let half = angle * F::half();
        let s = half.sin();
        Quat {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Normalize to unit length. Returns identity if length is near zero.
    pub fn normalize(self) -> Self {
        let len_sq = self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w;
        if len_sq.is_near_zero(F::from_f32(1e-20)) {
            return Self::identity();
        }
        let inv = F::one() / len_sq.sqrt();
        Quat {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
            w: self.w * inv,
        }
    }

    /// Hamilton product: self * other.
    pub fn mul(self, other: Self) -> Self {
        Quat {
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        }
    }

    /// Advance this rotation by an angular velocity over `dt`:
    /// q' = normalize(q + dt/2 * (0, omega) * q)
    pub fn integrate(self, angvel: Vec3<F>, dt: F) -> Self {
        let half_dt = dt * F::half();
        let omega = Quat { x: angvel.x, y: angvel.y, z: angvel.z, w: F::zero() };
        let dq = omega.mul(self);
        Quat {
            x: self.x + dq.x * half_dt,
            y: self.y + dq.y * half_dt,
            z: self.z + dq.z * half_dt,
            w: self.w + dq.w * half_dt,
        }
        .normalize()
    }
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

//! Scalar and vector types for spring calculations

use std::ops::{Add, Mul, Neg};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for animated points and offsets
pub type Vector2 = bevy::math::DVec2;

/// 3D vector type for animated positions
pub type Vector3 = bevy::math::DVec3;

/// A value the spring integrator can advance.
///
/// Positions, velocities and accelerations all share the same type. The only
/// operations the integrator needs are addition, negation and scaling by a
/// [`Scalar`], so any type providing them qualifies automatically. Scaling is
/// always written `value * scalar`; the concrete types re-exported here also
/// accept `scalar * value`.
pub trait VectorQuantity:
    Copy + Add<Output = Self> + Neg<Output = Self> + Mul<Scalar, Output = Self>
{
}

impl<T> VectorQuantity for T where
    T: Copy + Add<Output = T> + Neg<Output = T> + Mul<Scalar, Output = T>
{
}

/// Size of a value, used by drivers to decide when motion has settled.
pub trait Magnitude {
    fn magnitude(&self) -> Scalar;
}

impl Magnitude for Scalar {
    fn magnitude(&self) -> Scalar {
        self.abs()
    }
}

impl Magnitude for Vector2 {
    fn magnitude(&self) -> Scalar {
        self.length()
    }
}

impl Magnitude for Vector3 {
    fn magnitude(&self) -> Scalar {
        self.length()
    }
}

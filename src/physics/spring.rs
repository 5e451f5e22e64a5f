//! Damped spring force model
//!
//! A unit mass attached to a spring with stiffness `k` and a dashpot with
//! friction `c` accelerates as
//!
//! ```text
//! a(x, v) = -k * x - c * v
//! ```
//!
//! where `x` is the displacement from the rest position and `v` the velocity.
//! Neither constant is validated. Negative or non-finite values are passed
//! straight through the arithmetic, so callers own the choice of sane values.

use super::math::{Scalar, VectorQuantity};
use serde::{Deserialize, Serialize};

/// Stiffness used when no other value is configured
pub const DEFAULT_SPRING: Scalar = 250.0;

/// Friction used when no other value is configured
pub const DEFAULT_FRICTION: Scalar = 28.0;

/// Spring and friction constants of a damped oscillator
///
/// The defaults describe a slightly underdamped spring (damping ratio of
/// about 0.89) tuned for UI motion: it settles in well under a second with a
/// barely visible overshoot.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SpringParameters {
    /// Stiffness `k`
    pub spring: Scalar,
    /// Damping coefficient `c`
    pub friction: Scalar,
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self {
            spring: DEFAULT_SPRING,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl SpringParameters {
    pub const fn new(spring: Scalar, friction: Scalar) -> Self {
        Self { spring, friction }
    }

    /// Spring with exactly enough friction to return to rest without overshoot
    pub fn critically_damped(spring: Scalar) -> Self {
        Self::new(spring, 2.0 * libm::sqrt(spring))
    }

    /// Instantaneous acceleration of the mass at the given state
    #[inline]
    pub fn acceleration<T: VectorQuantity>(&self, position: T, velocity: T) -> T {
        -(position * self.spring) + -(velocity * self.friction)
    }

    /// Undamped angular frequency `sqrt(k)` in radians per second
    pub fn natural_frequency(&self) -> Scalar {
        libm::sqrt(self.spring)
    }

    /// Damping ratio `c / (2 * sqrt(k))`
    ///
    /// Below 1 the spring overshoots and oscillates, at 1 it is critically
    /// damped, above 1 it creeps back to rest.
    pub fn damping_ratio(&self) -> Scalar {
        self.friction / (2.0 * self.natural_frequency())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Largest time step for which RK4 keeps the undamped oscillator bounded
    ///
    /// The stability region of classical RK4 crosses the imaginary axis at
    /// `2 * sqrt(2)`, so steps must satisfy `dt * sqrt(k) <= 2 * sqrt(2)`.
    /// Friction only widens the usable range for the springs used in UI
    /// work, which makes this a conservative limit.
    pub fn stable_time_step_limit(&self) -> Scalar {
        2.0 * std::f64::consts::SQRT_2 / self.natural_frequency()
    }
}

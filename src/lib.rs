//! Springdrift library
//!
//! A stateless fourth-order Runge-Kutta integrator for damped springs, the
//! physics behind physically-based UI animation. The integrator holds only
//! its spring and friction constants; callers own the evolving position and
//! velocity and add the returned deltas each frame.
//!
//! ```
//! use springdrift::prelude::*;
//!
//! let integrator = SpringIntegrator::default();
//! let (mut position, mut velocity): (Scalar, Scalar) = (1.0, 0.0);
//!
//! for _ in 0..120 {
//!     let delta = integrator.integrate(position, velocity, 1.0 / 60.0);
//!     position += delta.position;
//!     velocity += delta.velocity;
//! }
//!
//! assert!(position.abs() < 1e-3);
//! ```

pub mod animation;
pub mod cli;
pub mod config;
pub mod physics;
pub mod prelude;
pub mod presets;

// Re-export commonly used items
pub use animation::SpringAnimation;
pub use config::SpringDriftConfig;
pub use physics::{
    integrators::{self, SpringDelta, SpringIntegrator},
    math::{Magnitude, Scalar, Vector2, Vector3, VectorQuantity},
    spring::SpringParameters,
};
pub use presets::PresetRegistry;

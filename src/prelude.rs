//! Springdrift prelude module
//!
//! Re-exports the types needed to drive a spring from application code.

pub use crate::animation::{Frame, SpringAnimation};
pub use crate::config::SpringDriftConfig;
pub use crate::physics::integrators::{SpringDelta, SpringIntegrator};
pub use crate::physics::math::{Magnitude, Scalar, Vector2, Vector3, VectorQuantity};
pub use crate::physics::spring::SpringParameters;
pub use crate::presets::{PresetRegistry, SpringPreset};

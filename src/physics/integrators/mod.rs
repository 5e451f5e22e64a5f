//! Numerical integration of the damped spring

pub mod runge_kutta;

pub use runge_kutta::SpringIntegrator;

/// Change in position and velocity over one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDelta<T> {
    pub position: T,
    pub velocity: T,
}

impl<T> SpringDelta<T> {
    pub fn new(position: T, velocity: T) -> Self {
        Self { position, velocity }
    }

    /// Split into `(delta_position, delta_velocity)`
    pub fn into_tuple(self) -> (T, T) {
        (self.position, self.velocity)
    }
}

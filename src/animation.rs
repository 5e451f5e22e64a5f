//! Frame-by-frame driver for spring animations
//!
//! The integrator is stateless; this module is the caller that owns the
//! evolving state. A [`SpringAnimation`] keeps the displacement from its
//! target and the current velocity, adds the integrator's deltas on every
//! tick and decides when the motion has settled.

use crate::physics::integrators::SpringIntegrator;
use crate::physics::math::{Magnitude, Scalar, VectorQuantity};
use bevy::log::debug;

/// Displacement and speed below which an animation counts as settled
pub const DEFAULT_REST_EPSILON: Scalar = 1e-3;

/// A value animated toward a target by a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation<T> {
    integrator: SpringIntegrator,
    target: T,
    displacement: T,
    velocity: T,
    elapsed: Scalar,
    rest_epsilon: Scalar,
}

impl<T> SpringAnimation<T>
where
    T: VectorQuantity + Magnitude + Default,
{
    /// Animate from `from` to `to`, starting at rest
    pub fn new(integrator: SpringIntegrator, from: T, to: T) -> Self {
        Self {
            integrator,
            target: to,
            displacement: from + -to,
            velocity: T::default(),
            elapsed: 0.0,
            rest_epsilon: DEFAULT_REST_EPSILON,
        }
    }

    pub fn with_velocity(mut self, velocity: T) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rest_epsilon(mut self, rest_epsilon: Scalar) -> Self {
        self.rest_epsilon = rest_epsilon;
        self
    }

    pub fn integrator(&self) -> &SpringIntegrator {
        &self.integrator
    }

    /// Current animated value
    pub fn value(&self) -> T {
        self.target + self.displacement
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn target(&self) -> T {
        self.target
    }

    /// Offset of the current value from the target
    pub fn displacement(&self) -> T {
        self.displacement
    }

    /// Simulated seconds since the animation started
    pub fn elapsed(&self) -> Scalar {
        self.elapsed
    }

    pub fn rest_epsilon(&self) -> Scalar {
        self.rest_epsilon
    }

    /// True once both displacement and velocity are within the rest epsilon
    pub fn is_at_rest(&self) -> bool {
        self.displacement.magnitude() < self.rest_epsilon
            && self.velocity.magnitude() < self.rest_epsilon
    }

    /// Advance by `dt` seconds and return the new value
    pub fn tick(&mut self, dt: Scalar) -> T {
        let delta = self
            .integrator
            .integrate(self.displacement, self.velocity, dt);

        self.displacement = self.displacement + delta.position;
        self.velocity = self.velocity + delta.velocity;
        self.elapsed += dt;

        self.value()
    }

    /// Move the target without disturbing the current value or velocity
    ///
    /// An interrupted animation carries its momentum into the new motion.
    pub fn retarget(&mut self, to: T) {
        let value = self.value();
        self.target = to;
        self.displacement = value + -to;
    }

    /// Place the value exactly on the target and stop
    pub fn snap_to_target(&mut self) {
        self.displacement = T::default();
        self.velocity = T::default();
    }

    /// Iterate frames of `dt` seconds until the spring settles or
    /// `max_duration` seconds have been simulated
    pub fn frames(self, dt: Scalar, max_duration: Scalar) -> Frames<T> {
        Frames {
            animation: self,
            dt,
            max_duration,
            finished: false,
        }
    }
}

/// One sample of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<T> {
    pub time: Scalar,
    pub value: T,
    pub velocity: T,
    pub at_rest: bool,
}

/// Iterator over the frames of a [`SpringAnimation`]
///
/// The last frame of an animation that settles is snapped to the target
/// with zero velocity. An animation that never settles stops once the time
/// limit is reached. A frame step that is not positive, or a time limit that
/// is not finite, yields no frames.
#[derive(Debug, Clone)]
pub struct Frames<T> {
    animation: SpringAnimation<T>,
    dt: Scalar,
    max_duration: Scalar,
    finished: bool,
}

impl<T> Frames<T> {
    pub fn animation(&self) -> &SpringAnimation<T> {
        &self.animation
    }
}

impl<T> Iterator for Frames<T>
where
    T: VectorQuantity + Magnitude + Default,
{
    type Item = Frame<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Non-positive steps never advance time and an unbounded limit is
        // never reached, so neither produces frames
        if self.finished
            || self.dt.is_nan()
            || self.dt <= 0.0
            || !self.max_duration.is_finite()
            || self.animation.elapsed() >= self.max_duration
        {
            return None;
        }

        self.animation.tick(self.dt);

        let at_rest = self.animation.is_at_rest();
        if at_rest {
            self.animation.snap_to_target();
            self.finished = true;
            debug!("Spring settled after {:.3}s", self.animation.elapsed());
        } else if self.animation.elapsed() >= self.max_duration {
            debug!(
                "Spring still moving after {:.3}s time limit",
                self.max_duration
            );
        }

        Some(Frame {
            time: self.animation.elapsed(),
            value: self.animation.value(),
            velocity: self.animation.velocity(),
            at_rest,
        })
    }
}

//! Spring physics: force model, integration and vector types

pub mod integrators;
pub mod math;
pub mod spring;

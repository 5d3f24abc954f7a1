//! # Utilities Module
//!
//! Geometry helpers shared by the integrator, the ray caster and the projector.

pub mod math;

pub use math::*;

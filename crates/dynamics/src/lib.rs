//! Force models, the semi-implicit Euler integrator, and projectile helpers.

pub mod ballistics;
pub mod force;
pub mod integrator;

pub use force::{AccelerationField, CentralMass, ForceModel, UniformField};
pub use integrator::{Body, Integrator, StepResult};

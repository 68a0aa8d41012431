//! Fixed-step semi-implicit Euler integrator with surface collision detection.
//!
//! Velocity is updated before position each step; the energy error of a periodic orbit stays
//! bounded.

use kernel_core::tolerance;
use kernel_core::vector::Vector3;

use crate::force::AccelerationField;

/// A point mass advanced by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Visual radius of the body; it does not enter the dynamics.
    pub radius: f64,
    pub is_active: bool,
}

impl Body {
    pub fn new(position: Vector3, velocity: Vector3, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            is_active: true,
        }
    }
}

/// State after one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub position: Vector3,
    pub velocity: Vector3,
    pub crashed: bool,
}

/// Advances bodies one fixed time step at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// Clearance at or below which a body counts as having hit the surface.
    pub collision_tolerance: f64,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            collision_tolerance: tolerance::COLLISION,
        }
    }
}

impl Integrator {
    pub fn new(collision_tolerance: f64) -> Self {
        Self {
            collision_tolerance,
        }
    }

    /// Advance `body` by `dt` under `field`.
    ///
    /// Inactive bodies are left untouched and reported as crashed. A body that already
    /// sits inside the surface is deactivated before any acceleration is evaluated, so the
    /// step never divides by a vanishing radius.
    pub fn step<F>(&self, body: &mut Body, field: &F, dt: f64) -> StepResult
    where
        F: AccelerationField + ?Sized,
    {
        if !body.is_active {
            return Self::crashed(body);
        }

        if field.clearance(body.position) < 0.0 {
            body.is_active = false;
            return Self::crashed(body);
        }

        let acceleration = field.acceleration(body.position);
        body.velocity += acceleration * dt;
        body.position += body.velocity * dt;

        // A non-finite state is never integrated again.
        let clearance = field.clearance(body.position);
        if clearance.is_nan() || clearance <= self.collision_tolerance {
            body.is_active = false;
            return Self::crashed(body);
        }

        StepResult {
            position: body.position,
            velocity: body.velocity,
            crashed: false,
        }
    }

    fn crashed(body: &Body) -> StepResult {
        StepResult {
            position: body.position,
            velocity: body.velocity,
            crashed: true,
        }
    }
}

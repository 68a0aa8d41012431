//! Acceleration fields a body can move through.

use kernel_core::vector::Vector3;

/// Capability the integrator needs from a force model.
pub trait AccelerationField {
    /// Acceleration experienced by a body at `position`.
    fn acceleration(&self, position: Vector3) -> Vector3;

    /// Signed distance from `position` to the field's solid surface.
    ///
    /// Negative values mean the position lies inside the surface.
    fn clearance(&self, position: Vector3) -> f64;
}

/// A fixed gravitating body at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMass {
    pub gm: f64,
    pub radius: f64,
}

/// Constant downward gravity over a flat ground plane at `y = ground`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformField {
    pub g: f64,
    pub ground: f64,
}

/// Closed set of force models used by the interactives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceModel {
    /// Inverse-square attraction toward a central mass (orbital scenes).
    CentralGravity(CentralMass),
    /// Constant downward pull (projectile scenes).
    UniformGravity(UniformField),
}

impl ForceModel {
    pub fn central(gm: f64, radius: f64) -> Self {
        ForceModel::CentralGravity(CentralMass { gm, radius })
    }

    pub fn uniform(g: f64) -> Self {
        ForceModel::UniformGravity(UniformField { g, ground: 0.0 })
    }

    /// Central mass backing this model, if it is a central field.
    pub fn central_mass(&self) -> Option<&CentralMass> {
        match self {
            ForceModel::CentralGravity(mass) => Some(mass),
            ForceModel::UniformGravity(_) => None,
        }
    }
}

impl AccelerationField for CentralMass {
    fn acceleration(&self, position: Vector3) -> Vector3 {
        let r_squared = position.norm_squared();
        if r_squared == 0.0 {
            return Vector3::ZERO;
        }
        // a = -GM/r² toward the origin
        position.normalize().scale(-self.gm / r_squared)
    }

    fn clearance(&self, position: Vector3) -> f64 {
        position.norm() - self.radius
    }
}

impl AccelerationField for UniformField {
    fn acceleration(&self, _position: Vector3) -> Vector3 {
        Vector3::new(0.0, -self.g, 0.0)
    }

    fn clearance(&self, position: Vector3) -> f64 {
        position.y - self.ground
    }
}

impl AccelerationField for ForceModel {
    fn acceleration(&self, position: Vector3) -> Vector3 {
        match self {
            ForceModel::CentralGravity(mass) => mass.acceleration(position),
            ForceModel::UniformGravity(field) => field.acceleration(position),
        }
    }

    fn clearance(&self, position: Vector3) -> f64 {
        match self {
            ForceModel::CentralGravity(mass) => mass.clearance(position),
            ForceModel::UniformGravity(field) => field.clearance(position),
        }
    }
}

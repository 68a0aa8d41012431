//! Closed-form projectile relations over flat ground and a pre-launch path preview.

use kernel_core::vector::Vector3;

use crate::force::{AccelerationField, UniformField};
use crate::integrator::{Body, Integrator};

/// Step used when previewing a projectile path before launch (seconds).
pub const PREVIEW_TIME_STEP_S: f64 = 0.1;
/// Iteration cap for the preview.
pub const PREVIEW_MAX_STEPS: usize = 500;

/// Coefficients of `y = a·x² + b·x` for a launch from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryFormula {
    pub a: f64,
    pub b: f64,
}

impl TrajectoryFormula {
    pub fn height_at(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x
    }
}

/// Parabola traced by a projectile launched at `angle_deg` with `speed` under gravity `g`.
pub fn trajectory_formula(angle_deg: f64, speed: f64, g: f64) -> TrajectoryFormula {
    let theta = angle_deg.to_radians();
    let cos = theta.cos();
    TrajectoryFormula {
        a: -(g / (2.0 * speed * speed * cos * cos)),
        b: theta.tan(),
    }
}

/// Time until a projectile launched from ground level returns to it.
pub fn flight_time(angle_deg: f64, speed: f64, g: f64) -> f64 {
    2.0 * speed * angle_deg.to_radians().sin() / g
}

/// Horizontal distance covered before returning to ground level.
pub fn range(angle_deg: f64, speed: f64, g: f64) -> f64 {
    speed * speed * (2.0 * angle_deg.to_radians()).sin() / g
}

/// Peak height above the launch point.
pub fn apex_height(angle_deg: f64, speed: f64, g: f64) -> f64 {
    let vy = speed * angle_deg.to_radians().sin();
    vy * vy / (2.0 * g)
}

/// Initial velocity vector in the `xy` plane.
pub fn launch_velocity(angle_deg: f64, speed: f64) -> Vector3 {
    let theta = angle_deg.to_radians();
    Vector3::planar(speed * theta.cos(), speed * theta.sin())
}

/// Sample the path a projectile will follow, stopping when it reaches the ground.
///
/// The first point is `start`; the final point is clamped onto the ground plane.
pub fn predict_path(
    start: Vector3,
    angle_deg: f64,
    speed: f64,
    field: &UniformField,
    dt: f64,
    max_steps: usize,
) -> Vec<Vector3> {
    let integrator = Integrator::new(0.0);
    let mut body = Body::new(start, launch_velocity(angle_deg, speed), 0.0);
    let mut points = Vec::with_capacity(max_steps.min(1024) + 1);
    points.push(start);

    for _ in 0..max_steps {
        let result = integrator.step(&mut body, field, dt);
        if result.crashed {
            let mut landing = result.position;
            if field.clearance(landing) <= 0.0 {
                landing.y = field.ground;
            }
            points.push(landing);
            break;
        }
        points.push(result.position);
    }

    points
}

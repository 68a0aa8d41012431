//! Scene builders: turn configuration and slider values into sessions and launches.
//!
//! Orbital scenes integrate in scene units (the central body is `scene_radius` units
//! wide and time runs `time_factor` times faster); launch values arrive in km and km/s.

use kernel_config::{KernelConfig, LaunchPreset};
use kernel_core::vector::Vector3;
use kernel_dynamics::ForceModel;
use kernel_dynamics::ballistics;
use kernel_orbits::{self as orbits, OrbitClassifier, OrbitRegime};
use thiserror::Error;

use crate::session::{Launch, SimulationSession, TimeScale};

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("launch speed must be a non-negative number, got {0}")]
    InvalidSpeed(f64),
    #[error("launch altitude must be a non-negative number, got {0}")]
    InvalidAltitude(f64),
    #[error("launch angle must lie within [0, 90] degrees, got {0}")]
    InvalidAngle(f64),
    #[error("preset '{0}' not found")]
    UnknownPreset(String),
}

/// Reference speeds at a launch altitude, in km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSpeeds {
    pub circular_km_s: f64,
    pub escape_km_s: f64,
}

/// Orbital scenes; they differ only in launch site and in the GM they integrate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitScene {
    /// Newton's cannon, with gravity tuned so the circular preset stays circular.
    Cannon,
    /// Satellite launch under the central body's real GM.
    Satellite,
}

impl OrbitScene {
    pub fn name(&self) -> &'static str {
        match self {
            OrbitScene::Cannon => "newton-cannon",
            OrbitScene::Satellite => "satellite-launch",
        }
    }

    /// GM in km³/s² for this scene.
    pub fn gm_km3_s2(&self, config: &KernelConfig) -> f64 {
        match self {
            OrbitScene::Cannon => config.cannon_gm_km3_s2(),
            OrbitScene::Satellite => config.central_body.gm_km3_s2,
        }
    }
}

/// Session for an orbital scene.
pub fn orbital_session(config: &KernelConfig, scene: OrbitScene) -> SimulationSession {
    let scale = config.scene_scale();
    let force = ForceModel::central(
        scale.gm_to_scene(scene.gm_km3_s2(config)),
        config.simulation.scene_radius,
    );
    configure(
        SimulationSession::new(
            force,
            config.simulation.base_time_step,
            config.simulation.max_bodies,
        ),
        config,
    )
}

/// Session for the flat-ground projectile scene, in feet and seconds.
pub fn projectile_session(config: &KernelConfig) -> SimulationSession {
    configure(
        SimulationSession::new(
            ForceModel::uniform(config.projectile.gravity_ft_s2),
            config.projectile.time_step_s,
            config.simulation.max_bodies,
        ),
        config,
    )
}

fn configure(session: SimulationSession, config: &KernelConfig) -> SimulationSession {
    let mut session = session.with_tolerances(&config.tolerances());
    session.set_time_scale(TimeScale::from_factor(config.simulation.time_scale).unwrap_or_default());
    session
}

/// Newton's cannon: fired horizontally from the mountain top at the north pole.
pub fn cannon_launch(config: &KernelConfig, speed_km_s: f64) -> Result<Launch, ScenarioError> {
    check_speed(speed_km_s)?;
    let scale = config.scene_scale();
    let r = scale.km_to_scene(config.central_body.radius_km + config.simulation.cannon_altitude_km);
    Ok(Launch {
        position: Vector3::planar(0.0, r),
        velocity: Vector3::planar(scale.speed_to_scene(speed_km_s), 0.0),
    })
}

/// Satellite insertion on the `+x` axis moving along `+y`.
pub fn satellite_launch(
    config: &KernelConfig,
    altitude_km: f64,
    speed_km_s: f64,
) -> Result<Launch, ScenarioError> {
    check_speed(speed_km_s)?;
    check_altitude(altitude_km)?;
    let scale = config.scene_scale();
    let r = scale.km_to_scene(config.central_body.radius_km + altitude_km);
    Ok(Launch {
        position: Vector3::planar(r, 0.0),
        velocity: Vector3::planar(0.0, scale.speed_to_scene(speed_km_s)),
    })
}

/// Projectile fired from the origin at `angle_deg` above the ground.
pub fn projectile_launch(angle_deg: f64, speed: f64) -> Result<Launch, ScenarioError> {
    check_speed(speed)?;
    if !(0.0..=90.0).contains(&angle_deg) {
        return Err(ScenarioError::InvalidAngle(angle_deg));
    }
    Ok(Launch {
        position: Vector3::ZERO,
        velocity: ballistics::launch_velocity(angle_deg, speed),
    })
}

/// Circular and escape speeds at `altitude_km` above the central body.
pub fn launch_speeds(config: &KernelConfig, scene: OrbitScene, altitude_km: f64) -> LaunchSpeeds {
    let r = config.central_body.radius_km + altitude_km;
    let gm = scene.gm_km3_s2(config);
    LaunchSpeeds {
        circular_km_s: orbits::circular_velocity(gm, r),
        escape_km_s: orbits::escape_velocity(gm, r),
    }
}

/// Regime of a tangential launch, evaluated in real units.
pub fn classify_launch(
    config: &KernelConfig,
    scene: OrbitScene,
    altitude_km: f64,
    speed_km_s: f64,
) -> OrbitRegime {
    OrbitClassifier::new(config.tolerances.circular_band).classify(
        speed_km_s,
        altitude_km,
        scene.gm_km3_s2(config),
        config.central_body.radius_km,
    )
}

/// Look a preset up by name, ignoring case.
pub fn find_preset<'a>(
    presets: &'a [LaunchPreset],
    name: &str,
) -> Result<&'a LaunchPreset, ScenarioError> {
    presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScenarioError::UnknownPreset(name.to_string()))
}

fn check_speed(speed: f64) -> Result<(), ScenarioError> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidSpeed(speed))
    }
}

fn check_altitude(altitude_km: f64) -> Result<(), ScenarioError> {
    if altitude_km.is_finite() && altitude_km >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidAltitude(altitude_km))
    }
}

//! Configuration models and loaders for the orbit kernel.

use std::fs::File;
use std::path::{Path, PathBuf};

use kernel_core::constants;
use kernel_core::tolerance::{self, Tolerances};
use kernel_core::units::SceneScale;
use serde::Deserialize;
use thiserror::Error;

/// Central body the orbital scenes revolve around.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CentralBodyConfig {
    pub name: String,
    pub gm_km3_s2: f64,
    pub radius_km: f64,
}

impl Default for CentralBodyConfig {
    fn default() -> Self {
        Self {
            name: "EARTH".to_string(),
            gm_km3_s2: constants::EARTH_GM_KM3_S2,
            radius_km: constants::EARTH_RADIUS_KM,
        }
    }
}

/// Integration and scene-scaling settings for orbital scenes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub scene_radius: f64,
    pub time_factor: f64,
    pub base_time_step: f64,
    pub time_scale: u32,
    pub max_bodies: usize,
    pub cannon_altitude_km: f64,
    /// Tune the cannon scene's gravity so this speed is circular at the surface.
    /// `None` keeps the central body's own GM.
    pub cannon_circular_speed_km_s: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene_radius: constants::SCENE_EARTH_RADIUS,
            time_factor: constants::SCENE_TIME_FACTOR,
            base_time_step: constants::ORBIT_TIME_STEP,
            time_scale: 1,
            max_bodies: constants::MAX_TRACKED_BODIES,
            cannon_altitude_km: constants::CANNON_MOUNTAIN_KM,
            cannon_circular_speed_km_s: Some(constants::CANNON_CIRCULAR_SPEED_KM_S),
        }
    }
}

/// Flat-ground projectile settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub gravity_ft_s2: f64,
    pub time_step_s: f64,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            gravity_ft_s2: constants::EARTH_GRAVITY_FT_S2,
            time_step_s: constants::PROJECTILE_TIME_STEP_S,
        }
    }
}

/// Dimensions of the sliced cone.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConeConfig {
    pub radius: f64,
    pub height: f64,
}

impl Default for ConeConfig {
    fn default() -> Self {
        Self {
            radius: constants::CONE_RADIUS,
            height: constants::CONE_HEIGHT,
        }
    }
}

/// Overrides for the kernel's named tolerances.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToleranceConfig {
    pub collision: f64,
    pub circular_band: f64,
    pub parabola_tilt_deg: f64,
    pub parallel_tilt_deg: f64,
    pub conic: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            collision: tolerance::COLLISION,
            circular_band: tolerance::CIRCULAR_BAND,
            parabola_tilt_deg: tolerance::PARABOLA_TILT_DEG,
            parallel_tilt_deg: tolerance::PARALLEL_TILT_DEG,
            conic: tolerance::CONIC,
        }
    }
}

impl From<&ToleranceConfig> for Tolerances {
    fn from(value: &ToleranceConfig) -> Self {
        Tolerances {
            collision: value.collision,
            circular_band: value.circular_band,
            parabola_tilt_deg: value.parabola_tilt_deg,
            parallel_tilt_deg: value.parallel_tilt_deg,
            conic: value.conic,
        }
    }
}

/// Top-level kernel configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct KernelConfig {
    #[serde(default)]
    pub central_body: CentralBodyConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub projectile: ProjectileConfig,
    #[serde(default)]
    pub cone: ConeConfig,
    #[serde(default)]
    pub tolerances: ToleranceConfig,
}

impl KernelConfig {
    /// Scaling between the central body's real size and the scene.
    pub fn scene_scale(&self) -> SceneScale {
        SceneScale::new(
            self.central_body.radius_km,
            self.simulation.scene_radius,
            self.simulation.time_factor,
        )
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances::from(&self.tolerances)
    }

    /// Reject values the kernel cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("central_body.gm_km3_s2", self.central_body.gm_km3_s2),
            ("central_body.radius_km", self.central_body.radius_km),
            ("simulation.scene_radius", self.simulation.scene_radius),
            ("simulation.time_factor", self.simulation.time_factor),
            ("simulation.base_time_step", self.simulation.base_time_step),
            ("projectile.gravity_ft_s2", self.projectile.gravity_ft_s2),
            ("projectile.time_step_s", self.projectile.time_step_s),
            ("cone.radius", self.cone.radius),
            ("cone.height", self.cone.height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if !matches!(self.simulation.time_scale, 1 | 2 | 5) {
            return Err(ConfigError::Invalid {
                field: "simulation.time_scale",
                reason: format!("must be 1, 2 or 5, got {}", self.simulation.time_scale),
            });
        }
        if self.simulation.max_bodies == 0 {
            return Err(ConfigError::Invalid {
                field: "simulation.max_bodies",
                reason: "must track at least one body".to_string(),
            });
        }
        if self.simulation.cannon_altitude_km < 0.0 {
            return Err(ConfigError::Invalid {
                field: "simulation.cannon_altitude_km",
                reason: "must not be negative".to_string(),
            });
        }
        if let Some(speed) = self.simulation.cannon_circular_speed_km_s {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(ConfigError::Invalid {
                    field: "simulation.cannon_circular_speed_km_s",
                    reason: format!("must be a positive number, got {speed}"),
                });
            }
        }
        Ok(())
    }

    /// GM the cannon scene integrates with (km³/s²).
    pub fn cannon_gm_km3_s2(&self) -> f64 {
        match self.simulation.cannon_circular_speed_km_s {
            Some(speed) => speed * speed * self.central_body.radius_km,
            None => self.central_body.gm_km3_s2,
        }
    }
}

/// Named launch speed offered as a one-click preset.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LaunchPreset {
    pub name: String,
    pub speed_km_s: f64,
    #[serde(default)]
    pub altitude_km: Option<f64>,
}

/// Presets shipped with the cannon scene.
pub fn default_presets() -> Vec<LaunchPreset> {
    [
        ("crashes", 5.0),
        ("circular", 7.8),
        ("elliptical", 9.5),
        ("escape", 12.0),
    ]
    .into_iter()
    .map(|(name, speed_km_s)| LaunchPreset {
        name: name.to_string(),
        speed_km_s,
        altitude_km: None,
    })
    .collect()
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Load and validate the kernel configuration from a TOML or YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<KernelConfig, ConfigError> {
    let path = path.as_ref();
    let config: KernelConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    config.validate()?;
    Ok(config)
}

/// Load launch presets from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<LaunchPreset>, ConfigError> {
    load_records(path)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

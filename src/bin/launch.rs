use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use orbit_kernel::config::{self, KernelConfig, LaunchPreset};
use orbit_kernel::export::{self, snapshot, trajectory};
use orbit_kernel::scenario::{self, OrbitScene};
use orbit_kernel::session::{Launch, TimeScale};
use orbit_kernel::units;
use orbit_kernel::{info, warn};

/// Launch a body into orbit around the configured central body and integrate it headlessly.
#[derive(Parser, Debug)]
#[command(author, version, about = "Orbital launch simulator (cannon / satellite)")]
struct Cli {
    /// Launch speed in km/s (ignored when --preset is given)
    #[arg(long)]
    speed: Option<f64>,

    /// Named launch preset (crashes, circular, elliptical, escape)
    #[arg(long)]
    preset: Option<String>,

    /// Launch altitude in km (defaults to the cannon mountain height)
    #[arg(long)]
    altitude: Option<f64>,

    /// Launch scene
    #[arg(long, value_enum, default_value_t = Scene::Cannon)]
    scene: Scene,

    /// Number of ticks to integrate
    #[arg(long, default_value_t = 2_000)]
    steps: u64,

    /// Playback multiplier applied to the base time step (1, 2 or 5)
    #[arg(long)]
    time_scale: Option<u32>,

    /// Kernel configuration (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preset catalog (YAML list or directory of TOML files)
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Write the recorded trajectory as CSV (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a JSON snapshot of the session
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Scene {
    Cannon,
    Satellite,
}

impl From<Scene> for OrbitScene {
    fn from(value: Scene) -> Self {
        match value {
            Scene::Cannon => OrbitScene::Cannon,
            Scene::Satellite => OrbitScene::Satellite,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => KernelConfig::default(),
    };

    let (speed_km_s, preset_altitude) = resolve_speed(&cli)?;
    let altitude_km = cli
        .altitude
        .or(preset_altitude)
        .unwrap_or(config.simulation.cannon_altitude_km);

    let launch: Launch = match cli.scene {
        Scene::Cannon => {
            if cli.altitude.is_some() {
                warn!("--altitude is ignored by the cannon scene; it always fires from the mountain");
            }
            scenario::cannon_launch(&config, speed_km_s)?
        }
        Scene::Satellite => scenario::satellite_launch(&config, altitude_km, speed_km_s)?,
    };
    let launch_altitude_km = match cli.scene {
        Scene::Cannon => config.simulation.cannon_altitude_km,
        Scene::Satellite => altitude_km,
    };

    let scene = OrbitScene::from(cli.scene);
    let mut session = scenario::orbital_session(&config, scene);
    if let Some(factor) = cli.time_scale {
        let scale = TimeScale::from_factor(factor)
            .ok_or_else(|| anyhow!("time scale must be 1, 2 or 5, got {factor}"))?;
        session.set_time_scale(scale);
    }

    let id = session.launch(launch);
    info!(
        "launched at {:.1} km with {:.3} km/s, integrating {} ticks (dt = {})",
        launch_altitude_km,
        speed_km_s,
        cli.steps,
        session.dt()
    );
    let ran = session.run(cli.steps);

    let tracked = session
        .get(id)
        .ok_or_else(|| anyhow!("launched body {} disappeared from the session", id.0))?;
    let speeds = scenario::launch_speeds(&config, scene, launch_altitude_km);
    let scale = config.scene_scale();
    let final_altitude_km = scale.scene_to_km(tracked.body.position.norm()) - config.central_body.radius_km;

    println!("=== Launch Report ===");
    println!("Scene           : {}", scene.name());
    println!("Central body    : {}", config.central_body.name);
    println!(
        "Launch altitude : {:.1} km ({:.1} mi)",
        launch_altitude_km,
        units::km_to_miles(launch_altitude_km)
    );
    println!(
        "Launch speed    : {:.3} km/s ({:.2} mi/s)",
        speed_km_s,
        units::kms_to_mis(speed_km_s)
    );
    println!(
        "Reference speeds: circular = {:.3} km/s, escape = {:.3} km/s",
        speeds.circular_km_s, speeds.escape_km_s
    );
    println!("Orbit type      : {}", tracked.regime);
    println!("Ticks run       : {}", ran);
    println!(
        "Final state     : {} at altitude {:.1} km, speed {:.3} km/s",
        if tracked.body.is_active { "in flight" } else { "crashed" },
        final_altitude_km,
        scale.speed_to_km_s(tracked.body.velocity.norm())
    );
    println!(
        "Path points     : {} (capacity {})",
        tracked.path.len(),
        tracked.path.capacity()
    );

    if let Some(output) = &cli.output {
        let writer = export::writer_for_path(output)?;
        let rows = trajectory::write_csv(writer, tracked.path.points())?;
        info!("wrote {} trajectory points to {}", rows, output.display());
    }

    if let Some(path) = &cli.snapshot {
        let writer = export::writer_for_path(path)?;
        snapshot::write_json(writer, &session.snapshot(scene.name()))?;
        info!("wrote session snapshot to {}", path.display());
    }

    Ok(())
}

fn resolve_speed(cli: &Cli) -> anyhow::Result<(f64, Option<f64>)> {
    match (&cli.preset, cli.speed) {
        (Some(name), speed) => {
            if speed.is_some() {
                warn!("--speed is ignored when a preset is selected");
            }
            let presets: Vec<LaunchPreset> = match &cli.presets {
                Some(path) => config::load_presets(path)?,
                None => config::default_presets(),
            };
            let preset = scenario::find_preset(&presets, name)?;
            Ok((preset.speed_km_s, preset.altitude_km))
        }
        (None, Some(speed)) => Ok((speed, None)),
        (None, None) => Err(anyhow!("either --speed or --preset is required")),
    }
}

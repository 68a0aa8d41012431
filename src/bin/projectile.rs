use std::path::PathBuf;

use clap::Parser;
use orbit_kernel::config::{self, KernelConfig};
use orbit_kernel::dynamics::{UniformField, ballistics};
use orbit_kernel::export::{self, trajectory};
use orbit_kernel::scenario;
use orbit_kernel::info;

/// Fire a projectile over flat ground and compare the integrated arc with the closed form.
#[derive(Parser, Debug)]
#[command(author, version, about = "Projectile motion over flat ground")]
struct Cli {
    /// Launch angle above the ground, in degrees [0, 90]
    #[arg(long)]
    angle: f64,

    /// Launch speed in ft/s
    #[arg(long)]
    speed: f64,

    /// Upper bound on integration ticks
    #[arg(long, default_value_t = 10_000)]
    steps: u64,

    /// Kernel configuration (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the integrated path as CSV (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the pre-launch preview path as CSV
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => KernelConfig::default(),
    };
    let g = config.projectile.gravity_ft_s2;

    let launch = scenario::projectile_launch(cli.angle, cli.speed)?;
    let formula = ballistics::trajectory_formula(cli.angle, cli.speed, g);
    let preview = ballistics::predict_path(
        launch.position,
        cli.angle,
        cli.speed,
        &UniformField { g, ground: 0.0 },
        ballistics::PREVIEW_TIME_STEP_S,
        ballistics::PREVIEW_MAX_STEPS,
    );

    let mut session = scenario::projectile_session(&config);
    let id = session.launch(launch);
    let ran = session.run(cli.steps);
    let tracked = session
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("projectile {} disappeared from the session", id.0))?;
    info!("integrated {} ticks at dt = {:.4} s", ran, session.dt());

    let landing_x = tracked.path.latest().map(|p| p.x).unwrap_or_default();
    let preview_x = preview.last().map(|p| p.x).unwrap_or_default();

    println!("=== Projectile Report ===");
    println!("Trajectory      : y = {:.6}x² + {:.4}x", formula.a, formula.b);
    println!("Range           : {:.2} ft", ballistics::range(cli.angle, cli.speed, g));
    println!("Apex height     : {:.2} ft", ballistics::apex_height(cli.angle, cli.speed, g));
    println!("Flight time     : {:.2} s", ballistics::flight_time(cli.angle, cli.speed, g));
    println!("Preview landing : {:.2} ft ({} points)", preview_x, preview.len());
    println!(
        "Simulated       : {} at x = {:.2} ft after {} ticks",
        if tracked.body.is_active { "still airborne" } else { "landed" },
        landing_x,
        ran
    );

    if let Some(output) = &cli.output {
        let writer = export::writer_for_path(output)?;
        let rows = trajectory::write_csv(writer, tracked.path.points())?;
        info!("wrote {} trajectory points to {}", rows, output.display());
    }
    if let Some(path) = &cli.preview {
        let writer = export::writer_for_path(path)?;
        let rows = trajectory::write_csv(writer, &preview)?;
        info!("wrote {} preview points to {}", rows, path.display());
    }

    Ok(())
}

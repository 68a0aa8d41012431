use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use orbit_kernel::conics::{Cone, ConicSectionSolver, CuttingPlane, SliceExample};
use orbit_kernel::config::{self, KernelConfig};
use orbit_kernel::export::{self, conic::ConicRecord};
use orbit_kernel::{error, info, warn};

/// Slice the double cone with a tilted plane and report the resulting conic.
#[derive(Parser, Debug)]
#[command(author, version, about = "Cone slicer: classify plane/cone intersections")]
struct Cli {
    /// Plane tilt from the cone's base, in degrees [0, 90]
    #[arg(long)]
    tilt: Option<f64>,

    /// Plane offset along its normal [-4, 4]
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,

    /// Use one of the canned slider positions instead of --tilt/--offset
    #[arg(long, value_enum, conflicts_with_all = ["tilt", "offset"])]
    example: Option<Example>,

    /// Kernel configuration (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the classified conic as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Example {
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
}

impl From<Example> for SliceExample {
    fn from(value: Example) -> Self {
        match value {
            Example::Circle => SliceExample::Circle,
            Example::Ellipse => SliceExample::Ellipse,
            Example::Parabola => SliceExample::Parabola,
            Example::Hyperbola => SliceExample::Hyperbola,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => KernelConfig::default(),
    };
    let cone = Cone::new(config.cone.radius, config.cone.height)?;

    let plane = match (cli.example, cli.tilt, cli.offset) {
        (Some(example), _, _) => SliceExample::from(example).plane(&cone),
        (None, Some(tilt), Some(offset)) => match CuttingPlane::new(tilt, offset) {
            Ok(plane) => {
                if plane.offset != offset {
                    warn!("offset {offset} is too close to the apex; using {}", plane.offset);
                }
                plane
            }
            Err(err) => {
                error!("rejected slider position tilt={tilt}, offset={offset}");
                return Err(err.into());
            }
        },
        _ => return Err(anyhow!("provide --example, or both --tilt and --offset")),
    };

    let solver = ConicSectionSolver::new(config.tolerances());
    let section = solver.solve(plane.tilt_deg, plane.offset, cone.radius, cone.height)?;
    let expected = cone.expected_kind_for_tilt(plane.tilt_deg);
    info!(
        "plane at {:.1}° / {:.2} on cone R={} H={} (parabola tilt {:.2}°)",
        plane.tilt_deg,
        plane.offset,
        cone.radius,
        cone.height,
        cone.base_angle_deg()
    );

    let equation = section.to_string();
    println!("=== Cone Slice ===");
    println!("Tilt      : {:.1}°", plane.tilt_deg);
    println!("Offset    : {:.2}", plane.offset);
    println!("Conic     : {}", section.kind);
    println!("Equation  : {}", equation);
    println!("By tilt   : {}", expected);

    if let Some(path) = &cli.json {
        let writer = export::writer_for_path(path)?;
        let record = ConicRecord {
            tilt_deg: plane.tilt_deg,
            offset: plane.offset,
            cone_radius: cone.radius,
            cone_height: cone.height,
            kind: section.kind.as_str(),
            equation: &equation,
            a: section.params.a,
            b: section.params.b,
            p: section.params.p,
            v_offset: section.params.v_offset,
            vertical: section.params.vertical,
        };
        export::conic::write_json(writer, &record)?;
        info!("wrote conic record to {}", path.display());
    }

    Ok(())
}

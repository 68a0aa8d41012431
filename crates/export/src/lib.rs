//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use std::io::Write;

    use kernel_core::vector::Vector3;
    use serde::Serialize;

    #[derive(Serialize)]
    struct PointRow {
        x: f64,
        y: f64,
        z: f64,
    }

    /// Write recorded points as CSV with an `x,y,z` header, oldest first.
    pub fn write_csv<'a, W, I>(writer: W, points: I) -> csv::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'a Vector3>,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut rows = 0;
        for point in points {
            csv_writer.serialize(PointRow {
                x: point.x,
                y: point.y,
                z: point.z,
            })?;
            rows += 1;
        }
        // An empty path still gets its header.
        if rows == 0 {
            csv_writer.write_record(["x", "y", "z"])?;
        }
        csv_writer.flush()?;
        Ok(rows)
    }
}

pub mod snapshot {
    use std::io::Write;

    use serde::Serialize;

    /// One tracked body in a session snapshot.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodyRecord<'a> {
        pub id: u64,
        pub regime: &'a str,
        pub active: bool,
        pub position: [f64; 3],
        pub velocity: [f64; 3],
        pub path_points: usize,
        pub path_capacity: usize,
    }

    /// Envelope describing a session at one instant.
    #[derive(Debug, Clone, Serialize)]
    pub struct SessionSnapshot<'a> {
        pub scenario: &'a str,
        pub ticks: u64,
        pub time_scale: u32,
        pub dt: f64,
        pub bodies: Vec<BodyRecord<'a>>,
    }

    /// Pretty-print a snapshot as JSON.
    pub fn write_json<W: Write>(writer: W, snapshot: &SessionSnapshot<'_>) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, snapshot)
    }
}

pub mod conic {
    use std::io::Write;

    use serde::Serialize;

    /// Slider state and the curve it produced.
    #[derive(Debug, Clone, Serialize)]
    pub struct ConicRecord<'a> {
        pub tilt_deg: f64,
        pub offset: f64,
        pub cone_radius: f64,
        pub cone_height: f64,
        pub kind: &'a str,
        pub equation: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub a: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub b: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub p: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub v_offset: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vertical: Option<bool>,
    }

    /// Pretty-print a conic record as JSON.
    pub fn write_json<W: Write>(writer: W, record: &ConicRecord<'_>) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, record)
    }
}

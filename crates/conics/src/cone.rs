//! Cone geometry and cutting-plane slider state.

use kernel_core::constants::{CONE_HEIGHT, CONE_RADIUS};
use kernel_core::tolerance;

use crate::section::ConicKind;
use crate::solver::ConicError;

/// Largest offset the plane slider reaches on either side of the apex.
pub const OFFSET_LIMIT: f64 = 4.0;
/// Offsets closer to the apex than this are pushed out to [`APEX_SNAP_OFFSET`].
pub const APEX_EXCLUSION: f64 = 0.05;
pub const APEX_SNAP_OFFSET: f64 = 0.1;

/// Right circular double cone with its apex at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            radius: CONE_RADIUS,
            height: CONE_HEIGHT,
        }
    }
}

impl Cone {
    pub fn new(radius: f64, height: f64) -> Result<Self, ConicError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConicError::InvalidConeRadius(radius));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConicError::InvalidConeHeight(height));
        }
        Ok(Self { radius, height })
    }

    /// Radius gained per unit of height, `k = R/H`.
    pub fn slope(&self) -> f64 {
        self.radius / self.height
    }

    /// Angle between the cone's surface and its axis.
    pub fn half_angle_from_axis_deg(&self) -> f64 {
        self.slope().atan().to_degrees()
    }

    /// Angle between the cone's surface and its base; a plane at this tilt cuts a parabola.
    pub fn base_angle_deg(&self) -> f64 {
        90.0 - self.half_angle_from_axis_deg()
    }

    /// Curve family a plane at `tilt_deg` produces, judged from the tilt alone.
    ///
    /// This is what the slicer highlights as the active example; the solver refines it
    /// with the offset (degenerate point, missed cone).
    pub fn expected_kind_for_tilt(&self, tilt_deg: f64) -> ConicKind {
        let base = self.base_angle_deg();
        if tilt_deg == 0.0 {
            ConicKind::Circle
        } else if tilt_deg < base - tolerance::PARABOLA_TILT_DEG {
            ConicKind::Ellipse
        } else if (tilt_deg - base).abs() < tolerance::PARABOLA_TILT_DEG {
            ConicKind::Parabola
        } else {
            ConicKind::Hyperbola
        }
    }
}

/// Slider state of the cutting plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuttingPlane {
    pub tilt_deg: f64,
    pub offset: f64,
}

impl CuttingPlane {
    /// Validate slider values and keep the plane off the apex.
    pub fn new(tilt_deg: f64, offset: f64) -> Result<Self, ConicError> {
        if !(0.0..=90.0).contains(&tilt_deg) {
            return Err(ConicError::TiltOutOfRange(tilt_deg));
        }
        if !(-OFFSET_LIMIT..=OFFSET_LIMIT).contains(&offset) {
            return Err(ConicError::OffsetOutOfRange(offset));
        }
        let offset = if offset.abs() < APEX_EXCLUSION {
            if offset >= 0.0 { APEX_SNAP_OFFSET } else { -APEX_SNAP_OFFSET }
        } else {
            offset
        };
        Ok(Self { tilt_deg, offset })
    }
}

/// Canned slider positions that show off each conic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceExample {
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
}

impl SliceExample {
    pub const ALL: [SliceExample; 4] = [
        SliceExample::Circle,
        SliceExample::Ellipse,
        SliceExample::Parabola,
        SliceExample::Hyperbola,
    ];

    /// Slider position for this example on `cone`.
    pub fn plane(&self, cone: &Cone) -> CuttingPlane {
        let (tilt_deg, offset) = match self {
            SliceExample::Circle => (0.0, 2.5),
            SliceExample::Ellipse => (45.0, 2.0),
            // the slider only resolves tenths of a degree
            SliceExample::Parabola => ((cone.base_angle_deg() * 10.0).round() / 10.0, 1.5),
            SliceExample::Hyperbola => (90.0, 1.0),
        };
        CuttingPlane { tilt_deg, offset }
    }

    pub fn kind(&self) -> ConicKind {
        match self {
            SliceExample::Circle => ConicKind::Circle,
            SliceExample::Ellipse => ConicKind::Ellipse,
            SliceExample::Parabola => ConicKind::Parabola,
            SliceExample::Hyperbola => ConicKind::Hyperbola,
        }
    }
}

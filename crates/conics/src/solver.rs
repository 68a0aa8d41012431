//! Closed-form classification of a plane slicing a double cone.
//!
//! The plane is tilted `tilt_deg` from the cone's base and shifted `offset` along its
//! normal. Substituting the plane into the cone's implicit equation leaves a quadratic in
//! the plane's own coordinates, `x² + Cv2·v² + Cv·v + C1 = 0`; the signs of its
//! coefficients decide the curve family.

use kernel_core::tolerance::Tolerances;
use thiserror::Error;

use crate::cone::Cone;
use crate::section::ConicSection;

/// Rejected slicer inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ConicError {
    #[error("tilt must lie within [0, 90] degrees, got {0}")]
    TiltOutOfRange(f64),
    #[error("plane offset must be finite and within the slider range, got {0}")]
    OffsetOutOfRange(f64),
    #[error("cone radius must be positive, got {0}")]
    InvalidConeRadius(f64),
    #[error("cone height must be positive, got {0}")]
    InvalidConeHeight(f64),
}

/// Stateless solver carrying the tolerances it compares against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConicSectionSolver {
    pub tolerances: Tolerances,
}

impl ConicSectionSolver {
    pub fn new(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    /// Classify the curve cut from a cone of `cone_radius`/`cone_height` by a plane at
    /// `tilt_deg` and `offset`.
    pub fn solve(
        &self,
        tilt_deg: f64,
        offset: f64,
        cone_radius: f64,
        cone_height: f64,
    ) -> Result<ConicSection, ConicError> {
        if !(0.0..=90.0).contains(&tilt_deg) {
            return Err(ConicError::TiltOutOfRange(tilt_deg));
        }
        if !offset.is_finite() {
            return Err(ConicError::OffsetOutOfRange(offset));
        }
        let cone = Cone::new(cone_radius, cone_height)?;
        Ok(self.classify(&cone, tilt_deg, offset))
    }

    fn classify(&self, cone: &Cone, tilt_deg: f64, offset: f64) -> ConicSection {
        let tol = &self.tolerances;

        // Nearly parallel to the axis and past the base rim: the plane never meets the cone.
        if (tilt_deg - 90.0).abs() < tol.parallel_tilt_deg
            && (offset < -cone.radius || offset > cone.radius)
        {
            return ConicSection::none();
        }

        let k = cone.slope();
        let k2 = k * k;
        let phi = tilt_deg.to_radians();
        let ny = -phi.cos();
        let nz = phi.sin();
        let d = offset;

        let cv2 = ny * ny - k2 * nz * nz;
        let cv = -2.0 * d * ny * nz * (1.0 + k2);
        let c1 = d * d * (nz * nz - k2 * ny * ny);

        if (tilt_deg - cone.base_angle_deg()).abs() < tol.parabola_tilt_deg && cv.abs() > tol.conic {
            return ConicSection::parabola(-cv, c1 / cv);
        }

        self.classify_quadratic(cv2, cv, c1)
    }

    /// Classify `x² + cv2·v² + cv·v + c1 = 0` by the signs of its coefficients.
    ///
    /// Slices of a real cone always give `K` the sign of `cv2`; the mixed-sign rows only
    /// matter for coefficients supplied directly or nudged by rounding.
    pub fn classify_quadratic(&self, cv2: f64, cv: f64, c1: f64) -> ConicSection {
        let tol = &self.tolerances;
        if cv2.abs() < tol.conic {
            return ConicSection::none();
        }

        let big_k = cv * cv / (4.0 * cv2) - c1;
        if big_k.abs() < tol.conic {
            return ConicSection::point();
        }

        let b = (big_k / cv2).abs().sqrt();
        if cv2 > 0.0 {
            if big_k < 0.0 {
                // x² + Cv2·v² = K < 0 has no real points.
                return ConicSection::none();
            }
            let a = big_k.sqrt();
            if (a - b).abs() < tol.conic * a.max(1.0) {
                ConicSection::circle(a)
            } else {
                ConicSection::ellipse(a, b)
            }
        } else if big_k > 0.0 {
            ConicSection::hyperbola(big_k.sqrt(), b, false)
        } else {
            ConicSection::hyperbola(big_k.abs().sqrt(), b, true)
        }
    }
}

/// Solve with the default tolerances.
pub fn solve(
    tilt_deg: f64,
    offset: f64,
    cone_radius: f64,
    cone_height: f64,
) -> Result<ConicSection, ConicError> {
    ConicSectionSolver::default().solve(tilt_deg, offset, cone_radius, cone_height)
}

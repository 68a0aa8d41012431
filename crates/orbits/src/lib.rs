//! Closed-form two-body helpers and launch-time orbit classification.
//!
//! Classification runs once from the launch conditions, never from the integrated state.

use std::fmt;

use kernel_core::tolerance;

/// Coarse shape of the trajectory a launch produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitRegime {
    /// The trajectory's perigee lies at or below the surface.
    Crashed,
    /// Bound orbit launched within the circular band of circular speed.
    Circular,
    /// Any other bound orbit that clears the surface.
    Elliptical,
    /// Parabolic or hyperbolic escape.
    Escaped,
}

impl OrbitRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitRegime::Crashed => "crashed",
            OrbitRegime::Circular => "circular",
            OrbitRegime::Elliptical => "elliptical",
            OrbitRegime::Escaped => "escaped",
        }
    }

    /// Whether the orbit closes on itself.
    pub fn is_bound(&self) -> bool {
        matches!(self, OrbitRegime::Circular | OrbitRegime::Elliptical)
    }
}

impl fmt::Display for OrbitRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speed of a circular orbit at radius `r`.
#[inline]
pub fn circular_velocity(gm: f64, r: f64) -> f64 {
    (gm / r).sqrt()
}

/// Local escape speed at radius `r`.
#[inline]
pub fn escape_velocity(gm: f64, r: f64) -> f64 {
    (2.0 * gm / r).sqrt()
}

/// Period of a bound orbit with semi-major axis `a`.
pub fn orbital_period(gm: f64, a: f64) -> f64 {
    2.0 * std::f64::consts::PI * (a.powi(3) / gm).sqrt()
}

/// How many times faster an orbit of `radius` sweeps its angle than one of `reference_radius`.
///
/// Follows from Kepler's third law, `ω ∝ r^(-3/2)`.
pub fn angular_rate_ratio(reference_radius: f64, radius: f64) -> f64 {
    (reference_radius.powi(3) / radius.powi(3)).sqrt()
}

/// Two-body elements of a tangential launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchElements {
    pub launch_radius: f64,
    pub specific_energy: f64,
    pub angular_momentum: f64,
    /// `None` for unbound launches.
    pub semi_major_axis: Option<f64>,
    pub eccentricity: Option<f64>,
    pub perigee_radius: Option<f64>,
}

impl LaunchElements {
    /// Elements of a launch at `launch_altitude` above a body of `central_radius`, moving
    /// perpendicular to the radius vector at `launch_speed`.
    pub fn tangential(launch_speed: f64, launch_altitude: f64, gm: f64, central_radius: f64) -> Self {
        let r0 = central_radius + launch_altitude;
        let energy = 0.5 * launch_speed * launch_speed - gm / r0;
        let h = r0 * launch_speed;

        if energy >= 0.0 || launch_speed >= escape_velocity(gm, r0) {
            return Self {
                launch_radius: r0,
                specific_energy: energy,
                angular_momentum: h,
                semi_major_axis: None,
                eccentricity: None,
                perigee_radius: None,
            };
        }

        let a = -gm / (2.0 * energy);
        // Clamp absorbs rounding that pushes the radicand below zero near e = 0.
        let e = (1.0 - (h * h) / (a * gm)).max(0.0).sqrt();
        let rp = a * (1.0 - e);

        Self {
            launch_radius: r0,
            specific_energy: energy,
            angular_momentum: h,
            semi_major_axis: Some(a),
            eccentricity: Some(e),
            perigee_radius: Some(rp),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.semi_major_axis.is_some()
    }
}

/// Pure classifier of launch conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitClassifier {
    /// Relative distance from circular speed still reported as circular.
    pub circular_band: f64,
}

impl Default for OrbitClassifier {
    fn default() -> Self {
        Self {
            circular_band: tolerance::CIRCULAR_BAND,
        }
    }
}

impl OrbitClassifier {
    pub fn new(circular_band: f64) -> Self {
        Self { circular_band }
    }

    /// Classify a tangential launch.
    pub fn classify(
        &self,
        launch_speed: f64,
        launch_altitude: f64,
        gm: f64,
        central_radius: f64,
    ) -> OrbitRegime {
        let elements = LaunchElements::tangential(launch_speed, launch_altitude, gm, central_radius);
        let Some(rp) = elements.perigee_radius else {
            return OrbitRegime::Escaped;
        };

        if rp <= central_radius {
            return OrbitRegime::Crashed;
        }

        let v_circular = circular_velocity(gm, elements.launch_radius);
        if (launch_speed - v_circular).abs() < self.circular_band * v_circular {
            OrbitRegime::Circular
        } else {
            OrbitRegime::Elliptical
        }
    }
}

/// Classify a tangential launch with the default circular band.
pub fn classify(launch_speed: f64, launch_altitude: f64, gm: f64, central_radius: f64) -> OrbitRegime {
    OrbitClassifier::default().classify(launch_speed, launch_altitude, gm, central_radius)
}

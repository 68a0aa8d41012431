//! Core units, constants, and shared primitives for the orbit kernel workspace.

/// Physical and scene constants. Real-world values are in km and km/s unless stated otherwise.
pub mod constants {
    /// Earth's standard gravitational parameter (km³/s²).
    pub const EARTH_GM_KM3_S2: f64 = 398_600.441_8;
    /// Earth's mean radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Earth's radius in scene units.
    pub const SCENE_EARTH_RADIUS: f64 = 5.0;
    /// Time compression applied to orbital scenes so an orbit completes in seconds.
    pub const SCENE_TIME_FACTOR: f64 = 120.0;
    /// Base integration step for orbital scenes (scene time units).
    pub const ORBIT_TIME_STEP: f64 = 0.05;
    /// Height of the mountain Newton's cannon fires from (km).
    pub const CANNON_MOUNTAIN_KM: f64 = 100.0;
    /// Surface speed the cannon scene's gravity is tuned to make circular (km/s).
    pub const CANNON_CIRCULAR_SPEED_KM_S: f64 = 7.8;
    /// Standard gravity in feet per second squared.
    pub const EARTH_GRAVITY_FT_S2: f64 = 32.2;
    /// Projectile scenes advance at a nominal 60 Hz.
    pub const PROJECTILE_TIME_STEP_S: f64 = 1.0 / 60.0;
    /// Upper bound on concurrently tracked bodies in one session.
    pub const MAX_TRACKED_BODIES: usize = 5;
    /// Radius of the sliced cone in the cone slicer.
    pub const CONE_RADIUS: f64 = 3.0;
    /// Height of each nappe of the sliced cone.
    pub const CONE_HEIGHT: f64 = 6.0;
}

/// Named numeric tolerances used across the kernel.
pub mod tolerance {
    /// Clearance band above a surface that counts as an impact (scene units).
    pub const COLLISION: f64 = 0.01;
    /// Relative band around circular speed that still classifies as circular.
    pub const CIRCULAR_BAND: f64 = 0.01;
    /// Tilt band around the cone's base angle that selects the parabola regime (degrees).
    pub const PARABOLA_TILT_DEG: f64 = 0.1;
    /// Tilt band around 90° that treats the cutting plane as parallel to the axis (degrees).
    pub const PARALLEL_TILT_DEG: f64 = 0.1;
    /// Zero threshold for conic coefficients.
    pub const CONIC: f64 = 1e-6;

    /// Bundle of every tolerance so callers can override them together.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Tolerances {
        pub collision: f64,
        pub circular_band: f64,
        pub parabola_tilt_deg: f64,
        pub parallel_tilt_deg: f64,
        pub conic: f64,
    }

    impl Default for Tolerances {
        fn default() -> Self {
            Self {
                collision: COLLISION,
                circular_band: CIRCULAR_BAND,
                parabola_tilt_deg: PARABOLA_TILT_DEG,
                parallel_tilt_deg: PARALLEL_TILT_DEG,
                conic: CONIC,
            }
        }
    }
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{EARTH_RADIUS_KM, SCENE_EARTH_RADIUS, SCENE_TIME_FACTOR};

    const KM_TO_MILES: f64 = 0.621_371;

    /// Convert kilometres to statute miles.
    #[inline]
    pub fn km_to_miles(v: f64) -> f64 {
        v * KM_TO_MILES
    }

    /// Convert statute miles to kilometres.
    #[inline]
    pub fn miles_to_km(v: f64) -> f64 {
        v / KM_TO_MILES
    }

    /// Convert kilometres per second to miles per second.
    #[inline]
    pub fn kms_to_mis(v: f64) -> f64 {
        v * KM_TO_MILES
    }

    /// Length/time scaling between real-world kilometres and scene units.
    ///
    /// One scene length unit is `km_per_unit` kilometres and one scene time unit is
    /// `time_factor` seconds, so speeds scale by `time_factor / km_per_unit` and
    /// gravitational parameters by `time_factor² / km_per_unit³`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SceneScale {
        pub km_per_unit: f64,
        pub time_factor: f64,
    }

    impl SceneScale {
        /// Scale that maps a body of `real_radius_km` onto `scene_radius` units.
        pub fn new(real_radius_km: f64, scene_radius: f64, time_factor: f64) -> Self {
            Self {
                km_per_unit: real_radius_km / scene_radius,
                time_factor,
            }
        }

        #[inline]
        pub fn km_to_scene(&self, km: f64) -> f64 {
            km / self.km_per_unit
        }

        #[inline]
        pub fn scene_to_km(&self, units: f64) -> f64 {
            units * self.km_per_unit
        }

        #[inline]
        pub fn speed_to_scene(&self, km_s: f64) -> f64 {
            km_s * self.time_factor / self.km_per_unit
        }

        #[inline]
        pub fn speed_to_km_s(&self, units: f64) -> f64 {
            units * self.km_per_unit / self.time_factor
        }

        #[inline]
        pub fn gm_to_scene(&self, gm_km3_s2: f64) -> f64 {
            gm_km3_s2 * self.time_factor.powi(2) / self.km_per_unit.powi(3)
        }
    }

    impl Default for SceneScale {
        fn default() -> Self {
            Self::new(EARTH_RADIUS_KM, SCENE_EARTH_RADIUS, SCENE_TIME_FACTOR)
        }
    }
}

/// Minimal vector type to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    use std::ops::{Add, AddAssign, Mul, Sub};

    /// 3D vector in scene units. Planar motion keeps `z = 0`.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Vector in the `z = 0` plane.
        #[inline]
        pub const fn planar(x: f64, y: f64) -> Self {
            Self { x, y, z: 0.0 }
        }

        /// Dot product of two vectors.
        #[inline]
        pub fn dot(&self, other: &Vector3) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        #[inline]
        pub fn norm_squared(&self) -> f64 {
            self.dot(self)
        }

        /// Euclidean norm of a vector.
        #[inline]
        pub fn norm(&self) -> f64 {
            self.norm_squared().sqrt()
        }

        /// Scale a vector by a scalar.
        #[inline]
        pub fn scale(&self, s: f64) -> Vector3 {
            Vector3::new(self.x * s, self.y * s, self.z * s)
        }

        /// Unit vector in the same direction; the zero vector normalises to zero.
        #[inline]
        pub fn normalize(&self) -> Vector3 {
            let n = self.norm();
            if n > 0.0 { self.scale(1.0 / n) } else { Vector3::ZERO }
        }

        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }

        pub fn to_array(self) -> [f64; 3] {
            [self.x, self.y, self.z]
        }
    }

    impl Add for Vector3 {
        type Output = Vector3;

        fn add(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
        }
    }

    impl AddAssign for Vector3 {
        fn add_assign(&mut self, rhs: Vector3) {
            self.x += rhs.x;
            self.y += rhs.y;
            self.z += rhs.z;
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        fn sub(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
        }
    }

    impl Mul<f64> for Vector3 {
        type Output = Vector3;

        fn mul(self, rhs: f64) -> Vector3 {
            self.scale(rhs)
        }
    }
}

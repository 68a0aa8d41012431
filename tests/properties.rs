//! Property-based checks of the kernel's invariants.

use orbit_kernel::conics::{self, ConicKind};
use orbit_kernel::dynamics::{Body, ForceModel, Integrator};
use orbit_kernel::orbits::{self, OrbitRegime};
use orbit_kernel::trajectory::{self, TrajectoryPath};
use orbit_kernel::vector::Vector3;
use proptest::prelude::*;

const GM: f64 = 398_600.441_8;
const R: f64 = 6_371.0;

fn regime() -> impl Strategy<Value = OrbitRegime> {
    prop_oneof![
        Just(OrbitRegime::Crashed),
        Just(OrbitRegime::Circular),
        Just(OrbitRegime::Elliptical),
        Just(OrbitRegime::Escaped),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The window holds exactly the most recent points, oldest first.
    #[test]
    fn prop_path_keeps_latest_points(count in 0usize..3_000, regime in regime()) {
        let mut path = TrajectoryPath::new(regime);
        for i in 0..count {
            path.record(Vector3::planar(i as f64, 0.0), regime);
        }
        let cap = trajectory::capacity(regime);
        prop_assert_eq!(path.len(), count.min(cap));
        let first = count.saturating_sub(cap);
        for (offset, point) in path.points().enumerate() {
            prop_assert_eq!(point.x, (first + offset) as f64);
        }
    }

    #[test]
    fn prop_near_circular_speed_is_circular(
        altitude in 200.0f64..2_000.0,
        factor in 0.995f64..1.005,
    ) {
        let vc = orbits::circular_velocity(GM, R + altitude);
        prop_assert_eq!(orbits::classify(vc * factor, altitude, GM, R), OrbitRegime::Circular);
    }

    #[test]
    fn prop_faster_than_circular_but_bound_is_elliptical(
        altitude in 1.0f64..5_000.0,
        factor in 1.02f64..1.40,
    ) {
        let vc = orbits::circular_velocity(GM, R + altitude);
        prop_assert_eq!(orbits::classify(vc * factor, altitude, GM, R), OrbitRegime::Elliptical);
    }

    #[test]
    fn prop_escape_speed_or_more_escapes(
        altitude in 0.0f64..50_000.0,
        factor in 1.0f64..3.0,
    ) {
        let ve = orbits::escape_velocity(GM, R + altitude);
        prop_assert_eq!(orbits::classify(ve * factor, altitude, GM, R), OrbitRegime::Escaped);
    }

    /// Bodies starting inside the surface never produce non-finite state.
    #[test]
    fn prop_inside_surface_crashes_cleanly(
        x in -0.49f64..0.49,
        y in -0.49f64..0.49,
        vx in -10.0f64..10.0,
        vy in -10.0f64..10.0,
    ) {
        prop_assume!((x * x + y * y).sqrt() < 0.5);
        let field = ForceModel::central(1.0, 0.5);
        let mut body = Body::new(Vector3::planar(x, y), Vector3::planar(vx, vy), 0.1);
        let result = Integrator::default().step(&mut body, &field, 0.01);
        prop_assert!(result.crashed);
        prop_assert!(!body.is_active);
        prop_assert!(result.position.is_finite() && result.velocity.is_finite());
    }

    #[test]
    fn prop_solve_is_total_and_repeatable(tilt in 0.0f64..=90.0, offset in -4.0f64..=4.0) {
        let first = conics::solve(tilt, offset, 3.0, 6.0);
        let second = conics::solve(tilt, offset, 3.0, 6.0);
        prop_assert!(first.is_ok());
        prop_assert_eq!(&first, &second);
        if let Ok(section) = first {
            if matches!(section.kind, ConicKind::Circle | ConicKind::Ellipse | ConicKind::Hyperbola) {
                let a = section.params.a.unwrap_or(f64::NAN);
                let b = section.params.b.unwrap_or(f64::NAN);
                prop_assert!(a.is_finite() && a > 0.0, "a = {}", a);
                prop_assert!(b.is_finite() && b > 0.0, "b = {}", b);
            }
        }
    }
}

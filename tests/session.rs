use orbit_kernel::dynamics::ForceModel;
use orbit_kernel::orbits::OrbitRegime;
use orbit_kernel::session::{BodyId, Launch, SimulationSession, TimeScale};
use orbit_kernel::vector::Vector3;

fn orbit_session() -> SimulationSession {
    SimulationSession::new(ForceModel::central(1.0, 0.5), 0.01, 5)
}

fn circular_launch() -> Launch {
    Launch {
        position: Vector3::planar(1.0, 0.0),
        velocity: Vector3::planar(0.0, 1.0),
    }
}

fn falling_launch() -> Launch {
    Launch {
        position: Vector3::planar(0.6, 0.0),
        velocity: Vector3::ZERO,
    }
}

#[test]
fn sixth_launch_evicts_the_oldest_body() {
    let mut session = orbit_session();
    let ids: Vec<BodyId> = (0..7).map(|_| session.launch(circular_launch())).collect();
    assert_eq!(session.len(), 5);
    let kept: Vec<BodyId> = session.bodies().map(|tracked| tracked.id).collect();
    assert_eq!(kept, ids[2..].to_vec());
    assert!(session.get(ids[0]).is_none());
}

#[test]
fn regime_is_fixed_at_launch() {
    let mut session = orbit_session();
    let id = session.launch(circular_launch());
    assert_eq!(session.get(id).map(|t| t.regime), Some(OrbitRegime::Circular));

    let ran = session.run(500);
    assert_eq!(ran, 500);
    let tracked = session.get(id).expect("tracked body");
    assert_eq!(tracked.regime, OrbitRegime::Circular);
    assert!(tracked.body.is_active);
    // launch point plus one point per tick
    assert_eq!(tracked.path.len(), 501);
    assert_eq!(tracked.path.oldest(), Some(&Vector3::planar(1.0, 0.0)));
}

#[test]
fn crashed_bodies_stay_tracked_but_stop_moving() {
    let mut session = orbit_session();
    let orbiting = session.launch(circular_launch());
    let falling = session.launch(falling_launch());
    assert_eq!(session.get(falling).map(|t| t.regime), Some(OrbitRegime::Crashed));

    let mut crash_tick = None;
    for tick in 0..1_000 {
        let report = session.tick();
        if report.crashed.contains(&falling) {
            crash_tick = Some(tick);
            break;
        }
    }
    assert!(crash_tick.is_some(), "falling body never crashed");
    assert_eq!(session.len(), 2);
    assert_eq!(session.active_count(), 1);

    let frozen = session.get(falling).expect("crashed body").body.position;
    let report = session.tick();
    assert_eq!(report.stepped, 1);
    assert!(report.crashed.is_empty());
    assert_eq!(session.get(falling).map(|t| t.body.position), Some(frozen));
    assert!(session.get(orbiting).map(|t| t.body.is_active).unwrap_or(false));
}

#[test]
fn run_stops_once_everything_has_crashed() {
    let mut session = orbit_session();
    session.launch(falling_launch());
    let ran = session.run(10_000);
    assert!(ran < 10_000);
    assert_eq!(session.ticks(), ran);
    assert_eq!(session.active_count(), 0);
    assert_eq!(session.len(), 1);
}

#[test]
fn time_scale_multiplies_the_step() {
    let mut session = orbit_session();
    assert_eq!(session.time_scale(), TimeScale::X1);
    assert!((session.dt() - 0.01).abs() < 1e-15);
    session.set_time_scale(TimeScale::X5);
    assert!((session.dt() - 0.05).abs() < 1e-15);
    session.launch(circular_launch());
    assert!((session.tick().dt - 0.05).abs() < 1e-15);

    assert_eq!(TimeScale::from_factor(2), Some(TimeScale::X2));
    assert_eq!(TimeScale::from_factor(3), None);
    assert_eq!(TimeScale::X2.factor(), 2);
}

#[test]
fn reset_drops_every_body() {
    let mut session = orbit_session();
    session.launch(circular_launch());
    session.launch(falling_launch());
    session.run(10);
    session.reset();
    assert!(session.is_empty());
    assert_eq!(session.ticks(), 0);
    assert_eq!(session.tick().stepped, 0);
}

#[test]
fn uniform_gravity_launches_are_falling_arcs() {
    let mut session = SimulationSession::new(ForceModel::uniform(32.2), 1.0 / 60.0, 5);
    let id = session.launch(Launch {
        position: Vector3::ZERO,
        velocity: Vector3::planar(50.0, 50.0),
    });
    let tracked = session.get(id).expect("tracked");
    assert_eq!(tracked.regime, OrbitRegime::Crashed);
    assert_eq!(tracked.path.capacity(), 2048);
}

#[test]
fn snapshot_lists_bodies_with_their_regimes() {
    let mut session = orbit_session();
    session.launch(circular_launch());
    session.launch(falling_launch());
    session.run(3);
    let snapshot = session.snapshot("unit-test");
    assert_eq!(snapshot.scenario, "unit-test");
    assert_eq!(snapshot.ticks, 3);
    assert_eq!(snapshot.time_scale, 1);
    let regimes: Vec<&str> = snapshot.bodies.iter().map(|b| b.regime).collect();
    assert_eq!(regimes, vec!["circular", "crashed"]);
    assert_eq!(snapshot.bodies[0].path_points, 4);
    assert_eq!(snapshot.bodies[0].path_capacity, 8192);
}

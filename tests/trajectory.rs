use orbit_kernel::orbits::OrbitRegime;
use orbit_kernel::trajectory::{self, TrajectoryPath, TrajectoryRecorder};
use orbit_kernel::vector::Vector3;

fn point(i: usize) -> Vector3 {
    Vector3::planar(i as f64, 0.0)
}

#[test]
fn capacities_follow_regime() {
    assert_eq!(trajectory::capacity(OrbitRegime::Escaped), 1024);
    assert_eq!(trajectory::capacity(OrbitRegime::Circular), 8192);
    assert_eq!(trajectory::capacity(OrbitRegime::Elliptical), 8192);
    assert_eq!(trajectory::capacity(OrbitRegime::Crashed), 2048);
    assert_eq!(TrajectoryPath::new(OrbitRegime::Escaped).capacity(), 1024);
}

#[test]
fn escaped_path_keeps_latest_points_in_order() {
    let mut path = TrajectoryPath::new(OrbitRegime::Escaped);
    let mut evicted = 0;
    for i in 0..1030 {
        evicted += path.record(point(i), OrbitRegime::Escaped);
    }
    assert_eq!(path.len(), 1024);
    assert_eq!(evicted, 6);
    assert_eq!(path.oldest(), Some(&point(6)));
    assert_eq!(path.latest(), Some(&point(1029)));
    let xs: Vec<f64> = path.points().map(|p| p.x).collect();
    assert!(xs.windows(2).all(|w| w[1] - w[0] == 1.0));
}

#[test]
fn short_path_is_never_trimmed() {
    let mut path = TrajectoryPath::new(OrbitRegime::Circular);
    assert!(path.is_empty());
    assert!(path.latest().is_none());
    for i in 0..10 {
        assert_eq!(path.record(point(i), OrbitRegime::Circular), 0);
    }
    assert_eq!(path.to_vec(), (0..10).map(point).collect::<Vec<_>>());
}

#[test]
fn shrinking_window_evicts_everything_over_the_new_capacity_at_once() {
    let mut path = TrajectoryPath::new(OrbitRegime::Circular);
    for i in 0..3000 {
        path.record(point(i), OrbitRegime::Circular);
    }
    assert_eq!(path.len(), 3000);

    let evicted = TrajectoryRecorder::record(&mut path, point(3000), OrbitRegime::Escaped);
    assert_eq!(evicted, 3001 - 1024);
    assert_eq!(path.len(), 1024);
    assert_eq!(path.capacity(), 1024);
    assert_eq!(path.oldest(), Some(&point(3001 - 1024)));
    assert_eq!(path.latest(), Some(&point(3000)));
}

#[test]
fn explicit_capacity_survives_recording() {
    let mut path = TrajectoryPath::with_capacity(3);
    assert_eq!(path.capacity(), 3);
    let mut evicted = 0;
    for i in 0..10 {
        evicted += path.record(point(i), OrbitRegime::Crashed);
    }
    assert_eq!(path.capacity(), 3);
    assert_eq!(path.len(), 3);
    assert_eq!(evicted, 7);
    assert_eq!(path.to_vec(), vec![point(7), point(8), point(9)]);
    path.clear();
    assert!(path.is_empty());
}

#[test]
fn closed_orbit_window_evicts_past_8192_points() {
    let extra = 25;
    let mut path = TrajectoryPath::new(OrbitRegime::Elliptical);
    let mut evicted = 0;
    for i in 0..8192 + extra {
        evicted += path.record(point(i), OrbitRegime::Elliptical);
    }
    assert_eq!(path.len(), 8192);
    assert_eq!(evicted, extra);
    assert_eq!(path.oldest(), Some(&point(extra)));
    assert_eq!(path.latest(), Some(&point(8192 + extra - 1)));
}

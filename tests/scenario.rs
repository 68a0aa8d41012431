use orbit_kernel::config::{self, KernelConfig};
use orbit_kernel::orbits::OrbitRegime;
use orbit_kernel::scenario::{self, OrbitScene, ScenarioError};
use orbit_kernel::dynamics::ballistics;
use orbit_kernel::units::{self, SceneScale};

#[test]
fn scene_scale_maps_earth_onto_five_units() {
    let scale = SceneScale::default();
    assert!((scale.km_per_unit - 1274.2).abs() < 1e-9);
    assert!((scale.km_to_scene(6371.0) - 5.0).abs() < 1e-12);
    assert!((scale.speed_to_km_s(scale.speed_to_scene(7.8)) - 7.8).abs() < 1e-12);
    let gm_scene = scale.gm_to_scene(398_600.441_8);
    assert!((gm_scene - 2.7745).abs() < 1e-3, "gm_scene = {gm_scene}");
    assert!((units::km_to_miles(1.0) - 0.621371).abs() < 1e-6);
    assert!((units::miles_to_km(units::km_to_miles(100.0)) - 100.0).abs() < 1e-9);
}

#[test]
fn cannon_presets_land_in_their_named_regimes() {
    let config = KernelConfig::default();
    let altitude = config.simulation.cannon_altitude_km;
    let expected = [
        ("crashes", OrbitRegime::Crashed),
        ("circular", OrbitRegime::Circular),
        ("elliptical", OrbitRegime::Elliptical),
        ("escape", OrbitRegime::Escaped),
    ];
    let presets = config::default_presets();
    for (name, regime) in expected {
        let preset = scenario::find_preset(&presets, name).expect("preset");
        assert_eq!(
            scenario::classify_launch(&config, OrbitScene::Cannon, altitude, preset.speed_km_s),
            regime,
            "{name}"
        );

        let mut session = scenario::orbital_session(&config, OrbitScene::Cannon);
        let launch = scenario::cannon_launch(&config, preset.speed_km_s).expect("launch");
        let id = session.launch(launch);
        assert_eq!(session.get(id).map(|t| t.regime), Some(regime), "{name} in session");
    }
}

#[test]
fn cannon_crash_preset_hits_the_ground_and_circular_keeps_flying() {
    let config = KernelConfig::default();
    let mut session = scenario::orbital_session(&config, OrbitScene::Cannon);
    let crash = session.launch(scenario::cannon_launch(&config, 5.0).expect("launch"));
    let circular = session.launch(scenario::cannon_launch(&config, 7.8).expect("launch"));
    session.run(2_000);
    assert!(!session.get(crash).map(|t| t.body.is_active).unwrap_or(true));
    let orbiting = session.get(circular).expect("circular body");
    assert!(orbiting.body.is_active);
    let r = orbiting.body.position.norm();
    assert!(r > 5.0 && r < 5.3, "r = {r}");
}

#[test]
fn cannon_gravity_tuning_can_be_disabled() {
    let mut config = KernelConfig::default();
    let tuned = OrbitScene::Cannon.gm_km3_s2(&config);
    assert!((tuned - 7.8 * 7.8 * 6371.0).abs() < 1e-6);
    config.simulation.cannon_circular_speed_km_s = None;
    assert_eq!(OrbitScene::Cannon.gm_km3_s2(&config), config.central_body.gm_km3_s2);
    assert_eq!(
        OrbitScene::Satellite.gm_km3_s2(&KernelConfig::default()),
        398_600.441_8
    );
}

#[test]
fn cannon_fires_horizontally_from_the_mountain_top() {
    let config = KernelConfig::default();
    let launch = scenario::cannon_launch(&config, 7.8).expect("launch");
    assert_eq!(launch.position.x, 0.0);
    assert!((launch.position.y - 6471.0 / 1274.2).abs() < 1e-9);
    assert!((launch.velocity.x - 7.8 * 120.0 / 1274.2).abs() < 1e-12);
    assert_eq!(launch.velocity.y, 0.0);
}

#[test]
fn satellite_scene_uses_real_reference_speeds() {
    let config = KernelConfig::default();
    let speeds = scenario::launch_speeds(&config, OrbitScene::Satellite, 400.0);
    assert!((speeds.circular_km_s - 7.6726).abs() < 1e-3);
    assert!((speeds.escape_km_s - 10.8507).abs() < 1e-3);
    assert_eq!(
        scenario::classify_launch(&config, OrbitScene::Satellite, 400.0, 7.67),
        OrbitRegime::Circular
    );

    let launch = scenario::satellite_launch(&config, 400.0, 7.67).expect("launch");
    assert_eq!(launch.position.y, 0.0);
    assert_eq!(launch.velocity.x, 0.0);
    let mut session = scenario::orbital_session(&config, OrbitScene::Satellite);
    let id = session.launch(launch);
    assert_eq!(session.get(id).map(|t| t.regime), Some(OrbitRegime::Circular));
}

#[test]
fn invalid_launch_values_are_rejected() {
    let config = KernelConfig::default();
    assert_eq!(
        scenario::cannon_launch(&config, -1.0),
        Err(ScenarioError::InvalidSpeed(-1.0))
    );
    assert_eq!(
        scenario::satellite_launch(&config, -5.0, 7.0),
        Err(ScenarioError::InvalidAltitude(-5.0))
    );
    assert_eq!(
        scenario::projectile_launch(95.0, 100.0),
        Err(ScenarioError::InvalidAngle(95.0))
    );
}

#[test]
fn presets_are_found_case_insensitively() {
    let presets = config::default_presets();
    let escape = scenario::find_preset(&presets, "ESCAPE").expect("escape preset");
    assert_eq!(escape.speed_km_s, 12.0);
    assert_eq!(
        scenario::find_preset(&presets, "warp").map(|p| p.name.clone()),
        Err(ScenarioError::UnknownPreset("warp".to_string()))
    );
}

#[test]
fn projectile_scene_lands_near_the_closed_form_range() {
    let config = KernelConfig::default();
    let mut session = scenario::projectile_session(&config);
    let id = session.launch(scenario::projectile_launch(45.0, 100.0).expect("launch"));
    let ran = session.run(10_000);
    assert!(ran < 10_000);
    let tracked = session.get(id).expect("projectile");
    assert!(!tracked.body.is_active);
    let landing = tracked.path.latest().expect("landing");
    let range = ballistics::range(45.0, 100.0, config.projectile.gravity_ft_s2);
    assert!((landing.x - range).abs() < 3.0, "landed at {} vs {}", landing.x, range);
}

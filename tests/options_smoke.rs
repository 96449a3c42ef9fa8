use polybounce_engine::{Simulation, SimulationCore, SimulationOptions};

#[test]
fn options_json_smoke_builds_a_running_simulation() {
    let json = r#"{
        "world_center": {"x": 400.0, "y": 300.0},
        "world_radius": 280.0,
        "initial_sides": 5,
        "body_position": {"x": 400.0, "y": 260.0},
        "body_velocity": {"x": 120.0, "y": -40.0},
        "body_radius": 36.0,
        "max_depth": 3,
        "seed": 2024
    }"#;

    let mut sim = Simulation::with_options(json.to_string())
        .unwrap_or_else(|_| panic!("options should parse"));
    assert_eq!(sim.world_sides(), 5);
    assert_eq!(sim.max_depth(), 3);
    assert_eq!(sim.world_vertices().len(), 10);

    for _ in 0..1200 {
        sim.tick(0.016);
    }
    assert!(sim.world_sides() >= 5);
    assert_eq!(sim.active_tiers(), 2);
    assert_eq!(sim.inner_vertices().len() % 2, 0);
    assert!(!sim.deep_vertices().is_empty());

    // Echoed options parse back to the same configuration
    let echoed = SimulationOptions::from_json(&sim.options_json()).expect("echo parses");
    assert_eq!(echoed.seed, 2024);
    assert_eq!(echoed.sides(), 5);
}

#[test]
fn invalid_options_fail_before_any_tick() {
    let err = SimulationCore::from_options_json(r#"{"body_radius": -3.0}"#)
        .err()
        .expect("negative radius must be rejected");
    assert!(err.to_string().contains("body_radius"));
}

#[test]
fn snapshot_json_is_valid_json() {
    let mut sim = Simulation::new();
    sim.tick(0.016);
    let value: serde_json::Value = serde_json::from_str(&sim.snapshot_json()).expect("json");
    assert_eq!(value["tick"], 1);
    assert_eq!(value["world"]["sides"], 3);
    assert!(value["inner"].is_object());
}

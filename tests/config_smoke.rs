use rodspin_engine::{SimConfig, WorldCore};

#[test]
fn config_smoke_parses_and_applies() {
    let json = r#"{
        "force": 3.0,
        "mass": 2.0,
        "length": 1.5,
        "substeps": 4
    }"#;

    let cfg = SimConfig::from_json(json).expect("config should parse");
    assert_eq!(cfg.force, 3.0);
    assert_eq!(cfg.substeps, 4);

    let mut world = WorldCore::new();
    world.load_config_json(json).expect("config should apply");
    assert_eq!(world.force(), 3.0);
    assert_eq!(world.mass(), 2.0);
    assert_eq!(world.length(), 1.5);
    assert_eq!(world.substeps(), 4);

    // Width invariant holds through a config load
    assert!((world.rod().width - 0.15).abs() < 1e-9);

    // Snapshot reflects the applied values
    let snapshot = SimConfig::from_json(&world.config_json()).unwrap();
    assert_eq!(snapshot, cfg);
}

#[test]
fn config_smoke_rejects_garbage() {
    assert!(SimConfig::from_json("{").is_err());
    assert!(SimConfig::from_json("[]").is_err());
    assert!(WorldCore::new().load_config_json("nope").is_err());
}

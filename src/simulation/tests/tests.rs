use super::*;
use crate::physics::{Rod, Vec2};
use crate::render::Camera;

const EPS: f64 = 1e-9;

#[test]
fn vec2_ops() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(-1.0, 2.0);

    assert_eq!(a.length(), 5.0);
    assert_eq!(a.length_squared(), 25.0);
    assert_eq!(a.dot(b), 5.0);
    assert_eq!(a + b, Vec2::new(2.0, 6.0));
    assert_eq!(a - b, Vec2::new(4.0, 2.0));
    assert_eq!(b * 2.0, Vec2::new(-2.0, 4.0));
}

#[test]
fn first_step_from_rest_pushes_straight_up() {
    let mut rod = Rod::new(1.0, 1.0, 1.0, 0.1);

    rod.step(0.01);

    // theta = 0: the force points along +y exactly
    assert_eq!(rod.vel.x, 0.0);
    assert!(rod.vel.y > 0.0);
    assert!(rod.omega > 0.0);
    // (F*L/2) / (m*L^2/12)
    assert!((rod.alpha - 6.0).abs() < EPS);
}

#[test]
fn reset_zeroes_kinematics_and_keeps_parameters() {
    let mut rod = Rod::new(2.0, 3.0, 4.0, 0.1);
    for _ in 0..100 {
        rod.step(0.01);
    }
    assert!(rod.speed() > 0.0);

    rod.reset();

    assert_eq!(rod.pos, Vec2::zero());
    assert_eq!(rod.vel, Vec2::zero());
    assert_eq!(rod.accel, Vec2::zero());
    assert_eq!(rod.theta, 0.0);
    assert_eq!(rod.omega, 0.0);
    assert_eq!(rod.alpha, 0.0);
    assert_eq!(rod.force, 2.0);
    assert_eq!(rod.mass, 3.0);
    assert_eq!(rod.length, 4.0);
}

#[test]
fn width_tracks_length() {
    let rod = Rod::new(1.0, 1.0, 2.0, 0.1);
    assert!((rod.width - 0.2).abs() < EPS);

    let mut world = WorldCore::new();
    world.set_length(5.0);
    assert!((world.rod().width - 0.5).abs() < EPS);

    world.reset();
    assert!((world.rod().width - 0.5).abs() < EPS);
}

#[test]
fn expected_speed_is_invariant_under_force_mass_scaling() {
    let base = Rod::new(1.0, 1.0, 1.0, 0.1);
    let scaled = Rod::new(4.0, 4.0, 1.0, 0.1);

    assert!((base.expected_speed() - scaled.expected_speed()).abs() < EPS);
    // sqrt(pi * F * L / (12 m)) for the defaults
    let expected = (std::f64::consts::PI / 12.0).sqrt();
    assert!((base.expected_speed() - expected).abs() < EPS);
}

#[test]
fn camera_scale_respects_both_caps() {
    let mut camera = Camera::new(1.0);

    camera.set_scale(1000.0, 1.0);
    assert_eq!(camera.ppm, 300.0);

    // Short viewport wins
    camera.set_scale(400.0, 1.0);
    assert_eq!(camera.ppm, 200.0);

    // Long rod wins
    camera.set_scale(1000.0, 2.0);
    assert_eq!(camera.ppm, 150.0);

    for i in 1..=100 {
        let length = i as f64 * 0.1;
        camera.set_scale(600.0, length);
        assert!(camera.ppm > 0.0);
        assert!(camera.ppm <= 300.0);
        assert!(camera.ppm <= 300.0 / length + EPS);
    }
}

#[test]
fn camera_projects_focus_to_viewport_center() {
    let mut camera = Camera::new(1.0);
    camera.set_scale(600.0, 1.0);
    camera.set_pos(3.7, -1.2, 800.0, 600.0);

    assert_eq!(camera.focus(), (3.7, -1.2));
    let (sx, sy) = camera.to_screen(3.7, -1.2);
    assert!((sx - 400.0).abs() < EPS);
    assert!((sy - 300.0).abs() < EPS);

    // One meter right of the focus lands ppm pixels right of center
    let (sx, sy) = camera.to_screen(4.7, -1.2);
    assert!((sx - 700.0).abs() < EPS);
    assert!((sy - 300.0).abs() < EPS);

    // One meter up lands ppm pixels up (screen y is inverted)
    let (sx, sy) = camera.to_screen(3.7, -0.2);
    assert!((sx - 400.0).abs() < EPS);
    assert!((sy - 0.0).abs() < EPS);
}

#[test]
fn grid_phase_stays_within_one_cell() {
    let mut camera = Camera::new(1.0);
    camera.set_scale(600.0, 1.0);

    for i in -50..50 {
        let x = i as f64 * 0.37;
        let y = i as f64 * -0.91;
        camera.set_pos(x, y, 800.0, 600.0);
        let (cell, x_phase, y_phase) = camera.grid_layout();
        assert!(cell > 0.0);
        assert!(-cell < x_phase && x_phase <= 0.0);
        assert!(-cell < y_phase && y_phase <= 0.0);
    }
}

#[test]
fn world_starts_stopped_and_unpaused() {
    let world = WorldCore::new();
    assert!(world.is_stopped());
    assert!(!world.is_paused());
    assert_eq!(world.t(), 0.0);
    assert_eq!(world.substeps(), 1);
}

#[test]
fn one_second_scenario_matches_closed_form() {
    // force = 1 N, mass = 1 kg, length = 1 m, substeps = 1
    let mut world = WorldCore::new();
    for _ in 0..60 {
        world.step_frame();
    }

    assert!((world.t() - 1.0).abs() < EPS);
    assert_eq!(world.frame(), 60);

    let rod = world.rod();
    assert!((rod.alpha - 6.0).abs() < EPS);
    assert!((rod.omega - 6.0).abs() < EPS);

    // Closed form: theta = alpha * t^2 / 2 = 3 rad. The discrete
    // semi-implicit sum is alpha*dt^2*n(n+1)/2 = 3.05 for n = 60.
    assert!((rod.theta - 3.05).abs() < EPS);
    assert!((rod.theta - 3.0).abs() < 0.1);
}

#[test]
fn more_substeps_reduce_integration_error() {
    let run = |substeps: u32| -> f64 {
        let mut world = WorldCore::new();
        world.set_substeps(substeps);
        for _ in 0..120 {
            world.step_frame();
        }
        world.rod().theta
    };

    // Two seconds of constant alpha = 6: closed form theta = 12.
    let exact = 12.0;
    let err1 = (run(1) - exact).abs();
    let err4 = (run(4) - exact).abs();
    let err16 = (run(16) - exact).abs();

    assert!(err4 < err1);
    assert!(err16 < err4);
}

#[test]
fn stop_start_preserves_state_exactly() {
    let mut world = WorldCore::new();
    world.start();
    for _ in 0..30 {
        world.step_frame();
    }

    world.stop();
    assert!(world.is_stopped());
    let t = world.t();
    let pos = world.rod().pos;
    let vel = world.rod().vel;
    let theta = world.rod().theta;
    let omega = world.rod().omega;

    world.start();
    assert!(!world.is_stopped());
    assert_eq!(world.t(), t);
    assert_eq!(world.rod().pos, pos);
    assert_eq!(world.rod().vel, vel);
    assert_eq!(world.rod().theta, theta);
    assert_eq!(world.rod().omega, omega);

    world.step_frame();
    assert!(world.t() > t);
}

#[test]
fn edit_protocol_pauses_and_resets() {
    let mut world = WorldCore::new();
    world.start();
    for _ in 0..10 {
        world.step_frame();
    }
    assert!(world.t() > 0.0);

    world.begin_edit();
    assert!(world.is_paused());
    assert_eq!(world.t(), 0.0);
    assert_eq!(world.rod().vel, Vec2::zero());
    assert_eq!(world.rod().theta, 0.0);

    world.set_force(5.0);
    world.end_edit();
    assert!(!world.is_paused());
    assert_eq!(world.t(), 0.0);
    assert_eq!(world.force(), 5.0);
}

#[test]
fn settings_clamp_to_control_ranges() {
    let mut world = WorldCore::new();

    world.set_force(100.0);
    assert_eq!(world.force(), 10.0);
    world.set_force(0.0);
    assert_eq!(world.force(), 0.1);
    world.set_force(f64::NAN);
    assert_eq!(world.force(), 0.1);

    world.set_mass(0.0);
    assert_eq!(world.mass(), 0.5);
    world.set_mass(3.3);
    assert_eq!(world.mass(), 3.3);

    world.set_length(-4.0);
    assert_eq!(world.length(), 0.1);
    assert!((world.rod().width - 0.01).abs() < EPS);

    world.set_substeps(0);
    assert_eq!(world.substeps(), 1);
    world.set_substeps(99);
    assert_eq!(world.substeps(), 20);
}

#[test]
fn config_loads_and_round_trips() {
    let mut world = WorldCore::new();
    world
        .load_config_json(r#"{"force":2.5,"mass":4.0,"length":3.0,"substeps":8}"#)
        .unwrap();

    assert_eq!(world.force(), 2.5);
    assert_eq!(world.mass(), 4.0);
    assert_eq!(world.length(), 3.0);
    assert_eq!(world.substeps(), 8);
    assert_eq!(world.t(), 0.0);

    let snapshot = SimConfig::from_json(&world.config_json()).unwrap();
    assert_eq!(
        snapshot,
        SimConfig { force: 2.5, mass: 4.0, length: 3.0, substeps: 8 }
    );
}

#[test]
fn config_missing_fields_fall_back_to_defaults() {
    let cfg = SimConfig::from_json(r#"{"force":2.0}"#).unwrap();
    assert_eq!(cfg.force, 2.0);
    assert_eq!(cfg.mass, 1.0);
    assert_eq!(cfg.length, 1.0);
    assert_eq!(cfg.substeps, 1);
}

#[test]
fn config_values_pass_through_boundary_clamps() {
    let mut world = WorldCore::new();
    world
        .load_config_json(r#"{"force":1000.0,"substeps":50}"#)
        .unwrap();
    assert_eq!(world.force(), 10.0);
    assert_eq!(world.substeps(), 20);
}

#[test]
fn config_rejects_malformed_json() {
    let err = SimConfig::from_json("not json").unwrap_err();
    assert!(err.contains("config"));
}

use rodspin_engine::{WorldCore, FRAME_DT};

/// Published scenario: force = 1 N, mass = 1 kg, length = 1 m, one
/// substep, 60 ticks of 1/60 s. Constant angular acceleration 6 rad/s^2
/// gives omega ~ 6 rad/s and theta ~ 3 rad after one second.
#[test]
fn one_second_spin_up_smoke() {
    let mut world = WorldCore::new();
    world.start();

    for _ in 0..60 {
        world.step_frame();
    }

    assert!((world.t() - 60.0 * FRAME_DT).abs() < 1e-9);

    let rod = world.rod();
    assert!((rod.omega - 6.0).abs() < 1e-9);
    assert!((rod.theta - 3.0).abs() < 0.1);
    assert!(rod.speed() > 0.0);

    // sqrt(pi * 1 * 1 / 12)
    assert!((rod.expected_speed() - 0.511663).abs() < 1e-6);
}

#[test]
fn stop_and_resume_is_seamless() {
    let mut world = WorldCore::new();
    world.start();
    for _ in 0..45 {
        world.step_frame();
    }

    world.stop();
    let t = world.t();
    let theta = world.rod().theta;
    world.start();

    assert_eq!(world.t(), t);
    assert_eq!(world.rod().theta, theta);

    world.step_frame();
    assert!(world.rod().theta > theta);
}

#[test]
fn substep_ladder_converges_on_closed_form() {
    let final_theta = |substeps: u32| -> f64 {
        let mut world = WorldCore::new();
        world.set_substeps(substeps);
        for _ in 0..180 {
            world.step_frame();
        }
        world.rod().theta
    };

    // Three seconds at alpha = 6 rad/s^2: theta = alpha * t^2 / 2 = 27.
    let exact = 27.0;
    let mut prev_err = f64::INFINITY;
    for substeps in [1, 2, 5, 10, 20] {
        let err = (final_theta(substeps) - exact).abs();
        assert!(err < prev_err, "error should shrink at {substeps} substeps");
        prev_err = err;
    }
    assert!(prev_err < 0.01);
}

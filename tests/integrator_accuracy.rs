//! Accuracy tests for the spring integrator
//!
//! Checks the integrator against closed-form solutions of the damped
//! oscillator, energy behavior with and without friction, and the expected
//! fourth-order convergence.

use approx::assert_relative_eq;
use springdrift::{Scalar, SpringIntegrator, SpringParameters, Vector2};

const DT: Scalar = 1.0 / 60.0;

/// Mechanical energy of a unit mass on a spring: kinetic plus potential
fn energy(spring: Scalar, position: Scalar, velocity: Scalar) -> Scalar {
    0.5 * velocity * velocity + 0.5 * spring * position * position
}

/// Advance `steps` fixed steps and return the final state
fn simulate(
    integrator: &SpringIntegrator,
    position: Scalar,
    velocity: Scalar,
    dt: Scalar,
    steps: usize,
) -> (Scalar, Scalar) {
    let (mut position, mut velocity) = (position, velocity);
    for _ in 0..steps {
        let delta = integrator.integrate(position, velocity, dt);
        position += delta.position;
        velocity += delta.velocity;
    }
    (position, velocity)
}

#[test]
fn test_rest_state_for_any_parameters() {
    for (spring, friction) in [(250.0, 28.0), (0.0, 0.0), (1e4, 1.0), (3.0, 100.0)] {
        let integrator = SpringIntegrator::from_constants(spring, friction);
        assert_eq!(integrator.acceleration(0.0, 0.0), 0.0);

        for dt in [0.0, 1e-4, DT, 0.25] {
            let delta = integrator.integrate(0.0, 0.0, dt);
            assert_eq!(delta.into_tuple(), (0.0, 0.0));
        }
    }
}

#[test]
fn test_zero_time_step_for_any_state() {
    let integrator = SpringIntegrator::default();
    for (position, velocity) in [(1.0, 0.0), (-3.5, 12.0), (1e6, -1e6), (0.0, 1.0)] {
        let delta = integrator.integrate(position, velocity, 0.0);
        assert_eq!(delta.position, 0.0);
        assert_eq!(delta.velocity, 0.0);
    }
}

#[test]
fn test_first_frame_from_unit_displacement() {
    let integrator = SpringIntegrator::from_constants(250.0, 28.0);
    let delta = integrator.integrate::<Scalar>(1.0, 0.0, DT);

    assert_relative_eq!(delta.position, -0.029_750_19, max_relative = 1e-6);
    assert_relative_eq!(delta.velocity, -3.291_062, max_relative = 1e-6);
}

#[test]
fn test_undamped_energy_conservation() {
    let spring = 250.0;
    let integrator = SpringIntegrator::from_constants(spring, 0.0);

    let (mut position, mut velocity): (Scalar, Scalar) = (1.0, 0.0);
    let initial_energy = energy(spring, position, velocity);
    let mut max_energy_error = 0.0f64;

    for _ in 0..600 {
        let delta = integrator.integrate(position, velocity, DT);
        position += delta.position;
        velocity += delta.velocity;

        let energy_error = ((energy(spring, position, velocity) - initial_energy)
            / initial_energy)
            .abs();
        max_energy_error = max_energy_error.max(energy_error);
    }

    println!("RK4 energy error over 10s: {:.6}%", max_energy_error * 100.0);

    assert!(
        max_energy_error < 0.01,
        "Energy drift too large: {:.4}%",
        max_energy_error * 100.0
    );
}

#[test]
fn test_damped_spring_settles() {
    let parameters = SpringParameters::new(250.0, 28.0);
    let integrator = SpringIntegrator::new(parameters);

    let (mut position, mut velocity): (Scalar, Scalar) = (1.0, 0.0);
    let mut previous_energy = energy(parameters.spring, position, velocity);

    for step in 0..300 {
        let delta = integrator.integrate(position, velocity, DT);
        position += delta.position;
        velocity += delta.velocity;

        // Friction only ever removes energy
        let current_energy = energy(parameters.spring, position, velocity);
        assert!(
            current_energy <= previous_energy,
            "Energy grew at step {step}: {previous_energy} -> {current_energy}"
        );
        previous_energy = current_energy;
    }

    assert!(
        position.abs() + velocity.abs() < 1e-6,
        "Spring still moving after 5s: position {position}, velocity {velocity}"
    );
}

#[test]
fn test_matches_undamped_closed_form() {
    let spring: Scalar = 250.0;
    let omega = spring.sqrt();
    let integrator = SpringIntegrator::from_constants(spring, 0.0);

    let (position, velocity) = simulate(&integrator, 1.0, 0.0, DT, 60);

    // x(t) = cos(ωt), v(t) = -ω sin(ωt)
    assert!((position - omega.cos()).abs() < 1e-3);
    assert!((velocity + omega * omega.sin()).abs() < 2e-2);
}

#[test]
fn test_matches_underdamped_closed_form() {
    let parameters = SpringParameters::new(250.0, 28.0);
    let integrator = SpringIntegrator::new(parameters);

    let omega = parameters.natural_frequency();
    let zeta = parameters.damping_ratio();
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let t = 0.5;

    // x(t) = e^(-ζωt) (cos(ω_d t) + ζω/ω_d sin(ω_d t)) for x(0) = 1, v(0) = 0
    let exact = (-zeta * omega * t).exp()
        * ((omega_d * t).cos() + zeta * omega / omega_d * (omega_d * t).sin());

    let (position, _) = simulate(&integrator, 1.0, 0.0, DT, 30);
    assert!(
        (position - exact).abs() < 1e-5,
        "position {position} vs exact {exact}"
    );
}

#[test]
fn test_fourth_order_convergence_damped() {
    let integrator = SpringIntegrator::default();
    let total_time = 1.0;

    let reference_steps = 20_000;
    let (reference, _) = simulate(
        &integrator,
        1.0,
        0.0,
        total_time / reference_steps as Scalar,
        reference_steps,
    );

    let errors: Vec<Scalar> = [60, 120, 240]
        .iter()
        .map(|&steps| {
            let (position, _) =
                simulate(&integrator, 1.0, 0.0, total_time / steps as Scalar, steps);
            (position - reference).abs()
        })
        .collect();

    for pair in errors.windows(2) {
        let ratio = pair[0] / pair[1];
        println!("RK4 error ratio on halving dt: {ratio:.2}");
        assert!(
            ratio > 12.0 && ratio < 24.0,
            "Unexpected convergence ratio: {ratio}"
        );
    }
}

#[test]
fn test_fourth_order_convergence_undamped() {
    let spring: Scalar = 250.0;
    let omega = spring.sqrt();
    let integrator = SpringIntegrator::from_constants(spring, 0.0);

    let reference_steps = 20_000;
    let reference = simulate(
        &integrator,
        1.0,
        0.0,
        1.0 / reference_steps as Scalar,
        reference_steps,
    );

    // Phase-space distance keeps the error from passing through zero
    let error = |steps: usize| {
        let (position, velocity) = simulate(&integrator, 1.0, 0.0, 1.0 / steps as Scalar, steps);
        ((position - reference.0).powi(2) + ((velocity - reference.1) / omega).powi(2)).sqrt()
    };

    let errors = [error(60), error(120), error(240)];
    for pair in errors.windows(2) {
        let order = (pair[0] / pair[1]).log2();
        assert!(
            (order - 4.0).abs() < 0.3,
            "Unexpected convergence order: {order}"
        );
    }
}

#[test]
fn test_vector_state_matches_scalar_axes() {
    let integrator = SpringIntegrator::default();

    let (mut position, mut velocity) = (Vector2::new(1.0, -0.5), Vector2::new(0.0, 4.0));
    let (x, vx) = simulate(&integrator, 1.0, 0.0, DT, 90);
    let (y, vy) = simulate(&integrator, -0.5, 4.0, DT, 90);

    for _ in 0..90 {
        let delta = integrator.integrate(position, velocity, DT);
        position += delta.position;
        velocity += delta.velocity;
    }

    assert_eq!(position, Vector2::new(x, y));
    assert_eq!(velocity, Vector2::new(vx, vy));
}

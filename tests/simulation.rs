//! End-to-end scenarios driving the force model and simulator together.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use aerosim::{
    air_density, compute_drag, compute_lift, compute_thrust, compute_weight, AircraftParams,
    ParamsUpdate, Simulator,
};

/// The reference cruise condition: 1000 m, 50 m/s, 3° angle of attack.
fn reference_params() -> AircraftParams {
    AircraftParams::default().update(ParamsUpdate {
        mass_kg: Some(1000.0),
        wing_area_m2: Some(20.0),
        aspect_ratio: Some(8.0),
        cl_alpha: Some(5.5),
        cd0: Some(0.025),
        oswald_efficiency: Some(0.8),
        max_thrust_n: Some(20000.0),
        thrust_ratio: Some(0.9),
        altitude_m: Some(1000.0),
        airspeed_m_s: Some(50.0),
        angle_of_attack_deg: Some(3.0),
    })
}

#[test]
fn reference_condition_reproduces_documented_formulas() {
    let params = reference_params();

    let rho = air_density(1000.0);
    let q = 0.5 * rho * 50.0 * 50.0;
    let cl = 5.5 * 3.0_f64.to_radians();
    let cd = 0.025 + cl * cl / (PI * 0.8 * 8.0);

    assert_relative_eq!(compute_lift(&params), q * 20.0 * cl, epsilon = 1e-9);
    assert_relative_eq!(compute_drag(&params), q * 20.0 * cd, epsilon = 1e-9);
    assert_relative_eq!(compute_thrust(&params), 18000.0);
    assert_relative_eq!(compute_weight(&params), 9810.0);

    // Pin the actual numbers so a formula regression cannot hide behind
    // the shared helper.
    assert_relative_eq!(rho, 1.1116, epsilon = 1e-3);
    assert_relative_eq!(compute_lift(&params), 8003.0, epsilon = 1.0);
    assert_relative_eq!(compute_drag(&params), 809.3, epsilon = 1.0);
}

#[test]
fn reference_condition_single_step_deltas() {
    let params = reference_params();
    let dt = 0.1;
    let mut sim = Simulator::new(params, dt);

    let lift = compute_lift(&params);
    let drag = compute_drag(&params);
    let thrust = compute_thrust(&params);
    let weight = compute_weight(&params);

    let state = sim.step();

    let expected_airspeed = 50.0 + (thrust - drag) / 1000.0 * dt;
    let expected_altitude = 1000.0 + expected_airspeed * (lift - weight) / weight * dt;

    assert_relative_eq!(state.elapsed_time_s, 0.1);
    assert_relative_eq!(state.airspeed_m_s, expected_airspeed, epsilon = 1e-9);
    assert_relative_eq!(state.altitude_m, expected_altitude, epsilon = 1e-9);
}

#[test]
fn full_throttle_cruise_accelerates_and_climbs() {
    // Default params produce more thrust than drag and (initially) less
    // lift than weight; after the speed builds up the lift excess flips
    // and the aircraft climbs.
    let mut sim = Simulator::new(AircraftParams::default(), 0.1);

    let first = sim.step();
    assert!(first.thrust_n > first.drag_n);

    let mut last = first;
    for _ in 0..300 {
        last = sim.step();
    }
    assert!(last.airspeed_m_s > first.airspeed_m_s);
    assert!(last.lift_n > last.weight_n);
    assert!(last.altitude_m > 0.0);
}

#[test]
fn glider_never_produces_thrust() {
    let mut sim = Simulator::new(AircraftParams::glider(), 0.1);

    let mut previous_airspeed = AircraftParams::glider().airspeed_m_s;
    for _ in 0..500 {
        let state = sim.step();
        assert_eq!(state.thrust_n, 0.0);
        // With zero thrust the axial equation is pure drag deceleration.
        assert!(state.airspeed_m_s <= previous_airspeed);
        assert!(state.airspeed_m_s >= 0.0);
        previous_airspeed = state.airspeed_m_s;
    }
}

#[test]
fn throttle_cut_mid_flight_starts_deceleration() {
    let mut sim = Simulator::new(AircraftParams::default(), 0.1);
    for _ in 0..100 {
        sim.step();
    }
    let before = sim.step();

    sim.update_params(ParamsUpdate {
        thrust_ratio: Some(0.0),
        ..ParamsUpdate::default()
    });

    let after = sim.step();
    assert_eq!(after.thrust_n, 0.0);
    assert!(after.acceleration_m_s2 < 0.0);
    assert!(after.airspeed_m_s < before.airspeed_m_s);
    // Trajectory history survives the parameter change.
    assert!(after.elapsed_time_s > before.elapsed_time_s);
}

#[test]
fn degenerate_config_surfaces_non_finite_values() {
    // Zero Oswald efficiency is a caller error; the model neither panics
    // nor clamps, it just reports non-finite drag.
    let params = AircraftParams::default().update(ParamsUpdate {
        oswald_efficiency: Some(0.0),
        ..ParamsUpdate::default()
    });
    let mut sim = Simulator::new(params, 0.1);

    let state = sim.step();
    assert!(!state.drag_n.is_finite());
    assert!(state.lift_n.is_finite());
}

//! Aerodynamic force model.
//!
//! Lift and drag use the classic dynamic-pressure form with a linear lift
//! curve and a finite-wing drag polar:
//!
//! ```text
//! L  = ½ ρ V² S Cl        Cl = cl_alpha · α
//! D  = ½ ρ V² S Cd        Cd = Cd0 + Cl² / (π e AR)
//! ```
//!
//! Every function here is pure and deterministic. Nothing validates the
//! parameters: a degenerate configuration (zero mass, non-positive
//! `oswald_efficiency · aspect_ratio`) yields inf/NaN results that callers
//! can detect with the standard finiteness checks.

use std::f64::consts::PI;

use crate::components::AircraftParams;
use crate::resources::air_density;
use crate::utils::constants::GRAVITY;

/// Lift coefficient from the linear lift curve (no stall).
pub fn lift_coefficient(params: &AircraftParams) -> f64 {
    params.cl_alpha * params.angle_of_attack_deg.to_radians()
}

/// Total drag coefficient: parasitic plus induced.
///
/// The induced term divides by `π · e · AR`; a non-positive product is a
/// caller-configuration error and evaluates to inf/NaN rather than being
/// special-cased.
pub fn drag_coefficient(params: &AircraftParams) -> f64 {
    let cl = lift_coefficient(params);
    params.cd0 + cl * cl / (PI * params.oswald_efficiency * params.aspect_ratio)
}

/// Dynamic pressure q = ½ ρ V² (Pa).
pub fn dynamic_pressure(density: f64, velocity: f64) -> f64 {
    0.5 * density * velocity * velocity
}

/// Lift force (N) at the flight condition in `params`.
pub fn compute_lift(params: &AircraftParams) -> f64 {
    let q = dynamic_pressure(air_density(params.altitude_m), params.airspeed_m_s);
    q * params.wing_area_m2 * lift_coefficient(params)
}

/// Drag force (N) at the flight condition in `params`.
pub fn compute_drag(params: &AircraftParams) -> f64 {
    let q = dynamic_pressure(air_density(params.altitude_m), params.airspeed_m_s);
    q * params.wing_area_m2 * drag_coefficient(params)
}

/// Thrust (N) from the throttle setting, clamped to [0, 1].
pub fn compute_thrust(params: &AircraftParams) -> f64 {
    params.max_thrust_n * params.thrust_ratio.clamp(0.0, 1.0)
}

/// Weight force (N).
pub fn compute_weight(params: &AircraftParams) -> f64 {
    params.mass_kg * GRAVITY
}

/// Thrust required for steady level flight (T = D at L = W).
///
/// Independent of `max_thrust_n` and `thrust_ratio`.
pub fn thrust_required(params: &AircraftParams) -> f64 {
    compute_drag(params)
}

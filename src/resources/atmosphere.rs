//! ISA troposphere atmosphere model.
//!
//! All functions are pure and total over finite altitudes. No ceiling is
//! enforced: above the troposphere (or below sea level) the same formulas
//! evaluate, trading physical accuracy for a closed, branch-free model.

use crate::utils::constants::{
    AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP,
    RHO_SEA_LEVEL,
};

/// Exponent of the barometric formula, g / (R·L).
const BAROMETRIC_EXPONENT: f64 = GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE);

/// Static temperature (K) at the given altitude, from the linear
/// troposphere lapse rate.
pub fn temperature(altitude_m: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP - ISA_LAPSE_RATE * altitude_m
}

/// Air density (kg/m³) at the given altitude.
///
/// Combines the barometric pressure relation with the ideal gas law, which
/// reduces to `rho0 * (T/T0)^(g/(R·L) - 1)`. Strictly decreasing with
/// altitude inside the troposphere; `air_density(0.0)` is exactly
/// [`RHO_SEA_LEVEL`].
pub fn air_density(altitude_m: f64) -> f64 {
    let temperature_ratio = temperature(altitude_m) / ISA_SEA_LEVEL_TEMP;
    RHO_SEA_LEVEL * temperature_ratio.powf(BAROMETRIC_EXPONENT - 1.0)
}

/// Static pressure (Pa) at the given altitude, `p0 * (T/T0)^(g/(R·L))`.
pub fn pressure(altitude_m: f64) -> f64 {
    let temperature_ratio = temperature(altitude_m) / ISA_SEA_LEVEL_TEMP;
    ISA_SEA_LEVEL_PRESSURE * temperature_ratio.powf(BAROMETRIC_EXPONENT)
}

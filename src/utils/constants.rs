pub const GRAVITY: f64 = 9.81; // m/s^2
pub const RHO_SEA_LEVEL: f64 = 1.225; // kg/m^3 at 15°C
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = 0.0065; // K/m (troposphere)
pub const AIR_GAS_CONSTANT: f64 = 287.05; // J/(kg·K)

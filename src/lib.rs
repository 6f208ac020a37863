pub mod components;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{AircraftParams, ConfigError, FlightState, ParamsUpdate};
pub use resources::{air_density, pressure, temperature};
pub use systems::{
    compute_drag, compute_lift, compute_thrust, compute_weight, drag_coefficient,
    dynamic_pressure, lift_coefficient, thrust_required, Simulator,
};

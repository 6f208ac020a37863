mod loader;
mod params;
mod state;

pub use loader::ConfigError;
pub use params::{AircraftParams, ParamsUpdate};
pub use state::FlightState;

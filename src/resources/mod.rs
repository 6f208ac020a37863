mod atmosphere;

pub use atmosphere::{air_density, pressure, temperature};

use serde::{Deserialize, Serialize};

/// Snapshot of the simulated aircraft at the end of a time step.
///
/// The force and acceleration fields are the values acting at the *start*
/// of the interval, i.e. the ones that produced this step's altitude and
/// airspeed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Altitude (m).
    pub altitude_m: f64,
    /// True airspeed (m/s).
    pub airspeed_m_s: f64,
    /// Elapsed simulation time (s).
    pub elapsed_time_s: f64,
    /// Lift force (N).
    pub lift_n: f64,
    /// Drag force (N).
    pub drag_n: f64,
    /// Thrust force (N).
    pub thrust_n: f64,
    /// Weight force (N).
    pub weight_n: f64,
    /// Net acceleration along the flight path (m/s²).
    pub acceleration_m_s2: f64,
}

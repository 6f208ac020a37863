use tracing::warn;

use crate::components::{AircraftParams, FlightState, ParamsUpdate};
use crate::systems::forces::{compute_drag, compute_lift, compute_thrust, compute_weight};

/// Steps a longitudinal point-mass model forward in time.
///
/// The simulator owns its trajectory state (altitude, airspeed, elapsed
/// time) and a current set of [`AircraftParams`]; the parameters can be
/// swapped or patched between steps without resetting the trajectory, e.g.
/// to model a throttle change mid-flight.
///
/// Longitudinal dynamics are deliberately simple: thrust minus drag
/// accelerates the aircraft along the flight path, and the excess of lift
/// over weight drives a climb/descent rate. There is no pitch dynamic; the
/// angle of attack is whatever the current parameters say it is.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: AircraftParams,
    altitude_m: f64,
    airspeed_m_s: f64,
    elapsed_time_s: f64,
    dt_s: f64,
}

impl Simulator {
    /// Creates a simulator with a fixed timestep (s). The trajectory
    /// starts from the altitude and airspeed in `params`.
    pub fn new(params: AircraftParams, dt_s: f64) -> Self {
        if params.mass_kg <= 0.0 {
            warn!(
                "Non-positive mass {} kg; accelerations will be non-finite",
                params.mass_kg
            );
        }

        Self {
            altitude_m: params.altitude_m,
            airspeed_m_s: params.airspeed_m_s,
            elapsed_time_s: 0.0,
            params,
            dt_s,
        }
    }

    /// Advances the state by one timestep and returns a snapshot.
    ///
    /// Forces are evaluated at the pre-update condition; the returned
    /// snapshot carries those forces next to the post-update altitude,
    /// airspeed and elapsed time. The update is a forward-Euler step:
    ///
    /// ```text
    /// v'  = max(0, v + (T - D) / m · dt)
    /// h'  = h + v' · (L - W) / W · dt
    /// ```
    pub fn step(&mut self) -> FlightState {
        let current = self.params.update(ParamsUpdate {
            altitude_m: Some(self.altitude_m),
            airspeed_m_s: Some(self.airspeed_m_s),
            ..ParamsUpdate::default()
        });

        let lift = compute_lift(&current);
        let drag = compute_drag(&current);
        let thrust = compute_thrust(&current);
        let weight = compute_weight(&current);

        let acceleration = (thrust - drag) / current.mass_kg;

        // Non-negative floor; a NaN airspeed passes through untouched.
        let next_airspeed = self.airspeed_m_s + acceleration * self.dt_s;
        self.airspeed_m_s = if next_airspeed < 0.0 { 0.0 } else { next_airspeed };

        // Climb rate from the lift excess over weight, scaled by airspeed:
        // lift above weight climbs, below descends, equal holds level.
        let climb_rate = self.airspeed_m_s * (lift - weight) / weight;
        self.altitude_m += climb_rate * self.dt_s;

        self.elapsed_time_s += self.dt_s;

        FlightState {
            altitude_m: self.altitude_m,
            airspeed_m_s: self.airspeed_m_s,
            elapsed_time_s: self.elapsed_time_s,
            lift_n: lift,
            drag_n: drag,
            thrust_n: thrust,
            weight_n: weight,
            acceleration_m_s2: acceleration,
        }
    }

    /// Replaces the current parameter set; trajectory state is kept.
    pub fn set_params(&mut self, params: AircraftParams) {
        self.params = params;
    }

    /// Applies a partial parameter update; trajectory state is kept.
    pub fn update_params(&mut self, update: ParamsUpdate) {
        self.params = self.params.update(update);
    }

    /// The current parameter set.
    pub fn params(&self) -> &AircraftParams {
        &self.params
    }

    /// The fixed timestep (s).
    pub fn dt_s(&self) -> f64 {
        self.dt_s
    }
}

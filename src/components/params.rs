use serde::{Deserialize, Serialize};

/// Aircraft and flight-condition parameters for the longitudinal model.
///
/// The record is a plain value: deriving a modified variant goes through
/// [`AircraftParams::update`], which returns a new record with every field
/// the patch does not name copied from the source. No cross-field
/// validation is performed at this layer; out-of-range values (negative
/// mass, zero Oswald efficiency, throttle outside [0, 1]) are accepted and
/// propagate into the force computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftParams {
    /// Aircraft mass (kg).
    pub mass_kg: f64,
    /// Wing reference area (m²).
    pub wing_area_m2: f64,
    /// Wing aspect ratio, span² / area. Governs induced drag.
    pub aspect_ratio: f64,
    /// Lift-curve slope (per radian). Cl ≈ cl_alpha · α.
    pub cl_alpha: f64,
    /// Zero-lift (parasitic) drag coefficient.
    pub cd0: f64,
    /// Oswald span efficiency factor, typically 0.7–0.9.
    pub oswald_efficiency: f64,
    /// Maximum available thrust (N). Zero for a glider.
    pub max_thrust_n: f64,
    /// Throttle setting; actual thrust = max_thrust_n · thrust_ratio,
    /// with the ratio clamped to [0, 1] by the force model.
    pub thrust_ratio: f64,
    /// Altitude (m). Drives air density.
    pub altitude_m: f64,
    /// True airspeed (m/s).
    pub airspeed_m_s: f64,
    /// Angle of attack (degrees).
    pub angle_of_attack_deg: f64,
}

impl Default for AircraftParams {
    /// A light single-engine aircraft in cruise.
    fn default() -> Self {
        Self {
            mass_kg: 1000.0,
            wing_area_m2: 20.0,
            aspect_ratio: 8.0,
            cl_alpha: 5.5,
            cd0: 0.025,
            oswald_efficiency: 0.82,
            max_thrust_n: 5000.0,
            thrust_ratio: 1.0,
            altitude_m: 0.0,
            airspeed_m_s: 50.0,
            angle_of_attack_deg: 3.0,
        }
    }
}

impl AircraftParams {
    /// Returns a new record with the fields named by `update` replaced and
    /// everything else copied from `self`.
    pub fn update(&self, update: ParamsUpdate) -> Self {
        Self {
            mass_kg: update.mass_kg.unwrap_or(self.mass_kg),
            wing_area_m2: update.wing_area_m2.unwrap_or(self.wing_area_m2),
            aspect_ratio: update.aspect_ratio.unwrap_or(self.aspect_ratio),
            cl_alpha: update.cl_alpha.unwrap_or(self.cl_alpha),
            cd0: update.cd0.unwrap_or(self.cd0),
            oswald_efficiency: update.oswald_efficiency.unwrap_or(self.oswald_efficiency),
            max_thrust_n: update.max_thrust_n.unwrap_or(self.max_thrust_n),
            thrust_ratio: update.thrust_ratio.unwrap_or(self.thrust_ratio),
            altitude_m: update.altitude_m.unwrap_or(self.altitude_m),
            airspeed_m_s: update.airspeed_m_s.unwrap_or(self.airspeed_m_s),
            angle_of_attack_deg: update
                .angle_of_attack_deg
                .unwrap_or(self.angle_of_attack_deg),
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            mass_kg: 1043.0,
            wing_area_m2: 16.2,
            aspect_ratio: 7.47,
            cl_alpha: 5.1,
            cd0: 0.028,
            oswald_efficiency: 0.75,
            max_thrust_n: 2400.0,
            thrust_ratio: 1.0,
            altitude_m: 0.0,
            airspeed_m_s: 56.0,
            angle_of_attack_deg: 2.0,
        }
    }

    pub fn glider() -> Self {
        Self {
            mass_kg: 350.0,
            wing_area_m2: 12.0,
            aspect_ratio: 18.0,
            cl_alpha: 5.8,
            cd0: 0.012,
            oswald_efficiency: 0.95,
            max_thrust_n: 0.0,
            thrust_ratio: 0.0,
            altitude_m: 1000.0,
            airspeed_m_s: 30.0,
            angle_of_attack_deg: 4.0,
        }
    }
}

/// A partial overlay for [`AircraftParams`]: `None` fields keep the source
/// value. Doubles as the deserialization target for parameter files, so a
/// partial YAML file inherits the defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsUpdate {
    pub mass_kg: Option<f64>,
    pub wing_area_m2: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub cl_alpha: Option<f64>,
    pub cd0: Option<f64>,
    pub oswald_efficiency: Option<f64>,
    pub max_thrust_n: Option<f64>,
    pub thrust_ratio: Option<f64>,
    pub altitude_m: Option<f64>,
    pub airspeed_m_s: Option<f64>,
    pub angle_of_attack_deg: Option<f64>,
}

mod forces;
mod simulator;

pub use forces::{
    compute_drag, compute_lift, compute_thrust, compute_weight, drag_coefficient,
    dynamic_pressure, lift_coefficient, thrust_required,
};
pub use simulator::Simulator;

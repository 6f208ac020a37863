use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};

use aerosim::{
    air_density, compute_drag, compute_lift, compute_thrust, compute_weight, thrust_required,
    AircraftParams, ConfigError, ParamsUpdate, Simulator,
};

/// Simulate longitudinal aircraft dynamics with adjustable parameters.
#[derive(Parser, Debug)]
#[command(name = "aerosim", about = "Simulate longitudinal aircraft dynamics", long_about = None)]
struct Cli {
    /// Aircraft parameter file (YAML); flags override file values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Aircraft mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Wing reference area (m²)
    #[arg(long)]
    wing_area: Option<f64>,

    /// Wing aspect ratio
    #[arg(long)]
    aspect_ratio: Option<f64>,

    /// Lift-curve slope (per radian)
    #[arg(long)]
    cl_alpha: Option<f64>,

    /// Zero-lift drag coefficient
    #[arg(long)]
    cd0: Option<f64>,

    /// Oswald efficiency factor
    #[arg(long)]
    oswald: Option<f64>,

    /// Maximum thrust (N)
    #[arg(long)]
    max_thrust: Option<f64>,

    /// Throttle setting, 0–1
    #[arg(long)]
    throttle: Option<f64>,

    /// Starting altitude (m)
    #[arg(long)]
    altitude: Option<f64>,

    /// Starting true airspeed (m/s)
    #[arg(long)]
    speed: Option<f64>,

    /// Angle of attack (degrees)
    #[arg(long)]
    alpha: Option<f64>,

    /// Number of time steps to run
    #[arg(long, default_value_t = 50)]
    steps: usize,

    /// Timestep (s)
    #[arg(long, default_value_t = 0.1)]
    dt: f64,
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => AircraftParams::from_file(path)?,
        None => AircraftParams::default(),
    };
    let params = base.update(ParamsUpdate {
        mass_kg: cli.mass,
        wing_area_m2: cli.wing_area,
        aspect_ratio: cli.aspect_ratio,
        cl_alpha: cli.cl_alpha,
        cd0: cli.cd0,
        oswald_efficiency: cli.oswald,
        max_thrust_n: cli.max_thrust,
        thrust_ratio: cli.throttle,
        altitude_m: cli.altitude,
        airspeed_m_s: cli.speed,
        angle_of_attack_deg: cli.alpha,
    });

    info!("Running {} steps at dt = {} s", cli.steps, cli.dt);

    println!("Flight condition:");
    println!("  altitude     {:10.1} m", params.altitude_m);
    println!("  airspeed     {:10.1} m/s", params.airspeed_m_s);
    println!("  alpha        {:10.1} deg", params.angle_of_attack_deg);
    println!("  air density  {:10.4} kg/m³", air_density(params.altitude_m));
    println!();
    println!("Forces at this condition:");
    println!("  lift             {:12.1} N", compute_lift(&params));
    println!("  drag             {:12.1} N", compute_drag(&params));
    println!("  thrust           {:12.1} N", compute_thrust(&params));
    println!("  weight           {:12.1} N", compute_weight(&params));
    println!("  thrust required  {:12.1} N", thrust_required(&params));
    println!();

    let mut sim = Simulator::new(params, cli.dt);
    println!(
        "{:>8} {:>10} {:>10} {:>12} {:>12}",
        "t (s)", "alt (m)", "V (m/s)", "lift (N)", "drag (N)"
    );
    for _ in 0..cli.steps {
        let state = sim.step();
        println!(
            "{:8.1} {:10.2} {:10.2} {:12.1} {:12.1}",
            state.elapsed_time_s,
            state.altitude_m,
            state.airspeed_m_s,
            state.lift_n,
            state.drag_n
        );
    }

    Ok(())
}

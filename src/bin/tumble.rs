use std::{env, path::PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use tumble::{utils::rad_to_deg, Simulation, SimulationConfig};

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            info!("Loading scenario from {}", path);
            SimulationConfig::load(&path)?
        }
        None => {
            info!("No scenario given, running the damped brick demo");
            SimulationConfig::default()
        }
    };
    let report_path = args.next().map(PathBuf::from);

    let simulation = Simulation::new(config)?;
    let body = simulation.body();
    info!(
        "Body '{}': mass {:.4} kg, reference area {:.5} m²",
        body.name, body.mass.mass, body.geometry.reference_area
    );
    if let Some(terminal_velocity) = body.nominal_terminal_velocity() {
        info!("Nominal terminal velocity {:.2} m/s", terminal_velocity);
    }

    let result = simulation.run();
    let final_state = result.final_state();
    let final_air_data = result.air_data().last().copied().unwrap_or_default();

    info!(
        "t = {:.2} s: altitude {:.1} m, north {:.2} m, east {:.2} m",
        result.times.last().copied().unwrap_or_default(),
        final_state.altitude(),
        final_state.north,
        final_state.east
    );
    info!(
        "airspeed {:.2} m/s (Mach {:.3}), alpha {:.1}°, beta {:.1}°",
        final_air_data.true_airspeed,
        final_air_data.mach,
        rad_to_deg(final_air_data.alpha),
        rad_to_deg(final_air_data.beta)
    );
    info!(
        "rates p {:.2}, q {:.2}, r {:.2} °/s",
        rad_to_deg(final_state.p),
        rad_to_deg(final_state.q),
        rad_to_deg(final_state.r)
    );

    if let Some(path) = report_path {
        result.report().save(&path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}

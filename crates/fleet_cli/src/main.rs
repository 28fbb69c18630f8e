//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load fleet configuration (path argument or builtin seed).
//! - Print every facility board in schema order for quick sanity checks.

use fleet_core::{load_config, FleetConfig, InMemoryDashboard};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path),
        None => FleetConfig::builtin(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fleet_cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("fleet_core version={}", fleet_core::core_version());
    let dashboard = InMemoryDashboard::from_config(&config);
    for facility in dashboard.facilities().iter() {
        let Some(view) = dashboard.board_view(&facility.id) else {
            continue;
        };
        println!("{}", view.facility_name);
        for column in &view.columns {
            let labels = column
                .buses
                .iter()
                .map(|card| card.label.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {:<24} {}", column.label, labels);
        }
    }
    ExitCode::SUCCESS
}

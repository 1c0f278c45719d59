//! Output formatting module

use crate::cli::OutputFormat;
use fleet_store::{ConsumptionOutcome, JourneyOutcome, RefuelOutcome, VehicleSummary};
use fleet_types::{FleetError, Result};

/// Print a list of vehicle snapshots as a table or JSON.
pub fn print_summaries(output_format: OutputFormat, summaries: &[VehicleSummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summaries)
            .map_err(|e| FleetError::Config(e.to_string()))?;
        println!("{}", content);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("(no vehicles)");
        return Ok(());
    }

    println!(
        "{:<8} {:<10} {:<16} {:>9} {:>11} {:>8} {:>9} {:>9} {:>12} {:>6}",
        "ID", "Kind", "Model", "Speed", "Mileage", "Eff", "Fuel", "Pax", "Cargo", "Maint"
    );
    for s in summaries {
        println!(
            "{:<8} {:<10} {:<16} {:>9.1} {:>11.2} {:>8.1} {:>9} {:>9} {:>12} {:>6}",
            s.id,
            s.kind.to_string(),
            s.model,
            s.max_speed,
            s.mileage,
            s.fuel_efficiency,
            s.fuel_level
                .map(|f| format!("{:.2}", f))
                .unwrap_or_else(|| "-".to_string()),
            match (s.current_passengers, s.passenger_capacity) {
                (Some(n), Some(cap)) => format!("{}/{}", n, cap),
                _ => "-".to_string(),
            },
            match (s.current_cargo, s.cargo_capacity) {
                (Some(load), Some(cap)) => format!("{:.0}/{:.0}", load, cap),
                _ => "-".to_string(),
            },
            match s.needs_maintenance {
                Some(true) => "due",
                Some(false) => "ok",
                None => "-",
            }
        );
    }
    Ok(())
}

pub fn print_journey_outcome(outcome: &JourneyOutcome) {
    println!("Journeys completed: {}", outcome.completed);
    for (id, error) in &outcome.failures {
        eprintln!("  {} failed: {}", id, error);
    }
}

pub fn print_consumption_outcome(outcome: &ConsumptionOutcome) {
    println!("Total fuel consumed: {:.2} l", outcome.total_liters);
    for (id, error) in &outcome.failures {
        eprintln!("  {} skipped: {}", id, error);
    }
}

pub fn print_refuel_outcome(outcome: &RefuelOutcome) {
    println!("Vehicles refueled: {}", outcome.refueled);
    for (id, error) in &outcome.failures {
        eprintln!("  {} failed: {}", id, error);
    }
}

//! Command handlers

use std::path::{Path, PathBuf};

use fleet_domain::{Airplane, Bus, Car, CargoShip, Maintainable, Truck, Vehicle};
use fleet_store::{FleetFilter, FleetManager};
use fleet_types::{FleetError, Result, VehicleKind};

use crate::cli::{Cli, Commands, OutputFormat, SortKey};
use crate::config::Config;
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let fleet_file = cli.file.clone().unwrap_or_else(|| config.fleet_file.clone());
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Demo => cmd_demo(&fleet_file),

        Commands::Add {
            ref kind,
            ref id,
            ref model,
            max_speed,
            mileage,
            wheels,
            altitude,
            sail,
        } => {
            let vehicle = build_vehicle(kind, id, model, max_speed, mileage, wheels, altitude, sail)?;
            let mut manager = open_fleet(&fleet_file)?;
            manager.add_vehicle(vehicle)?;
            manager.save_to_file(&fleet_file)?;
            println!("Added {}", id);
            Ok(())
        }

        Commands::Remove { ref id } => {
            let mut manager = open_fleet(&fleet_file)?;
            manager.remove_vehicle(id)?;
            manager.save_to_file(&fleet_file)?;
            println!("Removed {}", id);
            Ok(())
        }

        Commands::List { sort } => {
            let manager = open_fleet(&fleet_file)?;
            let summaries = match sort {
                Some(SortKey::Speed) => manager.sorted_by_speed(),
                Some(SortKey::Model) => manager.sorted_by_model(),
                Some(SortKey::Efficiency) => manager.sorted_by_efficiency(),
                None => manager.list(),
            };
            output::print_summaries(output_format, &summaries)
        }

        Commands::Journey { distance } => {
            let mut manager = open_fleet(&fleet_file)?;
            let outcome = manager.start_all_journeys(distance);
            manager.save_to_file(&fleet_file)?;
            output::print_journey_outcome(&outcome);
            Ok(())
        }

        Commands::RefuelAll { amount } => {
            let mut manager = open_fleet(&fleet_file)?;
            let outcome = manager.refuel_all(amount);
            manager.save_to_file(&fleet_file)?;
            output::print_refuel_outcome(&outcome);
            Ok(())
        }

        Commands::Consumption { distance } => {
            let mut manager = open_fleet(&fleet_file)?;
            let outcome = manager.total_fuel_consumption(distance);
            manager.save_to_file(&fleet_file)?;
            output::print_consumption_outcome(&outcome);
            Ok(())
        }

        Commands::Maintain => {
            let mut manager = open_fleet(&fleet_file)?;
            let serviced = manager.maintain_all();
            manager.save_to_file(&fleet_file)?;
            println!("Performed maintenance on {} vehicle(s)", serviced);
            Ok(())
        }

        Commands::Schedule { ref id } => {
            let mut manager = open_fleet(&fleet_file)?;
            with_maintenance(&mut manager, id, |m| {
                m.schedule_maintenance();
                Ok(())
            })?;
            manager.save_to_file(&fleet_file)?;
            println!("Maintenance scheduled for {}", id);
            Ok(())
        }

        Commands::MaintenanceDue => {
            let manager = open_fleet(&fleet_file)?;
            let due = manager.vehicles_needing_maintenance();
            if due.is_empty() {
                println!("No vehicles need maintenance.");
                Ok(())
            } else {
                output::print_summaries(output_format, &due)
            }
        }

        Commands::Report => {
            let manager = open_fleet(&fleet_file)?;
            print!("{}", manager.generate_report());
            Ok(())
        }

        Commands::Search { ref selector } => {
            let filter = FleetFilter::from_selector(selector).ok_or_else(|| {
                FleetError::invalid(format!("unknown search selector: {}", selector))
            })?;
            let manager = open_fleet(&fleet_file)?;
            let found = manager.search(filter);
            println!("Found {} vehicle(s):", found.len());
            output::print_summaries(output_format, &found)
        }

        Commands::Extremes => {
            let manager = open_fleet(&fleet_file)?;
            print!("{}", manager.fastest_and_slowest());
            Ok(())
        }

        Commands::SortFleet => {
            let mut manager = open_fleet(&fleet_file)?;
            manager.sort_by_efficiency();
            manager.save_to_file(&fleet_file)?;
            println!("Fleet sorted by fuel efficiency (ascending).");
            Ok(())
        }

        Commands::Refuel { ref id, amount } => {
            let mut manager = open_fleet(&fleet_file)?;
            let vehicle = find_vehicle(&mut manager, id)?;
            let fuel = vehicle
                .as_fuel_mut()
                .ok_or_else(|| FleetError::invalid(format!("{} does not consume fuel", id)))?;
            fuel.refuel(amount)?;
            manager.save_to_file(&fleet_file)?;
            println!("Refueled {} with {:.2} l", id, amount);
            Ok(())
        }

        Commands::Board { ref id, count } => {
            let mut manager = open_fleet(&fleet_file)?;
            let vehicle = find_vehicle(&mut manager, id)?;
            let cabin = vehicle
                .as_passengers_mut()
                .ok_or_else(|| FleetError::invalid(format!("{} does not carry passengers", id)))?;
            cabin.board_passengers(count)?;
            manager.save_to_file(&fleet_file)?;
            println!("Boarded {} passenger(s) on {}", count, id);
            Ok(())
        }

        Commands::Disembark { ref id, count } => {
            let mut manager = open_fleet(&fleet_file)?;
            let vehicle = find_vehicle(&mut manager, id)?;
            let cabin = vehicle
                .as_passengers_mut()
                .ok_or_else(|| FleetError::invalid(format!("{} does not carry passengers", id)))?;
            cabin.disembark_passengers(count)?;
            manager.save_to_file(&fleet_file)?;
            println!("Disembarked {} passenger(s) from {}", count, id);
            Ok(())
        }

        Commands::Load { ref id, weight } => {
            let mut manager = open_fleet(&fleet_file)?;
            let vehicle = find_vehicle(&mut manager, id)?;
            let hold = vehicle
                .as_cargo_mut()
                .ok_or_else(|| FleetError::invalid(format!("{} does not carry cargo", id)))?;
            hold.load_cargo(weight)?;
            manager.save_to_file(&fleet_file)?;
            println!("Loaded {:.2} kg on {}", weight, id);
            Ok(())
        }

        Commands::Unload { ref id, weight } => {
            let mut manager = open_fleet(&fleet_file)?;
            let vehicle = find_vehicle(&mut manager, id)?;
            let hold = vehicle
                .as_cargo_mut()
                .ok_or_else(|| FleetError::invalid(format!("{} does not carry cargo", id)))?;
            hold.unload_cargo(weight)?;
            manager.save_to_file(&fleet_file)?;
            println!("Unloaded {:.2} kg from {}", weight, id);
            Ok(())
        }

        Commands::Config {
            show,
            ref set_file,
            set_format,
        } => cmd_config(config, show, set_file.clone(), set_format),
    }
}

/// Load the fleet file if it exists, otherwise start empty.
fn open_fleet(path: &Path) -> Result<FleetManager> {
    let mut manager = FleetManager::new();
    if path.exists() {
        manager.load_from_file(path)?;
    }
    Ok(manager)
}

fn find_vehicle<'a>(manager: &'a mut FleetManager, id: &str) -> Result<&'a mut dyn Vehicle> {
    manager
        .vehicle_mut(id)
        .ok_or_else(|| FleetError::invalid(format!("vehicle with ID {} not found", id)))
}

fn with_maintenance<F>(manager: &mut FleetManager, id: &str, f: F) -> Result<()>
where
    F: FnOnce(&mut dyn Maintainable) -> Result<()>,
{
    let vehicle = find_vehicle(manager, id)?;
    let maintenance = vehicle
        .as_maintenance_mut()
        .ok_or_else(|| FleetError::invalid(format!("{} is not maintainable", id)))?;
    f(maintenance)
}

#[allow(clippy::too_many_arguments)]
fn build_vehicle(
    kind: &str,
    id: &str,
    model: &str,
    max_speed: f64,
    mileage: f64,
    wheels: Option<u32>,
    altitude: Option<f64>,
    sail: bool,
) -> Result<Box<dyn Vehicle>> {
    let kind = VehicleKind::from_tag(kind)
        .ok_or_else(|| FleetError::UnknownVehicleKind(kind.to_string()))?;
    let vehicle: Box<dyn Vehicle> = match kind {
        VehicleKind::Car => Box::new(Car::new(id, model, max_speed, mileage, wheels.unwrap_or(4))?),
        VehicleKind::Truck => Box::new(Truck::new(
            id,
            model,
            max_speed,
            mileage,
            wheels.unwrap_or(6),
        )?),
        VehicleKind::Bus => Box::new(Bus::new(id, model, max_speed, mileage, wheels.unwrap_or(6))?),
        VehicleKind::Airplane => Box::new(Airplane::new(
            id,
            model,
            max_speed,
            mileage,
            altitude.unwrap_or(10000.0),
        )?),
        VehicleKind::CargoShip => Box::new(CargoShip::new(id, model, max_speed, mileage, sail)?),
    };
    Ok(vehicle)
}

fn cmd_demo(fleet_file: &Path) -> Result<()> {
    let mut manager = FleetManager::new();
    manager.add_vehicle(Box::new(Car::new("C001", "Honda City", 180.0, 0.0, 4)?))?;
    manager.add_vehicle(Box::new(Truck::new("T001", "Mahindra", 90.0, 0.0, 6)?))?;
    manager.add_vehicle(Box::new(Bus::new("B001", "Mercedes-Benz", 100.0, 0.0, 6)?))?;
    manager.add_vehicle(Box::new(Airplane::new("A001", "Boeing", 950.0, 0.0, 10000.0)?))?;
    manager.add_vehicle(Box::new(CargoShip::new("S001", "Titanic", 40.0, 0.0, false)?))?;
    let count = manager.save_to_file(fleet_file)?;
    println!("Saved demo fleet of {} to {}", count, fleet_file.display());
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_file: Option<PathBuf>,
    set_format: Option<OutputFormat>,
) -> Result<()> {
    let mut changed = false;
    if let Some(file) = set_file {
        config.fleet_file = file;
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration updated.");
    }
    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}

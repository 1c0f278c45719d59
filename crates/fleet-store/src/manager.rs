//! The fleet aggregate
//!
//! `FleetManager` owns the ordered, identity-unique vehicle collection
//! and performs the fleet-wide operations. Broadcast operations are
//! best-effort: per-vehicle failures are collected and logged, never
//! escalated to a fleet-wide abort. Listing operations return
//! [`VehicleSummary`] snapshots, not live references.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use fleet_domain::Vehicle;
use fleet_types::{FleetError, Result, VehicleKind};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::persistence;

/// Selector for [`FleetManager::search`]: a concrete kind or a
/// capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetFilter {
    Kind(VehicleKind),
    FuelConsumable,
    PassengerCarrier,
    CargoCarrier,
    Maintainable,
}

impl FleetFilter {
    /// Parse a selector name as typed by a user, e.g. `Car` or
    /// `FuelConsumable`.
    pub fn from_selector(selector: &str) -> Option<Self> {
        if let Some(kind) = VehicleKind::from_tag(selector) {
            return Some(FleetFilter::Kind(kind));
        }
        match selector {
            "FuelConsumable" => Some(FleetFilter::FuelConsumable),
            "PassengerCarrier" => Some(FleetFilter::PassengerCarrier),
            "CargoCarrier" => Some(FleetFilter::CargoCarrier),
            "Maintainable" => Some(FleetFilter::Maintainable),
            _ => None,
        }
    }

    pub fn matches(&self, vehicle: &dyn Vehicle) -> bool {
        match self {
            FleetFilter::Kind(kind) => vehicle.kind() == *kind,
            FleetFilter::FuelConsumable => vehicle.as_fuel().is_some(),
            FleetFilter::PassengerCarrier => vehicle.as_passengers().is_some(),
            FleetFilter::CargoCarrier => vehicle.as_cargo().is_some(),
            FleetFilter::Maintainable => vehicle.as_maintenance().is_some(),
        }
    }
}

/// Defensive snapshot of one vehicle's state, used by every listing
/// operation. Capability fields are `None` when the vehicle does not
/// support the capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub id: String,
    pub kind: VehicleKind,
    pub model: String,
    pub max_speed: f64,
    pub mileage: f64,
    pub fuel_efficiency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_passengers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cargo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_maintenance: Option<bool>,
}

impl VehicleSummary {
    pub fn of(vehicle: &dyn Vehicle) -> Self {
        Self {
            id: vehicle.id().to_string(),
            kind: vehicle.kind(),
            model: vehicle.model().to_string(),
            max_speed: vehicle.max_speed(),
            mileage: vehicle.mileage(),
            fuel_efficiency: vehicle.fuel_efficiency(),
            fuel_level: vehicle.as_fuel().map(|f| f.fuel_level()),
            current_passengers: vehicle.as_passengers().map(|p| p.current_passengers()),
            passenger_capacity: vehicle.as_passengers().map(|p| p.passenger_capacity()),
            current_cargo: vehicle.as_cargo().map(|c| c.current_cargo()),
            cargo_capacity: vehicle.as_cargo().map(|c| c.cargo_capacity()),
            needs_maintenance: vehicle.as_maintenance().map(|m| m.needs_maintenance()),
        }
    }
}

/// Result of a best-effort journey broadcast.
#[derive(Debug, Default)]
pub struct JourneyOutcome {
    pub completed: usize,
    pub failures: Vec<(String, FleetError)>,
}

/// Result of a fleet-wide fuel consumption pass.
#[derive(Debug, Default)]
pub struct ConsumptionOutcome {
    pub total_liters: f64,
    pub failures: Vec<(String, FleetError)>,
}

/// Result of a fleet-wide refuel pass.
#[derive(Debug, Default)]
pub struct RefuelOutcome {
    pub refueled: usize,
    pub failures: Vec<(String, FleetError)>,
}

/// Owner of the fleet collection.
#[derive(Default)]
pub struct FleetManager {
    fleet: Vec<Box<dyn Vehicle>>,
    distinct_models: HashSet<String>,
}

impl FleetManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fleet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fleet.is_empty()
    }

    /// Append a vehicle, preserving insertion order. Fails on a
    /// duplicate id and leaves the fleet unchanged.
    pub fn add_vehicle(&mut self, vehicle: Box<dyn Vehicle>) -> Result<()> {
        if self.fleet.iter().any(|v| v.id() == vehicle.id()) {
            return Err(FleetError::invalid(format!(
                "duplicate vehicle ID: {}",
                vehicle.id()
            )));
        }
        self.distinct_models.insert(vehicle.model().to_string());
        self.fleet.push(vehicle);
        Ok(())
    }

    /// Remove the vehicle with the given id. Fails if no member has it.
    pub fn remove_vehicle(&mut self, id: &str) -> Result<()> {
        let before = self.fleet.len();
        self.fleet.retain(|v| v.id() != id);
        if self.fleet.len() == before {
            return Err(FleetError::invalid(format!(
                "vehicle with ID {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Mutable access to one vehicle, for per-vehicle state operations
    /// (refuel, board, load, schedule maintenance).
    pub fn vehicle_mut(&mut self, id: &str) -> Option<&mut dyn Vehicle> {
        let vehicle = self.fleet.iter_mut().find(|v| v.id() == id)?;
        Some(vehicle.as_mut())
    }

    /// Invoke `travel` on every member. Per-vehicle failures are
    /// logged and collected; the broadcast never aborts.
    pub fn start_all_journeys(&mut self, distance: f64) -> JourneyOutcome {
        let mut outcome = JourneyOutcome::default();
        for vehicle in self.fleet.iter_mut() {
            match vehicle.travel(distance) {
                Ok(()) => outcome.completed += 1,
                Err(e) => {
                    warn!("journey failed for {}: {}", vehicle.id(), e);
                    outcome.failures.push((vehicle.id().to_string(), e));
                }
            }
        }
        outcome
    }

    /// Consume fuel for `distance` km on every fuel-capable member and
    /// sum what was actually consumed. Members without the capability
    /// contribute zero; failures are logged and collected.
    pub fn total_fuel_consumption(&mut self, distance: f64) -> ConsumptionOutcome {
        let mut outcome = ConsumptionOutcome::default();
        for vehicle in self.fleet.iter_mut() {
            let id = vehicle.id().to_string();
            if let Some(fuel) = vehicle.as_fuel_mut() {
                match fuel.consume_fuel(distance) {
                    Ok(used) => outcome.total_liters += used,
                    Err(e) => {
                        warn!("fuel consumption failed for {}: {}", id, e);
                        outcome.failures.push((id, e));
                    }
                }
            }
        }
        outcome
    }

    /// Refuel every fuel-capable member by `amount` liters.
    pub fn refuel_all(&mut self, amount: f64) -> RefuelOutcome {
        let mut outcome = RefuelOutcome::default();
        for vehicle in self.fleet.iter_mut() {
            let id = vehicle.id().to_string();
            if let Some(fuel) = vehicle.as_fuel_mut() {
                match fuel.refuel(amount) {
                    Ok(()) => outcome.refueled += 1,
                    Err(e) => {
                        warn!("refuel failed for {}: {}", id, e);
                        outcome.failures.push((id, e));
                    }
                }
            }
        }
        outcome
    }

    /// Perform maintenance on every member that supports it and is
    /// currently flagged. Returns the number serviced.
    pub fn maintain_all(&mut self) -> usize {
        let mut serviced = 0;
        for vehicle in self.fleet.iter_mut() {
            if let Some(m) = vehicle.as_maintenance_mut() {
                if m.needs_maintenance() {
                    m.perform_maintenance();
                    serviced += 1;
                }
            }
        }
        serviced
    }

    /// All members matching the filter, in fleet order.
    pub fn search(&self, filter: FleetFilter) -> Vec<VehicleSummary> {
        self.fleet
            .iter()
            .filter(|v| filter.matches(v.as_ref()))
            .map(|v| VehicleSummary::of(v.as_ref()))
            .collect()
    }

    /// Reorder the fleet itself by fuel efficiency, ascending.
    pub fn sort_by_efficiency(&mut self) {
        self.fleet
            .sort_by(|a, b| a.fuel_efficiency().total_cmp(&b.fuel_efficiency()));
    }

    pub fn list(&self) -> Vec<VehicleSummary> {
        self.fleet
            .iter()
            .map(|v| VehicleSummary::of(v.as_ref()))
            .collect()
    }

    pub fn sorted_by_speed(&self) -> Vec<VehicleSummary> {
        let mut snapshot = self.list();
        snapshot.sort_by(|a, b| a.max_speed.total_cmp(&b.max_speed));
        snapshot
    }

    pub fn sorted_by_model(&self) -> Vec<VehicleSummary> {
        let mut snapshot = self.list();
        snapshot.sort_by(|a, b| a.model.to_lowercase().cmp(&b.model.to_lowercase()));
        snapshot
    }

    pub fn sorted_by_efficiency(&self) -> Vec<VehicleSummary> {
        let mut snapshot = self.list();
        snapshot.sort_by(|a, b| a.fuel_efficiency.total_cmp(&b.fuel_efficiency));
        snapshot
    }

    pub fn vehicles_needing_maintenance(&self) -> Vec<VehicleSummary> {
        self.fleet
            .iter()
            .filter(|v| {
                v.as_maintenance()
                    .map(|m| m.needs_maintenance())
                    .unwrap_or(false)
            })
            .map(|v| VehicleSummary::of(v.as_ref()))
            .collect()
    }

    /// Distinct model names seen so far, sorted for determinism.
    pub fn distinct_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.distinct_models.iter().cloned().collect();
        models.sort();
        models
    }

    /// Deterministic textual summary of the whole fleet.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("Fleet Report\n");
        report.push_str("**********************************************\n");
        report.push_str(&format!("Total vehicles: {}\n", self.fleet.len()));

        let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
        for vehicle in &self.fleet {
            *by_kind.entry(vehicle.kind().to_string()).or_default() += 1;
        }
        report.push_str("Vehicle Count by type:\n");
        for (kind, count) in &by_kind {
            report.push_str(&format!("  {}: {}\n", kind, count));
        }

        let avg_efficiency = if self.fleet.is_empty() {
            0.0
        } else {
            let sum: f64 = self.fleet.iter().map(|v| v.fuel_efficiency()).sum();
            sum / self.fleet.len() as f64
        };
        report.push_str(&format!(
            "Average fuel efficiency: {:.2} km/l\n",
            avg_efficiency
        ));

        // An empty sum of f64 is -0.0; adding 0.0 keeps the sign out
        // of the formatted report.
        let total_mileage: f64 = self.fleet.iter().map(|v| v.mileage()).sum::<f64>() + 0.0;
        report.push_str(&format!("Total mileage: {:.2} km\n", total_mileage));

        let needing: Vec<&str> = self
            .fleet
            .iter()
            .filter(|v| {
                v.as_maintenance()
                    .map(|m| m.needs_maintenance())
                    .unwrap_or(false)
            })
            .map(|v| v.id())
            .collect();
        report.push_str(&format!("Vehicles needing maintenance: {}\n", needing.len()));
        if !needing.is_empty() {
            report.push_str(&format!("  {}\n", needing.join(", ")));
        }
        report
    }

    /// Max/min by top speed, ties broken by first encountered.
    pub fn fastest_and_slowest(&self) -> String {
        let Some(first) = self.fleet.first() else {
            return "Fleet is empty.".to_string();
        };
        let mut fastest = first;
        let mut slowest = first;
        for vehicle in &self.fleet[1..] {
            if vehicle.max_speed() > fastest.max_speed() {
                fastest = vehicle;
            }
            if vehicle.max_speed() < slowest.max_speed() {
                slowest = vehicle;
            }
        }
        format!(
            "Fastest Vehicle:\n  ID: {} | Model: {} | Speed: {:.1} km/h\nSlowest Vehicle:\n  ID: {} | Model: {} | Speed: {:.1} km/h\n",
            fastest.id(),
            fastest.model(),
            fastest.max_speed(),
            slowest.id(),
            slowest.model(),
            slowest.max_speed()
        )
    }

    /// Write the fleet to `path`. Returns the number of records written.
    pub fn save_to_file(&self, path: &Path) -> Result<usize> {
        persistence::save_fleet(path, &self.fleet)?;
        Ok(self.fleet.len())
    }

    /// Replace the fleet contents with the vehicles stored at `path`.
    ///
    /// The model-name set is extended, not rebuilt, and loaded records
    /// are not re-checked for id uniqueness; both match the legacy
    /// loader. Returns the number of vehicles loaded.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        let loaded = persistence::load_fleet(path)?;
        for vehicle in &loaded {
            self.distinct_models.insert(vehicle.model().to_string());
        }
        let count = loaded.len();
        self.fleet = loaded;
        Ok(count)
    }
}

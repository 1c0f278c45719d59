//! Capability contracts and their shared state facets
//!
//! Each capability is a narrow, independently testable contract that a
//! concrete kind may or may not expose. Fleet-wide operations select
//! vehicles by capability presence, never by kind enumeration.
//!
//! The facet structs (`FuelTank`, `PassengerCabin`, `CargoHold`,
//! `ServiceFlag`) carry the state and the bounds checks; concrete kinds
//! delegate their trait impls to them instead of repeating the logic.

use fleet_types::{FleetError, Result};

/// Fuel storage and consumption.
pub trait FuelConsumable {
    /// Add fuel. Fails on a non-positive amount.
    fn refuel(&mut self, amount: f64) -> Result<()>;

    /// Current fuel level in liters.
    fn fuel_level(&self) -> f64;

    /// Consume fuel for `distance` km and return the liters consumed.
    /// Fails if the requirement exceeds the current level.
    fn consume_fuel(&mut self, distance: f64) -> Result<f64>;
}

/// Passenger boarding with a fixed capacity.
pub trait PassengerCarrier {
    fn board_passengers(&mut self, count: u32) -> Result<()>;
    fn disembark_passengers(&mut self, count: u32) -> Result<()>;
    fn passenger_capacity(&self) -> u32;
    fn current_passengers(&self) -> u32;
}

/// Cargo loading with a fixed weight capacity.
pub trait CargoCarrier {
    fn load_cargo(&mut self, weight: f64) -> Result<()>;
    fn unload_cargo(&mut self, weight: f64) -> Result<()>;
    fn cargo_capacity(&self) -> f64;
    fn current_cargo(&self) -> f64;
}

/// Two-state maintenance flag with explicit external triggers.
/// There is no automatic accrual by mileage or fuel use.
pub trait Maintainable {
    fn needs_maintenance(&self) -> bool;
    fn schedule_maintenance(&mut self);
    fn perform_maintenance(&mut self);
}

/// Fuel state shared by all fuel-consuming kinds.
#[derive(Debug, Clone, Default)]
pub struct FuelTank {
    level: f64,
}

impl FuelTank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn refuel(&mut self, amount: f64) -> Result<()> {
        if amount <= 0.0 {
            return Err(FleetError::invalid("fuel amount must be positive"));
        }
        self.level += amount;
        Ok(())
    }

    /// Burn the fuel needed for `distance` km at `efficiency` km/l and
    /// return the liters consumed.
    pub fn consume(&mut self, distance: f64, efficiency: f64) -> Result<f64> {
        if distance < 0.0 {
            return Err(FleetError::invalid("distance cannot be negative"));
        }
        let needed = distance / efficiency;
        if needed > self.level {
            return Err(FleetError::InsufficientFuel(format!(
                "need {:.2} l, have {:.2} l",
                needed, self.level
            )));
        }
        self.level -= needed;
        Ok(needed)
    }
}

/// Passenger state shared by all passenger-carrying kinds.
#[derive(Debug, Clone)]
pub struct PassengerCabin {
    capacity: u32,
    aboard: u32,
}

impl PassengerCabin {
    pub fn new(capacity: u32) -> Self {
        Self { capacity, aboard: 0 }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn aboard(&self) -> u32 {
        self.aboard
    }

    pub fn board(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(FleetError::invalid("passenger count must be positive"));
        }
        // aboard never exceeds capacity, so the subtraction cannot
        // underflow; comparing this way keeps a huge count from
        // overflowing the addition.
        if count > self.capacity - self.aboard {
            return Err(FleetError::invalid(format!(
                "exceeds passenger capacity of {}",
                self.capacity
            )));
        }
        self.aboard += count;
        Ok(())
    }

    pub fn disembark(&mut self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(FleetError::invalid("passenger count must be positive"));
        }
        if count > self.aboard {
            return Err(FleetError::invalid("cannot have negative passengers"));
        }
        self.aboard -= count;
        Ok(())
    }
}

/// Cargo state shared by all cargo-carrying kinds.
#[derive(Debug, Clone)]
pub struct CargoHold {
    capacity: f64,
    load: f64,
}

impl CargoHold {
    pub fn new(capacity: f64) -> Self {
        Self { capacity, load: 0.0 }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn store(&mut self, weight: f64) -> Result<()> {
        if weight <= 0.0 {
            return Err(FleetError::invalid("cargo weight must be positive"));
        }
        if self.load + weight > self.capacity {
            return Err(FleetError::Overload(format!(
                "cannot load {:.2} kg, capacity is {:.2} kg",
                weight, self.capacity
            )));
        }
        self.load += weight;
        Ok(())
    }

    pub fn remove(&mut self, weight: f64) -> Result<()> {
        if weight <= 0.0 {
            return Err(FleetError::invalid("cargo weight must be positive"));
        }
        if weight > self.load {
            return Err(FleetError::invalid(
                "cannot unload more cargo than currently loaded",
            ));
        }
        self.load -= weight;
        Ok(())
    }
}

/// Maintenance flag state.
#[derive(Debug, Clone, Default)]
pub struct ServiceFlag {
    due: bool,
}

impl ServiceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_due(&self) -> bool {
        self.due
    }

    pub fn schedule(&mut self) {
        self.due = true;
    }

    pub fn clear(&mut self) {
        self.due = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::FleetError;

    #[test]
    fn tank_rejects_non_positive_refuel() {
        let mut tank = FuelTank::new();
        assert!(tank.refuel(0.0).is_err());
        assert!(tank.refuel(-5.0).is_err());
        tank.refuel(10.0).unwrap();
        assert_eq!(tank.level(), 10.0);
    }

    #[test]
    fn tank_consume_checks_balance() {
        let mut tank = FuelTank::new();
        tank.refuel(10.0).unwrap();
        // 100 km at 15 km/l needs ~6.67 l
        let used = tank.consume(100.0, 15.0).unwrap();
        assert!((used - 100.0 / 15.0).abs() < 1e-9);
        // remaining ~3.33 l cannot cover another 100 km
        match tank.consume(100.0, 15.0) {
            Err(FleetError::InsufficientFuel(_)) => {}
            other => panic!("expected insufficient fuel, got {:?}", other),
        }
    }

    #[test]
    fn tank_consume_rejects_negative_distance() {
        let mut tank = FuelTank::new();
        tank.refuel(10.0).unwrap();
        assert!(tank.consume(-1.0, 15.0).is_err());
        assert_eq!(tank.level(), 10.0);
    }

    #[test]
    fn cabin_bounds() {
        let mut cabin = PassengerCabin::new(50);
        assert!(cabin.board(51).is_err());
        cabin.board(50).unwrap();
        assert!(cabin.board(1).is_err());
        assert!(cabin.disembark(51).is_err());
        cabin.disembark(50).unwrap();
        assert_eq!(cabin.aboard(), 0);
        assert!(cabin.disembark(0).is_err());
    }

    #[test]
    fn cabin_rejects_count_near_u32_max() {
        let mut cabin = PassengerCabin::new(50);
        cabin.board(50).unwrap();
        assert!(cabin.board(u32::MAX - 49).is_err());
        assert_eq!(cabin.aboard(), 50);
        let mut empty = PassengerCabin::new(50);
        assert!(empty.board(u32::MAX).is_err());
        assert_eq!(empty.aboard(), 0);
    }

    #[test]
    fn hold_bounds() {
        let mut hold = CargoHold::new(500.0);
        assert!(matches!(hold.store(600.0), Err(FleetError::Overload(_))));
        assert!(hold.store(0.0).is_err());
        hold.store(500.0).unwrap();
        assert!(hold.store(0.1).is_err());
        assert!(hold.remove(500.1).is_err());
        hold.remove(500.0).unwrap();
        assert_eq!(hold.load(), 0.0);
    }

    #[test]
    fn service_flag_cycle() {
        let mut flag = ServiceFlag::new();
        assert!(!flag.is_due());
        flag.schedule();
        assert!(flag.is_due());
        flag.clear();
        assert!(!flag.is_due());
    }
}

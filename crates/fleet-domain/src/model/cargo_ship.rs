//! CargoShip: water vehicle carrying cargo, a maintenance flag, and
//! fuel unless it is sailed
//!
//! A sailed ship never touches its fuel balance: it reports a zero
//! level, rejects refueling, and travels for free.

use fleet_types::{FleetError, Result, VehicleKind};

use super::capability::{
    CargoCarrier, CargoHold, FuelConsumable, FuelTank, Maintainable, ServiceFlag,
};
use super::vehicle::{fmt2, Vehicle, VehicleBase};

pub const SHIP_EFFICIENCY_KM_PER_L: f64 = 4.0;
pub const SHIP_CARGO_CAPACITY_KG: f64 = 50000.0;

#[derive(Debug, Clone)]
pub struct CargoShip {
    base: VehicleBase,
    has_sail: bool,
    tank: FuelTank,
    hold: CargoHold,
    service: ServiceFlag,
}

impl CargoShip {
    pub fn new(id: &str, model: &str, max_speed: f64, mileage: f64, has_sail: bool) -> Result<Self> {
        Ok(Self {
            base: VehicleBase::new(id, model, max_speed, mileage)?,
            has_sail,
            tank: FuelTank::new(),
            hold: CargoHold::new(SHIP_CARGO_CAPACITY_KG),
            service: ServiceFlag::new(),
        })
    }

    pub fn has_sail(&self) -> bool {
        self.has_sail
    }
}

impl Vehicle for CargoShip {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn model(&self) -> &str {
        self.base.model()
    }

    fn max_speed(&self) -> f64 {
        self.base.max_speed()
    }

    fn mileage(&self) -> f64 {
        self.base.mileage()
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::CargoShip
    }

    fn fuel_efficiency(&self) -> f64 {
        if self.has_sail {
            0.0
        } else {
            SHIP_EFFICIENCY_KM_PER_L
        }
    }

    fn travel(&mut self, distance: f64) -> Result<()> {
        if distance < 0.0 {
            return Err(FleetError::invalid("distance cannot be negative"));
        }
        if !self.has_sail {
            self.tank.consume(distance, SHIP_EFFICIENCY_KM_PER_L)?;
        }
        self.base.add_mileage(distance);
        Ok(())
    }

    fn as_fuel(&self) -> Option<&dyn FuelConsumable> {
        Some(self)
    }
    fn as_fuel_mut(&mut self) -> Option<&mut dyn FuelConsumable> {
        Some(self)
    }
    fn as_cargo(&self) -> Option<&dyn CargoCarrier> {
        Some(self)
    }
    fn as_cargo_mut(&mut self) -> Option<&mut dyn CargoCarrier> {
        Some(self)
    }
    fn as_maintenance(&self) -> Option<&dyn Maintainable> {
        Some(self)
    }
    fn as_maintenance_mut(&mut self) -> Option<&mut dyn Maintainable> {
        Some(self)
    }

    // CargoShip,id,model,maxSpeed,mileage,hasSail,fuelLevel,cargoCapacity,currentCargo,maintenanceNeeded
    fn to_record(&self) -> Vec<String> {
        vec![
            self.kind().to_string(),
            self.id().to_string(),
            self.model().to_string(),
            fmt2(self.max_speed()),
            fmt2(self.mileage()),
            self.has_sail.to_string(),
            fmt2(self.fuel_level()),
            fmt2(self.hold.capacity()),
            fmt2(self.hold.load()),
            self.service.is_due().to_string(),
        ]
    }
}

impl FuelConsumable for CargoShip {
    fn refuel(&mut self, amount: f64) -> Result<()> {
        if self.has_sail {
            return Err(FleetError::invalid(
                "this ship has a sail and does not use fuel",
            ));
        }
        self.tank.refuel(amount)
    }

    fn fuel_level(&self) -> f64 {
        if self.has_sail {
            0.0
        } else {
            self.tank.level()
        }
    }

    fn consume_fuel(&mut self, distance: f64) -> Result<f64> {
        if self.has_sail {
            return Ok(0.0);
        }
        self.tank.consume(distance, SHIP_EFFICIENCY_KM_PER_L)
    }
}

impl CargoCarrier for CargoShip {
    fn load_cargo(&mut self, weight: f64) -> Result<()> {
        self.hold.store(weight)
    }

    fn unload_cargo(&mut self, weight: f64) -> Result<()> {
        self.hold.remove(weight)
    }

    fn cargo_capacity(&self) -> f64 {
        self.hold.capacity()
    }

    fn current_cargo(&self) -> f64 {
        self.hold.load()
    }
}

impl Maintainable for CargoShip {
    fn needs_maintenance(&self) -> bool {
        self.service.is_due()
    }

    fn schedule_maintenance(&mut self) {
        self.service.schedule();
    }

    fn perform_maintenance(&mut self) {
        self.service.clear();
    }
}

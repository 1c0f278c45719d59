//! Truck: land vehicle carrying fuel, cargo, and a maintenance flag

use fleet_types::{Result, VehicleKind};

use super::capability::{
    CargoCarrier, CargoHold, FuelConsumable, FuelTank, Maintainable, ServiceFlag,
};
use super::vehicle::{fmt2, Vehicle, VehicleBase};

pub const TRUCK_EFFICIENCY_KM_PER_L: f64 = 8.0;
pub const TRUCK_CARGO_CAPACITY_KG: f64 = 5000.0;

#[derive(Debug, Clone)]
pub struct Truck {
    base: VehicleBase,
    wheels: u32,
    tank: FuelTank,
    hold: CargoHold,
    service: ServiceFlag,
}

impl Truck {
    pub fn new(id: &str, model: &str, max_speed: f64, mileage: f64, wheels: u32) -> Result<Self> {
        Ok(Self {
            base: VehicleBase::new(id, model, max_speed, mileage)?,
            wheels,
            tank: FuelTank::new(),
            hold: CargoHold::new(TRUCK_CARGO_CAPACITY_KG),
            service: ServiceFlag::new(),
        })
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }
}

impl Vehicle for Truck {
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
        VehicleKind::Truck
    }

    fn fuel_efficiency(&self) -> f64 {
        TRUCK_EFFICIENCY_KM_PER_L
    }

    fn travel(&mut self, distance: f64) -> Result<()> {
        self.tank.consume(distance, TRUCK_EFFICIENCY_KM_PER_L)?;
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

    // Truck,id,model,maxSpeed,mileage,numWheels,fuelLevel,cargoCapacity,currentCargo,maintenanceNeeded
    fn to_record(&self) -> Vec<String> {
        vec![
            self.kind().to_string(),
            self.id().to_string(),
            self.model().to_string(),
            fmt2(self.max_speed()),
            fmt2(self.mileage()),
            self.wheels.to_string(),
            fmt2(self.tank.level()),
            fmt2(self.hold.capacity()),
            fmt2(self.hold.load()),
            self.service.is_due().to_string(),
        ]
    }
}

impl FuelConsumable for Truck {
    fn refuel(&mut self, amount: f64) -> Result<()> {
        self.tank.refuel(amount)
    }

    fn fuel_level(&self) -> f64 {
        self.tank.level()
    }

    fn consume_fuel(&mut self, distance: f64) -> Result<f64> {
        self.tank.consume(distance, TRUCK_EFFICIENCY_KM_PER_L)
    }
}

impl CargoCarrier for Truck {
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

impl Maintainable for Truck {
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

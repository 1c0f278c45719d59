//! Airplane: air vehicle carrying fuel, passengers, cargo, and a maintenance flag

use fleet_types::{Result, VehicleKind};

use super::capability::{
    CargoCarrier, CargoHold, FuelConsumable, FuelTank, Maintainable, PassengerCabin,
    PassengerCarrier, ServiceFlag,
};
use super::vehicle::{fmt2, Vehicle, VehicleBase};

pub const AIRPLANE_EFFICIENCY_KM_PER_L: f64 = 5.0;
pub const AIRPLANE_PASSENGER_CAPACITY: u32 = 200;
pub const AIRPLANE_CARGO_CAPACITY_KG: f64 = 10000.0;

#[derive(Debug, Clone)]
pub struct Airplane {
    base: VehicleBase,
    max_altitude: f64,
    tank: FuelTank,
    cabin: PassengerCabin,
    hold: CargoHold,
    service: ServiceFlag,
}

impl Airplane {
    pub fn new(
        id: &str,
        model: &str,
        max_speed: f64,
        mileage: f64,
        max_altitude: f64,
    ) -> Result<Self> {
        Ok(Self {
            base: VehicleBase::new(id, model, max_speed, mileage)?,
            max_altitude,
            tank: FuelTank::new(),
            cabin: PassengerCabin::new(AIRPLANE_PASSENGER_CAPACITY),
            hold: CargoHold::new(AIRPLANE_CARGO_CAPACITY_KG),
            service: ServiceFlag::new(),
        })
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }
}

impl Vehicle for Airplane {
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
        VehicleKind::Airplane
    }

    fn fuel_efficiency(&self) -> f64 {
        AIRPLANE_EFFICIENCY_KM_PER_L
    }

    fn travel(&mut self, distance: f64) -> Result<()> {
        self.tank.consume(distance, AIRPLANE_EFFICIENCY_KM_PER_L)?;
        self.base.add_mileage(distance);
        Ok(())
    }

    fn as_fuel(&self) -> Option<&dyn FuelConsumable> {
        Some(self)
    }
    fn as_fuel_mut(&mut self) -> Option<&mut dyn FuelConsumable> {
        Some(self)
    }
    fn as_passengers(&self) -> Option<&dyn PassengerCarrier> {
        Some(self)
    }
    fn as_passengers_mut(&mut self) -> Option<&mut dyn PassengerCarrier> {
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

    // Airplane,id,model,maxSpeed,mileage,maxAltitude,fuelLevel,passengerCapacity,currentPassengers,cargoCapacity,currentCargo,maintenanceNeeded
    fn to_record(&self) -> Vec<String> {
        vec![
            self.kind().to_string(),
            self.id().to_string(),
            self.model().to_string(),
            fmt2(self.max_speed()),
            fmt2(self.mileage()),
            fmt2(self.max_altitude),
            fmt2(self.tank.level()),
            self.cabin.capacity().to_string(),
            self.cabin.aboard().to_string(),
            fmt2(self.hold.capacity()),
            fmt2(self.hold.load()),
            self.service.is_due().to_string(),
        ]
    }
}

impl FuelConsumable for Airplane {
    fn refuel(&mut self, amount: f64) -> Result<()> {
        self.tank.refuel(amount)
    }

    fn fuel_level(&self) -> f64 {
        self.tank.level()
    }

    fn consume_fuel(&mut self, distance: f64) -> Result<f64> {
        self.tank.consume(distance, AIRPLANE_EFFICIENCY_KM_PER_L)
    }
}

impl PassengerCarrier for Airplane {
    fn board_passengers(&mut self, count: u32) -> Result<()> {
        self.cabin.board(count)
    }

    fn disembark_passengers(&mut self, count: u32) -> Result<()> {
        self.cabin.disembark(count)
    }

    fn passenger_capacity(&self) -> u32 {
        self.cabin.capacity()
    }

    fn current_passengers(&self) -> u32 {
        self.cabin.aboard()
    }
}

impl CargoCarrier for Airplane {
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

impl Maintainable for Airplane {
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

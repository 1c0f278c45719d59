//! Car: land vehicle carrying fuel, passengers, and a maintenance flag

use fleet_types::{Result, VehicleKind};

use super::capability::{
    FuelConsumable, FuelTank, Maintainable, PassengerCabin, PassengerCarrier, ServiceFlag,
};
use super::vehicle::{fmt2, Vehicle, VehicleBase};

pub const CAR_EFFICIENCY_KM_PER_L: f64 = 15.0;
pub const CAR_PASSENGER_CAPACITY: u32 = 5;

#[derive(Debug, Clone)]
pub struct Car {
    base: VehicleBase,
    wheels: u32,
    tank: FuelTank,
    cabin: PassengerCabin,
    service: ServiceFlag,
}

impl Car {
    pub fn new(id: &str, model: &str, max_speed: f64, mileage: f64, wheels: u32) -> Result<Self> {
        Ok(Self {
            base: VehicleBase::new(id, model, max_speed, mileage)?,
            wheels,
            tank: FuelTank::new(),
            cabin: PassengerCabin::new(CAR_PASSENGER_CAPACITY),
            service: ServiceFlag::new(),
        })
    }

    pub fn wheels(&self) -> u32 {
        self.wheels
    }
}

impl Vehicle for Car {
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
        VehicleKind::Car
    }

    fn fuel_efficiency(&self) -> f64 {
        CAR_EFFICIENCY_KM_PER_L
    }

    fn travel(&mut self, distance: f64) -> Result<()> {
        self.tank.consume(distance, CAR_EFFICIENCY_KM_PER_L)?;
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
    fn as_maintenance(&self) -> Option<&dyn Maintainable> {
        Some(self)
    }
    fn as_maintenance_mut(&mut self) -> Option<&mut dyn Maintainable> {
        Some(self)
    }

    // Car,id,model,maxSpeed,mileage,numWheels,fuelLevel,passengerCapacity,currentPassengers,maintenanceNeeded
    fn to_record(&self) -> Vec<String> {
        vec![
            self.kind().to_string(),
            self.id().to_string(),
            self.model().to_string(),
            fmt2(self.max_speed()),
            fmt2(self.mileage()),
            self.wheels.to_string(),
            fmt2(self.tank.level()),
            self.cabin.capacity().to_string(),
            self.cabin.aboard().to_string(),
            self.service.is_due().to_string(),
        ]
    }
}

impl FuelConsumable for Car {
    fn refuel(&mut self, amount: f64) -> Result<()> {
        self.tank.refuel(amount)
    }

    fn fuel_level(&self) -> f64 {
        self.tank.level()
    }

    fn consume_fuel(&mut self, distance: f64) -> Result<f64> {
        self.tank.consume(distance, CAR_EFFICIENCY_KM_PER_L)
    }
}

impl PassengerCarrier for Car {
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

impl Maintainable for Car {
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

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::FleetError;

    #[test]
    fn travel_without_fuel_fails_and_leaves_state() {
        let mut car = Car::new("C1", "X", 100.0, 0.0, 4).unwrap();
        match car.travel(50.0) {
            Err(FleetError::InsufficientFuel(_)) => {}
            other => panic!("expected insufficient fuel, got {:?}", other),
        }
        assert_eq!(car.mileage(), 0.0);
        assert_eq!(car.fuel_level(), 0.0);
    }

    #[test]
    fn negative_distance_is_invalid_and_leaves_state() {
        let mut car = Car::new("C1", "X", 100.0, 0.0, 4).unwrap();
        car.refuel(10.0).unwrap();
        assert!(matches!(
            car.travel(-1.0),
            Err(FleetError::InvalidOperation(_))
        ));
        assert_eq!(car.mileage(), 0.0);
        assert_eq!(car.fuel_level(), 10.0);
    }

    #[test]
    fn travel_burns_fuel_once() {
        let mut car = Car::new("C1", "X", 100.0, 0.0, 4).unwrap();
        car.refuel(10.0).unwrap();
        car.travel(75.0).unwrap();
        assert_eq!(car.mileage(), 75.0);
        assert!((car.fuel_level() - (10.0 - 75.0 / 15.0)).abs() < 1e-9);
    }

    #[test]
    fn consume_fuel_is_independent_of_travel() {
        let mut car = Car::new("C1", "X", 100.0, 0.0, 4).unwrap();
        car.refuel(10.0).unwrap();
        let used = car.consume_fuel(15.0).unwrap();
        assert!((used - 1.0).abs() < 1e-9);
        // consume_fuel does not move the odometer
        assert_eq!(car.mileage(), 0.0);
        assert!((car.fuel_level() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn land_journey_time_factor() {
        let car = Car::new("C1", "X", 100.0, 0.0, 4).unwrap();
        assert!((car.journey_time(100.0).unwrap() - 1.10).abs() < 1e-9);
        assert!(car.journey_time(-1.0).is_err());
    }
}

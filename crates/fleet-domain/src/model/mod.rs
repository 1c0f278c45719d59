//! Vehicle model: base trait, capability contracts, and the five concrete kinds

pub mod airplane;
pub mod bus;
pub mod capability;
pub mod car;
pub mod cargo_ship;
pub mod truck;
pub mod vehicle;

pub use airplane::Airplane;
pub use bus::Bus;
pub use capability::{
    CargoCarrier, CargoHold, FuelConsumable, FuelTank, Maintainable, PassengerCabin,
    PassengerCarrier, ServiceFlag,
};
pub use car::Car;
pub use cargo_ship::CargoShip;
pub use truck::Truck;
pub use vehicle::{Vehicle, VehicleBase};

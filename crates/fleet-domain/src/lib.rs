//! Domain model for fleet-checker
//!
//! The `Vehicle` trait is the polymorphic core: every concrete kind
//! implements it, and optionally exposes the capability contracts
//! (fuel, passengers, cargo, maintenance) through the `as_*` queries.

pub mod factory;
pub mod model;

pub use factory::vehicle_from_record;
pub use model::*;

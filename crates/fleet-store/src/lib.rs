//! Fleet aggregate and flat-file persistence

pub mod manager;
pub mod persistence;

pub use manager::{
    ConsumptionOutcome, FleetFilter, FleetManager, JourneyOutcome, RefuelOutcome, VehicleSummary,
};

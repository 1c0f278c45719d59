//! The abstract vehicle contract and its shared identity state

use fleet_types::{Category, FleetError, Result, VehicleKind};

use super::capability::{CargoCarrier, FuelConsumable, Maintainable, PassengerCarrier};

/// Identity and odometer state shared by every concrete kind.
///
/// The id is validated once at construction; mileage only ever grows,
/// and only through [`VehicleBase::add_mileage`].
#[derive(Debug, Clone)]
pub struct VehicleBase {
    id: String,
    model: String,
    max_speed: f64,
    mileage: f64,
}

impl VehicleBase {
    pub fn new(id: &str, model: &str, max_speed: f64, mileage: f64) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(FleetError::invalid("vehicle ID cannot be empty"));
        }
        Ok(Self {
            id: id.to_string(),
            model: model.to_string(),
            max_speed,
            mileage,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    pub fn add_mileage(&mut self, distance: f64) {
        self.mileage += distance;
    }
}

/// The polymorphic vehicle contract.
///
/// Concrete kinds implement movement and efficiency, and advertise the
/// capabilities they support by overriding the `as_*` queries. Callers
/// discover capabilities at runtime through those queries instead of
/// matching on the kind.
pub trait Vehicle {
    fn id(&self) -> &str;
    fn model(&self) -> &str;
    fn max_speed(&self) -> f64;
    fn mileage(&self) -> f64;
    fn kind(&self) -> VehicleKind;

    fn category(&self) -> Category {
        self.kind().category()
    }

    /// Fixed per-kind efficiency in km/l. Zero signals fuel-free
    /// propulsion (a sailed ship).
    fn fuel_efficiency(&self) -> f64;

    /// Perform a journey of `distance` km, burning fuel and updating
    /// mileage as the kind requires.
    fn travel(&mut self, distance: f64) -> Result<()>;

    /// Advisory journey time in hours, scaled by the category factor.
    /// Not tied to actual fuel state.
    fn journey_time(&self, distance: f64) -> Result<f64> {
        if distance < 0.0 {
            return Err(FleetError::invalid("distance cannot be negative"));
        }
        Ok(distance / self.max_speed() * self.category().journey_time_factor())
    }

    /// One-line human description.
    fn describe(&self) -> String {
        format!(
            "{} | Model: {} | Speed: {} km/h | Mileage: {}",
            self.id(),
            self.model(),
            self.max_speed(),
            self.mileage()
        )
    }

    fn as_fuel(&self) -> Option<&dyn FuelConsumable> {
        None
    }
    fn as_fuel_mut(&mut self) -> Option<&mut dyn FuelConsumable> {
        None
    }
    fn as_passengers(&self) -> Option<&dyn PassengerCarrier> {
        None
    }
    fn as_passengers_mut(&mut self) -> Option<&mut dyn PassengerCarrier> {
        None
    }
    fn as_cargo(&self) -> Option<&dyn CargoCarrier> {
        None
    }
    fn as_cargo_mut(&mut self) -> Option<&mut dyn CargoCarrier> {
        None
    }
    fn as_maintenance(&self) -> Option<&dyn Maintainable> {
        None
    }
    fn as_maintenance_mut(&mut self) -> Option<&mut dyn Maintainable> {
        None
    }

    /// The persisted field list for this vehicle, kind tag first.
    ///
    /// The default covers any kind without a dedicated layout:
    /// `kind,id,model,maxSpeed,mileage`. Every concrete kind overrides
    /// this with its full layout.
    fn to_record(&self) -> Vec<String> {
        vec![
            self.kind().to_string(),
            self.id().to_string(),
            self.model().to_string(),
            fmt2(self.max_speed()),
            fmt2(self.mileage()),
        ]
    }
}

/// Two-decimal rendering used by every persisted numeric field.
pub(crate) fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rejects_blank_id() {
        assert!(VehicleBase::new("", "X", 100.0, 0.0).is_err());
        assert!(VehicleBase::new("   ", "X", 100.0, 0.0).is_err());
        assert!(VehicleBase::new("V1", "X", 100.0, 0.0).is_ok());
    }

    #[test]
    fn mileage_accumulates() {
        let mut base = VehicleBase::new("V1", "X", 100.0, 10.0).unwrap();
        base.add_mileage(5.0);
        base.add_mileage(2.5);
        assert_eq!(base.mileage(), 17.5);
    }
}

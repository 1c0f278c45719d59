//! Vehicle kind and travel category definitions

use serde::{Deserialize, Serialize};

/// The five concrete vehicle kinds the fleet supports.
///
/// The `Display` form doubles as the kind tag in the persisted
/// fleet file, so it must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
    Airplane,
    CargoShip,
}

impl VehicleKind {
    /// Parse a kind tag as it appears in the fleet file.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Car" => Some(VehicleKind::Car),
            "Truck" => Some(VehicleKind::Truck),
            "Bus" => Some(VehicleKind::Bus),
            "Airplane" => Some(VehicleKind::Airplane),
            "CargoShip" => Some(VehicleKind::CargoShip),
            _ => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            VehicleKind::Car | VehicleKind::Truck | VehicleKind::Bus => Category::Land,
            VehicleKind::Airplane => Category::Air,
            VehicleKind::CargoShip => Category::Water,
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Bus => "Bus",
            VehicleKind::Airplane => "Airplane",
            VehicleKind::CargoShip => "CargoShip",
        };
        write!(f, "{}", tag)
    }
}

/// Land/air/water classification.
///
/// The category fixes the journey-time multiplier applied on top of
/// the raw `distance / max_speed` estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Land,
    Air,
    Water,
}

impl Category {
    pub fn journey_time_factor(&self) -> f64 {
        match self {
            Category::Land => 1.10,
            Category::Air => 0.95,
            Category::Water => 1.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for kind in [
            VehicleKind::Car,
            VehicleKind::Truck,
            VehicleKind::Bus,
            VehicleKind::Airplane,
            VehicleKind::CargoShip,
        ] {
            assert_eq!(VehicleKind::from_tag(&kind.to_string()), Some(kind));
        }
        assert_eq!(VehicleKind::from_tag("Hovercraft"), None);
    }

    #[test]
    fn journey_factors() {
        assert_eq!(Category::Land.journey_time_factor(), 1.10);
        assert_eq!(Category::Air.journey_time_factor(), 0.95);
        assert_eq!(Category::Water.journey_time_factor(), 1.15);
    }
}

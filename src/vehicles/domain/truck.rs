use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::core::error::{LabError, LabResult};
use crate::utils::format::decimal;
use crate::utils::validate::{ensure_finite, ensure_positive, parse_validated};
use crate::vehicles::domain::Vehicle;
use crate::vehicles::domain::model::Chassis;

/// Truck is a goods vehicle rated for a maximum load in tonnes.
///
/// ```
/// use oop_labs::vehicles::domain::truck::Truck;
///
/// let truck = Truck::new("Volvo", "FH16", 2018, 250000.0, 20.5).unwrap();
/// assert_eq!("Volvo FH16, 2018, mileage: 250000.0 km, max load: 20.5 t", truck.to_string());
/// truck.load_cargo(15.0).unwrap();
/// assert!(truck.load_cargo(25.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TruckRecord")]
pub struct Truck {
    #[serde(flatten)]
    chassis: Chassis,
    max_load: f64,
}

#[derive(Debug, Deserialize)]
struct TruckRecord {
    brand: String,
    model: String,
    year: i32,
    mileage: f64,
    max_load: f64,
}

impl Truck {
    pub fn new(brand: &str, model: &str, year: i32, mileage: f64, max_load: f64) -> LabResult<Self> {
        let chassis = Chassis::new(brand, model, year, mileage)?;
        let max_load = ensure_positive(max_load, "max load")?;
        Ok(Self { chassis, max_load })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<TruckRecord, Self>(json)
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    // Checks a single load against the rating. Loads are not accumulated across calls.
    pub fn load_cargo(&self, weight: f64) -> LabResult<()> {
        let weight = ensure_finite(weight, "cargo weight")?;
        if weight > self.max_load {
            return Err(LabError::validation(
                format!("cargo weight {} t exceeds max load {} t", decimal(weight), decimal(self.max_load)).as_str(),
                Some("over_capacity".to_string())));
        }
        info!(brand = self.chassis.brand(), model = self.chassis.model(), weight, "cargo loaded");
        Ok(())
    }
}

impl Vehicle for Truck {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn drive(&mut self, distance: f64) -> LabResult<()> {
        self.chassis.drive(distance)
    }
}

impl Display for Truck {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, max load: {} t", self.chassis, decimal(self.max_load))
    }
}

impl TryFrom<TruckRecord> for Truck {
    type Error = LabError;

    fn try_from(other: TruckRecord) -> Result<Self, Self::Error> {
        Truck::new(other.brand.as_str(), other.model.as_str(), other.year, other.mileage, other.max_load)
    }
}

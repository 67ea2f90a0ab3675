use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::error::{LabError, LabResult};
use crate::utils::format::decimal;
use crate::utils::validate::{ensure_finite, ensure_non_negative, parse_validated};
use crate::vehicles::domain::Vehicle;

/// Chassis is the field group every vehicle carries. On its own it behaves as a plain
/// vehicle with no kind-specific rules.
///
/// ```
/// use oop_labs::vehicles::domain::Vehicle;
/// use oop_labs::vehicles::domain::model::Chassis;
///
/// let mut vehicle = Chassis::new("Toyota", "Corolla", 2020, 15000.5).unwrap();
/// assert_eq!("Toyota Corolla, 2020, mileage: 15000.5 km", vehicle.to_string());
/// vehicle.drive(100.0).unwrap();
/// assert_eq!(15100.5, vehicle.mileage());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChassisRecord")]
pub struct Chassis {
    brand: String,
    model: String,
    year: i32,
    mileage: f64,
}

#[derive(Debug, Deserialize)]
struct ChassisRecord {
    brand: String,
    model: String,
    year: i32,
    mileage: f64,
}

impl Chassis {
    pub fn new(brand: &str, model: &str, year: i32, mileage: f64) -> LabResult<Self> {
        let mileage = ensure_non_negative(mileage, "mileage")?;
        Ok(Self {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            mileage,
        })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<ChassisRecord, Self>(json)
    }

    pub fn brand(&self) -> &str {
        self.brand.as_str()
    }

    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }
}

impl Vehicle for Chassis {
    fn chassis(&self) -> &Chassis {
        self
    }

    fn drive(&mut self, distance: f64) -> LabResult<()> {
        let distance = ensure_non_negative(distance, "distance")?;
        let mileage = ensure_finite(self.mileage + distance, "mileage")?;
        self.mileage = mileage;
        debug!(brand = self.brand.as_str(), model = self.model.as_str(), distance, mileage, "driven");
        Ok(())
    }
}

impl Display for Chassis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}, mileage: {} km", self.brand, self.model, self.year, decimal(self.mileage))
    }
}

impl TryFrom<ChassisRecord> for Chassis {
    type Error = LabError;

    fn try_from(other: ChassisRecord) -> Result<Self, Self::Error> {
        Chassis::new(other.brand.as_str(), other.model.as_str(), other.year, other.mileage)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::LabError;
    use crate::vehicles::domain::Vehicle;
    use crate::vehicles::domain::model::Chassis;

    #[test]
    fn test_should_build_chassis() {
        let vehicle = Chassis::new("Toyota", "Corolla", 2020, 15000.5).expect("should build vehicle");
        assert_eq!("Toyota", vehicle.brand());
        assert_eq!("Corolla", vehicle.model());
        assert_eq!(2020, vehicle.year());
        assert_eq!(15000.5, vehicle.mileage());
    }

    #[test]
    fn test_should_reject_negative_mileage() {
        assert!(matches!(Chassis::new("Toyota", "Corolla", 2020, -1.0), Err(LabError::Validation { .. })));
    }

    #[test]
    fn test_should_drive() {
        let mut vehicle = Chassis::new("Toyota", "Corolla", 2020, 15000.5).expect("should build vehicle");
        vehicle.drive(100.0).expect("should drive");
        assert_eq!(15100.5, vehicle.mileage());
        vehicle.drive(0.0).expect("should allow zero distance");
        assert_eq!(15100.5, vehicle.mileage());
    }

    #[test]
    fn test_should_reject_negative_distance() {
        let mut vehicle = Chassis::new("Toyota", "Corolla", 2020, 15000.5).expect("should build vehicle");
        assert!(matches!(vehicle.drive(-10.0), Err(LabError::Validation { .. })));
        assert!(vehicle.drive(f64::INFINITY).is_err());
        assert_eq!(15000.5, vehicle.mileage());
    }

    #[test]
    fn test_should_format_chassis() {
        let vehicle = Chassis::new("Volvo", "FH16", 2018, 250000.0).expect("should build vehicle");
        assert_eq!("Volvo FH16, 2018, mileage: 250000.0 km", vehicle.to_string());
    }

    #[test]
    fn test_should_keep_validation_kind_when_reading_json() {
        let err = Chassis::from_json(r#"{"brand": "Lada", "model": "Niva", "year": 1990, "mileage": -5.0}"#).expect_err("should reject negative mileage");
        assert!(err.is_domain());
        let vehicle = Chassis::from_json(r#"{"brand": "Lada", "model": "Niva", "year": 1990, "mileage": 5.0}"#).expect("should read vehicle");
        assert_eq!(1990, vehicle.year());
    }
}

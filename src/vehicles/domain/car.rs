use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::error::{LabError, LabResult};
use crate::utils::format::decimal;
use crate::utils::validate::parse_validated;
use crate::vehicles::domain::Vehicle;
use crate::vehicles::domain::model::Chassis;

/// Car is a passenger vehicle with a door count and a lifetime mileage ceiling.
///
/// ```
/// use oop_labs::vehicles::domain::Vehicle;
/// use oop_labs::vehicles::domain::car::Car;
///
/// let mut car = Car::new("Toyota", "Corolla", 2020, 299950.0, 4).unwrap();
/// assert_eq!("Toyota Corolla, 2020, mileage: 299950.0 km, doors: 4", car.to_string());
/// assert!(car.drive(100.0).is_err());
/// car.drive(50.0).unwrap();
/// assert_eq!(300000.0, car.mileage());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CarRecord")]
pub struct Car {
    #[serde(flatten)]
    chassis: Chassis,
    num_doors: u8,
    rules: CarRules,
}

// CarRules are the configured limits a car was built under; they are serialized with it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarRules {
    pub mileage_limit: f64,
    pub min_doors: u8,
    pub max_doors: u8,
}

#[derive(Debug, Deserialize)]
struct CarRecord {
    brand: String,
    model: String,
    year: i32,
    mileage: f64,
    num_doors: u8,
    #[serde(default)]
    rules: Option<CarRules>,
}

impl CarRules {
    pub fn validate(&self) -> LabResult<()> {
        if !self.mileage_limit.is_finite() || self.mileage_limit <= 0.0 {
            return Err(LabError::validation(
                format!("car mileage limit must be a positive number, got {}", self.mileage_limit).as_str(),
                Some("car_mileage_limit".to_string())));
        }
        if self.min_doors == 0 {
            return Err(LabError::validation(
                "a car needs at least one door", Some("car_doors".to_string())));
        }
        if self.min_doors > self.max_doors {
            return Err(LabError::validation(
                format!("car door range {}..={} is empty", self.min_doors, self.max_doors).as_str(),
                Some("car_doors".to_string())));
        }
        Ok(())
    }
}

impl From<&Configuration> for CarRules {
    fn from(config: &Configuration) -> Self {
        Self {
            mileage_limit: config.car_mileage_limit,
            min_doors: config.car_min_doors,
            max_doors: config.car_max_doors,
        }
    }
}

impl Default for CarRules {
    fn default() -> Self {
        Self::from(&Configuration::new())
    }
}

impl Car {
    pub fn new(brand: &str, model: &str, year: i32, mileage: f64, num_doors: u8) -> LabResult<Self> {
        Self::with_rules(CarRules::default(), brand, model, year, mileage, num_doors)
    }

    pub fn with_config(config: &Configuration, brand: &str, model: &str, year: i32,
                       mileage: f64, num_doors: u8) -> LabResult<Self> {
        Self::with_rules(CarRules::from(config), brand, model, year, mileage, num_doors)
    }

    pub fn with_rules(rules: CarRules, brand: &str, model: &str, year: i32,
                      mileage: f64, num_doors: u8) -> LabResult<Self> {
        rules.validate()?;
        let chassis = Chassis::new(brand, model, year, mileage)?;
        if num_doors < rules.min_doors || num_doors > rules.max_doors {
            return Err(LabError::validation(
                format!("a car has {} to {} doors, got {}",
                        rules.min_doors, rules.max_doors, num_doors).as_str(),
                Some("door_count".to_string())));
        }
        Ok(Self {
            chassis,
            num_doors,
            rules,
        })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<CarRecord, Self>(json)
    }

    pub fn num_doors(&self) -> u8 {
        self.num_doors
    }

    pub fn rules(&self) -> &CarRules {
        &self.rules
    }

    pub fn mileage_limit(&self) -> f64 {
        self.rules.mileage_limit
    }
}

impl Vehicle for Car {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn drive(&mut self, distance: f64) -> LabResult<()> {
        if self.chassis.mileage() + distance > self.rules.mileage_limit {
            return Err(LabError::validation(
                format!("driving {} km from {} km would take the car past its {} km limit",
                        decimal(distance), decimal(self.chassis.mileage()), decimal(self.rules.mileage_limit)).as_str(),
                Some("mileage_limit".to_string())));
        }
        self.chassis.drive(distance)
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, doors: {}", self.chassis, self.num_doors)
    }
}

impl TryFrom<CarRecord> for Car {
    type Error = LabError;

    fn try_from(other: CarRecord) -> Result<Self, Self::Error> {
        Car::with_rules(other.rules.unwrap_or_default(), other.brand.as_str(), other.model.as_str(),
                        other.year, other.mileage, other.num_doors)
    }
}

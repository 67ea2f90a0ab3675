use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::containers::domain::Guarded;
use crate::core::error::{LabError, LabResult};
use crate::utils::validate::{ensure_non_negative, ensure_positive, parse_validated};

/// Trunk is a cargo space measured in liters.
///
/// ```
/// use oop_labs::containers::domain::trunk::Trunk;
///
/// let mut trunk = Trunk::new(500.0, 100.0).unwrap();
/// assert_eq!(400.0, trunk.get_free_space());
/// assert!(trunk.add_item(450.0).is_err());
/// trunk.add_item(50.0).unwrap();
/// assert_eq!(350.0, trunk.get_free_space());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrunkRecord")]
pub struct Trunk {
    capacity: f64,
    occupied_space: f64,
}

#[derive(Debug, Deserialize)]
struct TrunkRecord {
    capacity: f64,
    occupied_space: f64,
}

impl Trunk {
    pub fn new(capacity: f64, occupied_space: f64) -> LabResult<Self> {
        let capacity = ensure_positive(capacity, "trunk capacity")?;
        let occupied_space = ensure_non_negative(occupied_space, "occupied space")?;
        if occupied_space > capacity {
            return Err(LabError::validation(
                format!("occupied space {} exceeds trunk capacity {}", occupied_space, capacity).as_str(),
                Some("over_capacity".to_string())));
        }
        Ok(Self { capacity, occupied_space })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<TrunkRecord, Self>(json)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn occupied_space(&self) -> f64 {
        self.occupied_space
    }

    pub fn add_item(&mut self, item_volume: f64) -> LabResult<()> {
        let item_volume = ensure_positive(item_volume, "item volume")?;
        if self.occupied_space + item_volume > self.capacity {
            return Err(LabError::validation(
                format!("not enough room in trunk: {} free, {} requested", self.get_free_space(), item_volume).as_str(),
                Some("over_capacity".to_string())));
        }
        self.occupied_space += item_volume;
        debug!(item_volume, occupied_space = self.occupied_space, "item added to trunk");
        Ok(())
    }

    pub fn remove_item(&mut self, item_volume: f64) -> LabResult<()> {
        let item_volume = ensure_positive(item_volume, "item volume")?;
        if item_volume > self.occupied_space {
            return Err(LabError::validation(
                format!("item volume {} exceeds occupied space {}", item_volume, self.occupied_space).as_str(),
                Some("under_usage".to_string())));
        }
        self.occupied_space -= item_volume;
        debug!(item_volume, occupied_space = self.occupied_space, "item removed from trunk");
        Ok(())
    }

    pub fn get_free_space(&self) -> f64 {
        self.capacity - self.occupied_space
    }
}

impl Guarded for Trunk {
    type Amount = f64;

    fn usage(&self) -> f64 {
        self.occupied_space
    }

    fn bound(&self) -> Option<f64> {
        Some(self.capacity)
    }

    fn increase(&mut self, amount: f64) -> LabResult<()> {
        self.add_item(amount)
    }

    fn decrease(&mut self, amount: f64) -> LabResult<()> {
        self.remove_item(amount)
    }
}

impl TryFrom<TrunkRecord> for Trunk {
    type Error = LabError;

    fn try_from(other: TrunkRecord) -> Result<Self, Self::Error> {
        Trunk::new(other.capacity, other.occupied_space)
    }
}

#[cfg(test)]
mod tests {
    use crate::containers::domain::trunk::Trunk;
    use crate::core::error::LabError;

    #[test]
    fn test_should_build_trunk() {
        let trunk = Trunk::new(500.0, 100.0).expect("should build trunk");
        assert_eq!(500.0, trunk.capacity());
        assert_eq!(100.0, trunk.occupied_space());
        assert_eq!(400.0, trunk.get_free_space());
    }

    #[test]
    fn test_should_reject_invalid_trunk() {
        assert!(matches!(Trunk::new(0.0, 0.0), Err(LabError::Validation { .. })));
        assert!(matches!(Trunk::new(-10.0, 0.0), Err(LabError::Validation { .. })));
        assert!(matches!(Trunk::new(500.0, -1.0), Err(LabError::Validation { .. })));
        assert!(matches!(Trunk::new(500.0, 501.0), Err(LabError::Validation { .. })));
        assert!(Trunk::new(500.0, 500.0).is_ok());
    }

    #[test]
    fn test_should_add_items_up_to_capacity() {
        let mut trunk = Trunk::new(500.0, 100.0).expect("should build trunk");
        assert!(trunk.add_item(450.0).is_err());
        assert_eq!(400.0, trunk.get_free_space());
        trunk.add_item(400.0).expect("should fill trunk");
        assert_eq!(0.0, trunk.get_free_space());
    }

    #[test]
    fn test_should_remove_items() {
        let mut trunk = Trunk::new(500.0, 100.0).expect("should build trunk");
        trunk.remove_item(30.0).expect("should remove item");
        assert_eq!(70.0, trunk.occupied_space());
        let err = trunk.remove_item(71.0).expect_err("should not remove more than occupied");
        assert_eq!(Some("under_usage"), err.reason_code());
        assert_eq!(70.0, trunk.occupied_space());
    }

    #[test]
    fn test_should_reject_non_positive_volumes() {
        let mut trunk = Trunk::new(500.0, 100.0).expect("should build trunk");
        assert!(trunk.add_item(0.0).is_err());
        assert!(trunk.remove_item(-1.0).is_err());
        assert!(trunk.add_item(f64::NAN).is_err());
        assert_eq!(100.0, trunk.occupied_space());
    }

    #[test]
    fn test_should_deserialize_through_validation() {
        let trunk: Trunk = serde_json::from_str(r#"{"capacity": 60.0, "occupied_space": 20.0}"#).expect("should parse trunk");
        assert_eq!(40.0, trunk.get_free_space());
        assert!(serde_json::from_str::<Trunk>(r#"{"capacity": 60.0, "occupied_space": 80.0}"#).is_err());
    }

    #[test]
    fn test_should_keep_validation_kind_when_reading_json() {
        let err = Trunk::from_json(r#"{"capacity": 60.0, "occupied_space": 80.0}"#).expect_err("should reject overfull trunk");
        assert!(err.is_domain());
        assert!(matches!(Trunk::from_json(r#"{"capacity": true, "occupied_space": 0.0}"#), Err(LabError::TypeMismatch { .. })));
    }
}

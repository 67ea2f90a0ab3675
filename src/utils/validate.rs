use serde::de::DeserializeOwned;
use crate::core::error::{LabError, LabResult};

// parses the unchecked record shape, then runs the entity's checks on it
pub fn parse_validated<R, T>(json: &str) -> LabResult<T>
    where R: DeserializeOwned, T: TryFrom<R, Error = LabError> {
    let record: R = serde_json::from_str(json)?;
    T::try_from(record)
}

pub fn ensure_finite(value: f64, what: &str) -> LabResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LabError::validation(
            format!("{} must be a finite number, got {}", what, value).as_str(),
            Some("not_finite".to_string())))
    }
}

pub fn ensure_non_negative(value: f64, what: &str) -> LabResult<f64> {
    let value = ensure_finite(value, what)?;
    if value < 0.0 {
        return Err(LabError::validation(
            format!("{} cannot be negative, got {}", what, value).as_str(),
            Some("negative".to_string())));
    }
    Ok(value)
}

pub fn ensure_positive(value: f64, what: &str) -> LabResult<f64> {
    let value = ensure_finite(value, what)?;
    if value <= 0.0 {
        return Err(LabError::validation(
            format!("{} must be positive, got {}", what, value).as_str(),
            Some("not_positive".to_string())));
    }
    Ok(value)
}

pub fn ensure_positive_count<T>(value: T, what: &str) -> LabResult<T>
    where T: Copy + PartialOrd + Default + std::fmt::Display {
    if value <= T::default() {
        return Err(LabError::validation(
            format!("{} must be positive, got {}", what, value).as_str(),
            Some("not_positive".to_string())));
    }
    Ok(value)
}

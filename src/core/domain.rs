use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::Level;
use crate::core::error::{LabError, LabResult};
use crate::vehicles::domain::car::CarRules;

pub const CONFIG_ENV_VAR: &str = "OOP_LABS_CONFIG";

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> u64;
}

// Configuration abstracts tunable rules and logging options for the labs
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub car_mileage_limit: f64,
    pub car_min_doors: u8,
    pub car_max_doors: u8,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            car_mileage_limit: 300_000.0,
            car_min_doors: 2,
            car_max_doors: 5,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> LabResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(json.as_str())
    }

    // reads the file named by OOP_LABS_CONFIG, falling back to defaults when unset
    pub fn from_env() -> LabResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::from_file(Path::new(path.as_str())),
            _ => Ok(Self::new()),
        }
    }

    fn validate(&self) -> LabResult<()> {
        CarRules::from(self).validate()?;
        Level::from_str(self.log_level.as_str()).map_err(|_| LabError::validation(
            format!("unknown log level {:?}", self.log_level).as_str(),
            Some("log_level".to_string())))?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

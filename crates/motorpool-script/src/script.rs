//! Drive script types and loading.
//!
//! A `DriveScript` is deserialized from TOML and lists vehicles, each with
//! the ordered actions to apply to it:
//!
//! ```toml
//! [[vehicles]]
//! brand = "Toyota"
//! year = 2020
//! actions = ["start", "start", "stop", "brand"]
//! ```
//!
//! Brand and year are taken as written. Nothing here rejects an empty brand
//! or a negative year, because vehicles accept both.

use std::path::Path;

use serde::{Deserialize, Serialize};

use motorpool_contracts::error::{MotorpoolError, MotorpoolResult};

/// One operation applied to a vehicle. Written in kebab-case in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Start,
    Stop,
    Brand,
    Status,
}

/// A vehicle declaration plus the actions to run against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedVehicle {
    pub brand: String,
    pub year: i32,

    /// Applied in declaration order. Defaults to no actions.
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A complete drive script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriveScript {
    #[serde(default)]
    pub vehicles: Vec<ScriptedVehicle>,
}

impl DriveScript {
    /// Parse `s` as a TOML drive script.
    ///
    /// Returns `MotorpoolError::Config` if the TOML is malformed, names an
    /// unknown action, or does not match the script schema.
    pub fn from_toml_str(s: &str) -> MotorpoolResult<Self> {
        toml::from_str(s).map_err(|e| MotorpoolError::Config {
            reason: format!("failed to parse drive script TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a drive script.
    pub fn from_file(path: &Path) -> MotorpoolResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MotorpoolError::Config {
            reason: format!("failed to read drive script '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}

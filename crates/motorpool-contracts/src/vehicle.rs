//! Serializable views of a vehicle.

use serde::{Deserialize, Serialize};

use crate::engine::EngineState;

/// A point-in-time copy of a vehicle's identity and engine state.
///
/// `year` is carried verbatim; nothing here checks that it is plausible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub brand: String,
    pub year: i32,
    pub state: EngineState,
}

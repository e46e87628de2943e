//! Engine on/off state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two states of a vehicle's engine.
///
/// `Stopped` is the initial state. There is no terminal state; a vehicle may
/// cycle between the two indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    #[default]
    Stopped,
    Running,
}

impl EngineState {
    pub fn is_running(self) -> bool {
        matches!(self, EngineState::Running)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Stopped => f.write_str("stopped"),
            EngineState::Running => f.write_str("running"),
        }
    }
}

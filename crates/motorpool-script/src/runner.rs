//! Drive script execution.
//!
//! `run_script` builds one vehicle per `ScriptedVehicle`, applies its actions
//! in order, and collects what each call reported. `stop_engine()` reports
//! nothing, so a stop is recorded only as `StopRequested`; the following
//! `status` action (or the vehicle's `final_state`) shows its effect.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use motorpool_contracts::engine::EngineState;
use motorpool_core::{StatusSink, Vehicle};

use crate::script::{Action, DriveScript, ScriptedVehicle};

/// What a single action reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// `start_engine()` returned true.
    Started,
    /// `start_engine()` returned false.
    AlreadyRunning,
    /// `stop_engine()` was called.
    StopRequested,
    Brand(String),
    Status(EngineState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub action: Action,
    pub outcome: Outcome,
}

/// Every step run against one vehicle, plus its engine state afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleReport {
    pub brand: String,
    pub year: i32,
    pub steps: Vec<StepOutcome>,
    pub final_state: EngineState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptReport {
    pub vehicles: Vec<VehicleReport>,
}

impl ScriptReport {
    /// Number of successful starts across the whole fleet.
    pub fn starts(&self) -> usize {
        self.vehicles
            .iter()
            .flat_map(|v| v.steps.iter())
            .filter(|s| s.outcome == Outcome::Started)
            .count()
    }
}

/// Run every vehicle in `script`, giving each the sink `make_sink` returns.
pub fn run_script<S, F>(script: &DriveScript, mut make_sink: F) -> ScriptReport
where
    S: StatusSink,
    F: FnMut(&ScriptedVehicle) -> S,
{
    info!(vehicles = script.vehicles.len(), "running drive script");

    let vehicles = script
        .vehicles
        .iter()
        .map(|entry| {
            let mut vehicle = Vehicle::with_sink(entry.brand.clone(), entry.year, make_sink(entry));
            let steps = entry
                .actions
                .iter()
                .map(|&action| StepOutcome {
                    action,
                    outcome: apply(&mut vehicle, action),
                })
                .collect();

            debug!(brand = %entry.brand, final_state = %vehicle.engine_state(), "vehicle script done");

            VehicleReport {
                brand: entry.brand.clone(),
                year: entry.year,
                steps,
                final_state: vehicle.engine_state(),
            }
        })
        .collect();

    ScriptReport { vehicles }
}

fn apply<S: StatusSink>(vehicle: &mut Vehicle<S>, action: Action) -> Outcome {
    match action {
        Action::Start => {
            if vehicle.start_engine() {
                Outcome::Started
            } else {
                Outcome::AlreadyRunning
            }
        }
        Action::Stop => {
            vehicle.stop_engine();
            Outcome::StopRequested
        }
        Action::Brand => Outcome::Brand(vehicle.brand().to_string()),
        Action::Status => Outcome::Status(vehicle.engine_state()),
    }
}

//! # motorpool-script
//!
//! TOML drive scripts: declare a small fleet, list the actions to apply to
//! each vehicle, run them, and get back a serializable report.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use motorpool_core::ConsoleSink;
//! use motorpool_script::{run_script, DriveScript};
//!
//! let script = DriveScript::from_file(Path::new("demo/scripts/fleet.toml"))?;
//! let report = run_script(&script, |_| ConsoleSink);
//! println!("{} successful starts", report.starts());
//! ```

pub mod runner;
pub mod script;

pub use runner::{run_script, Outcome, ScriptReport, StepOutcome, VehicleReport};
pub use script::{Action, DriveScript, ScriptedVehicle};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use motorpool_contracts::{engine::EngineState, error::MotorpoolError};
    use motorpool_core::RecordingSink;

    use crate::{run_script, Action, DriveScript, Outcome};

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_fleet() {
        let toml = r#"
            [[vehicles]]
            brand = "Toyota"
            year = 2020
            actions = ["start", "stop", "brand", "status"]

            [[vehicles]]
            brand = "Ford"
            year = 1908
        "#;

        let script = DriveScript::from_toml_str(toml).unwrap();
        assert_eq!(script.vehicles.len(), 2);
        assert_eq!(
            script.vehicles[0].actions,
            vec![Action::Start, Action::Stop, Action::Brand, Action::Status]
        );
        assert!(
            script.vehicles[1].actions.is_empty(),
            "missing actions must default to an empty list"
        );
    }

    #[test]
    fn test_unvalidated_inputs_are_accepted() {
        let toml = r#"
            [[vehicles]]
            brand = ""
            year = -5
        "#;

        let script = DriveScript::from_toml_str(toml).unwrap();
        assert_eq!(script.vehicles[0].brand, "");
        assert_eq!(script.vehicles[0].year, -5);
    }

    #[test]
    fn test_unknown_action_rejected() {
        let toml = r#"
            [[vehicles]]
            brand = "Toyota"
            year = 2020
            actions = ["start", "accelerate"]
        "#;

        match DriveScript::from_toml_str(toml) {
            Err(MotorpoolError::Config { reason }) => {
                assert!(
                    reason.contains("failed to parse drive script TOML"),
                    "unexpected reason: {reason}"
                );
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DriveScript::from_file(std::path::Path::new("/nonexistent/fleet.toml"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("/nonexistent/fleet.toml"));
    }

    #[test]
    fn test_empty_script() {
        let script = DriveScript::from_toml_str("").unwrap();
        let report = run_script(&script, |_| RecordingSink::new());
        assert!(report.vehicles.is_empty());
        assert_eq!(report.starts(), 0);
    }

    // ── Running ───────────────────────────────────────────────────────────────

    #[test]
    fn test_run_records_outcomes_in_order() {
        let toml = r#"
            [[vehicles]]
            brand = "Toyota"
            year = 2020
            actions = ["stop", "start", "start", "status", "stop", "status", "start", "brand"]
        "#;

        let script = DriveScript::from_toml_str(toml).unwrap();
        let sink = RecordingSink::new();
        let report = run_script(&script, |_| sink.clone());

        let outcomes: Vec<Outcome> = report.vehicles[0]
            .steps
            .iter()
            .map(|s| s.outcome.clone())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::StopRequested,
                Outcome::Started,
                Outcome::AlreadyRunning,
                Outcome::Status(EngineState::Running),
                Outcome::StopRequested,
                Outcome::Status(EngineState::Stopped),
                Outcome::Started,
                Outcome::Brand("Toyota".to_string()),
            ]
        );
        assert_eq!(report.vehicles[0].final_state, EngineState::Running);
        assert_eq!(report.starts(), 2);

        // The leading stop on a stopped engine and the repeated start are silent.
        assert_eq!(
            sink.messages(),
            vec![
                "Toyota engine started.",
                "Toyota engine stopped.",
                "Toyota engine started.",
            ]
        );
    }

    #[test]
    fn test_each_vehicle_gets_its_own_sink() {
        let toml = r#"
            [[vehicles]]
            brand = "Honda"
            year = 2010
            actions = ["start"]

            [[vehicles]]
            brand = "Volvo"
            year = 1999
            actions = ["start", "stop"]
        "#;

        let script = DriveScript::from_toml_str(toml).unwrap();
        let mut sinks: HashMap<String, RecordingSink> = HashMap::new();
        let report = run_script(&script, |entry| {
            let sink = RecordingSink::new();
            sinks.insert(entry.brand.clone(), sink.clone());
            sink
        });

        assert_eq!(report.starts(), 2);
        assert_eq!(sinks["Honda"].messages(), vec!["Honda engine started."]);
        assert_eq!(
            sinks["Volvo"].messages(),
            vec!["Volvo engine started.", "Volvo engine stopped."]
        );
        assert_eq!(report.vehicles[1].final_state, EngineState::Stopped);
    }

    #[test]
    fn test_report_serializes() {
        let toml = r#"
            [[vehicles]]
            brand = "Fiat"
            year = 1957
            actions = ["start", "start"]
        "#;

        let script = DriveScript::from_toml_str(toml).unwrap();
        let report = run_script(&script, |_| RecordingSink::new());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["vehicles"][0]["brand"], "Fiat");
        assert_eq!(json["vehicles"][0]["steps"][0]["action"], "start");
        assert_eq!(json["vehicles"][0]["steps"][0]["outcome"]["outcome"], "started");
        assert_eq!(
            json["vehicles"][0]["steps"][1]["outcome"]["outcome"],
            "already_running"
        );
        assert_eq!(json["vehicles"][0]["final_state"], "running");
    }
}

//! Status notifications emitted on successful engine transitions.
//!
//! A `StatusNotice` is produced exactly once per successful start or stop.
//! No-op calls (starting a running engine, stopping a stopped one) produce
//! nothing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which transition a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Started,
    Stopped,
}

impl NoticeKind {
    /// The past-tense verb used in the human-readable message.
    pub fn verb(self) -> &'static str {
        match self {
            NoticeKind::Started => "started",
            NoticeKind::Stopped => "stopped",
        }
    }
}

/// A single human-readable status notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusNotice {
    /// Brand of the vehicle whose engine changed state.
    pub brand: String,
    pub kind: NoticeKind,
    /// Wall-clock time (UTC) of the transition.
    pub timestamp: DateTime<Utc>,
}

impl StatusNotice {
    /// Build a notice stamped with the current time.
    pub fn new(brand: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            brand: brand.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// The literal notification text: `"<brand> engine started."` or
    /// `"<brand> engine stopped."`.
    pub fn message(&self) -> String {
        format!("{} engine {}.", self.brand, self.kind.verb())
    }
}

impl fmt::Display for StatusNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} engine {}.", self.brand, self.kind.verb())
    }
}

//! Built-in `StatusSink` implementations.
//!
//! - `ConsoleSink` prints each notice's message on its own line to stdout.
//!   It is the sink `Vehicle::new` uses.
//! - `RecordingSink` keeps every notice in memory, in delivery order. Clones
//!   share one buffer, so a test can keep a handle while the vehicle owns
//!   another.

use std::io::Write;
use std::sync::{Arc, Mutex};

use motorpool_contracts::{
    error::{MotorpoolError, MotorpoolResult},
    notice::StatusNotice,
};

use crate::traits::StatusSink;

// ── ConsoleSink ───────────────────────────────────────────────────────────────

/// Writes `"<brand> engine started."` / `"<brand> engine stopped."` lines to
/// standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn notify(&self, notice: &StatusNotice) -> MotorpoolResult<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", notice.message()).map_err(|e| MotorpoolError::Notification {
            reason: format!("failed to write to stdout: {}", e),
        })
    }
}

// ── RecordingSink ─────────────────────────────────────────────────────────────

/// An in-memory sink that records every notice it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<StatusNotice>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices received so far, oldest first.
    pub fn notices(&self) -> Vec<StatusNotice> {
        self.notices
            .lock()
            .expect("recording sink lock poisoned")
            .clone()
    }

    /// The rendered message of every notice received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .expect("recording sink lock poisoned")
            .iter()
            .map(StatusNotice::message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().expect("recording sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every recorded notice. Affects all clones.
    pub fn clear(&self) {
        self.notices
            .lock()
            .expect("recording sink lock poisoned")
            .clear();
    }
}

impl StatusSink for RecordingSink {
    fn notify(&self, notice: &StatusNotice) -> MotorpoolResult<()> {
        let mut notices = self.notices.lock().map_err(|e| MotorpoolError::Notification {
            reason: format!("recording sink lock poisoned: {}", e),
        })?;
        notices.push(notice.clone());
        Ok(())
    }
}

//! The `Vehicle` entity.
//!
//! A vehicle has a brand and a manufacture year, both fixed at construction,
//! and an engine that is either stopped or running:
//!
//!   Stopped ──start_engine()──▶ Running ──stop_engine()──▶ Stopped
//!
//! `start_engine()` reports whether it changed anything; `stop_engine()` does
//! not. Neither ever fails, and construction accepts any brand and any year.

use std::fmt;

use tracing::{debug, warn};

use motorpool_contracts::{
    engine::EngineState,
    notice::{NoticeKind, StatusNotice},
    vehicle::VehicleSnapshot,
};

use crate::{sink::ConsoleSink, traits::StatusSink};

/// A single vehicle with an on/off engine.
///
/// Notices for successful transitions go to `S`. `Vehicle::new` uses
/// `ConsoleSink`; use `Vehicle::with_sink` to send them elsewhere.
#[derive(Debug)]
pub struct Vehicle<S: StatusSink = ConsoleSink> {
    brand: String,
    year: i32,
    state: EngineState,
    sink: S,
}

impl Vehicle<ConsoleSink> {
    /// Create a stopped vehicle that prints its notices to stdout.
    ///
    /// `brand` and `year` are stored verbatim. Empty brands and implausible
    /// years (negative, far future) are accepted.
    pub fn new(brand: impl Into<String>, year: i32) -> Self {
        Self::with_sink(brand, year, ConsoleSink)
    }
}

impl<S: StatusSink> Vehicle<S> {
    /// Create a stopped vehicle that delivers its notices to `sink`.
    pub fn with_sink(brand: impl Into<String>, year: i32, sink: S) -> Self {
        Self {
            brand: brand.into(),
            year,
            state: EngineState::Stopped,
            sink,
        }
    }

    /// Start the engine.
    ///
    /// Returns `true` and emits `"<brand> engine started."` if the engine was
    /// stopped. Returns `false` with no state change and no notice if it was
    /// already running.
    pub fn start_engine(&mut self) -> bool {
        if self.state.is_running() {
            debug!(brand = %self.brand, state = %self.state, "start ignored, engine already running");
            return false;
        }

        self.state = EngineState::Running;
        debug!(brand = %self.brand, state = %self.state, "engine started");
        self.emit(NoticeKind::Started);
        true
    }

    /// Stop the engine.
    ///
    /// Emits `"<brand> engine stopped."` if the engine was running. Stopping a
    /// stopped engine does nothing and reports nothing.
    pub fn stop_engine(&mut self) {
        if !self.state.is_running() {
            debug!(brand = %self.brand, state = %self.state, "stop ignored, engine already stopped");
            return;
        }

        self.state = EngineState::Stopped;
        debug!(brand = %self.brand, state = %self.state, "engine stopped");
        self.emit(NoticeKind::Stopped);
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn engine_state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            brand: self.brand.clone(),
            year: self.year,
            state: self.state,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // A failed delivery is logged and dropped; the transition stands.
    fn emit(&self, kind: NoticeKind) {
        let notice = StatusNotice::new(self.brand.clone(), kind);
        if let Err(e) = self.sink.notify(&notice) {
            warn!(
                brand = %self.brand,
                kind = kind.verb(),
                error = %e,
                "status notice dropped"
            );
        }
    }
}

impl<S: StatusSink> fmt::Display for Vehicle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.brand, self.year)
    }
}

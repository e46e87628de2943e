//! # motorpool-core
//!
//! The `Vehicle` entity and the sinks its status notices are delivered to.
//!
//! This crate provides:
//! - `Vehicle`, with guarded `start_engine()` / `stop_engine()` and its
//!   read-only accessors
//! - the `StatusSink` trait and two implementations, `ConsoleSink` and
//!   `RecordingSink`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use motorpool_core::Vehicle;
//!
//! let mut car = Vehicle::new("Toyota", 2020);
//! assert!(car.start_engine());   // prints "Toyota engine started."
//! assert!(!car.start_engine());  // already running
//! car.stop_engine();             // prints "Toyota engine stopped."
//! ```

pub mod sink;
pub mod traits;
pub mod vehicle;

pub use sink::{ConsoleSink, RecordingSink};
pub use traits::StatusSink;
pub use vehicle::Vehicle;

// ── Tests ─────────────────────────────────────────────────────────────────────

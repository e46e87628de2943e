//! Error types for the motorpool workspace.
//!
//! The vehicle itself never fails. These variants cover the edges: status
//! sinks that cannot deliver a notice, and drive scripts that cannot be
//! loaded.

use thiserror::Error;

/// The unified error type for the motorpool crates.
#[derive(Debug, Error)]
pub enum MotorpoolError {
    /// A drive script or other configuration input is missing or malformed.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A status sink could not deliver a notice.
    ///
    /// Vehicles log and swallow this; it never changes engine state.
    #[error("status notification failed: {reason}")]
    Notification { reason: String },
}

/// Convenience alias used throughout the motorpool crates.
pub type MotorpoolResult<T> = Result<T, MotorpoolError>;

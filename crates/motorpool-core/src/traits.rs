//! The status notification seam.
//!
//! Where status notices end up is not part of a vehicle's contract. A vehicle
//! hands every notice to its `StatusSink` and carries on regardless of what
//! the sink does with it.

use motorpool_contracts::{error::MotorpoolResult, notice::StatusNotice};

/// A destination for status notices.
///
/// `notify` is called exactly once per successful start or stop, and never
/// for no-op calls. An `Err` is logged by the vehicle and otherwise ignored:
/// the engine transition has already happened.
pub trait StatusSink: Send + Sync {
    /// Deliver one notice.
    fn notify(&self, notice: &StatusNotice) -> MotorpoolResult<()>;
}

impl<S: StatusSink + ?Sized> StatusSink for Box<S> {
    fn notify(&self, notice: &StatusNotice) -> MotorpoolResult<()> {
        (**self).notify(notice)
    }
}

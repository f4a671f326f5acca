//! Pause test execution.

use crate::action::TestAction;
use crate::context::TestContext;
use crate::error::RigError;
use std::time::Duration;

/// Blocks the calling thread for a fixed duration.
///
/// Useful when a collaborator needs wall-clock time to settle and no
/// observable condition exists to wait on.
#[derive(Debug, Clone)]
pub struct SleepAction {
    duration: Duration,
}

impl SleepAction {
    /// Sleep for the given duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Sleep for the given number of milliseconds.
    #[must_use]
    pub const fn millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl TestAction for SleepAction {
    fn name(&self) -> &str {
        "sleep"
    }

    fn execute(&self, _context: &mut TestContext) -> Result<(), RigError> {
        tracing::debug!(duration = ?self.duration, "sleeping");
        std::thread::sleep(self.duration);
        Ok(())
    }
}

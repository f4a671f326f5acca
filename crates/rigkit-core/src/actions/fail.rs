//! Deliberately fail the test.

use crate::action::TestAction;
use crate::context::TestContext;
use crate::error::RigError;

/// Fails with a configurable message, after variable substitution.
///
/// The canonical failing child for exercising container failure
/// semantics, and a way to mark not-yet-reachable branches in a test plan.
#[derive(Debug, Clone)]
pub struct FailAction {
    message: String,
}

impl Default for FailAction {
    fn default() -> Self {
        Self::new()
    }
}

impl FailAction {
    /// Create a fail action with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "generated error to interrupt test execution".into(),
        }
    }

    /// Override the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl TestAction for FailAction {
    fn name(&self) -> &str {
        "fail"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        let message = context.replace_dynamic_content(&self.message)?;
        Err(RigError::action_failed(self.name(), message))
    }
}

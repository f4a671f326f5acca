//! Log a message with variable substitution.

use crate::action::TestAction;
use crate::context::TestContext;
use crate::error::RigError;

/// Logs its message at info level after substituting variables.
///
/// # Example
///
/// ```rust
/// use rigkit_core::actions::EchoAction;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let mut ctx = TestContext::new();
/// ctx.set_variable("user", "alice");
/// EchoAction::new("logged in as ${user}").execute(&mut ctx).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct EchoAction {
    message: String,
}

impl EchoAction {
    /// Create an echo action with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TestAction for EchoAction {
    fn name(&self) -> &str {
        "echo"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        let message = context.replace_dynamic_content(&self.message)?;
        tracing::info!(target: "rigkit::echo", "{message}");
        Ok(())
    }
}

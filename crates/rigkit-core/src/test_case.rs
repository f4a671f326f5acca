//! The test case: a named action list with guaranteed cleanup.

use crate::action::{BoxedAction, TestAction};
use crate::context::TestContext;
use crate::error::RigError;

/// A named, ordered action list with an always-run cleanup block.
///
/// Execution runs the main actions in order and aborts on the first
/// failure; the `finally` actions then run unconditionally, in order,
/// regardless of how the main sequence ended. A failure inside `finally`
/// is logged and surfaced only when the main sequence succeeded; a
/// failing test is reported with its own error, not the cleanup's.
///
/// # Example
///
/// ```rust
/// use rigkit_core::test_case::TestCase;
/// use rigkit_core::actions::EchoAction;
/// use rigkit_core::context::TestContext;
///
/// let case = TestCase::new("smoke")
///     .description("basic wiring check")
///     .action(EchoAction::new("running"))
///     .finally(EchoAction::new("cleaning up"));
///
/// let mut ctx = TestContext::new();
/// case.execute(&mut ctx).unwrap();
/// ```
pub struct TestCase {
    name: String,
    description: Option<String>,
    actions: Vec<BoxedAction>,
    finally_actions: Vec<BoxedAction>,
}

impl TestCase {
    /// Create an empty test case.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            actions: Vec::new(),
            finally_actions: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a main action.
    #[must_use]
    pub fn action(mut self, action: impl TestAction + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Append an already-boxed main action.
    #[must_use]
    pub fn boxed_action(mut self, action: BoxedAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Append a cleanup action that always runs.
    #[must_use]
    pub fn finally(mut self, action: impl TestAction + 'static) -> Self {
        self.finally_actions.push(Box::new(action));
        self
    }

    /// The test case name.
    #[must_use]
    pub fn case_name(&self) -> &str {
        &self.name
    }

    /// The test case description, if set.
    #[must_use]
    pub fn case_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Execute the test case against the given context.
    pub fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        tracing::info!(case = %self.name, "executing test case");

        let mut outcome = Ok(());
        for action in &self.actions {
            tracing::debug!(case = %self.name, action = action.name(), "executing action");
            if let Err(err) = action.execute(context) {
                tracing::error!(case = %self.name, action = action.name(), %err, "action failed");
                outcome = Err(err);
                break;
            }
        }

        for action in &self.finally_actions {
            tracing::debug!(case = %self.name, action = action.name(), "executing finally action");
            if let Err(err) = action.execute(context) {
                tracing::warn!(case = %self.name, action = action.name(), %err, "finally action failed");
                if outcome.is_ok() {
                    outcome = Err(err);
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CreateVariablesAction, FailAction};

    #[test]
    fn test_finally_runs_after_failure() {
        let mut ctx = TestContext::new();
        let case = TestCase::new("t")
            .action(FailAction::new().message("body failed"))
            .finally(CreateVariablesAction::new().variable("cleaned", "yes"));

        let err = case.execute(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("body failed"));
        assert!(ctx.has_variable("cleaned"));
    }

    #[test]
    fn test_body_failure_wins_over_finally_failure() {
        let mut ctx = TestContext::new();
        let case = TestCase::new("t")
            .action(FailAction::new().message("body failed"))
            .finally(FailAction::new().message("cleanup failed"));

        let err = case.execute(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("body failed"));
    }

    #[test]
    fn test_finally_failure_surfaces_when_body_passes() {
        let mut ctx = TestContext::new();
        let case = TestCase::new("t").finally(FailAction::new().message("cleanup failed"));

        let err = case.execute(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("cleanup failed"));
    }

    #[test]
    fn test_abort_on_first_failure() {
        let mut ctx = TestContext::new();
        let case = TestCase::new("t")
            .action(CreateVariablesAction::new().variable("first", "ran"))
            .action(FailAction::new())
            .action(CreateVariablesAction::new().variable("third", "ran"));

        assert!(case.execute(&mut ctx).is_err());
        assert!(ctx.has_variable("first"));
        assert!(!ctx.has_variable("third"));
    }
}

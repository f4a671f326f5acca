//! Conditionally guarded action sequence.

use super::run_all;
use crate::action::{BoxedAction, TestAction};
use crate::context::TestContext;
use crate::error::RigError;

/// Executes an ordered child-action list behind a boolean guard.
///
/// On execution the condition is substituted and evaluated against the
/// current context. If it holds, the children run in order and the first
/// failure aborts the rest, propagating unchanged. If it does not hold,
/// execution fails with [`RigError::GuardViolation`].
///
/// The guard is deliberately not skip-on-false: a selection whose
/// condition is false was not supposed to be executed at all, and running
/// it anyway is a bug in the calling test plan. Callers that want to
/// branch should decide *before* executing the selection; callers that
/// want to tolerate the rejected outcome can match on
/// [`RigError::is_guard_violation`].
///
/// # Example
///
/// ```rust
/// use rigkit_core::container::Selection;
/// use rigkit_core::actions::EchoAction;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let mut ctx = TestContext::new();
/// ctx.set_variable("env", "staging");
///
/// Selection::new("${env} = staging")
///     .action(EchoAction::new("running staging-only checks"))
///     .execute(&mut ctx)
///     .unwrap();
/// ```
pub struct Selection {
    condition: String,
    actions: Vec<BoxedAction>,
}

impl Selection {
    /// Create a selection guarded by `condition`.
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            actions: Vec::new(),
        }
    }

    /// Append a child action.
    #[must_use]
    pub fn action(mut self, action: impl TestAction + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Append an already-boxed child action.
    #[must_use]
    pub fn boxed_action(mut self, action: BoxedAction) -> Self {
        self.actions.push(action);
        self
    }

    /// The guard condition, as configured.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Number of child actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the selection has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl TestAction for Selection {
    fn name(&self) -> &str {
        "selection"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        let condition = context.replace_dynamic_content(&self.condition)?;

        if !crate::expression::evaluate(&condition)? {
            tracing::debug!(%condition, "selection guard rejected");
            return Err(RigError::GuardViolation { condition });
        }

        tracing::debug!(%condition, children = self.actions.len(), "selection guard passed");
        run_all(&self.actions, context)
    }
}

//! Unconditional ordered action sequence.

use super::run_all;
use crate::action::{BoxedAction, TestAction};
use crate::context::TestContext;
use crate::error::RigError;

/// Executes its children in order, aborting on the first failure.
///
/// The unconditional counterpart of
/// [`Selection`](super::Selection); useful for grouping actions so a
/// whole block can be nested into another container.
#[derive(Default)]
pub struct Sequence {
    actions: Vec<BoxedAction>,
}

impl Sequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Number of child actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the sequence has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl TestAction for Sequence {
    fn name(&self) -> &str {
        "sequence"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        run_all(&self.actions, context)
    }
}

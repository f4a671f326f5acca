//! Repeat-until-true loop container.

use super::run_all;
use crate::action::{BoxedAction, TestAction};
use crate::context::TestContext;
use crate::error::RigError;

/// Repeats its children until an exit condition evaluates to true.
///
/// Each pass binds the iteration index (starting at 1) under the
/// configured variable name, runs the children in order, then evaluates
/// the exit condition, so children always execute at least once. A
/// failing child aborts the loop and propagates unchanged.
///
/// No iteration cap is imposed; an exit condition that never becomes true
/// loops forever, matching the layer's no-timeout contract.
///
/// # Example
///
/// ```rust
/// use rigkit_core::container::Repeat;
/// use rigkit_core::actions::EchoAction;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let mut ctx = TestContext::new();
/// Repeat::until("${i} gt= 3")
///     .action(EchoAction::new("pass ${i}"))
///     .execute(&mut ctx)
///     .unwrap();
/// ```
pub struct Repeat {
    condition: String,
    index_name: String,
    actions: Vec<BoxedAction>,
}

impl Repeat {
    /// Create a loop that exits once `condition` evaluates to true.
    pub fn until(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            index_name: "i".into(),
            actions: Vec::new(),
        }
    }

    /// Rename the iteration index variable (default `i`).
    #[must_use]
    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// Append a child action.
    #[must_use]
    pub fn action(mut self, action: impl TestAction + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

impl TestAction for Repeat {
    fn name(&self) -> &str {
        "repeat"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        let mut index: u64 = 0;

        loop {
            index += 1;
            context.set_variable(self.index_name.clone(), index.to_string());

            run_all(&self.actions, context)?;

            if context.evaluate_condition(&self.condition)? {
                tracing::debug!(iterations = index, "repeat exit condition met");
                return Ok(());
            }
        }
    }
}

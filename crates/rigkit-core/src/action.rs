//! The test action abstraction.
//!
//! Every step a test case takes is a [`TestAction`], from sending a
//! message to running a guarded block of children. Actions are
//! polymorphic trait objects composed into ordered lists by test cases and
//! containers, and execute synchronously on the calling thread against the
//! shared [`TestContext`](crate::context::TestContext).

use crate::context::TestContext;
use crate::error::RigError;

/// A single unit of test execution.
///
/// Implementations should be cheap to construct and hold no state beyond
/// their configuration; per-run state belongs in the context. An action
/// fails by returning an error, which the enclosing container or test case
/// propagates unchanged.
///
/// # Example
///
/// ```rust
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
/// use rigkit_core::error::RigError;
///
/// struct BindHost;
///
/// impl TestAction for BindHost {
///     fn name(&self) -> &str {
///         "bind-host"
///     }
///
///     fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
///         context.set_variable("host", "localhost");
///         Ok(())
///     }
/// }
/// ```
pub trait TestAction: Send + Sync {
    /// Short name identifying the action kind in logs and failures.
    fn name(&self) -> &str {
        "test-action"
    }

    /// Execute the action against the given context.
    fn execute(&self, context: &mut TestContext) -> Result<(), RigError>;
}

/// A boxed action, as held by containers and test cases.
pub type BoxedAction = Box<dyn TestAction>;

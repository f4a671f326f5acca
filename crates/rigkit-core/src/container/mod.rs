//! Container actions composing ordered child-action lists.
//!
//! Containers are themselves [`TestAction`](crate::action::TestAction)s,
//! so they nest freely. All of them share the same failure contract:
//! children run strictly in list order, synchronously, on the calling
//! thread; the first failing child aborts the remainder and its error
//! propagates to the caller unchanged.
//!
//! - [`Selection`] - guards its children behind a boolean condition, and
//!   treats a false condition as a contract violation rather than a skip
//! - [`Sequence`] - unconditional ordered execution
//! - [`Template`] - reusable parameterized action list, optionally run
//!   against a local context scope
//! - [`Repeat`] - repeat-until-true loop with an index variable

mod repeat;
mod selection;
mod sequence;
mod template;

pub use repeat::Repeat;
pub use selection::Selection;
pub use sequence::Sequence;
pub use template::Template;

use crate::action::BoxedAction;
use crate::context::TestContext;
use crate::error::RigError;

/// Run children in order, aborting on the first failure.
///
/// The failing child's error is returned unchanged.
pub(crate) fn run_all(actions: &[BoxedAction], context: &mut TestContext) -> Result<(), RigError> {
    for action in actions {
        tracing::debug!(action = action.name(), "executing child action");
        action.execute(context)?;
    }
    Ok(())
}

//! # rigkit-core
//!
//! Core action model and execution context for the rigkit integration-test
//! framework.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Action model**: the [`action::TestAction`] trait every test step
//!   implements
//! - **Execution context**: [`context::TestContext`] with `${...}` variable
//!   substitution and boolean condition evaluation
//! - **Containers**: [`container::Selection`], [`container::Sequence`],
//!   [`container::Template`], and [`container::Repeat`] compose child
//!   actions with first-failure-aborts semantics
//! - **Test cases**: [`test_case::TestCase`] with an always-run cleanup
//!   block
//! - **Error handling**: the unified [`error::RigError`] type with rich
//!   diagnostics
//!
//! Everything executes synchronously on the calling thread: a test case
//! run is single-threaded, and a container blocks until its children
//! complete or one fails. Endpoint abstractions (message transports and
//! the endpoint resolver) live in `rigkit-endpoint`.
//!
//! # Example
//!
//! ```rust
//! use rigkit_core::actions::{CreateVariablesAction, EchoAction};
//! use rigkit_core::container::Selection;
//! use rigkit_core::context::TestContext;
//! use rigkit_core::test_case::TestCase;
//!
//! let case = TestCase::new("login-flow")
//!     .action(CreateVariablesAction::new().variable("user", "alice"))
//!     .action(
//!         Selection::new("${user} = alice")
//!             .action(EchoAction::new("running checks for ${user}")),
//!     );
//!
//! let mut ctx = TestContext::new();
//! case.execute(&mut ctx).unwrap();
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod actions;
pub mod container;
pub mod context;
pub mod error;
pub mod expression;
pub mod message;
pub mod test_case;

// Re-export commonly used types at the crate root
pub use action::{BoxedAction, TestAction};
pub use container::{Repeat, Selection, Sequence, Template};
pub use context::TestContext;
pub use error::{RigError, RigResultExt};
pub use message::Message;
pub use test_case::TestCase;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use rigkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::action::{BoxedAction, TestAction};
    pub use crate::actions::{CreateVariablesAction, EchoAction, FailAction, SleepAction};
    pub use crate::container::{Repeat, Selection, Sequence, Template};
    pub use crate::context::TestContext;
    pub use crate::error::{RigError, RigResultExt};
    pub use crate::message::Message;
    pub use crate::test_case::TestCase;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let _case = TestCase::new("wiring");
        let _ctx = TestContext::new();
        let _msg = Message::text("ping");
    }
}

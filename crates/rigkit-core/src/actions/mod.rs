//! Built-in leaf actions.
//!
//! These cover the test-case plumbing every suite needs: tracing progress
//! ([`EchoAction`]), forcing a failure ([`FailAction`]), pausing
//! ([`SleepAction`]), and binding variables
//! ([`CreateVariablesAction`]). Message-oriented actions live in the
//! endpoint crate next to the endpoint abstractions they drive.

mod create_variables;
mod echo;
mod fail;
mod sleep;

pub use create_variables::CreateVariablesAction;
pub use echo::EchoAction;
pub use fail::FailAction;
pub use sleep::SleepAction;

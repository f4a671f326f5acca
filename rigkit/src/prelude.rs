//! Prelude module for convenient imports.
//!
//! Import everything you need with a single use statement:
//!
//! ```rust
//! use rigkit::prelude::*;
//!
//! let mut ctx = TestContext::new();
//! ctx.set_variable("env", "staging");
//! let case = TestCase::new("smoke").action(EchoAction::new("running on ${env}"));
//! case.execute(&mut ctx).unwrap();
//! ```
//!
//! ## Included Types
//!
//! ### Core Types
//! - Action model ([`TestAction`], [`BoxedAction`])
//! - Containers ([`Selection`], [`Sequence`], [`Template`], [`Repeat`])
//! - Context and test case ([`TestContext`], [`TestCase`])
//! - Built-in actions ([`EchoAction`], [`FailAction`], [`SleepAction`],
//!   [`CreateVariablesAction`])
//! - Error types ([`RigError`], [`RigResultExt`])
//!
//! ### Endpoint Types
//! - [`Endpoint`] and [`EndpointComponent`] traits
//! - [`EndpointRegistry`] and [`DefaultEndpointResolver`]
//! - Message actions ([`SendAction`], [`ReceiveAction`])

// Core types
pub use rigkit_core::prelude::*;

// Endpoint types
pub use rigkit_endpoint::{
    DefaultEndpointResolver, Endpoint, EndpointComponent, EndpointRegistry, EndpointUri,
    ReceiveAction, SendAction,
};

//! # rigkit - Integration-Test Automation Framework for Rust
//!
//! rigkit lets engineers declare test cases that send and receive
//! messages across pluggable endpoints, validate payloads and headers,
//! extract variables, and orchestrate conditional/looping test control
//! flow.
//!
//! ## Features
//!
//! - **Declarative action model** - every test step is a
//!   [`TestAction`](rigkit_core::action::TestAction), composed into
//!   [`TestCase`](rigkit_core::test_case::TestCase)s with guaranteed
//!   cleanup blocks
//! - **Runtime variable substitution** - `${...}` placeholders resolve
//!   against the live [`TestContext`](rigkit_core::context::TestContext)
//! - **Pluggable endpoint resolution** - `scheme:rest` URIs resolve
//!   through registered components with built-in defaults
//! - **Container actions** - selections, sequences, templates, and
//!   repeats compose child actions with first-failure-aborts semantics
//! - **Rich error handling** - one
//!   [`RigError`](rigkit_core::error::RigError) type with miette
//!   diagnostics and pattern-matchable outcomes
//!
//! ## Quick Start
//!
//! ```rust
//! use rigkit::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let registry = Arc::new(EndpointRegistry::new());
//! let resolver = DefaultEndpointResolver::new(Arc::clone(&registry));
//!
//! let orders = resolver.resolve("direct:orders").unwrap();
//!
//! let case = TestCase::new("order-roundtrip")
//!     .action(CreateVariablesAction::new().variable("order_id", "42"))
//!     .action(
//!         SendAction::new(Arc::clone(&orders))
//!             .payload(r#"{"order": ${order_id}}"#)
//!             .header("operation", "create"),
//!     )
//!     .action(
//!         ReceiveAction::new(orders)
//!             .timeout(Duration::from_secs(1))
//!             .expect_header("operation", "create")
//!             .extract_payload_to("created_order"),
//!     );
//!
//! let mut ctx = TestContext::new();
//! case.execute(&mut ctx).unwrap();
//! assert_eq!(ctx.variable("created_order").unwrap(), r#"{"order": 42}"#);
//! ```
//!
//! ## Crate Organization
//!
//! - [`rigkit_core`] - Action model, context, containers, errors
//! - [`rigkit_endpoint`] - Endpoint abstractions, URI resolution, message
//!   actions
//! - `rigkit-testing` - Mocks and fixtures (depend on it directly from
//!   your dev-dependencies)

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public items from core
pub use rigkit_core::*;

// Re-export endpoint types
pub use rigkit_endpoint::{
    DefaultEndpointResolver, DirectEndpoint, DirectEndpointComponent, Endpoint, EndpointComponent,
    EndpointRegistry, EndpointUri, MessageQueue, ReceiveAction, SendAction,
};

pub mod prelude;

/// Endpoint module re-exports
pub mod endpoint {
    //! Endpoint abstraction types.
    pub use rigkit_endpoint::*;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_prelude_imports() {
        // Just verify the prelude compiles
        use crate::prelude::*;
        let _ = std::any::type_name::<RigError>();
    }
}

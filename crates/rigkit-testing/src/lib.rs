//! Testing utilities for the rigkit framework.
//!
//! This crate provides mocks and fixtures for testing rigkit test plans
//! and custom actions/components:
//!
//! - Mock actions, endpoints, and components that record interactions
//! - Fixtures for pre-wired contexts and registries
//!
//! # Overview
//!
//! ## Mock Actions
//!
//! ```rust
//! use rigkit_testing::MockAction;
//! use rigkit_core::container::Selection;
//! use rigkit_core::action::TestAction;
//! use rigkit_core::context::TestContext;
//!
//! let observed = MockAction::new();
//! let selection = Selection::new("1 = 1").action(observed.clone());
//!
//! selection.execute(&mut TestContext::new()).unwrap();
//! assert_eq!(observed.executions(), 1);
//! ```
//!
//! ## Mock Endpoints
//!
//! ```rust
//! use rigkit_testing::MockEndpoint;
//! use rigkit_core::message::Message;
//! use rigkit_endpoint::endpoint::Endpoint;
//! use std::time::Duration;
//!
//! let endpoint = MockEndpoint::new("orders");
//! endpoint.enqueue(Message::text("scripted reply"));
//!
//! let received = endpoint.receive(Duration::from_millis(1)).unwrap();
//! assert_eq!(received.payload, "scripted reply");
//! ```

#![deny(missing_docs)]

pub mod fixtures;
pub mod mock;

// Re-export commonly used types
pub use fixtures::{context_with, registry_with_mock_endpoint, sample_request, test_context};
pub use mock::{MockAction, MockComponent, MockEndpoint};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::{
        context_with, registry_with_mock_endpoint, sample_request, test_context,
    };
    pub use crate::mock::{MockAction, MockComponent, MockEndpoint};
}

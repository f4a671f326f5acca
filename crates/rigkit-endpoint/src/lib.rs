//! Endpoint abstractions for the rigkit test framework.
//!
//! This crate turns endpoint URIs into live message endpoints and
//! provides the actions that drive them. Endpoints abstract over
//! transport kind: a test case sends to `direct:orders` today and to a
//! broker-backed scheme tomorrow without changing shape.
//!
//! # Overview
//!
//! - [`endpoint::Endpoint`] - a live send/receive handle for one
//!   destination
//! - [`component::EndpointComponent`] - a per-scheme factory turning URIs
//!   into endpoints
//! - [`registry::EndpointRegistry`] - process-wide registry of named
//!   endpoints, components, and shared in-memory queues
//! - [`resolver::DefaultEndpointResolver`] - resolves `scheme:rest` URIs
//!   against the registry, falling back to a packaged default component
//!   table; bare names resolve as direct registry lookups
//! - [`actions::SendAction`] / [`actions::ReceiveAction`] - message
//!   actions with substitution, validation, and variable extraction
//!
//! # Resolution Quick Reference
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `orders` | direct name lookup on the registry |
//! | `direct:orders` | live component for `direct`, else default table |
//! | `ghost:x` (unknown) | `RigError::ComponentNotFound` |
//! | `direct:` / `:x` | `RigError::InvalidEndpointUri` |
//!
//! # Example
//!
//! ```rust
//! use rigkit_endpoint::endpoint::Endpoint;
//! use rigkit_endpoint::registry::EndpointRegistry;
//! use rigkit_endpoint::resolver::DefaultEndpointResolver;
//! use rigkit_core::message::Message;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let registry = Arc::new(EndpointRegistry::new());
//! let resolver = DefaultEndpointResolver::new(registry);
//!
//! let producer = resolver.resolve("direct:orders").unwrap();
//! let consumer = resolver.resolve("direct:orders").unwrap();
//!
//! producer.send(Message::text("order-1")).unwrap();
//! let received = consumer.receive(Duration::from_secs(1)).unwrap();
//! assert_eq!(received.payload, "order-1");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod component;
pub mod components;
pub mod endpoint;
pub mod queue;
pub mod registry;
pub mod resolver;
pub mod uri;

// Re-export commonly used types
pub use actions::{ReceiveAction, SendAction};
pub use component::{ComponentFactory, EndpointComponent};
pub use components::direct::{DirectEndpoint, DirectEndpointComponent};
pub use endpoint::Endpoint;
pub use queue::MessageQueue;
pub use registry::EndpointRegistry;
pub use resolver::DefaultEndpointResolver;
pub use uri::EndpointUri;

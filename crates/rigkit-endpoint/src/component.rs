//! The endpoint component abstraction.

use crate::endpoint::Endpoint;
use crate::registry::EndpointRegistry;
use rigkit_core::error::RigError;
use std::sync::Arc;

/// A named factory turning endpoint URIs into endpoints for one scheme.
///
/// A component's identity is the scheme it is registered under; the
/// resolver picks the component by the URI's scheme token and hands it
/// the full URI. The registry is passed into every factory call so
/// components can share registry-owned state (named queues, other
/// endpoints) without holding an ambient reference of their own. This
/// matters for components resolved through the default table, which are
/// built fresh for a single call.
pub trait EndpointComponent: Send + Sync {
    /// The scheme this component serves.
    fn name(&self) -> &str;

    /// Build an endpoint from a full, scheme-qualified URI.
    ///
    /// Errors from the component propagate unchanged to the caller of
    /// `resolve`.
    fn create_endpoint(
        &self,
        uri: &str,
        registry: &EndpointRegistry,
    ) -> Result<Arc<dyn Endpoint>, RigError>;
}

/// A factory building a component for a scheme.
///
/// Entries of the resolver's default component table. The argument is the
/// scheme the freshly built component will be named after.
pub type ComponentFactory =
    Arc<dyn Fn(&str) -> Result<Arc<dyn EndpointComponent>, RigError> + Send + Sync>;

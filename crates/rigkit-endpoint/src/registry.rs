//! The process-wide endpoint registry.

use crate::component::EndpointComponent;
use crate::endpoint::Endpoint;
use crate::queue::MessageQueue;
use rigkit_core::error::RigError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Registry of named endpoints, endpoint components, and shared queues.
///
/// The registry is wired once at suite startup and read-mostly afterwards;
/// its maps are guarded individually so concurrent test cases can resolve
/// endpoints while another case registers a late component. It also owns
/// the in-memory [`MessageQueue`]s of the `direct` endpoint kind, so that
/// component instances built fresh per resolution still deliver into the
/// same queues.
#[derive(Default)]
pub struct EndpointRegistry {
    endpoints: RwLock<HashMap<String, Arc<dyn Endpoint>>>,
    components: RwLock<HashMap<String, Arc<dyn EndpointComponent>>>,
    queues: RwLock<HashMap<String, Arc<MessageQueue>>>,
}

impl EndpointRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an endpoint under a name.
    ///
    /// An existing registration under the same name is replaced.
    pub fn register_endpoint(&self, name: impl Into<String>, endpoint: Arc<dyn Endpoint>) {
        let name = name.into();
        tracing::debug!(%name, "registering endpoint");
        self.endpoints
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, endpoint);
    }

    /// Look up an endpoint by name.
    pub fn endpoint(&self, name: &str) -> Result<Arc<dyn Endpoint>, RigError> {
        self.endpoints
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| RigError::EndpointNotFound { name: name.into() })
    }

    /// Register a component under its scheme.
    ///
    /// An existing registration under the same scheme is replaced.
    pub fn register_component(&self, component: Arc<dyn EndpointComponent>) {
        let scheme = component.name().to_string();
        tracing::debug!(%scheme, "registering endpoint component");
        self.components
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scheme, component);
    }

    /// Look up a component by scheme.
    #[must_use]
    pub fn component(&self, scheme: &str) -> Option<Arc<dyn EndpointComponent>> {
        self.components
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(scheme)
            .cloned()
    }

    /// Schemes with live component registrations, sorted.
    #[must_use]
    pub fn component_schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self
            .components
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        schemes.sort();
        schemes
    }

    /// Get or create the shared in-memory queue under `name`.
    #[must_use]
    pub fn queue(&self, name: &str) -> Arc<MessageQueue> {
        if let Some(queue) = self
            .queues
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Arc::clone(queue);
        }

        let mut queues = self.queues.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            queues
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(MessageQueue::new())),
        )
    }
}

//! In-memory `direct` endpoints.
//!
//! `direct:<queue-name>` binds an endpoint to the registry-owned
//! in-memory queue `<queue-name>`. Every endpoint resolved against the
//! same queue name shares one queue, regardless of which component
//! instance built it, so producer and consumer sides of a test case wire
//! up without any external broker.

use crate::component::EndpointComponent;
use crate::endpoint::Endpoint;
use crate::queue::MessageQueue;
use crate::registry::EndpointRegistry;
use crate::uri::EndpointUri;
use rigkit_core::error::RigError;
use rigkit_core::message::Message;
use std::sync::Arc;
use std::time::Duration;

/// Component building [`DirectEndpoint`]s.
pub struct DirectEndpointComponent {
    name: String,
}

impl DirectEndpointComponent {
    /// Create a component registered under the given scheme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl EndpointComponent for DirectEndpointComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_endpoint(
        &self,
        uri: &str,
        registry: &EndpointRegistry,
    ) -> Result<Arc<dyn Endpoint>, RigError> {
        let uri = EndpointUri::parse(uri)?;
        let queue = registry.queue(uri.rest());

        Ok(Arc::new(DirectEndpoint {
            name: uri.as_str().to_string(),
            queue,
        }))
    }
}

/// An endpoint bound to one in-memory queue.
pub struct DirectEndpoint {
    name: String,
    queue: Arc<MessageQueue>,
}

impl Endpoint for DirectEndpoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: Message) -> Result<(), RigError> {
        tracing::debug!(endpoint = %self.name, message_id = %message.id, "sending message");
        self.queue.push(message);
        Ok(())
    }

    fn receive(&self, timeout: Duration) -> Result<Message, RigError> {
        tracing::debug!(endpoint = %self.name, ?timeout, "receiving message");
        self.queue.pop(timeout)
    }
}

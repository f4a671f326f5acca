//! The endpoint abstraction.

use rigkit_core::error::RigError;
use rigkit_core::message::Message;
use std::fmt;
use std::time::Duration;

/// A live, usable message endpoint.
///
/// An endpoint is a configured connection handle for one destination (a
/// queue, a channel, an API) produced by an
/// [`EndpointComponent`](crate::component::EndpointComponent) or
/// registered directly under a name. Endpoints are shared handles
/// (`Arc<dyn Endpoint>`); cloning the `Arc` does not duplicate the
/// underlying destination.
///
/// Both operations are synchronous: `send` returns once the message is
/// handed to the destination, and `receive` blocks the calling thread
/// until a message arrives or the timeout expires
/// ([`RigError::Timeout`]).
pub trait Endpoint: Send + Sync {
    /// Name identifying this endpoint in logs and failures. For resolved
    /// endpoints this is the URI they were created from.
    fn name(&self) -> &str;

    /// Send a message to the destination.
    fn send(&self, message: Message) -> Result<(), RigError>;

    /// Receive the next message, waiting up to `timeout`.
    fn receive(&self, timeout: Duration) -> Result<Message, RigError>;
}

impl fmt::Debug for dyn Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint").field("name", &self.name()).finish()
    }
}

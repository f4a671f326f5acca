//! Message-oriented test actions.
//!
//! [`SendAction`] and [`ReceiveAction`] are the bridge between the action
//! model and endpoints: they substitute dynamic content on the way out,
//! and validate payloads/headers and extract variables on the way in.

use crate::endpoint::Endpoint;
use rigkit_core::action::TestAction;
use rigkit_core::context::TestContext;
use rigkit_core::error::RigError;
use rigkit_core::message::Message;
use std::sync::Arc;
use std::time::Duration;

/// Default blocking-receive timeout.
const DEFAULT_RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends a message to an endpoint.
///
/// Payload and header values are substituted against the context at
/// execution time, so a single configured action can send run-specific
/// content.
///
/// # Example
///
/// ```rust
/// use rigkit_endpoint::actions::SendAction;
/// use rigkit_endpoint::registry::EndpointRegistry;
/// use rigkit_endpoint::resolver::DefaultEndpointResolver;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
/// use std::sync::Arc;
///
/// let registry = Arc::new(EndpointRegistry::new());
/// let resolver = DefaultEndpointResolver::new(registry);
/// let endpoint = resolver.resolve("direct:orders").unwrap();
///
/// let mut ctx = TestContext::new();
/// ctx.set_variable("order_id", "42");
///
/// SendAction::new(endpoint)
///     .payload(r#"{"order": ${order_id}}"#)
///     .header("operation", "create")
///     .execute(&mut ctx)
///     .unwrap();
/// ```
pub struct SendAction {
    endpoint: Arc<dyn Endpoint>,
    payload: String,
    headers: Vec<(String, String)>,
}

impl SendAction {
    /// Create a send action for the given endpoint.
    pub fn new(endpoint: Arc<dyn Endpoint>) -> Self {
        Self {
            endpoint,
            payload: String::new(),
            headers: Vec::new(),
        }
    }

    /// Set the message payload. May contain `${...}` placeholders.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Add a message header. The value may contain `${...}` placeholders.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl TestAction for SendAction {
    fn name(&self) -> &str {
        "send"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        let payload = context.replace_dynamic_content(&self.payload)?;
        let mut message = Message::text(payload);
        for (name, value) in &self.headers {
            let value = context.replace_dynamic_content(value)?;
            message = message.header(name.clone(), value);
        }

        tracing::debug!(endpoint = self.endpoint.name(), "sending message");
        self.endpoint.send(message)
    }
}

/// Receives a message from an endpoint, validating it and extracting
/// variables.
///
/// Validation runs before extraction; expected payload and header values
/// are substituted against the context first, so expectations can
/// reference variables bound by earlier actions. A mismatch fails with
/// [`RigError::Validation`]; timeout expiry with [`RigError::Timeout`].
///
/// Extractions bind parts of the received message into the context for
/// later actions: the whole payload under a variable name, or individual
/// header values. Extracting a header the message does not carry is a
/// validation failure.
pub struct ReceiveAction {
    endpoint: Arc<dyn Endpoint>,
    timeout: Duration,
    expected_payload: Option<String>,
    expected_headers: Vec<(String, String)>,
    extract_payload: Option<String>,
    extract_headers: Vec<(String, String)>,
}

impl ReceiveAction {
    /// Create a receive action for the given endpoint with the default
    /// 5 second timeout.
    pub fn new(endpoint: Arc<dyn Endpoint>) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_RECEIVE_TIMEOUT,
            expected_payload: None,
            expected_headers: Vec::new(),
            extract_payload: None,
            extract_headers: Vec::new(),
        }
    }

    /// Override the blocking-receive timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expect an exact payload (after substitution).
    #[must_use]
    pub fn expect_payload(mut self, payload: impl Into<String>) -> Self {
        self.expected_payload = Some(payload.into());
        self
    }

    /// Expect a header to carry a value (after substitution).
    #[must_use]
    pub fn expect_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.expected_headers.push((name.into(), value.into()));
        self
    }

    /// Bind the received payload to a variable.
    #[must_use]
    pub fn extract_payload_to(mut self, variable: impl Into<String>) -> Self {
        self.extract_payload = Some(variable.into());
        self
    }

    /// Bind a received header value to a variable.
    #[must_use]
    pub fn extract_header_to(
        mut self,
        header: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        self.extract_headers.push((header.into(), variable.into()));
        self
    }

    fn validate(&self, message: &Message, context: &TestContext) -> Result<(), RigError> {
        if let Some(expected) = &self.expected_payload {
            let expected = context.replace_dynamic_content(expected)?;
            if message.payload != expected {
                return Err(RigError::validation(format!(
                    "payload mismatch: expected '{expected}', got '{}'",
                    message.payload
                )));
            }
        }

        for (name, expected) in &self.expected_headers {
            let expected = context.replace_dynamic_content(expected)?;
            match message.header_value(name) {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(RigError::validation(format!(
                        "header '{name}' mismatch: expected '{expected}', got '{actual}'"
                    )));
                }
                None => {
                    return Err(RigError::validation(format!(
                        "expected header '{name}' is missing"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl TestAction for ReceiveAction {
    fn name(&self) -> &str {
        "receive"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        tracing::debug!(endpoint = self.endpoint.name(), timeout = ?self.timeout, "receiving message");
        let message = self.endpoint.receive(self.timeout)?;

        self.validate(&message, context)?;

        if let Some(variable) = &self.extract_payload {
            context.set_variable(variable.clone(), message.payload.clone());
        }
        for (header, variable) in &self.extract_headers {
            let value = message.header_value(header).ok_or_else(|| {
                RigError::validation(format!("cannot extract missing header '{header}'"))
            })?;
            context.set_variable(variable.clone(), value.to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EndpointRegistry;
    use crate::resolver::DefaultEndpointResolver;
    use pretty_assertions::assert_eq;

    fn wired() -> (Arc<dyn Endpoint>, TestContext) {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::new(registry);
        let endpoint = resolver.resolve("direct:test").unwrap();
        (endpoint, TestContext::new())
    }

    #[test]
    fn test_send_substitutes_payload_and_headers() {
        let (endpoint, mut ctx) = wired();
        ctx.set_variable("id", "7");

        SendAction::new(Arc::clone(&endpoint))
            .payload("order ${id}")
            .header("order-id", "${id}")
            .execute(&mut ctx)
            .unwrap();

        let message = endpoint.receive(Duration::from_millis(100)).unwrap();
        assert_eq!(message.payload, "order 7");
        assert_eq!(message.header_value("order-id"), Some("7"));
    }

    #[test]
    fn test_receive_validates_payload() {
        let (endpoint, mut ctx) = wired();
        endpoint.send(Message::text("actual")).unwrap();

        let err = ReceiveAction::new(endpoint)
            .timeout(Duration::from_millis(100))
            .expect_payload("expected")
            .execute(&mut ctx)
            .unwrap_err();

        assert!(matches!(err, RigError::Validation { .. }));
    }

    #[test]
    fn test_receive_validates_headers() {
        let (endpoint, mut ctx) = wired();
        endpoint
            .send(Message::text("x").header("operation", "delete"))
            .unwrap();

        let err = ReceiveAction::new(endpoint)
            .timeout(Duration::from_millis(100))
            .expect_header("operation", "create")
            .execute(&mut ctx)
            .unwrap_err();

        assert!(err.to_string().contains("operation"));
    }

    #[test]
    fn test_receive_extracts_variables() {
        let (endpoint, mut ctx) = wired();
        endpoint
            .send(Message::text("body").header("correlation", "abc-1"))
            .unwrap();

        ReceiveAction::new(endpoint)
            .timeout(Duration::from_millis(100))
            .extract_payload_to("received_body")
            .extract_header_to("correlation", "correlation_id")
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(ctx.variable("received_body").unwrap(), "body");
        assert_eq!(ctx.variable("correlation_id").unwrap(), "abc-1");
    }

    #[test]
    fn test_receive_timeout() {
        let (endpoint, mut ctx) = wired();
        let err = ReceiveAction::new(endpoint)
            .timeout(Duration::from_millis(20))
            .execute(&mut ctx)
            .unwrap_err();

        assert!(matches!(err, RigError::Timeout { .. }));
    }

    #[test]
    fn test_expectation_substitutes_variables() {
        let (endpoint, mut ctx) = wired();
        ctx.set_variable("expected", "ping");
        endpoint.send(Message::text("ping")).unwrap();

        ReceiveAction::new(endpoint)
            .timeout(Duration::from_millis(100))
            .expect_payload("${expected}")
            .execute(&mut ctx)
            .unwrap();
    }
}

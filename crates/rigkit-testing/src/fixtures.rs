//! Test fixtures for rigkit testing.
//!
//! Pre-wired contexts, registries, and sample messages for common test
//! setups.

use crate::mock::MockEndpoint;
use rigkit_core::context::TestContext;
use rigkit_core::message::Message;
use rigkit_endpoint::registry::EndpointRegistry;
use std::sync::Arc;

/// Create an empty execution context.
#[must_use]
pub fn test_context() -> TestContext {
    TestContext::new()
}

/// Create a context pre-populated with variables.
///
/// # Example
///
/// ```rust
/// use rigkit_testing::fixtures::context_with;
///
/// let ctx = context_with(&[("user", "alice"), ("env", "staging")]);
/// assert_eq!(ctx.variable("env").unwrap(), "staging");
/// ```
#[must_use]
pub fn context_with(variables: &[(&str, &str)]) -> TestContext {
    let mut ctx = TestContext::new();
    for (name, value) in variables {
        ctx.set_variable(*name, *value);
    }
    ctx
}

/// A sample request message with an operation header.
#[must_use]
pub fn sample_request() -> Message {
    Message::text(r#"{"operation": "status"}"#).header("operation", "status")
}

/// A registry with a [`MockEndpoint`] registered under `mock-endpoint`.
///
/// Returns the registry and a handle to the registered mock.
#[must_use]
pub fn registry_with_mock_endpoint() -> (Arc<EndpointRegistry>, MockEndpoint) {
    let registry = Arc::new(EndpointRegistry::new());
    let endpoint = MockEndpoint::new("mock-endpoint");
    registry.register_endpoint("mock-endpoint", Arc::new(endpoint.clone()));
    (registry, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_with_binds_all() {
        let ctx = context_with(&[("a", "1"), ("b", "2")]);
        assert_eq!(ctx.variable_count(), 2);
    }

    #[test]
    fn test_registry_fixture_is_wired() {
        let (registry, _mock) = registry_with_mock_endpoint();
        assert!(registry.endpoint("mock-endpoint").is_ok());
    }
}

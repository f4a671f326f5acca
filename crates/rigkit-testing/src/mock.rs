//! Mock implementations for testing.
//!
//! The mocks record every interaction through shared handles: clone the
//! mock, hand one copy to the code under test, and assert on the other.

use rigkit_core::action::TestAction;
use rigkit_core::context::TestContext;
use rigkit_core::error::RigError;
use rigkit_core::message::Message;
use rigkit_endpoint::component::EndpointComponent;
use rigkit_endpoint::endpoint::Endpoint;
use rigkit_endpoint::registry::EndpointRegistry;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// A test action that records its executions.
///
/// # Example
///
/// ```rust
/// use rigkit_testing::MockAction;
/// use rigkit_core::container::Sequence;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let action = MockAction::new();
/// let sequence = Sequence::new().action(action.clone());
///
/// sequence.execute(&mut TestContext::new()).unwrap();
/// assert_eq!(action.executions(), 1);
/// ```
#[derive(Clone)]
pub struct MockAction {
    name: String,
    executions: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl Default for MockAction {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAction {
    /// Create a succeeding mock action.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "mock".into(),
            executions: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    /// Create a succeeding mock action with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Make every execution fail with the given message.
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// How many times the action has executed (including failing runs).
    #[must_use]
    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

impl TestAction for MockAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, _context: &mut TestContext) -> Result<(), RigError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(RigError::action_failed(&self.name, message.clone())),
            None => Ok(()),
        }
    }
}

/// A scripted endpoint recording sends and replaying queued receives.
#[derive(Clone)]
pub struct MockEndpoint {
    name: String,
    state: Arc<MockEndpointState>,
}

#[derive(Default)]
struct MockEndpointState {
    sent: Mutex<Vec<Message>>,
    incoming: Mutex<VecDeque<Message>>,
}

impl MockEndpoint {
    /// Create a mock endpoint with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(MockEndpointState::default()),
        }
    }

    /// Queue a message for a later `receive`.
    pub fn enqueue(&self, message: Message) {
        self.state
            .incoming
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(message);
    }

    /// Everything sent through this endpoint so far.
    #[must_use]
    pub fn sent(&self) -> Vec<Message> {
        self.state
            .sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of sent messages.
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.state
            .sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Endpoint for MockEndpoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: Message) -> Result<(), RigError> {
        self.state
            .sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
        Ok(())
    }

    fn receive(&self, timeout: Duration) -> Result<Message, RigError> {
        self.state
            .incoming
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| RigError::Timeout {
                operation: format!("receive from mock endpoint '{}'", self.name),
                duration: timeout,
            })
    }
}

/// A component returning a canned endpoint and recording every
/// `create_endpoint` call.
#[derive(Clone)]
pub struct MockComponent {
    name: String,
    endpoint: MockEndpoint,
    created: Arc<Mutex<Vec<String>>>,
}

impl MockComponent {
    /// Create a mock component registered under the given scheme.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let endpoint = MockEndpoint::new(format!("{name}-endpoint"));
        Self {
            name,
            endpoint,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The endpoint every `create_endpoint` call returns.
    #[must_use]
    pub fn endpoint(&self) -> MockEndpoint {
        self.endpoint.clone()
    }

    /// URIs passed to `create_endpoint` so far.
    #[must_use]
    pub fn created_uris(&self) -> Vec<String> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EndpointComponent for MockComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_endpoint(
        &self,
        uri: &str,
        _registry: &EndpointRegistry,
    ) -> Result<Arc<dyn Endpoint>, RigError> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(uri.to_string());
        Ok(Arc::new(self.endpoint.clone()))
    }
}

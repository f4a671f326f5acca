//! In-memory message queues backing the `direct` endpoint kind.

use rigkit_core::error::RigError;
use rigkit_core::message::Message;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// A named, unbounded in-process message queue.
///
/// Queues are owned by the
/// [`EndpointRegistry`](crate::registry::EndpointRegistry) and shared by
/// every endpoint bound to the same queue name, so a producer endpoint
/// resolved in one place delivers to a consumer endpoint resolved in
/// another. `pop` blocks the calling thread until a message arrives or
/// the timeout expires.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<VecDeque<Message>>,
    available: Condvar,
}

impl MessageQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and wake one blocked consumer.
    pub fn push(&self, message: Message) {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        messages.push_back(message);
        self.available.notify_one();
    }

    /// Take the oldest message, blocking up to `timeout`.
    pub fn pop(&self, timeout: Duration) -> Result<Message, RigError> {
        let deadline = Instant::now() + timeout;
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if let Some(message) = messages.pop_front() {
                return Ok(message);
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(RigError::Timeout {
                    operation: "receive from in-memory queue".into(),
                    duration: timeout,
                });
            }

            let (guard, _) = self
                .available
                .wait_timeout(messages, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            messages = guard;
        }
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

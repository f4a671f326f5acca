//! The message model exchanged through endpoints.
//!
//! A [`Message`] carries a textual payload plus a flat map of string
//! headers. Payload and header values may contain `${...}` placeholders;
//! substitution happens in the send/receive actions, not here; a message
//! held by an endpoint is always fully resolved.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A message travelling through an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier, assigned at construction.
    pub id: Uuid,
    /// The message body.
    pub payload: String,
    /// Flat string headers.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl Message {
    /// Create a new message with the given payload and no headers.
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload: payload.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value by name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let msg = Message::text("hello")
            .header("operation", "greet")
            .header("priority", "1");

        assert_eq!(msg.payload, "hello");
        assert_eq!(msg.header_value("operation"), Some("greet"));
        assert_eq!(msg.header_value("missing"), None);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Message::text("a").id, Message::text("a").id);
    }

    #[test]
    fn test_serde_roundtrip() {
        let msg = Message::text("payload").header("k", "v");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}

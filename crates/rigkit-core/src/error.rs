//! Unified error handling for the rigkit framework.
//!
//! This module provides a single, context-rich error type that every
//! fallible rigkit operation flows through.
//!
//! # Design Philosophy
//!
//! - **Single error type**: All errors flow through [`RigError`]
//! - **Pattern-matchable outcomes**: control-flow results such as a
//!   violated container guard are dedicated variants, so callers match on
//!   error kinds instead of inspecting messages
//! - **Unchanged propagation**: a failing child action inside a container
//!   surfaces to the test runner as-is, never wrapped
//! - **Diagnostic-friendly**: integrates with [`miette`] for detailed
//!   error reports
//!
//! # Example
//!
//! ```rust
//! use rigkit_core::error::{RigError, RigResultExt};
//!
//! fn load_fixture() -> Result<String, RigError> {
//!     let result: Result<String, RigError> = Err(RigError::message("fixture missing"));
//!     result.context("while preparing the test case")
//! }
//! ```

use miette::Diagnostic;
use thiserror::Error;

/// The primary error type for the rigkit framework.
///
/// Fatal errors (malformed URIs, unresolvable schemes, guard violations,
/// validation mismatches) propagate unchanged to the test runner and fail
/// the enclosing test case. Locally-recovered conditions (an unreadable
/// default component table, a failing default component factory) are
/// logged as warnings and never appear here.
#[derive(Error, Diagnostic, Debug)]
pub enum RigError {
    // ========================================================================
    // Endpoint Resolution Errors
    // ========================================================================
    /// An endpoint URI is missing its scheme separator or has empty tokens.
    #[error("invalid endpoint uri '{uri}'")]
    #[diagnostic(
        code(rig::endpoint::invalid_uri),
        help("endpoint uris take the form '<scheme>:<scheme-specific-part>'")
    )]
    InvalidEndpointUri {
        /// The URI that failed to parse.
        uri: String,
    },

    /// No endpoint component is registered for a scheme, and the default
    /// component table has no entry for it either.
    #[error("unable to resolve endpoint component with name '{scheme}'")]
    #[diagnostic(
        code(rig::endpoint::component_not_found),
        help("register a component for this scheme on the endpoint registry")
    )]
    ComponentNotFound {
        /// The scheme that could not be resolved.
        scheme: String,
        /// Schemes with live registrations at the time of the lookup.
        available: Box<[String]>,
    },

    /// A direct endpoint-name lookup found nothing under that name.
    #[error("no endpoint registered under name '{name}'")]
    #[diagnostic(code(rig::endpoint::not_found))]
    EndpointNotFound {
        /// The name that was looked up.
        name: String,
    },

    // ========================================================================
    // Container Errors
    // ========================================================================
    /// A selection container was executed while its guard condition
    /// evaluated to false.
    ///
    /// This is a caller contract violation, not a skip: executing a
    /// selection implies its condition holds.
    #[error("selection guard violated, condition '{condition}' evaluated to false")]
    #[diagnostic(
        code(rig::container::guard_violation),
        help("only execute a selection when its condition is expected to hold")
    )]
    GuardViolation {
        /// The condition string, after variable substitution.
        condition: String,
    },

    // ========================================================================
    // Context and Expression Errors
    // ========================================================================
    /// A `${...}` placeholder referenced a variable the context does not
    /// hold.
    #[error("unknown variable '{name}'")]
    #[diagnostic(code(rig::context::variable_not_found))]
    VariableNotFound {
        /// The variable name inside the placeholder.
        name: String,
    },

    /// A condition string could not be evaluated as a boolean expression.
    #[error("invalid boolean expression '{expression}': {message}")]
    #[diagnostic(
        code(rig::expression::invalid),
        help("conditions take the form '<lhs> <op> <rhs>' or a boolean literal")
    )]
    Expression {
        /// The expression, after variable substitution.
        expression: String,
        /// What went wrong while evaluating it.
        message: String,
    },

    // ========================================================================
    // Message Validation Errors
    // ========================================================================
    /// A received message did not match its expected payload or headers.
    #[error("message validation failed: {message}")]
    #[diagnostic(code(rig::message::validation))]
    Validation {
        /// Human-readable description of the mismatch.
        message: String,
    },

    /// A blocking receive expired before a message arrived.
    #[error("timeout after {duration:?}: {operation}")]
    #[diagnostic(
        code(rig::timeout),
        help("increase the receive timeout or check that the producer ran")
    )]
    Timeout {
        /// The operation that timed out.
        operation: String,
        /// How long we waited before giving up.
        duration: std::time::Duration,
    },

    // ========================================================================
    // Action Errors
    // ========================================================================
    /// An action failed deliberately or hit an unrecoverable condition.
    #[error("action '{action}' failed: {message}")]
    #[diagnostic(code(rig::action::failed))]
    ActionFailed {
        /// Name of the failing action.
        action: String,
        /// Human-readable failure message.
        message: String,
    },

    // ========================================================================
    // Context-Wrapped Errors
    // ========================================================================
    /// An error with additional context.
    #[error("{context}: {source}")]
    #[diagnostic(code(rig::context_wrapped))]
    WithContext {
        /// The context message.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<RigError>,
    },

    // ========================================================================
    // Generic Internal Error
    // ========================================================================
    /// A generic internal error with a message.
    #[error("{message}")]
    #[diagnostic(code(rig::internal))]
    Message {
        /// Human-readable error message.
        message: String,
    },
}

impl RigError {
    /// Create a generic internal error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an action failure.
    pub fn action_failed(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ActionFailed {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a selection guard violation.
    ///
    /// Lets callers distinguish the `Rejected` outcome of a selection from
    /// a genuine child-action failure without matching the full enum.
    #[must_use]
    pub const fn is_guard_violation(&self) -> bool {
        matches!(self, Self::GuardViolation { .. })
    }
}

/// Extension trait for adding context to `Result` types.
///
/// This provides `anyhow`-style context methods while preserving the
/// typed error system.
///
/// # Example
///
/// ```rust
/// use rigkit_core::error::{RigError, RigResultExt};
///
/// fn process() -> Result<(), RigError> {
///     let result: Result<(), RigError> = Err(RigError::message("oops"));
///     result.context("failed to process fixture")?;
///     Ok(())
/// }
/// # let _ = process();
/// ```
pub trait RigResultExt<T> {
    /// Add context to an error.
    fn context<C: Into<String>>(self, context: C) -> Result<T, RigError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<C, F>(self, f: F) -> Result<T, RigError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> RigResultExt<T> for Result<T, RigError> {
    fn context<C: Into<String>>(self, context: C) -> Self {
        self.map_err(|e| RigError::WithContext {
            context: context.into(),
            source: Box::new(e),
        })
    }

    fn with_context<C, F>(self, f: F) -> Self
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| RigError::WithContext {
            context: f().into(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_scheme() {
        let err = RigError::ComponentNotFound {
            scheme: "jms".into(),
            available: Box::new(["direct".to_string()]),
        };
        assert!(err.to_string().contains("'jms'"));
    }

    #[test]
    fn test_guard_violation_is_matchable() {
        let err = RigError::GuardViolation {
            condition: "1 = 0".into(),
        };
        assert!(err.is_guard_violation());
        assert!(!RigError::message("boom").is_guard_violation());
    }

    #[test]
    fn test_context_chain() {
        let result: Result<(), RigError> = Err(RigError::message("inner"));
        let err = result.context("outer").unwrap_err();
        assert_eq!(err.to_string(), "outer: inner");
    }

    #[test]
    fn test_with_context_lazy() {
        let ok: Result<u8, RigError> = Ok(1);
        let value = ok
            .with_context(|| -> String { panic!("must not evaluate on success") })
            .unwrap();
        assert_eq!(value, 1);
    }
}

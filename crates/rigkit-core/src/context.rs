//! The execution context threaded through all action executions.
//!
//! A [`TestContext`] is the live variable bag of one test-case run. Actions
//! read and write variables, substitute `${...}` placeholders into dynamic
//! content, and evaluate guard conditions against it. The context is
//! mutated synchronously on the calling thread; a test case owns exactly
//! one, and containers that need isolation (templates with a local scope)
//! clone it.

use crate::error::RigError;
use crate::expression;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches `${name}` placeholders in dynamic content.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").expect("placeholder pattern"));

/// Variable store and dynamic-content engine for one test-case run.
#[derive(Debug, Clone, Default)]
pub struct TestContext {
    variables: HashMap<String, String>,
}

impl TestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable. An existing binding under the same name is
    /// replaced.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        tracing::trace!(variable = %name, %value, "binding variable");
        self.variables.insert(name, value);
    }

    /// Look up a variable.
    pub fn variable(&self, name: &str) -> Result<&str, RigError> {
        self.variables
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RigError::VariableNotFound { name: name.into() })
    }

    /// Whether a variable is bound.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Replace every `${name}` placeholder in `input` with the bound
    /// variable value.
    ///
    /// A placeholder naming an unbound variable fails the whole
    /// substitution with [`RigError::VariableNotFound`]; text without
    /// placeholders passes through unchanged.
    pub fn replace_dynamic_content(&self, input: &str) -> Result<String, RigError> {
        let mut result = String::with_capacity(input.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(input) {
            let whole = caps.get(0).expect("capture 0 always present");
            let name = &caps[1];
            let value = self.variable(name)?;
            result.push_str(&input[last..whole.start()]);
            result.push_str(value);
            last = whole.end();
        }
        result.push_str(&input[last..]);

        Ok(result)
    }

    /// Substitute variables in `condition`, then evaluate the result as a
    /// boolean expression.
    pub fn evaluate_condition(&self, condition: &str) -> Result<bool, RigError> {
        let substituted = self.replace_dynamic_content(condition)?;
        expression::evaluate(&substituted)
    }
}

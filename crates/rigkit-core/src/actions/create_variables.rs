//! Bind variables into the execution context.

use crate::action::TestAction;
use crate::context::TestContext;
use crate::error::RigError;

/// Binds name/value pairs into the context, in declaration order.
///
/// Values are substituted before binding, so later pairs may reference
/// earlier ones:
///
/// ```rust
/// use rigkit_core::actions::CreateVariablesAction;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let mut ctx = TestContext::new();
/// CreateVariablesAction::new()
///     .variable("host", "localhost")
///     .variable("url", "http://${host}:8080")
///     .execute(&mut ctx)
///     .unwrap();
///
/// assert_eq!(ctx.variable("url").unwrap(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateVariablesAction {
    variables: Vec<(String, String)>,
}

impl CreateVariablesAction {
    /// Create an action with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name/value binding.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }
}

impl TestAction for CreateVariablesAction {
    fn name(&self) -> &str {
        "create-variables"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        for (name, value) in &self.variables {
            let value = context.replace_dynamic_content(value)?;
            context.set_variable(name.clone(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_binds_in_order() {
        let mut ctx = TestContext::new();
        CreateVariablesAction::new()
            .variable("a", "1")
            .variable("b", "${a}2")
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(ctx.variable("a").unwrap(), "1");
        assert_eq!(ctx.variable("b").unwrap(), "12");
    }

    #[test]
    fn test_forward_reference_fails() {
        let mut ctx = TestContext::new();
        let err = CreateVariablesAction::new()
            .variable("b", "${a}")
            .variable("a", "1")
            .execute(&mut ctx)
            .unwrap_err();
        assert!(matches!(err, RigError::VariableNotFound { .. }));
    }
}

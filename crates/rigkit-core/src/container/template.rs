//! Reusable parameterized action blocks.

use super::run_all;
use crate::action::{BoxedAction, TestAction};
use crate::context::TestContext;
use crate::error::RigError;

/// A named, reusable action list with parameter bindings.
///
/// On execution each parameter value is substituted against the current
/// context and bound as a variable, then the children run. With a local
/// scope (the default) the children execute against a clone of the
/// context, so parameter bindings and any variables the children create
/// stay inside the template. With [`Template::global_scope`] the shared
/// context is mutated directly and bindings leak out, which is
/// occasionally what a suite wants.
///
/// # Example
///
/// ```rust
/// use rigkit_core::container::Template;
/// use rigkit_core::actions::EchoAction;
/// use rigkit_core::action::TestAction;
/// use rigkit_core::context::TestContext;
///
/// let greet = Template::new("greet")
///     .parameter("who", "world")
///     .action(EchoAction::new("hello ${who}"));
///
/// let mut ctx = TestContext::new();
/// greet.execute(&mut ctx).unwrap();
/// assert!(!ctx.has_variable("who"));
/// ```
pub struct Template {
    name: String,
    parameters: Vec<(String, String)>,
    local_scope: bool,
    actions: Vec<BoxedAction>,
}

impl Template {
    /// Create an empty template with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            local_scope: true,
            actions: Vec::new(),
        }
    }

    /// Bind a parameter. The value may reference context variables.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Run children against the shared context instead of a local clone.
    #[must_use]
    pub fn global_scope(mut self) -> Self {
        self.local_scope = false;
        self
    }

    /// Append a child action.
    #[must_use]
    pub fn action(mut self, action: impl TestAction + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// The template name.
    #[must_use]
    pub fn template_name(&self) -> &str {
        &self.name
    }

    fn bind_and_run(&self, context: &mut TestContext) -> Result<(), RigError> {
        for (name, value) in &self.parameters {
            let value = context.replace_dynamic_content(value)?;
            context.set_variable(name.clone(), value);
        }
        run_all(&self.actions, context)
    }
}

impl TestAction for Template {
    fn name(&self) -> &str {
        "template"
    }

    fn execute(&self, context: &mut TestContext) -> Result<(), RigError> {
        tracing::debug!(template = %self.name, local = self.local_scope, "executing template");

        if self.local_scope {
            let mut local = context.clone();
            self.bind_and_run(&mut local)
        } else {
            self.bind_and_run(context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CreateVariablesAction, FailAction};

    #[test]
    fn test_local_scope_does_not_leak() {
        let mut ctx = TestContext::new();
        Template::new("t")
            .parameter("p", "v")
            .action(CreateVariablesAction::new().variable("inner", "1"))
            .execute(&mut ctx)
            .unwrap();

        assert!(!ctx.has_variable("p"));
        assert!(!ctx.has_variable("inner"));
    }

    #[test]
    fn test_global_scope_leaks() {
        let mut ctx = TestContext::new();
        Template::new("t")
            .parameter("p", "v")
            .global_scope()
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(ctx.variable("p").unwrap(), "v");
    }

    #[test]
    fn test_parameters_substitute_outer_variables() {
        let mut ctx = TestContext::new();
        ctx.set_variable("outer", "42");

        Template::new("t")
            .parameter("p", "${outer}")
            .global_scope()
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(ctx.variable("p").unwrap(), "42");
    }

    #[test]
    fn test_child_failure_propagates() {
        let mut ctx = TestContext::new();
        let err = Template::new("t")
            .action(FailAction::new())
            .execute(&mut ctx)
            .unwrap_err();
        assert!(matches!(err, RigError::ActionFailed { .. }));
    }
}

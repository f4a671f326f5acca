//! Endpoint resolution from URI strings.

use crate::component::{ComponentFactory, EndpointComponent};
use crate::components;
use crate::endpoint::Endpoint;
use crate::registry::EndpointRegistry;
use crate::uri::EndpointUri;
use rigkit_core::error::RigError;
use std::collections::HashMap;
use std::sync::Arc;

/// The packaged default component table.
const DEFAULT_COMPONENT_SPEC: &str = include_str!("../resources/endpoint.components");

/// Resolves endpoint URIs against registered components, falling back to
/// a packaged table of default component factories.
///
/// Resolution order for `scheme:rest`:
///
/// 1. A component registered live on the [`EndpointRegistry`] under
///    `scheme` wins.
/// 2. Otherwise the default table is consulted: it maps the scheme to a
///    factory name, and a matching factory builds a FRESH component for
///    this single call, named after the scheme, with the registry passed
///    in. Default-resolved components are deliberately not cached across
///    calls.
/// 3. Neither → [`RigError::ComponentNotFound`].
///
/// A string without a `:` is not resolved through components at all; it
/// is a direct endpoint-name lookup on the registry.
///
/// Construction parses the packaged table eagerly. An unreadable table is
/// logged and replaced with an empty one; the resolver stays usable for
/// live-registered components.
///
/// # Example
///
/// ```rust
/// use rigkit_endpoint::endpoint::Endpoint;
/// use rigkit_endpoint::registry::EndpointRegistry;
/// use rigkit_endpoint::resolver::DefaultEndpointResolver;
/// use std::sync::Arc;
///
/// let registry = Arc::new(EndpointRegistry::new());
/// let resolver = DefaultEndpointResolver::new(Arc::clone(&registry));
///
/// // `direct` is served by the packaged default table.
/// let endpoint = resolver.resolve("direct:orders").unwrap();
/// assert_eq!(endpoint.name(), "direct:orders");
/// ```
pub struct DefaultEndpointResolver {
    registry: Arc<EndpointRegistry>,
    default_components: HashMap<String, String>,
    factories: HashMap<String, ComponentFactory>,
}

impl DefaultEndpointResolver {
    /// Create a resolver over the given registry, with the packaged
    /// default component table.
    #[must_use]
    pub fn new(registry: Arc<EndpointRegistry>) -> Self {
        Self::from_spec(registry, DEFAULT_COMPONENT_SPEC)
    }

    /// Create a resolver with an explicit default component table text.
    ///
    /// The text is a flat `scheme=factory-name` key/value format, one
    /// entry per line, `#` comments and blank lines ignored. Text that
    /// fails to parse degrades to an empty table with a warning; the
    /// resolver is still fully usable for live-registered components.
    #[must_use]
    pub fn from_spec(registry: Arc<EndpointRegistry>, spec: &str) -> Self {
        let default_components = match parse_component_spec(spec) {
            Ok(table) => table,
            Err(line) => {
                tracing::warn!(%line, "unable to load default endpoint components, continuing with empty table");
                HashMap::new()
            }
        };

        Self {
            registry,
            default_components,
            factories: HashMap::new(),
        }
    }

    /// Replace the registry used for name lookups and component wiring.
    pub fn set_registry(&mut self, registry: Arc<EndpointRegistry>) {
        self.registry = registry;
    }

    /// Register a component factory under a name.
    ///
    /// Factory names are the values of the default component table; this
    /// extends the built-in factory set, letting external crates plug
    /// their components into table-driven resolution.
    pub fn register_factory(&mut self, name: impl Into<String>, factory: ComponentFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Resolve an endpoint URI (or bare endpoint name) into an endpoint.
    pub fn resolve(&self, uri: &str) -> Result<Arc<dyn Endpoint>, RigError> {
        if !EndpointUri::is_scheme_qualified(uri) {
            tracing::debug!(name = %uri, "resolving endpoint by direct name lookup");
            return self.registry.endpoint(uri);
        }

        let parsed = EndpointUri::parse(uri)?;
        let scheme = parsed.scheme();

        let component = match self.registry.component(scheme) {
            Some(component) => component,
            None => self
                .resolve_default_component(scheme)
                .ok_or_else(|| RigError::ComponentNotFound {
                    scheme: scheme.to_string(),
                    available: self.registry.component_schemes().into_boxed_slice(),
                })?,
        };

        tracing::debug!(%uri, component = component.name(), "delegating endpoint creation");
        component.create_endpoint(uri, &self.registry)
    }

    /// Build a fresh component for `scheme` from the default table.
    ///
    /// Any failure here (no table entry, unknown factory name, factory
    /// error) degrades to `None` so resolution continues to the
    /// not-found path. Factory failures are warned, never propagated.
    fn resolve_default_component(&self, scheme: &str) -> Option<Arc<dyn EndpointComponent>> {
        let factory_name = self.default_components.get(scheme)?;

        let factory = match self.factories.get(factory_name) {
            Some(factory) => factory.clone(),
            None => match components::builtin_factory(factory_name) {
                Some(factory) => factory,
                None => {
                    tracing::warn!(
                        %scheme,
                        factory = %factory_name,
                        "default endpoint component factory not found"
                    );
                    return None;
                }
            },
        };

        match factory(scheme) {
            Ok(component) => Some(component),
            Err(err) => {
                tracing::warn!(
                    %scheme,
                    factory = %factory_name,
                    %err,
                    "unable to instantiate default endpoint component"
                );
                None
            }
        }
    }
}

/// Parse the flat `scheme=factory-name` table format.
///
/// Returns the offending line on failure; the caller decides how to
/// degrade.
fn parse_component_spec(spec: &str) -> Result<HashMap<String, String>, String> {
    let mut table = HashMap::new();

    for line in spec.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((scheme, factory)) = line.split_once('=') else {
            return Err(line.to_string());
        };

        let scheme = scheme.trim();
        let factory = factory.trim();
        if scheme.is_empty() || factory.is_empty() {
            return Err(line.to_string());
        }

        table.insert(scheme.to_string(), factory.to_string());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_component_spec() {
        let table = parse_component_spec("# comment\n\ndirect=direct\nqueue = direct\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("queue").map(String::as_str), Some("direct"));
    }

    #[test]
    fn test_parse_component_spec_rejects_garbage() {
        assert!(parse_component_spec("not a table").is_err());
        assert!(parse_component_spec("=direct").is_err());
        assert!(parse_component_spec("direct=").is_err());
    }

    #[test]
    fn test_packaged_spec_parses() {
        let table = parse_component_spec(DEFAULT_COMPONENT_SPEC).unwrap();
        assert_eq!(table.get("direct").map(String::as_str), Some("direct"));
        assert_eq!(table.get("queue").map(String::as_str), Some("direct"));
    }

    #[test]
    fn test_resolve_default_direct_scheme() {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::new(Arc::clone(&registry));

        let endpoint = resolver.resolve("queue:orders").unwrap();
        assert_eq!(endpoint.name(), "queue:orders");
    }

    #[test]
    fn test_invalid_uri() {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::new(registry);

        let err = resolver.resolve("direct:").unwrap_err();
        assert!(matches!(err, RigError::InvalidEndpointUri { .. }));
    }

    #[test]
    fn test_unknown_scheme() {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::new(registry);

        let err = resolver.resolve("jms:queue:orders").unwrap_err();
        assert!(matches!(err, RigError::ComponentNotFound { scheme, .. } if scheme == "jms"));
    }

    #[test]
    fn test_unknown_factory_name_degrades_to_not_found() {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::from_spec(registry, "ghost=no-such-factory");

        let err = resolver.resolve("ghost:x").unwrap_err();
        assert!(matches!(err, RigError::ComponentNotFound { .. }));
    }

    #[test]
    fn test_unreadable_spec_keeps_resolver_usable() {
        let registry = Arc::new(EndpointRegistry::new());
        let resolver = DefaultEndpointResolver::from_spec(Arc::clone(&registry), "not a table");

        // The default table is empty, so even `direct` is unknown now.
        assert!(resolver.resolve("direct:orders").is_err());

        // But direct name lookups still work.
        let component = crate::components::direct::DirectEndpointComponent::new("direct");
        let endpoint = component.create_endpoint("direct:orders", &registry).unwrap();
        registry.register_endpoint("orders", endpoint);
        assert!(resolver.resolve("orders").is_ok());
    }
}

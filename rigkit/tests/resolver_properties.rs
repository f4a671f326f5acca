//! Endpoint resolution behavior tests.
//!
//! Tests pinning the resolver's lookup order: direct name lookups for
//! bare names, live components before the default table, fresh component
//! instances per table-driven resolution, and graceful degradation when
//! the table or a factory is broken.

use rigkit::{DefaultEndpointResolver, Endpoint, EndpointRegistry, RigError};
use rigkit_endpoint::component::{ComponentFactory, EndpointComponent};
use rigkit_testing::{MockComponent, MockEndpoint};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Direct Name Lookup
// =============================================================================

#[test]
fn test_bare_name_resolves_from_registry() {
    let registry = Arc::new(EndpointRegistry::new());
    registry.register_endpoint("orders", Arc::new(MockEndpoint::new("orders")));

    let resolver = DefaultEndpointResolver::new(registry);
    let endpoint = resolver.resolve("orders").unwrap();
    assert_eq!(endpoint.name(), "orders");
}

#[test]
fn test_bare_name_never_consults_component_table() {
    // A name that happens to equal a default-table scheme still resolves
    // as a plain registry lookup, and misses.
    let registry = Arc::new(EndpointRegistry::new());
    let resolver = DefaultEndpointResolver::new(registry);

    let err = resolver.resolve("direct").unwrap_err();
    assert!(matches!(err, RigError::EndpointNotFound { name } if name == "direct"));
}

// =============================================================================
// Live Component Precedence
// =============================================================================

#[test]
fn test_live_component_wins_over_default_table() {
    let registry = Arc::new(EndpointRegistry::new());
    let component = MockComponent::new("direct");
    registry.register_component(Arc::new(component.clone()));

    // `direct` is also in the packaged default table; the live
    // registration must be the one that serves the call.
    let resolver = DefaultEndpointResolver::new(registry);
    let endpoint = resolver.resolve("direct:orders").unwrap();

    assert_eq!(component.created_uris(), vec!["direct:orders"]);
    assert_eq!(endpoint.name(), "direct-endpoint");
}

#[test]
fn test_component_receives_full_uri() {
    let registry = Arc::new(EndpointRegistry::new());
    let component = MockComponent::new("mock");
    registry.register_component(Arc::new(component.clone()));

    let resolver = DefaultEndpointResolver::new(registry);
    resolver.resolve("mock:queue:nested").unwrap();

    assert_eq!(component.created_uris(), vec!["mock:queue:nested"]);
}

#[test]
fn test_component_error_propagates_unchanged() {
    struct BrokenComponent;

    impl EndpointComponent for BrokenComponent {
        fn name(&self) -> &str {
            "broken"
        }

        fn create_endpoint(
            &self,
            _uri: &str,
            _registry: &EndpointRegistry,
        ) -> Result<Arc<dyn Endpoint>, RigError> {
            Err(RigError::message("endpoint wiring exploded"))
        }
    }

    let registry = Arc::new(EndpointRegistry::new());
    registry.register_component(Arc::new(BrokenComponent));

    let resolver = DefaultEndpointResolver::new(registry);
    let err = resolver.resolve("broken:x").unwrap_err();
    assert_eq!(err.to_string(), "endpoint wiring exploded");
}

// =============================================================================
// Default Table Fallback
// =============================================================================

/// A factory that counts how many component instances it builds and
/// records the scheme each instance was named after.
fn counting_factory(
    instances: Arc<AtomicUsize>,
    names: Arc<std::sync::Mutex<Vec<String>>>,
) -> ComponentFactory {
    Arc::new(move |scheme: &str| {
        instances.fetch_add(1, Ordering::SeqCst);
        names
            .lock()
            .expect("names lock")
            .push(scheme.to_string());
        let component: Arc<dyn EndpointComponent> = Arc::new(MockComponent::new(scheme));
        Ok(component)
    })
}

#[test]
fn test_default_table_builds_fresh_instance_per_call() {
    let registry = Arc::new(EndpointRegistry::new());
    let instances = Arc::new(AtomicUsize::new(0));
    let names = Arc::new(std::sync::Mutex::new(Vec::new()));

    let mut resolver = DefaultEndpointResolver::from_spec(registry, "mock=mock-factory");
    resolver.register_factory(
        "mock-factory",
        counting_factory(Arc::clone(&instances), Arc::clone(&names)),
    );

    resolver.resolve("mock:a").unwrap();
    resolver.resolve("mock:b").unwrap();
    resolver.resolve("mock:a").unwrap();

    // One fresh component per call, no caching, each named after the scheme.
    assert_eq!(instances.load(Ordering::SeqCst), 3);
    assert_eq!(
        *names.lock().expect("names lock"),
        vec!["mock", "mock", "mock"]
    );
}

#[test]
fn test_packaged_table_serves_direct_scheme() {
    let registry = Arc::new(EndpointRegistry::new());
    let resolver = DefaultEndpointResolver::new(registry);

    let endpoint = resolver.resolve("direct:orders").unwrap();
    assert_eq!(endpoint.name(), "direct:orders");
}

#[test]
fn test_unknown_scheme_fails_with_component_not_found() {
    let registry = Arc::new(EndpointRegistry::new());
    let resolver = DefaultEndpointResolver::new(registry);

    let err = resolver.resolve("jms:queue:orders").unwrap_err();
    assert!(matches!(err, RigError::ComponentNotFound { scheme, .. } if scheme == "jms"));
}

#[test]
fn test_failing_factory_degrades_to_not_found() {
    let registry = Arc::new(EndpointRegistry::new());
    let mut resolver = DefaultEndpointResolver::from_spec(registry, "flaky=flaky-factory");
    resolver.register_factory(
        "flaky-factory",
        Arc::new(|_scheme: &str| Err(RigError::message("constructor blew up"))),
    );

    // The factory failure is swallowed with a warning; the caller sees
    // the ordinary not-found error, not the constructor's.
    let err = resolver.resolve("flaky:x").unwrap_err();
    assert!(matches!(err, RigError::ComponentNotFound { .. }));
}

// =============================================================================
// Malformed URIs
// =============================================================================

#[test]
fn test_malformed_uris_fail_fast() {
    let registry = Arc::new(EndpointRegistry::new());
    let resolver = DefaultEndpointResolver::new(registry);

    for uri in ["direct:", ":orders", ":"] {
        let err = resolver.resolve(uri).unwrap_err();
        assert!(
            matches!(err, RigError::InvalidEndpointUri { .. }),
            "uri {uri:?} must be rejected as invalid"
        );
    }
}

// =============================================================================
// Graceful Degradation
// =============================================================================

#[test]
fn test_unreadable_table_keeps_live_components_working() {
    let registry = Arc::new(EndpointRegistry::new());
    let component = MockComponent::new("mock");
    registry.register_component(Arc::new(component.clone()));

    let resolver = DefaultEndpointResolver::from_spec(registry, "definitely not a table");
    resolver.resolve("mock:x").unwrap();
    assert_eq!(component.created_uris(), vec!["mock:x"]);
}

#[test]
fn test_unreadable_table_degrades_identically() {
    // Two resolvers built from the same unreadable text behave the same:
    // both have empty default tables, both still serve live components.
    let garbage = "### \nnot=ok=extra\n:::";

    let build = || {
        let registry = Arc::new(EndpointRegistry::new());
        registry.register_component(Arc::new(MockComponent::new("live")));
        DefaultEndpointResolver::from_spec(registry, garbage)
    };

    for resolver in [build(), build()] {
        assert!(resolver.resolve("live:x").is_ok());
        assert!(matches!(
            resolver.resolve("direct:x").unwrap_err(),
            RigError::ComponentNotFound { .. }
        ));
    }
}

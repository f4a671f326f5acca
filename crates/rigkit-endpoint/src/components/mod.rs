//! Built-in endpoint components.
//!
//! The only component shipped with the framework is the in-memory
//! [`direct::DirectEndpointComponent`]; real transports (JMS, HTTP, ...)
//! come from external crates that implement
//! [`EndpointComponent`](crate::component::EndpointComponent) and register
//! themselves on the registry or the resolver's factory table.

pub mod direct;

use crate::component::ComponentFactory;
use std::sync::Arc;

/// Look up a built-in component factory by name.
///
/// Factory names are what the packaged default-component table maps
/// schemes to; additional factories can be registered per resolver via
/// [`DefaultEndpointResolver::register_factory`](crate::resolver::DefaultEndpointResolver::register_factory).
pub(crate) fn builtin_factory(name: &str) -> Option<ComponentFactory> {
    match name {
        "direct" => Some(Arc::new(|scheme: &str| {
            let component: Arc<dyn crate::component::EndpointComponent> =
                Arc::new(direct::DirectEndpointComponent::new(scheme));
            Ok(component)
        })),
        _ => None,
    }
}

//! Endpoint URI parsing.
//!
//! Endpoint URIs take the form `<scheme>:<scheme-specific-part>`, where
//! the scheme selects the component that builds the endpoint and the
//! remainder is interpreted by that component. A string without a `:` is
//! not a URI at all; the resolver treats it as a direct endpoint-name
//! lookup instead.

use rigkit_core::error::RigError;

/// A parsed scheme-qualified endpoint URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointUri {
    raw: String,
    scheme: String,
    rest: String,
}

impl EndpointUri {
    /// Parse a scheme-qualified URI.
    ///
    /// Splits on the FIRST `:`; both the scheme and the remainder must be
    /// non-empty, otherwise parsing fails with
    /// [`RigError::InvalidEndpointUri`]. The remainder may itself contain
    /// further colons (`jms:queue:orders`).
    pub fn parse(raw: &str) -> Result<Self, RigError> {
        let Some((scheme, rest)) = raw.split_once(':') else {
            return Err(RigError::InvalidEndpointUri { uri: raw.into() });
        };

        if scheme.is_empty() || rest.is_empty() {
            return Err(RigError::InvalidEndpointUri { uri: raw.into() });
        }

        Ok(Self {
            raw: raw.into(),
            scheme: scheme.into(),
            rest: rest.into(),
        })
    }

    /// Whether a string is scheme-qualified at all.
    ///
    /// Strings without a separator are direct endpoint-name lookups, not
    /// URIs.
    #[must_use]
    pub fn is_scheme_qualified(raw: &str) -> bool {
        raw.contains(':')
    }

    /// The scheme token (everything before the first `:`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The scheme-specific part (everything after the first `:`).
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.rest
    }

    /// The full URI as originally given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for EndpointUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

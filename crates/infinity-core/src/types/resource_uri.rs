//! Resource URI type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The path at which a configuration object is addressable, for example
/// `/api/admin/configuration/v1/dns_server/1/`.
///
/// Resource URIs are opaque: the string is kept exactly as the server sent
/// it and is never normalised, re-encoded or followed.
///
/// # Example
///
/// ```
/// use infinity_core::ResourceUri;
///
/// let uri = ResourceUri::new("/api/admin/configuration/v1/dns_server/123/");
/// assert_eq!(uri.last_segment(), Some("123"));
/// assert_eq!(uri.id::<u64>(), Some(123));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    /// Wrap a resource URI string verbatim.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last non-empty path segment (the object key).
    pub fn last_segment(&self) -> Option<&str> {
        self.0.split('/').rev().find(|segment| !segment.is_empty())
    }

    /// Parses the last path segment as an identifier.
    pub fn id<T: FromStr>(&self) -> Option<T> {
        self.last_segment()?.parse().ok()
    }

    /// Consumes the URI, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResourceUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl From<&str> for ResourceUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl AsRef<str> for ResourceUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_from_trailing_segment() {
        let uri = ResourceUri::new("/api/admin/configuration/v1/tls_certificate/17/");
        assert_eq!(uri.id::<u64>(), Some(17));
    }

    #[test]
    fn string_key_from_trailing_segment() {
        let uri = ResourceUri::new("/api/admin/configuration/v1/licence/FUL-0042/");
        assert_eq!(uri.last_segment(), Some("FUL-0042"));
        assert_eq!(uri.id::<u64>(), None);
    }

    #[test]
    fn kept_verbatim() {
        let raw = "/api/admin/configuration/v1/dns_server//5/";
        let uri = ResourceUri::new(raw);
        assert_eq!(uri.as_str(), raw);
        assert_eq!(serde_json::to_string(&uri).unwrap(), format!("\"{raw}\""));
    }

    #[test]
    fn empty_uri_has_no_segment() {
        assert_eq!(ResourceUri::new("").last_segment(), None);
    }
}

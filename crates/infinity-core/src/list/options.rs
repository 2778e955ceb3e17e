//! Query parameters for list operations.

use std::collections::BTreeMap;

use url::form_urlencoded;

use super::ListMeta;

/// Server filter used for free-text search.
pub const SEARCH_KEY: &str = "name__icontains";

/// Pagination, search and filters for a list call.
///
/// `limit` and `offset` of zero mean "unspecified". Search is sent as the
/// `name__icontains` filter; for kinds whose searchable field is not `name`,
/// put the appropriate filter in `filters` instead. A filter with the key
/// `name__icontains` takes precedence over `search`.
///
/// # Example
///
/// ```
/// use infinity_core::ListOptions;
///
/// let options = ListOptions::new().with_limit(5).with_search("google");
/// assert_eq!(options.encode(), "limit=5&name__icontains=google");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Add an exact-match filter, e.g. `("primary_owner_email_address", "a@b.c")`.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Encode as an `application/x-www-form-urlencoded` query string.
    ///
    /// Parameters are emitted sorted by key, so equal options always produce
    /// byte-identical strings. Returns an empty string when nothing is set.
    pub fn encode(&self) -> String {
        let mut params: BTreeMap<&str, String> = BTreeMap::new();

        if self.limit > 0 {
            params.insert("limit", self.limit.to_string());
        }
        if self.offset > 0 {
            params.insert("offset", self.offset.to_string());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.insert(SEARCH_KEY, search.to_string());
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                params.insert(key.as_str(), value.clone());
            }
        }

        if params.is_empty() {
            return String::new();
        }

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish()
    }

    /// Options for the page after the one described by `meta`.
    ///
    /// Returns `None` when the server reported no next page.
    pub fn next_page(&self, meta: &ListMeta) -> Option<Self> {
        if !meta.has_next() {
            return None;
        }
        let limit = if self.limit > 0 { self.limit } else { meta.limit };
        let mut next = self.clone();
        next.limit = limit;
        next.offset = meta.offset.saturating_add(limit);
        Some(next)
    }
}

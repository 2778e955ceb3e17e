//! Paginated list envelope.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination metadata returned with every list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub limit: u32,
    /// Pointer to the next page; empty on the last page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub next: String,
    #[serde(default)]
    pub offset: u32,
    /// Pointer to the previous page; empty on the first page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub previous: String,
    #[serde(default)]
    pub total_count: u64,
}

impl ListMeta {
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }
}

/// A page of objects in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub meta: ListMeta,
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_pointers_become_empty_strings() {
        let response: ListResponse<serde_json::Value> = serde_json::from_value(json!({
            "meta": {"limit": 20, "next": null, "offset": 0, "previous": null, "total_count": 1},
            "objects": [{"id": 1}]
        }))
        .unwrap();
        assert_eq!(response.meta.next, "");
        assert_eq!(response.meta.previous, "");
        assert!(!response.meta.has_next());
        assert_eq!(response.len(), 1);
    }

    #[test]
    fn preserves_server_order() {
        let response: ListResponse<u32> = serde_json::from_value(json!({
            "meta": {"limit": 3, "next": "", "offset": 0, "previous": "", "total_count": 3},
            "objects": [3, 1, 2]
        }))
        .unwrap();
        assert_eq!(response.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn next_pointer_is_kept_verbatim() {
        let meta: ListMeta = serde_json::from_value(json!({
            "limit": 20,
            "next": "/api/admin/configuration/v1/device/?limit=20&offset=20",
            "offset": 0,
            "previous": "",
            "total_count": 45
        }))
        .unwrap();
        assert!(meta.has_next());
        assert_eq!(meta.next, "/api/admin/configuration/v1/device/?limit=20&offset=20");
    }
}

//! Three-state field for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be left out, explicitly cleared, or set.
///
/// Update requests distinguish "leave unchanged" from "clear". Pair the
/// field with `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`
/// so that:
///
/// - `Unset` is omitted from the encoded body,
/// - `Null` is encoded as JSON `null`,
/// - `Value(v)` is encoded as `v`.
///
/// Decoding maps an absent field to `Unset` (through `default`), `null` to
/// `Null` and anything else to `Value`.
///
/// # Example
///
/// ```
/// use infinity_core::Nullable;
/// use serde::Serialize;
///
/// #[derive(Serialize, Default)]
/// struct Patch {
///     #[serde(default, skip_serializing_if = "Nullable::is_unset")]
///     enable_sip: Nullable<bool>,
/// }
///
/// let unset = Patch::default();
/// let cleared = Patch { enable_sip: Nullable::Null };
/// let set = Patch { enable_sip: true.into() };
/// assert_eq!(serde_json::to_string(&unset).unwrap(), "{}");
/// assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"enable_sip":null}"#);
/// assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"enable_sip":true}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Leave the field out of the request.
    Unset,
    /// Send an explicit `null` to clear the field.
    Null,
    /// Send the value.
    Value(T),
}

impl<T> Nullable<T> {
    /// `None` becomes an explicit `Null`, `Some(v)` becomes `Value(v)`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(value) => serializer.serialize_some(value),
            // Unset is normally skipped by the field attribute; if it is not,
            // null is the only faithful encoding.
            Nullable::Unset | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::from_option)
    }
}

//! Typed forms of every configuration kind.
//!
//! Each kind has up to three forms sharing field names:
//!
//! - the read form (`DnsServer`), which carries server-assigned fields and is
//!   what list, get, and update return;
//! - the create form (`DnsServerCreate`), where required fields are plain
//!   and optional ones are left out of the body when `None`;
//! - the update form (`DnsServerUpdate`), where every field is optional.
//!   Booleans and references use [`Nullable`](infinity_core::Nullable) so an
//!   update can clear them with an explicit `null`.
//!
//! Read forms default every missing field, since the server omits fields
//! that do not apply to an object.

mod devices;
mod global;
mod identity;
mod media_library;
mod mjx;
mod operational;
mod system;

pub use devices::*;
pub use global::*;
pub use identity::*;
pub use media_library::*;
pub use mjx::*;
pub use operational::*;
pub use system::*;

use infinity_core::InfinityTime;
use serde::{Deserialize, Deserializer};

/// Decode an optional timestamp, treating `""` like `null`.
pub(crate) fn optional_time<'de, D>(deserializer: D) -> Result<Option<InfinityTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => InfinityTime::parse(&value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

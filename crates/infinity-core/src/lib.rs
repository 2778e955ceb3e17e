//! infinity-core - Core types and traits for the Infinity configuration client.

pub mod context;
pub mod credentials;
pub mod error;
pub mod list;
pub mod tokens;
pub mod traits;
pub mod types;

pub use context::Context;
pub use credentials::{Auth, Credentials};
pub use error::Error;
pub use list::{ListMeta, ListOptions, ListResponse};
pub use tokens::BearerToken;
pub use traits::{Discard, LocationResponse, Transport};
pub use types::{BaseUrl, InfinityTime, Nullable, ResourceUri};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

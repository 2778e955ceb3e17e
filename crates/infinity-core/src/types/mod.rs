//! Core wire types.
//!
//! These types enforce their invariants at construction time, so invalid
//! base URLs and timestamps are rejected before any request is built.

mod base_url;
mod nullable;
mod resource_uri;
mod time;

pub use base_url::BaseUrl;
pub use nullable::Nullable;
pub use resource_uri::ResourceUri;
pub use time::InfinityTime;

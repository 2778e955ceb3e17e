//! List queries and paginated responses.

mod options;
mod response;

pub use options::{ListOptions, SEARCH_KEY};
pub use response::{ListMeta, ListResponse};

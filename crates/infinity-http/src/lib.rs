//! infinity-http - reqwest-backed transport for the management API.

mod client;
mod transport;

pub use client::{DEFAULT_MAX_ERROR_BODY, DEFAULT_TIMEOUT, HttpClient, HttpClientBuilder};

//! Core traits for transport behavior.

mod transport;

pub use transport::{Discard, LocationResponse, Transport};

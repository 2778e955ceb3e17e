//! Transport trait.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::{Context, ResourceUri, Result};

/// Result type for callers that want the response body discarded.
///
/// Decoding into `Discard` accepts any JSON (or an empty body), which makes
/// it the "no result wanted" choice for any transport operation.
pub type Discard = serde::de::IgnoredAny;

/// Response of a POST whose server answers with a `Location` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationResponse {
    /// The created resource, when the server sent a `Location` header.
    pub location: Option<ResourceUri>,
    /// The raw response body, possibly empty.
    pub body: Vec<u8>,
}

impl LocationResponse {
    /// Decode the body, returning `None` when the body is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) when the body is not
    /// valid JSON for `R`.
    pub fn decode<R: DeserializeOwned>(&self) -> Result<Option<R>> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&self.body)
            .map(Some)
            .map_err(|e| DecodeError::new(&self.body, e).into())
    }
}

/// The HTTP boundary of the client.
///
/// `endpoint` is always relative to the configured base URL and has no
/// leading slash, e.g. `configuration/v1/dns_server/1/`. Every method issues
/// exactly one request and never retries; implementations must return
/// [`Error::Cancelled`](crate::Error::Cancelled) without issuing a request
/// when `ctx` is already cancelled.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET` the endpoint with an encoded query (empty for none) and decode
    /// the JSON response.
    async fn get_json<R>(&self, ctx: &Context, endpoint: &str, query: &str) -> Result<R>
    where
        R: DeserializeOwned + Send;

    /// `POST` a JSON body and decode the JSON response.
    async fn post_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send;

    /// `POST` a JSON body to an endpoint that answers with a `Location` header.
    async fn post_with_location<B>(
        &self,
        ctx: &Context,
        endpoint: &str,
        body: &B,
    ) -> Result<LocationResponse>
    where
        B: Serialize + Sync;

    /// `PUT` a JSON body and decode the JSON response.
    async fn put_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send;

    /// `PATCH` a JSON body and decode the JSON response.
    async fn patch_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send;

    /// `DELETE` the endpoint; any response body is ignored.
    async fn delete_json(&self, ctx: &Context, endpoint: &str) -> Result<()>;
}

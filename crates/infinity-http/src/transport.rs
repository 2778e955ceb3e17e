//! [`Transport`] implementation for [`HttpClient`].

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use infinity_core::error::DecodeError;
use infinity_core::{Context, Error, LocationResponse, Result, Transport};

use crate::client::HttpClient;

#[async_trait]
impl Transport for HttpClient {
    async fn get_json<R>(&self, ctx: &Context, endpoint: &str, query: &str) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        let response = self.execute(ctx, Method::GET, endpoint, query, None).await?;
        decode(&response.body)
    }

    async fn post_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let body = encode(body)?;
        let response = self
            .execute(ctx, Method::POST, endpoint, "", Some(body))
            .await?;
        decode(&response.body)
    }

    async fn post_with_location<B>(
        &self,
        ctx: &Context,
        endpoint: &str,
        body: &B,
    ) -> Result<LocationResponse>
    where
        B: Serialize + Sync,
    {
        let body = encode(body)?;
        let response = self
            .execute(ctx, Method::POST, endpoint, "", Some(body))
            .await?;

        if response.location.is_none() {
            debug!(endpoint, "create response carried no Location header");
        }

        Ok(LocationResponse {
            location: response.location,
            body: response.body,
        })
    }

    async fn put_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let body = encode(body)?;
        let response = self
            .execute(ctx, Method::PUT, endpoint, "", Some(body))
            .await?;
        decode(&response.body)
    }

    async fn patch_json<B, R>(&self, ctx: &Context, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let body = encode(body)?;
        let response = self
            .execute(ctx, Method::PATCH, endpoint, "", Some(body))
            .await?;
        decode(&response.body)
    }

    async fn delete_json(&self, ctx: &Context, endpoint: &str) -> Result<()> {
        self.execute(ctx, Method::DELETE, endpoint, "", None).await?;
        Ok(())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(Error::Encode)
}

/// Decode a 2xx body; an empty body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let json: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(json).map_err(|e| DecodeError::new(body, e).into())
}

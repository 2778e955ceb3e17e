//! Singleton resources: one object at a fixed address, get and update only.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use infinity_core::{Context, Result, Transport};

use crate::resource::{UpdateMethod, object_endpoint, update_with_method};

/// The id a singleton is always addressed with.
pub const SINGLETON_ID: u64 = 1;

/// A kind with exactly one object, served at `configuration/v1/<KIND>/1/`.
pub trait Singleton: DeserializeOwned + Send {
    const KIND: &'static str;

    type Update: Serialize + Sync;
}

/// Endpoint of a singleton kind.
pub fn singleton_endpoint(kind: &str) -> String {
    object_endpoint(kind, SINGLETON_ID)
}

/// Get and update for a [`Singleton`]; no id is ever surfaced.
pub struct SingletonClient<'a, T, K> {
    transport: &'a T,
    kind: PhantomData<fn() -> K>,
}

impl<T, K> Clone for SingletonClient<'_, T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for SingletonClient<'_, T, K> {}

impl<T, K: Singleton> fmt::Debug for SingletonClient<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonClient")
            .field("kind", &K::KIND)
            .finish()
    }
}

impl<'a, T: Transport, K: Singleton> SingletonClient<'a, T, K> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            kind: PhantomData,
        }
    }

    pub fn endpoint(&self) -> String {
        singleton_endpoint(K::KIND)
    }

    #[instrument(skip(self, ctx), fields(kind = K::KIND))]
    pub async fn get(&self, ctx: &Context) -> Result<K> {
        debug!("get singleton");
        self.transport.get_json(ctx, &self.endpoint(), "").await
    }

    /// `PUT` the fields set in `update` and return the new state.
    #[instrument(skip(self, ctx, update), fields(kind = K::KIND))]
    pub async fn update(&self, ctx: &Context, update: &K::Update) -> Result<K> {
        debug!("update singleton");
        update_with_method(self.transport, ctx, &self.endpoint(), UpdateMethod::Put, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_is_addressed_with_id_one() {
        assert_eq!(singleton_endpoint("global"), "configuration/v1/global/1/");
    }
}

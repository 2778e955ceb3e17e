//! Kind-erased access driven by the [`catalogue`](crate::catalogue).
//!
//! Objects travel as `serde_json::Value`, so any catalogued kind can be
//! reached by name (from a CLI argument, say) without its typed forms.

use std::fmt;

use serde_json::Value;
use tracing::{debug, instrument};

use infinity_core::error::InvalidInputError;
use infinity_core::{Context, Error, ListOptions, ListResponse, Result, Transport};

use crate::catalogue::{KeyType, KindDescriptor, lookup};
use crate::resource::{
    Created, checked_object_endpoint, collection_endpoint, create_with_shape, update_with_method,
};
use crate::singleton::singleton_endpoint;

/// Operations on a kind chosen at runtime.
pub struct DynamicResource<'a, T> {
    transport: &'a T,
    descriptor: &'static KindDescriptor,
}

impl<T> fmt::Debug for DynamicResource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicResource")
            .field("kind", &self.descriptor.kind)
            .finish()
    }
}

impl<T> Clone for DynamicResource<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DynamicResource<'_, T> {}

impl<'a, T: Transport> DynamicResource<'a, T> {
    /// Resolve `kind` against the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::UnknownKind`] for a kind the catalogue
    /// does not list.
    pub(crate) fn new(transport: &'a T, kind: &str) -> Result<Self> {
        let descriptor = lookup(kind).ok_or_else(|| InvalidInputError::UnknownKind {
            kind: kind.to_string(),
        })?;
        Ok(Self {
            transport,
            descriptor,
        })
    }

    pub fn descriptor(&self) -> &'static KindDescriptor {
        self.descriptor
    }

    #[instrument(skip(self, ctx, options), fields(kind = self.descriptor.kind))]
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&ListOptions>,
    ) -> Result<ListResponse<Value>> {
        if !self.descriptor.list {
            return Err(self.unsupported("list"));
        }
        let query = options.map(ListOptions::encode).unwrap_or_default();
        debug!(%query, "list");
        self.transport
            .get_json(ctx, &collection_endpoint(self.descriptor.kind), &query)
            .await
    }

    /// Fetch one object; `id` must be `None` for a singleton.
    #[instrument(skip(self, ctx), fields(kind = self.descriptor.kind))]
    pub async fn get(&self, ctx: &Context, id: Option<&str>) -> Result<Value> {
        let endpoint = self.object_endpoint(id)?;
        self.transport.get_json(ctx, &endpoint, "").await
    }

    #[instrument(skip(self, ctx, body), fields(kind = self.descriptor.kind))]
    pub async fn create(&self, ctx: &Context, body: &Value) -> Result<Created<Value>> {
        let shape = self.descriptor.create.ok_or_else(|| self.unsupported("create"))?;
        create_with_shape(
            self.transport,
            ctx,
            &collection_endpoint(self.descriptor.kind),
            shape,
            body,
        )
        .await
    }

    /// Update one object, with `PATCH` for kinds that require it.
    #[instrument(skip(self, ctx, body), fields(kind = self.descriptor.kind))]
    pub async fn update(&self, ctx: &Context, id: Option<&str>, body: &Value) -> Result<Value> {
        let method = self.descriptor.update.ok_or_else(|| self.unsupported("update"))?;
        let endpoint = self.object_endpoint(id)?;
        update_with_method(self.transport, ctx, &endpoint, method, body).await
    }

    #[instrument(skip(self, ctx), fields(kind = self.descriptor.kind))]
    pub async fn delete(&self, ctx: &Context, id: &str) -> Result<()> {
        if !self.descriptor.delete {
            return Err(self.unsupported("delete"));
        }
        let endpoint = self.object_endpoint(Some(id))?;
        self.transport.delete_json(ctx, &endpoint).await
    }

    /// The endpoint of one object, validating `id` against the kind's key.
    pub fn object_endpoint(&self, id: Option<&str>) -> Result<String> {
        let kind = self.descriptor.kind;
        match (self.descriptor.is_singleton(), id) {
            (true, None) => Ok(singleton_endpoint(kind)),
            (true, Some(_)) => Err(invalid(format!("'{kind}' is a singleton and takes no id"))),
            (false, None) => Err(invalid(format!("'{kind}' requires an id"))),
            (false, Some(id)) => {
                let id = id.trim();
                match self.descriptor.key {
                    KeyType::Integer if id.parse::<u64>().is_err() => {
                        Err(invalid(format!("'{kind}' ids are integers, got '{id}'")))
                    }
                    KeyType::String if id.contains('/') => {
                        Err(invalid(format!("invalid '{kind}' id '{id}'")))
                    }
                    _ => checked_object_endpoint(kind, id),
                }
            }
        }
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        debug!(kind = self.descriptor.kind, operation, "operation not offered");
        InvalidInputError::Unsupported {
            kind: self.descriptor.kind.to_string(),
            operation,
        }
        .into()
    }
}

fn invalid(message: String) -> Error {
    InvalidInputError::Other { message }.into()
}

//! The operation template shared by every collection resource.
//!
//! A resource kind is bound by implementing [`Resource`] on its read form
//! plus whichever of [`Listable`], [`Creatable`], [`Updatable`] and
//! [`Deletable`] the server offers for it. [`ResourceClient`] then exposes
//! exactly those operations.

use std::fmt;
use std::marker::PhantomData;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use infinity_core::error::{DecodeError, InvalidInputError};
use infinity_core::{Context, Discard, ListOptions, ListResponse, ResourceUri, Result, Transport};

/// Path prefix shared by every configuration endpoint.
pub const CONFIGURATION_PREFIX: &str = "configuration/v1";

/// Everything but RFC 3986 unreserved characters is escaped in an id.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A configuration resource kind served at `configuration/v1/<KIND>/`.
pub trait Resource: DeserializeOwned + Send {
    /// Path segment of the kind, e.g. `dns_server`.
    const KIND: &'static str;

    /// Object key: an integer for most kinds, a string for licences.
    type Id: fmt::Display + fmt::Debug + Send + Sync;
}

/// Kinds whose collection can be listed.
pub trait Listable: Resource {}

/// Kinds that can be created.
pub trait Creatable: Resource {
    /// Create form: server-assigned fields excluded.
    type Create: Serialize + Sync;

    /// How the server answers a create.
    const CREATE_SHAPE: CreateShape;
}

/// Kinds that can be updated.
pub trait Updatable: Resource {
    /// Update form: every field optional.
    type Update: Serialize + Sync;

    const UPDATE_METHOD: UpdateMethod;
}

/// Kinds that can be deleted.
pub trait Deletable: Resource {}

/// Response shape of a create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreateShape {
    /// `201` with a `Location` header and an empty or ignorable body.
    Location,
    /// The created object in the response body.
    Body,
}

/// HTTP method used for updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateMethod {
    Put,
    Patch,
}

impl UpdateMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMethod::Put => "PUT",
            UpdateMethod::Patch => "PATCH",
        }
    }
}

/// Result of a create.
#[derive(Debug, Clone, PartialEq)]
pub enum Created<R> {
    /// The server returned the created object.
    Body(R),
    /// The server pointed at the created object with `Location`.
    Location(ResourceUri),
}

impl<R> Created<R> {
    pub fn location(&self) -> Option<&ResourceUri> {
        match self {
            Created::Location(uri) => Some(uri),
            Created::Body(_) => None,
        }
    }

    pub fn entity(&self) -> Option<&R> {
        match self {
            Created::Body(entity) => Some(entity),
            Created::Location(_) => None,
        }
    }

    pub fn into_entity(self) -> Option<R> {
        match self {
            Created::Body(entity) => Some(entity),
            Created::Location(_) => None,
        }
    }

    /// Map the body variant, keeping a location as is.
    pub fn map<S>(self, f: impl FnOnce(R) -> S) -> Created<S> {
        match self {
            Created::Body(entity) => Created::Body(f(entity)),
            Created::Location(uri) => Created::Location(uri),
        }
    }
}

/// Endpoint of a kind's collection, `configuration/v1/<kind>/`.
pub fn collection_endpoint(kind: &str) -> String {
    format!("{CONFIGURATION_PREFIX}/{kind}/")
}

/// Endpoint of one object, `configuration/v1/<kind>/<id>/`, with the id
/// percent-encoded as a single path segment.
pub fn object_endpoint(kind: &str, id: impl fmt::Display) -> String {
    let id = id.to_string();
    format!(
        "{CONFIGURATION_PREFIX}/{kind}/{}/",
        utf8_percent_encode(&id, ID_ENCODE_SET)
    )
}

/// As [`object_endpoint`], rejecting ids that cannot name an object.
///
/// Empty, `.` and `..` ids would address the collection or its parent.
pub(crate) fn checked_object_endpoint(kind: &str, id: impl fmt::Display) -> Result<String> {
    let id = id.to_string();
    if id.is_empty() || id == "." || id == ".." {
        return Err(InvalidInputError::Other {
            message: format!("invalid '{kind}' id '{id}'"),
        }
        .into());
    }
    Ok(object_endpoint(kind, id))
}

/// Issue a create and normalise the two server behaviours into [`Created`].
///
/// For a location-shaped create without a `Location` header the body is
/// decoded as the created object; a body that does not decode is an error.
pub(crate) async fn create_with_shape<T, B, R>(
    transport: &T,
    ctx: &Context,
    endpoint: &str,
    shape: CreateShape,
    body: &B,
) -> Result<Created<R>>
where
    T: Transport,
    B: Serialize + Sync,
    R: DeserializeOwned + Send,
{
    match shape {
        CreateShape::Body => transport.post_json(ctx, endpoint, body).await.map(Created::Body),
        CreateShape::Location => {
            let response = transport.post_with_location(ctx, endpoint, body).await?;
            if let Some(location) = response.location {
                return Ok(Created::Location(location));
            }
            let entity = serde_json::from_slice(&response.body)
                .map_err(|e| DecodeError::new(&response.body, e))?;
            Ok(Created::Body(entity))
        }
    }
}

/// Issue an update with the given method.
pub(crate) async fn update_with_method<T, B, R>(
    transport: &T,
    ctx: &Context,
    endpoint: &str,
    method: UpdateMethod,
    body: &B,
) -> Result<R>
where
    T: Transport,
    B: Serialize + Sync,
    R: DeserializeOwned + Send,
{
    match method {
        UpdateMethod::Put => transport.put_json(ctx, endpoint, body).await,
        UpdateMethod::Patch => transport.patch_json(ctx, endpoint, body).await,
    }
}

/// Operations on one resource kind.
///
/// Obtained from [`ConfigService`](crate::ConfigService); borrows its
/// transport and holds no other state.
pub struct ResourceClient<'a, T, K> {
    transport: &'a T,
    kind: PhantomData<fn() -> K>,
}

impl<T, K> Clone for ResourceClient<'_, T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for ResourceClient<'_, T, K> {}

impl<T, K: Resource> fmt::Debug for ResourceClient<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("kind", &K::KIND)
            .finish()
    }
}

impl<'a, T: Transport, K: Resource> ResourceClient<'a, T, K> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            kind: PhantomData,
        }
    }

    pub fn kind(&self) -> &'static str {
        K::KIND
    }

    pub fn collection_endpoint(&self) -> String {
        collection_endpoint(K::KIND)
    }

    /// # Errors
    ///
    /// Returns an error for an empty, `.` or `..` id.
    pub fn object_endpoint(&self, id: &K::Id) -> Result<String> {
        checked_object_endpoint(K::KIND, id)
    }

    /// Fetch one object.
    #[instrument(skip(self, ctx), fields(kind = K::KIND))]
    pub async fn get(&self, ctx: &Context, id: K::Id) -> Result<K> {
        debug!("get");
        self.transport
            .get_json(ctx, &self.object_endpoint(&id)?, "")
            .await
    }
}

impl<T: Transport, K: Listable> ResourceClient<'_, T, K> {
    /// Fetch one page of the collection, in server order.
    #[instrument(skip(self, ctx, options), fields(kind = K::KIND))]
    pub async fn list(
        &self,
        ctx: &Context,
        options: Option<&ListOptions>,
    ) -> Result<ListResponse<K>> {
        let query = options.map(ListOptions::encode).unwrap_or_default();
        debug!(%query, "list");
        self.transport
            .get_json(ctx, &self.collection_endpoint(), &query)
            .await
    }
}

impl<T: Transport, K: Creatable> ResourceClient<'_, T, K> {
    #[instrument(skip(self, ctx, create), fields(kind = K::KIND))]
    pub async fn create(&self, ctx: &Context, create: &K::Create) -> Result<Created<K>> {
        debug!(shape = ?K::CREATE_SHAPE, "create");
        create_with_shape(
            self.transport,
            ctx,
            &self.collection_endpoint(),
            K::CREATE_SHAPE,
            create,
        )
        .await
    }
}

impl<T: Transport, K: Updatable> ResourceClient<'_, T, K> {
    /// Update one object and return it as the server now holds it.
    #[instrument(skip(self, ctx, update), fields(kind = K::KIND))]
    pub async fn update(&self, ctx: &Context, id: K::Id, update: &K::Update) -> Result<K> {
        debug!(method = K::UPDATE_METHOD.as_str(), "update");
        update_with_method(
            self.transport,
            ctx,
            &self.object_endpoint(&id)?,
            K::UPDATE_METHOD,
            update,
        )
        .await
    }

    /// Update one object, discarding whatever the server answers with.
    #[instrument(skip(self, ctx, update), fields(kind = K::KIND))]
    pub async fn update_discard(&self, ctx: &Context, id: K::Id, update: &K::Update) -> Result<()> {
        let _: Discard = update_with_method(
            self.transport,
            ctx,
            &self.object_endpoint(&id)?,
            K::UPDATE_METHOD,
            update,
        )
        .await?;
        Ok(())
    }
}

impl<T: Transport, K: Deletable> ResourceClient<'_, T, K> {
    #[instrument(skip(self, ctx), fields(kind = K::KIND))]
    pub async fn delete(&self, ctx: &Context, id: K::Id) -> Result<()> {
        debug!("delete");
        self.transport
            .delete_json(ctx, &self.object_endpoint(&id)?)
            .await
    }
}

/// Bind a kind that supports every collection operation.
///
/// ```ignore
/// collection!(DnsServer => "dns_server", create: DnsServerCreate as Location, update: DnsServerUpdate);
/// ```
macro_rules! collection {
    ($entity:ty => $kind:literal, create: $create:ty as $shape:ident, update: $update:ty) => {
        impl $crate::resource::Resource for $entity {
            const KIND: &'static str = $kind;
            type Id = u64;
        }

        impl $crate::resource::Listable for $entity {}

        impl $crate::resource::Creatable for $entity {
            type Create = $create;
            const CREATE_SHAPE: $crate::resource::CreateShape =
                $crate::resource::CreateShape::$shape;
        }

        impl $crate::resource::Updatable for $entity {
            type Update = $update;
            const UPDATE_METHOD: $crate::resource::UpdateMethod =
                $crate::resource::UpdateMethod::Put;
        }

        impl $crate::resource::Deletable for $entity {}
    };
}

pub(crate) use collection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_have_no_leading_slash_and_a_trailing_one() {
        assert_eq!(collection_endpoint("dns_server"), "configuration/v1/dns_server/");
        assert_eq!(
            object_endpoint("dns_server", 42),
            "configuration/v1/dns_server/42/"
        );
        assert_eq!(
            object_endpoint("licence", "FID-123"),
            "configuration/v1/licence/FID-123/"
        );
    }

    #[test]
    fn ids_are_escaped_as_one_path_segment() {
        assert_eq!(
            object_endpoint("licence", "FID-1?limit=1&x="),
            "configuration/v1/licence/FID-1%3Flimit%3D1%26x%3D/"
        );
        assert_eq!(
            object_endpoint("licence", "a/b #%"),
            "configuration/v1/licence/a%2Fb%20%23%25/"
        );
        assert_eq!(object_endpoint("licence", "v1.2_x~y"), "configuration/v1/licence/v1.2_x~y/");
    }

    #[test]
    fn dot_segments_are_not_ids() {
        for id in ["", ".", ".."] {
            assert!(checked_object_endpoint("licence", id).is_err());
        }
        assert!(checked_object_endpoint("licence", "...").is_ok());
    }

    #[test]
    fn created_accessors() {
        let body: Created<u32> = Created::Body(7);
        assert_eq!(body.entity(), Some(&7));
        assert!(body.location().is_none());
        assert_eq!(body.map(|n| n * 2).into_entity(), Some(14));

        let location: Created<u32> =
            Created::Location(ResourceUri::new("/api/admin/configuration/v1/dns_server/3/"));
        assert_eq!(location.location().and_then(|uri| uri.id::<u64>()), Some(3));
        assert!(location.into_entity().is_none());
    }

    #[test]
    fn update_method_names() {
        assert_eq!(UpdateMethod::Put.as_str(), "PUT");
        assert_eq!(UpdateMethod::Patch.as_str(), "PATCH");
    }
}

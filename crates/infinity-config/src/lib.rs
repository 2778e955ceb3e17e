//! infinity-config - typed access to Infinity configuration resources.
//!
//! [`ConfigService`] is the entry point. Each kind has a named accessor
//! returning a [`ResourceClient`] that offers the operations the server
//! supports for that kind; [`ConfigService::by_kind`] reaches the same
//! operations by name with JSON values.

pub mod catalogue;
pub mod dynamic;
pub mod models;
pub mod resource;
pub mod service;
pub mod singleton;

pub use catalogue::{CATALOGUE, KindDescriptor};
pub use dynamic::DynamicResource;
pub use resource::{
    CreateShape, Creatable, Created, Deletable, Listable, Resource, ResourceClient, UpdateMethod,
    Updatable,
};
pub use service::ConfigService;
pub use singleton::{Singleton, SingletonClient};

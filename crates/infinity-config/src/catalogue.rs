//! Runtime catalogue of every supported kind and the operations it offers.

use std::fmt;

use crate::resource::{CreateShape, UpdateMethod};

/// Whether a kind is a collection or a single fixed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Collection,
    Singleton,
}

/// Type of the object key in a kind's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Integer,
    String,
}

/// What the server offers for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub kind: &'static str,
    pub shape: Shape,
    pub key: KeyType,
    pub list: bool,
    pub create: Option<CreateShape>,
    pub update: Option<UpdateMethod>,
    pub delete: bool,
}

impl KindDescriptor {
    /// A collection with every operation; creates answer with `Location`.
    const fn collection(kind: &'static str) -> Self {
        Self {
            kind,
            shape: Shape::Collection,
            key: KeyType::Integer,
            list: true,
            create: Some(CreateShape::Location),
            update: Some(UpdateMethod::Put),
            delete: true,
        }
    }

    const fn singleton(kind: &'static str) -> Self {
        Self {
            kind,
            shape: Shape::Singleton,
            key: KeyType::Integer,
            list: false,
            create: None,
            update: Some(UpdateMethod::Put),
            delete: false,
        }
    }

    const fn body_create(mut self) -> Self {
        self.create = Some(CreateShape::Body);
        self
    }

    const fn patch_update(mut self) -> Self {
        self.update = Some(UpdateMethod::Patch);
        self
    }

    const fn string_key(mut self) -> Self {
        self.key = KeyType::String;
        self
    }

    const fn no_list(mut self) -> Self {
        self.list = false;
        self
    }

    const fn no_create(mut self) -> Self {
        self.create = None;
        self
    }

    const fn no_update(mut self) -> Self {
        self.update = None;
        self
    }

    const fn no_delete(mut self) -> Self {
        self.delete = false;
        self
    }

    pub fn is_singleton(&self) -> bool {
        self.shape == Shape::Singleton
    }

    /// Names of the supported operations, in CRUD order.
    pub fn operations(&self) -> Vec<&'static str> {
        let mut ops = Vec::with_capacity(5);
        if self.list {
            ops.push("list");
        }
        ops.push("get");
        if self.create.is_some() {
            ops.push("create");
        }
        if self.update.is_some() {
            ops.push("update");
        }
        if self.delete {
            ops.push("delete");
        }
        ops
    }
}

impl fmt::Display for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind)
    }
}

/// Every supported kind, sorted by path segment.
pub static CATALOGUE: &[KindDescriptor] = &[
    KindDescriptor::collection("adfs_auth_server"),
    KindDescriptor::collection("adfs_auth_server_domain"),
    KindDescriptor::collection("certificate_signing_request"),
    KindDescriptor::collection("device"),
    KindDescriptor::collection("diagnostic_graphs")
        .no_create()
        .no_update()
        .no_delete(),
    KindDescriptor::collection("dns_server"),
    KindDescriptor::collection("end_user").body_create(),
    KindDescriptor::collection("event_sink"),
    KindDescriptor::collection("external_webapp_host"),
    KindDescriptor::singleton("global"),
    KindDescriptor::collection("google_auth_server"),
    KindDescriptor::collection("google_auth_server_domain"),
    KindDescriptor::collection("http_proxy"),
    KindDescriptor::collection("identity_provider"),
    KindDescriptor::collection("identity_provider_attribute"),
    KindDescriptor::collection("identity_provider_group"),
    KindDescriptor::collection("ldap_role"),
    KindDescriptor::collection("ldap_sync_field"),
    KindDescriptor::collection("licence").string_key().no_update(),
    KindDescriptor::collection("management_vm")
        .no_list()
        .no_create()
        .no_update(),
    KindDescriptor::collection("media_library_entry"),
    KindDescriptor::collection("media_library_playlist"),
    KindDescriptor::collection("media_library_playlist_entry"),
    KindDescriptor::collection("media_processing_server"),
    KindDescriptor::collection("mjx_endpoint"),
    KindDescriptor::collection("mjx_endpoint_group"),
    KindDescriptor::collection("mjx_exchange_autodiscover_url"),
    KindDescriptor::collection("mjx_exchange_deployment"),
    KindDescriptor::collection("mjx_google_deployment"),
    KindDescriptor::collection("mjx_graph_deployment"),
    KindDescriptor::collection("mjx_integration"),
    KindDescriptor::collection("mjx_meeting_processing_rule"),
    KindDescriptor::collection("ntp_server").body_create(),
    KindDescriptor::collection("pexip_streaming_credential"),
    KindDescriptor::collection("role_mapping"),
    KindDescriptor::collection("scheduled_scaling"),
    KindDescriptor::collection("smtp_server"),
    KindDescriptor::collection("snmp_network_management_system"),
    KindDescriptor::collection("ssh_authorized_key"),
    KindDescriptor::collection("syslog_server"),
    KindDescriptor::collection("system_tuneable"),
    KindDescriptor::collection("tls_certificate").patch_update(),
    KindDescriptor::collection("user_group"),
    KindDescriptor::collection("user_group_entity_mapping").body_create(),
];

/// Look a kind up by its path segment.
pub fn lookup(kind: &str) -> Option<&'static KindDescriptor> {
    CATALOGUE.iter().find(|descriptor| descriptor.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use crate::resource::{Creatable, Resource, Updatable};
    use crate::singleton::Singleton;

    #[test]
    fn catalogue_is_sorted_and_unique() {
        for pair in CATALOGUE.windows(2) {
            assert!(pair[0].kind < pair[1].kind, "{} before {}", pair[0].kind, pair[1].kind);
        }
        assert_eq!(CATALOGUE.len(), 44);
    }

    #[test]
    fn lookup_finds_deviations() {
        assert_eq!(lookup("tls_certificate").unwrap().update, Some(UpdateMethod::Patch));
        assert_eq!(lookup("licence").unwrap().key, KeyType::String);
        assert!(lookup("global").unwrap().is_singleton());
        assert_eq!(
            lookup("management_vm").unwrap().operations(),
            vec!["get", "delete"]
        );
        assert_eq!(lookup("diagnostic_graphs").unwrap().operations(), vec!["list", "get"]);
        assert!(lookup("conference").is_none());
    }

    /// The runtime table must agree with the typed bindings.
    macro_rules! assert_matches_bindings {
        ($($entity:ty),* $(,)?) => {$(
            let descriptor = lookup(<$entity as Resource>::KIND)
                .unwrap_or_else(|| panic!("{} missing", <$entity as Resource>::KIND));
            assert_eq!(descriptor.create, Some(<$entity as Creatable>::CREATE_SHAPE), "{}", descriptor);
            assert_eq!(descriptor.update, Some(<$entity as Updatable>::UPDATE_METHOD), "{}", descriptor);
            assert!(descriptor.list && descriptor.delete, "{}", descriptor);
        )*};
    }

    #[test]
    fn descriptors_match_typed_bindings() {
        assert_matches_bindings!(
            DnsServer,
            NtpServer,
            SyslogServer,
            SmtpServer,
            SnmpNetworkManagementSystem,
            HttpProxy,
            SshAuthorizedKey,
            TlsCertificate,
            CertificateSigningRequest,
            SystemTuneable,
            ExternalWebappHost,
            MediaProcessingServer,
            PexipStreamingCredential,
            AdfsAuthServer,
            AdfsAuthServerDomain,
            GoogleAuthServer,
            GoogleAuthServerDomain,
            IdentityProvider,
            IdentityProviderAttribute,
            IdentityProviderGroup,
            LdapRole,
            LdapSyncField,
            RoleMapping,
            EndUser,
            UserGroup,
            UserGroupEntityMapping,
            Device,
            MjxEndpoint,
            MjxEndpointGroup,
            MjxExchangeAutodiscoverUrl,
            MjxExchangeDeployment,
            MjxGoogleDeployment,
            MjxGraphDeployment,
            MjxIntegration,
            MjxMeetingProcessingRule,
            MediaLibraryEntry,
            MediaLibraryPlaylist,
            MediaLibraryPlaylistEntry,
            EventSink,
            ScheduledScaling,
        );

        assert_eq!(lookup(Licence::KIND).unwrap().create, Some(Licence::CREATE_SHAPE));
        assert_eq!(lookup(<ManagementVm as Resource>::KIND).unwrap().kind, "management_vm");
        assert_eq!(lookup(<DiagnosticGraph as Resource>::KIND).unwrap().kind, "diagnostic_graphs");
        assert!(lookup(<GlobalConfiguration as Singleton>::KIND).unwrap().is_singleton());
    }
}

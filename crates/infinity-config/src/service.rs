//! The configuration service facade.

use infinity_core::{Result, Transport};
use infinity_http::HttpClient;

use crate::dynamic::DynamicResource;
use crate::models::*;
use crate::resource::{Resource, ResourceClient};
use crate::singleton::{Singleton, SingletonClient};

/// Typed access to every configuration kind over one transport.
///
/// Holds nothing but the transport; with the default [`HttpClient`] it is
/// cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use infinity_config::ConfigService;
/// use infinity_config::models::DnsServerCreate;
/// use infinity_core::{BaseUrl, Context, Credentials, ListOptions};
/// use infinity_http::HttpClient;
///
/// # async fn example() -> infinity_core::Result<()> {
/// let base = BaseUrl::new("https://infinity.example.com/api/admin/")?;
/// let client = HttpClient::builder(base)
///     .basic_auth(Credentials::new("admin", "secret"))
///     .build()?;
/// let service = ConfigService::new(client);
/// let ctx = Context::background();
///
/// let page = service
///     .dns_servers()
///     .list(&ctx, Some(&ListOptions::new().with_search("google")))
///     .await?;
/// for server in page {
///     println!("{} {}", server.id, server.address);
/// }
///
/// let created = service
///     .dns_servers()
///     .create(&ctx, &DnsServerCreate {
///         address: "9.9.9.9".to_string(),
///         description: Some("Quad9 DNS".to_string()),
///     })
///     .await?;
/// println!("created at {:?}", created.location());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigService<T = HttpClient> {
    transport: T,
}

impl<T: Transport> ConfigService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Operations on any typed collection kind.
    pub fn resource<K: Resource>(&self) -> ResourceClient<'_, T, K> {
        ResourceClient::new(&self.transport)
    }

    /// Operations on any typed singleton kind.
    pub fn singleton<K: Singleton>(&self) -> SingletonClient<'_, T, K> {
        SingletonClient::new(&self.transport)
    }

    /// Operations on a kind named at runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is not in the
    /// [`CATALOGUE`](crate::catalogue::CATALOGUE).
    pub fn by_kind(&self, kind: &str) -> Result<DynamicResource<'_, T>> {
        DynamicResource::new(&self.transport, kind)
    }

    pub fn global(&self) -> SingletonClient<'_, T, GlobalConfiguration> {
        self.singleton()
    }
}

macro_rules! accessors {
    ($($(#[$doc:meta])* $name:ident => $entity:ty;)*) => {
        impl<T: Transport> ConfigService<T> {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> ResourceClient<'_, T, $entity> {
                    self.resource()
                }
            )*
        }
    };
}

accessors! {
    dns_servers => DnsServer;
    ntp_servers => NtpServer;
    syslog_servers => SyslogServer;
    smtp_servers => SmtpServer;
    snmp_network_management_systems => SnmpNetworkManagementSystem;
    http_proxies => HttpProxy;
    ssh_authorized_keys => SshAuthorizedKey;
    /// Updates go out as `PATCH`.
    tls_certificates => TlsCertificate;
    certificate_signing_requests => CertificateSigningRequest;
    system_tuneables => SystemTuneable;
    /// Get and delete only.
    management_vms => ManagementVm;
    external_webapp_hosts => ExternalWebappHost;
    media_processing_servers => MediaProcessingServer;
    pexip_streaming_credentials => PexipStreamingCredential;

    adfs_auth_servers => AdfsAuthServer;
    adfs_auth_server_domains => AdfsAuthServerDomain;
    google_auth_servers => GoogleAuthServer;
    google_auth_server_domains => GoogleAuthServerDomain;
    identity_providers => IdentityProvider;
    identity_provider_attributes => IdentityProviderAttribute;
    identity_provider_groups => IdentityProviderGroup;
    ldap_roles => LdapRole;
    ldap_sync_fields => LdapSyncField;
    role_mappings => RoleMapping;
    end_users => EndUser;
    user_groups => UserGroup;
    user_group_entity_mappings => UserGroupEntityMapping;

    devices => Device;
    mjx_endpoints => MjxEndpoint;
    mjx_endpoint_groups => MjxEndpointGroup;
    mjx_exchange_autodiscover_urls => MjxExchangeAutodiscoverUrl;
    mjx_exchange_deployments => MjxExchangeDeployment;
    mjx_google_deployments => MjxGoogleDeployment;
    mjx_graph_deployments => MjxGraphDeployment;
    mjx_integrations => MjxIntegration;
    mjx_meeting_processing_rules => MjxMeetingProcessingRule;
    media_library_entries => MediaLibraryEntry;
    media_library_playlists => MediaLibraryPlaylist;
    media_library_playlist_entries => MediaLibraryPlaylistEntry;

    /// Keyed by fulfillment id; no update.
    licences => Licence;
    event_sinks => EventSink;
    /// List and get only.
    diagnostic_graphs => DiagnosticGraph;
    scheduled_scalings => ScheduledScaling;
}

//! Networking and platform kinds.

use infinity_core::{InfinityTime, Nullable};
use serde::{Deserialize, Serialize};

use crate::resource::{
    CreateShape, Creatable, Deletable, Listable, Resource, UpdateMethod, Updatable, collection,
};

// ============================================================================
// DNS servers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsServer {
    pub id: u64,
    pub address: String,
    pub description: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DnsServerCreate {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DnsServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

collection!(DnsServer => "dns_server", create: DnsServerCreate as Location, update: DnsServerUpdate);

// ============================================================================
// NTP servers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NtpServer {
    pub id: u64,
    pub address: String,
    pub description: String,
    pub key: String,
    pub key_id: Option<u32>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NtpServerCreate {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NtpServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub key_id: Nullable<u32>,
}

collection!(NtpServer => "ntp_server", create: NtpServerCreate as Body, update: NtpServerUpdate);

// ============================================================================
// Syslog servers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyslogServer {
    pub id: u64,
    pub address: String,
    pub port: u16,
    /// `udp`, `tcp` or `tls`.
    pub transport: String,
    pub description: String,
    pub audit_log: Option<bool>,
    pub support_log: Option<bool>,
    pub web_log: Option<bool>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyslogServerCreate {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_log: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyslogServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub audit_log: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub support_log: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub web_log: Nullable<bool>,
}

collection!(SyslogServer => "syslog_server", create: SyslogServerCreate as Location, update: SyslogServerUpdate);

// ============================================================================
// SMTP servers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpServer {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email_address: String,
    /// `NONE`, `STARTTLS` or `SSL_TLS`.
    pub connection_security: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SmtpServerCreate {
    pub name: String,
    pub address: String,
    pub from_email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_security: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SmtpServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_security: Option<String>,
}

collection!(SmtpServer => "smtp_server", create: SmtpServerCreate as Location, update: SmtpServerUpdate);

// ============================================================================
// SNMP network management systems
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnmpNetworkManagementSystem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub port: u16,
    pub snmp_trap_community: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnmpNetworkManagementSystemCreate {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_trap_community: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnmpNetworkManagementSystemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp_trap_community: Option<String>,
}

collection!(
    SnmpNetworkManagementSystem => "snmp_network_management_system",
    create: SnmpNetworkManagementSystemCreate as Location,
    update: SnmpNetworkManagementSystemUpdate
);

// ============================================================================
// HTTP proxies
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpProxy {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub port: Option<u16>,
    pub protocol: String,
    pub username: String,
    pub password: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HttpProxyCreate {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HttpProxyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub port: Nullable<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

collection!(HttpProxy => "http_proxy", create: HttpProxyCreate as Location, update: HttpProxyUpdate);

// ============================================================================
// SSH authorized keys
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshAuthorizedKey {
    pub id: u64,
    pub keytype: String,
    pub key: String,
    pub comment: String,
    /// Resource URIs of the nodes the key is installed on.
    pub nodes: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SshAuthorizedKeyCreate {
    pub keytype: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SshAuthorizedKeyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keytype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
}

collection!(
    SshAuthorizedKey => "ssh_authorized_key",
    create: SshAuthorizedKeyCreate as Location,
    update: SshAuthorizedKeyUpdate
);

// ============================================================================
// TLS certificates
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsCertificate {
    pub id: u64,
    pub certificate: String,
    pub parameters: String,
    pub subject_name: String,
    pub issuer_name: String,
    pub serial_number: String,
    pub subject_hash: String,
    pub issuer_hash: String,
    pub subject_alt_names: String,
    #[serde(deserialize_with = "super::optional_time")]
    pub start_date: Option<InfinityTime>,
    #[serde(deserialize_with = "super::optional_time")]
    pub end_date: Option<InfinityTime>,
    pub nodes: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TlsCertificateCreate {
    pub certificate: String,
    pub private_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TlsCertificateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
}

impl Resource for TlsCertificate {
    const KIND: &'static str = "tls_certificate";
    type Id = u64;
}

impl Listable for TlsCertificate {}

impl Creatable for TlsCertificate {
    type Create = TlsCertificateCreate;
    const CREATE_SHAPE: CreateShape = CreateShape::Location;
}

// The server only accepts partial certificate updates.
impl Updatable for TlsCertificate {
    type Update = TlsCertificateUpdate;
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
}

impl Deletable for TlsCertificate {}

// ============================================================================
// Certificate signing requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateSigningRequest {
    pub id: u64,
    pub subject_name: String,
    pub dn: String,
    pub additional_subject_alt_names: String,
    /// `RSA2048`, `RSA4096`, `ECDSAP256` or `ECDSAP384`.
    pub private_key_type: String,
    pub ad_compatible: Option<bool>,
    pub csr: String,
    pub certificate: String,
    /// The certificate this request was used for, once installed.
    pub tls_certificate: Option<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CertificateSigningRequestCreate {
    pub subject_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_subject_alt_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_compatible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CertificateSigningRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_subject_alt_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub ad_compatible: Nullable<bool>,
    /// The signed certificate to install against this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

collection!(
    CertificateSigningRequest => "certificate_signing_request",
    create: CertificateSigningRequestCreate as Location,
    update: CertificateSigningRequestUpdate
);

// ============================================================================
// System tuneables
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemTuneable {
    pub id: u64,
    pub name: String,
    pub setting: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemTuneableCreate {
    pub name: String,
    pub setting: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemTuneableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
}

collection!(
    SystemTuneable => "system_tuneable",
    create: SystemTuneableCreate as Location,
    update: SystemTuneableUpdate
);

// ============================================================================
// Management VM
// ============================================================================

/// The management node. Read and removed only; it is provisioned at install.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagementVm {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub netmask: String,
    pub gateway: String,
    pub hostname: String,
    pub domain: String,
    pub alternative_fqdn: String,
    pub ipv6_address: Option<String>,
    pub ipv6_gateway: Option<String>,
    pub mtu: u32,
    pub primary: bool,
    pub tls_certificate: Option<String>,
    pub dns_servers: Vec<String>,
    pub ntp_servers: Vec<String>,
    pub syslog_servers: Vec<String>,
    pub http_proxy: Option<String>,
    pub resource_uri: String,
}

impl Resource for ManagementVm {
    const KIND: &'static str = "management_vm";
    type Id = u64;
}

impl Deletable for ManagementVm {}

// ============================================================================
// External web app hosts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalWebappHost {
    pub id: u64,
    pub address: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExternalWebappHostCreate {
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExternalWebappHostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

collection!(
    ExternalWebappHost => "external_webapp_host",
    create: ExternalWebappHostCreate as Location,
    update: ExternalWebappHostUpdate
);

// ============================================================================
// Media processing servers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaProcessingServer {
    pub id: u64,
    pub fqdn: String,
    pub app_id: String,
    pub public_jwt_key: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaProcessingServerCreate {
    pub fqdn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_jwt_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaProcessingServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_jwt_key: Option<String>,
}

collection!(
    MediaProcessingServer => "media_processing_server",
    create: MediaProcessingServerCreate as Location,
    update: MediaProcessingServerUpdate
);

// ============================================================================
// Streaming credentials
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PexipStreamingCredential {
    pub id: u64,
    pub kid: String,
    pub public_key: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PexipStreamingCredentialCreate {
    pub kid: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PexipStreamingCredentialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

collection!(
    PexipStreamingCredential => "pexip_streaming_credential",
    create: PexipStreamingCredentialCreate as Location,
    update: PexipStreamingCredentialUpdate
);

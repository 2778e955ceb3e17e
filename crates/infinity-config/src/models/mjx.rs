//! One-Touch Join (MJX) kinds: calendar integrations, endpoints and rules.

use infinity_core::Nullable;
use serde::{Deserialize, Serialize};

use crate::resource::collection;

// ============================================================================
// Endpoints and endpoint groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxEndpoint {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// `CISCO`, `POLY` or `WEBEX`.
    pub endpoint_type: String,
    pub room_resource_email_address: String,
    pub mjx_endpoint_group: Option<String>,
    pub api_address: Option<String>,
    pub api_port: Option<u16>,
    pub api_username: Option<String>,
    pub api_password: Option<String>,
    /// `GLOBAL`, `YES` or `NO`.
    pub use_https: String,
    pub verify_cert: String,
    pub poly_username: Option<String>,
    pub poly_password: Option<String>,
    pub poly_raise_alarms_for_this_endpoint: Option<bool>,
    pub webex_device_id: Option<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxEndpointCreate {
    pub name: String,
    pub endpoint_type: String,
    pub room_resource_email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mjx_endpoint_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_https: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poly_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poly_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poly_raise_alarms_for_this_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxEndpointUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_resource_email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub mjx_endpoint_group: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub api_address: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub api_port: Nullable<u16>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub api_username: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub api_password: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_https: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_cert: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub poly_username: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub poly_password: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub poly_raise_alarms_for_this_endpoint: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub webex_device_id: Nullable<String>,
}

collection!(MjxEndpoint => "mjx_endpoint", create: MjxEndpointCreate as Location, update: MjxEndpointUpdate);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxEndpointGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub mjx_integration: Option<String>,
    pub system_location: String,
    pub disable_proxy: Option<bool>,
    pub endpoints: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxEndpointGroupCreate {
    pub name: String,
    pub system_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mjx_integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_proxy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxEndpointGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub mjx_integration: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_location: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub disable_proxy: Nullable<bool>,
}

collection!(
    MjxEndpointGroup => "mjx_endpoint_group",
    create: MjxEndpointGroupCreate as Location,
    update: MjxEndpointGroupUpdate
);

// ============================================================================
// Exchange
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxExchangeAutodiscoverUrl {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub exchange_deployment: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxExchangeAutodiscoverUrlCreate {
    pub name: String,
    pub url: String,
    pub exchange_deployment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxExchangeAutodiscoverUrlUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_deployment: Option<String>,
}

collection!(
    MjxExchangeAutodiscoverUrl => "mjx_exchange_autodiscover_url",
    create: MjxExchangeAutodiscoverUrlCreate as Location,
    update: MjxExchangeAutodiscoverUrlUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxExchangeDeployment {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub service_account_username: String,
    pub service_account_password: String,
    /// `BASIC`, `NTLM`, `KERBEROS` or `OAUTH`.
    pub authentication_method: String,
    pub ews_url: String,
    pub disable_proxy: Option<bool>,
    pub find_items_request_quota: u32,
    pub kerberos_realm: String,
    pub kerberos_kdc: String,
    pub kerberos_exchange_spn: String,
    pub kerberos_enable_tls: Option<bool>,
    pub oauth_client_id: Option<String>,
    pub oauth_auth_endpoint: String,
    pub oauth_token_endpoint: String,
    pub oauth_redirect_uri: String,
    pub autodiscover_urls: Vec<String>,
    pub mjx_integrations: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxExchangeDeploymentCreate {
    pub name: String,
    pub service_account_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ews_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_items_request_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_kdc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_exchange_spn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_enable_tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_auth_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autodiscover_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxExchangeDeploymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ews_url: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub disable_proxy: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_items_request_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_kdc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_exchange_spn: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub kerberos_enable_tls: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub oauth_client_id: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_auth_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autodiscover_urls: Option<Vec<String>>,
}

collection!(
    MjxExchangeDeployment => "mjx_exchange_deployment",
    create: MjxExchangeDeploymentCreate as Location,
    update: MjxExchangeDeploymentUpdate
);

// ============================================================================
// Google Workspace
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxGoogleDeployment {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub client_email: String,
    pub client_id: Option<String>,
    pub client_secret: String,
    pub private_key: String,
    pub use_user_consent: Option<bool>,
    pub auth_endpoint: String,
    pub token_endpoint: String,
    pub redirect_uri: String,
    pub maximum_number_of_api_requests: u32,
    pub mjx_integrations: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxGoogleDeploymentCreate {
    pub name: String,
    pub client_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_user_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_api_requests: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxGoogleDeploymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub client_id: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub use_user_consent: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_api_requests: Option<u32>,
}

collection!(
    MjxGoogleDeployment => "mjx_google_deployment",
    create: MjxGoogleDeploymentCreate as Location,
    update: MjxGoogleDeploymentUpdate
);

// ============================================================================
// Microsoft Graph
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxGraphDeployment {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub client_id: String,
    pub client_secret: String,
    pub oauth_token_url: String,
    pub graph_api_domain: String,
    pub request_quota: u32,
    pub disable_proxy: Option<bool>,
    pub mjx_integrations: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxGraphDeploymentCreate {
    pub name: String,
    pub client_id: String,
    pub oauth_token_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_proxy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxGraphDeploymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_quota: Option<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub disable_proxy: Nullable<bool>,
}

collection!(
    MjxGraphDeployment => "mjx_graph_deployment",
    create: MjxGraphDeploymentCreate as Location,
    update: MjxGraphDeploymentUpdate
);

// ============================================================================
// Integrations and meeting processing rules
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxIntegration {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub display_upcoming_meetings: u32,
    pub enable_non_video_meetings: Option<bool>,
    pub enable_private_meetings: Option<bool>,
    pub start_buffer: u32,
    pub end_buffer: u32,
    pub ep_use_https: Option<bool>,
    pub ep_verify_certificate: Option<bool>,
    pub ep_username: String,
    pub ep_password: String,
    pub replace_subject_type: String,
    pub replace_subject_template: String,
    pub replace_empty_subject: Option<bool>,
    pub process_alias_private_meetings: Option<bool>,
    pub use_webex: Option<bool>,
    pub webex_api_domain: String,
    pub webex_client_id: Option<String>,
    pub webex_client_secret: Option<String>,
    pub webex_redirect_uri: String,
    pub exchange_deployment: Option<String>,
    pub google_deployment: Option<String>,
    pub graph_deployment: Option<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxIntegrationCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_upcoming_meetings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_non_video_meetings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_private_meetings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_use_https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_verify_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_subject_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_subject_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_empty_subject: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_alias_private_meetings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_webex: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_api_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_deployment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxIntegrationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_upcoming_meetings: Option<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_non_video_meetings: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_private_meetings: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_buffer: Option<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub ep_use_https: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub ep_verify_certificate: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_subject_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_subject_template: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub replace_empty_subject: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub process_alias_private_meetings: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub use_webex: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_api_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub webex_client_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub webex_client_secret: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub exchange_deployment: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub google_deployment: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub graph_deployment: Nullable<String>,
}

collection!(
    MjxIntegration => "mjx_integration",
    create: MjxIntegrationCreate as Location,
    update: MjxIntegrationUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MjxMeetingProcessingRule {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub priority: u32,
    pub enabled: Option<bool>,
    /// For example `pexipinfinity`, `teams`, `zoom` or `custom`.
    pub meeting_type: String,
    pub mjx_integration: Option<String>,
    pub match_string: String,
    pub replace_string: String,
    pub transform_rule: String,
    pub custom_template: String,
    pub domain: String,
    pub company_id: String,
    pub include_pin: Option<bool>,
    pub default_processing_enabled: Option<bool>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxMeetingProcessingRuleCreate {
    pub name: String,
    pub priority: u32,
    pub meeting_type: String,
    pub mjx_integration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_processing_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MjxMeetingProcessingRuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enabled: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub mjx_integration: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub include_pin: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub default_processing_enabled: Nullable<bool>,
}

collection!(
    MjxMeetingProcessingRule => "mjx_meeting_processing_rule",
    create: MjxMeetingProcessingRuleCreate as Location,
    update: MjxMeetingProcessingRuleUpdate
);

//! Platform-wide settings.

use infinity_core::Nullable;
use serde::{Deserialize, Serialize};

use crate::singleton::Singleton;

/// The global configuration singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfiguration {
    pub id: u64,
    pub enable_webrtc: Option<bool>,
    pub enable_sip: Option<bool>,
    pub enable_h323: Option<bool>,
    pub enable_rtmp: Option<bool>,
    pub enable_analytics: Option<bool>,
    pub enable_chat: Option<bool>,
    pub enable_multiscreen: Option<bool>,
    pub enable_directory: Option<bool>,
    pub enable_lync_autoescalate: Option<bool>,
    pub crypto_mode: String,
    pub max_pixels_per_second: String,
    pub media_ports_start: u16,
    pub media_ports_end: u16,
    pub signalling_ports_start: u16,
    pub signalling_ports_end: u16,
    pub administrator_email: String,
    pub contact_email_address: String,
    pub guests_only_timeout: u32,
    pub waiting_for_chair_timeout: u32,
    pub conference_create_permissions: String,
    pub conference_creation_mode: String,
    pub bandwidth_restrictions: String,
    pub default_theme: Option<String>,
    pub default_webapp: Option<String>,
    pub management_qos: Option<u32>,
    pub media_qos: Option<u32>,
    pub signalling_qos: Option<u32>,
    pub site_banner: String,
    pub site_banner_bg: String,
    pub site_banner_fg: String,
    pub session_timeout_enabled: Option<bool>,
    pub management_session_timeout: u32,
    pub resource_uri: String,
}

/// Partial update of [`GlobalConfiguration`]; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalConfigurationUpdate {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_webrtc: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_sip: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_h323: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_rtmp: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_analytics: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_chat: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_multiscreen: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_directory: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_lync_autoescalate: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pixels_per_second: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ports_start: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ports_end: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signalling_ports_start: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signalling_ports_end: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests_only_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_for_chair_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_create_permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_creation_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub default_theme: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub default_webapp: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub management_qos: Nullable<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub media_qos: Nullable<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub signalling_qos: Nullable<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_banner_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_banner_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub session_timeout_enabled: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_session_timeout: Option<u32>,
}

impl Singleton for GlobalConfiguration {
    const KIND: &'static str = "global";
    type Update = GlobalConfigurationUpdate;
}

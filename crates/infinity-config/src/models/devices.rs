//! Registered devices.

use infinity_core::{InfinityTime, Nullable};
use serde::{Deserialize, Serialize};

use crate::resource::collection;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub alias: String,
    pub description: String,
    pub username: String,
    pub password: String,
    pub primary_owner_email_address: String,
    pub enable_sip: Option<bool>,
    pub enable_h323: Option<bool>,
    pub enable_infinity_connect_non_sso: Option<bool>,
    pub enable_infinity_connect_sso: Option<bool>,
    pub enable_standard_sso: Option<bool>,
    pub tag: String,
    pub sync_tag: String,
    #[serde(deserialize_with = "super::optional_time")]
    pub creation_time: Option<InfinityTime>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceCreate {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_owner_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_h323: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_infinity_connect_non_sso: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_infinity_connect_sso: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_standard_sso: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_owner_email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_sip: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_h323: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_infinity_connect_non_sso: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_infinity_connect_sso: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enable_standard_sso: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_tag: Option<String>,
}

collection!(Device => "device", create: DeviceCreate as Location, update: DeviceUpdate);

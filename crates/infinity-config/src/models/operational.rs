//! Licensing, event sinks, diagnostics and scheduled scaling.

use infinity_core::{InfinityTime, Nullable};
use serde::{Deserialize, Serialize};

use crate::resource::{CreateShape, Creatable, Deletable, Listable, Resource, collection};

// ============================================================================
// Licences
// ============================================================================

/// An activated licence, keyed by its fulfillment id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Licence {
    pub fulfillment_id: String,
    pub entitlement_id: String,
    pub fulfillment_type: String,
    pub product_id: String,
    pub license_type: String,
    pub features: String,
    pub concurrent: u32,
    pub concurrent_overdraft: u32,
    pub activatable: u32,
    pub activatable_overdraft: u32,
    pub hybrid: u32,
    pub hybrid_overdraft: u32,
    #[serde(deserialize_with = "super::optional_time")]
    pub start_date: Option<InfinityTime>,
    #[serde(deserialize_with = "super::optional_time")]
    pub expiration_date: Option<InfinityTime>,
    pub status: String,
    pub trust_flags: u32,
    pub repair: u32,
    pub server_chain: String,
    pub offline_mode: bool,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LicenceCreate {
    pub entitlement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_mode: Option<bool>,
}

impl Resource for Licence {
    const KIND: &'static str = "licence";
    type Id = String;
}

impl Listable for Licence {}

impl Creatable for Licence {
    type Create = LicenceCreate;
    const CREATE_SHAPE: CreateShape = CreateShape::Location;
}

impl Deletable for Licence {}

// ============================================================================
// Event sinks
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSink {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub bulk_support: Option<bool>,
    pub verify_tls_certificate: Option<bool>,
    pub version: u32,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventSinkCreate {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_tls_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventSinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub bulk_support: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub verify_tls_certificate: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

collection!(EventSink => "event_sink", create: EventSinkCreate as Location, update: EventSinkUpdate);

// ============================================================================
// Diagnostic graphs
// ============================================================================

/// A built-in diagnostics graph. Read only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticGraph {
    pub id: u64,
    pub title: String,
    pub order: u32,
    pub datasets: Vec<String>,
    pub resource_uri: String,
}

impl Resource for DiagnosticGraph {
    const KIND: &'static str = "diagnostic_graphs";
    type Id = u64;
}

impl Listable for DiagnosticGraph {}

// ============================================================================
// Scheduled scaling
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledScaling {
    pub id: u64,
    pub policy_name: String,
    /// `management_vm` or `worker_vm`.
    pub policy_type: String,
    pub resource_identifier: String,
    pub enabled: Option<bool>,
    pub local_timezone: String,
    pub start_date: String,
    pub time_from: String,
    pub time_to: String,
    pub instances_to_add: u32,
    pub minutes_in_advance: u32,
    pub mon: Option<bool>,
    pub tue: Option<bool>,
    pub wed: Option<bool>,
    pub thu: Option<bool>,
    pub fri: Option<bool>,
    pub sat: Option<bool>,
    pub sun: Option<bool>,
    #[serde(deserialize_with = "super::optional_time")]
    pub updated: Option<InfinityTime>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduledScalingCreate {
    pub policy_name: String,
    pub policy_type: String,
    pub resource_identifier: String,
    pub local_timezone: String,
    pub start_date: String,
    pub time_from: String,
    pub time_to: String,
    pub instances_to_add: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_in_advance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fri: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduledScalingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub enabled: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances_to_add: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_in_advance: Option<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub mon: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub tue: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub wed: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub thu: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub fri: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sat: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub sun: Nullable<bool>,
}

collection!(
    ScheduledScaling => "scheduled_scaling",
    create: ScheduledScalingCreate as Location,
    update: ScheduledScalingUpdate
);

//! Authentication, identity and user directory kinds.

use infinity_core::Nullable;
use serde::{Deserialize, Serialize};

use crate::resource::collection;

// ============================================================================
// ADFS OAuth clients
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdfsAuthServer {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub client_id: String,
    pub federation_service_name: String,
    pub federation_service_identifier: String,
    pub relying_party_trust_identifier_url: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdfsAuthServerCreate {
    pub name: String,
    pub client_id: String,
    pub federation_service_name: String,
    pub federation_service_identifier: String,
    pub relying_party_trust_identifier_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdfsAuthServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_service_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relying_party_trust_identifier_url: Option<String>,
}

collection!(
    AdfsAuthServer => "adfs_auth_server",
    create: AdfsAuthServerCreate as Location,
    update: AdfsAuthServerUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdfsAuthServerDomain {
    pub id: u64,
    pub domain: String,
    pub description: String,
    pub adfs_auth_server: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdfsAuthServerDomainCreate {
    pub domain: String,
    /// Resource URI of the owning ADFS client.
    pub adfs_auth_server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdfsAuthServerDomainUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adfs_auth_server: Option<String>,
}

collection!(
    AdfsAuthServerDomain => "adfs_auth_server_domain",
    create: AdfsAuthServerDomainCreate as Location,
    update: AdfsAuthServerDomainUpdate
);

// ============================================================================
// Google OAuth clients
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleAuthServer {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// `web` or `installed`.
    pub application_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleAuthServerCreate {
    pub name: String,
    pub application_type: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleAuthServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

collection!(
    GoogleAuthServer => "google_auth_server",
    create: GoogleAuthServerCreate as Location,
    update: GoogleAuthServerUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleAuthServerDomain {
    pub id: u64,
    pub domain: String,
    pub description: String,
    pub google_auth_server: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleAuthServerDomainCreate {
    pub domain: String,
    pub google_auth_server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleAuthServerDomainUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_auth_server: Option<String>,
}

collection!(
    GoogleAuthServerDomain => "google_auth_server_domain",
    create: GoogleAuthServerDomainCreate as Location,
    update: GoogleAuthServerDomainUpdate
);

// ============================================================================
// SAML / OIDC identity providers
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProvider {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// `saml` or `oidc`.
    pub idp_type: String,
    pub uuid: String,
    pub sso_url: String,
    pub idp_entity_id: String,
    pub idp_public_key: String,
    pub service_entity_id: String,
    pub service_public_key: String,
    pub service_private_key: String,
    pub signature_algorithm: String,
    pub digest_algorithm: String,
    pub display_name_attribute_name: String,
    pub registration_alias_attribute_name: String,
    pub assertion_consumer_service_url: String,
    pub worker_fqdn_acs_urls: Option<bool>,
    pub disable_popup_flow: Option<bool>,
    pub oidc_flow: String,
    pub oidc_client_id: String,
    pub oidc_client_secret: String,
    pub oidc_token_url: String,
    pub oidc_user_info_url: String,
    pub oidc_jwks_url: String,
    pub oidc_token_endpoint_auth_scheme: String,
    pub oidc_token_signature_scheme: String,
    pub oidc_display_name_claim_name: String,
    pub oidc_registration_alias_claim_name: String,
    pub oidc_additional_scopes: String,
    pub oidc_france_connect_required_eidas_level: String,
    /// Resource URIs of extra attributes requested from the provider.
    pub attributes: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderCreate {
    pub name: String,
    pub idp_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_alias_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_consumer_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_fqdn_acs_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_popup_flow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_user_info_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_jwks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_additional_scopes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_alias_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_consumer_service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub worker_fqdn_acs_urls: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub disable_popup_flow: Nullable<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_user_info_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_jwks_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_additional_scopes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

collection!(
    IdentityProvider => "identity_provider",
    create: IdentityProviderCreate as Location,
    update: IdentityProviderUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProviderAttribute {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderAttributeCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderAttributeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

collection!(
    IdentityProviderAttribute => "identity_provider_attribute",
    create: IdentityProviderAttributeCreate as Location,
    update: IdentityProviderAttributeUpdate
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProviderGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub identity_provider: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderGroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentityProviderGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_provider: Option<Vec<String>>,
}

collection!(
    IdentityProviderGroup => "identity_provider_group",
    create: IdentityProviderGroupCreate as Location,
    update: IdentityProviderGroupUpdate
);

// ============================================================================
// LDAP
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapRole {
    pub id: u64,
    pub name: String,
    pub ldap_group_dn: String,
    /// Resource URIs of the administrator roles granted.
    pub roles: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LdapRoleCreate {
    pub name: String,
    pub ldap_group_dn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LdapRoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_group_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

collection!(LdapRole => "ldap_role", create: LdapRoleCreate as Location, update: LdapRoleUpdate);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapSyncField {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub template_variable_name: String,
    pub is_binary: Option<bool>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LdapSyncFieldCreate {
    pub name: String,
    pub template_variable_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_binary: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LdapSyncFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_variable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub is_binary: Nullable<bool>,
}

collection!(
    LdapSyncField => "ldap_sync_field",
    create: LdapSyncFieldCreate as Location,
    update: LdapSyncFieldUpdate
);

// ============================================================================
// Role mappings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleMapping {
    pub id: u64,
    pub name: String,
    /// `LDAP`, `SAML` or `OIDC`.
    pub source: String,
    pub value: String,
    pub roles: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleMappingCreate {
    pub name: String,
    pub source: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleMappingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

collection!(RoleMapping => "role_mapping", create: RoleMappingCreate as Location, update: RoleMappingUpdate);

// ============================================================================
// End users and user groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndUser {
    pub id: u64,
    pub primary_email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub telephone_number: String,
    pub mobile_number: String,
    pub title: String,
    pub department: String,
    pub avatar_url: String,
    pub user_groups: Vec<String>,
    pub user_oid: Option<String>,
    pub exchange_user_id: Option<String>,
    pub ms_exchange_guid: Option<String>,
    pub sync_tag: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndUserCreate {
    pub primary_email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_oid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_exchange_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub user_oid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub exchange_user_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub ms_exchange_guid: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_tag: Option<String>,
}

collection!(EndUser => "end_user", create: EndUserCreate as Body, update: EndUserUpdate);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub users: Vec<String>,
    pub user_group_entity_mappings: Vec<String>,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserGroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}

collection!(UserGroup => "user_group", create: UserGroupCreate as Location, update: UserGroupUpdate);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupEntityMapping {
    pub id: u64,
    pub description: String,
    /// Resource URI of the mapped object (for example a device).
    pub entity_resource_uri: String,
    pub user_group: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserGroupEntityMappingCreate {
    pub entity_resource_uri: String,
    pub user_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserGroupEntityMappingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group: Option<String>,
}

collection!(
    UserGroupEntityMapping => "user_group_entity_mapping",
    create: UserGroupEntityMappingCreate as Body,
    update: UserGroupEntityMappingUpdate
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn end_user_update_distinguishes_clear_from_unset() {
        let update = EndUserUpdate {
            first_name: Some("Ada".to_string()),
            user_oid: Nullable::Null,
            ms_exchange_guid: "b3f1".to_string().into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"first_name": "Ada", "user_oid": null, "ms_exchange_guid": "b3f1"})
        );
    }

    #[test]
    fn end_user_reads_null_references() {
        let user: EndUser = serde_json::from_value(json!({
            "id": 3,
            "primary_email_address": "ada@example.com",
            "user_oid": null,
            "user_groups": []
        }))
        .unwrap();
        assert_eq!(user.primary_email_address, "ada@example.com");
        assert!(user.user_oid.is_none());
    }

    #[test]
    fn role_mapping_create_carries_required_fields() {
        let create = RoleMappingCreate {
            name: "admins".to_string(),
            source: "LDAP".to_string(),
            value: "cn=admins".to_string(),
            roles: None,
        };
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({"name": "admins", "source": "LDAP", "value": "cn=admins"})
        );
    }
}

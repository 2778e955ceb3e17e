//! The stored connection profile.

pub mod storage;

use std::fmt;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use infinity_config::ConfigService;
use infinity_core::{Auth, BaseUrl, BearerToken, Credentials};
use infinity_http::HttpClient;

/// Where to connect and how to authenticate.
///
/// Holds either a username and password or a bearer token.
#[derive(Clone, Serialize, Deserialize)]
pub struct Profile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

impl Profile {
    pub fn basic(url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: Some(username.into()),
            password: Some(password.into()),
            token: None,
        }
    }

    pub fn bearer(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            token: Some(token.into()),
        }
    }

    /// Authentication scheme name, for display.
    pub fn scheme(&self) -> &'static str {
        if self.token.is_some() { "Bearer" } else { "Basic" }
    }

    fn auth(&self) -> Result<Auth> {
        match (&self.token, &self.username, &self.password) {
            (Some(token), _, _) => Ok(BearerToken::new(token.clone()).into()),
            (None, Some(username), Some(password)) => {
                Ok(Credentials::new(username.clone(), password.clone()).into())
            }
            _ => bail!("Profile has neither a token nor a username and password"),
        }
    }

    pub fn client(&self) -> Result<HttpClient> {
        let base = BaseUrl::new(&self.url).context("Invalid base URL")?;
        let client = HttpClient::builder(base)
            .auth(self.auth()?)
            .user_agent(concat!("infinity-cli/", env!("INFINITY_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(client)
    }

    pub fn service(&self) -> Result<ConfigService> {
        Ok(ConfigService::new(self.client()?))
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("scheme", &self.scheme())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let basic = Profile::basic("https://infinity.example.com/api/admin/", "admin", "hunter2");
        let bearer = Profile::bearer("https://infinity.example.com/api/admin/", "tok-123");
        assert!(!format!("{basic:?}").contains("hunter2"));
        assert!(!format!("{bearer:?}").contains("tok-123"));
    }

    #[test]
    fn bearer_wins_over_basic() {
        let mut profile = Profile::basic("https://infinity.example.com/api/admin/", "admin", "pw");
        profile.token = Some("tok".to_string());
        assert_eq!(profile.scheme(), "Bearer");
        assert!(matches!(profile.auth().unwrap(), Auth::Bearer(_)));
    }

    #[test]
    fn incomplete_profile_is_rejected() {
        let profile: Profile =
            serde_json::from_str(r#"{"url": "https://infinity.example.com/api/admin/", "username": "admin"}"#)
                .unwrap();
        assert!(profile.client().is_err());
    }

    #[test]
    fn serialized_form_skips_absent_fields() {
        let profile = Profile::bearer("https://infinity.example.com/api/admin/", "tok");
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"url": "https://infinity.example.com/api/admin/", "token": "tok"})
        );
    }
}

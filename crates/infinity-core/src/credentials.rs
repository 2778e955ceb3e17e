//! Authentication material for the management API.

use std::fmt;

use crate::tokens::BearerToken;

/// HTTP Basic credentials for the management API.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use infinity_core::Credentials;
///
/// let creds = Credentials::new("admin", "secret");
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authorization headers.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The authentication scheme attached to every request.
///
/// Exactly one scheme is chosen when the transport is built.
#[derive(Debug, Clone)]
pub enum Auth {
    /// `Authorization: Basic <base64(username:password)>`
    Basic(Credentials),
    /// `Authorization: Bearer <token>`
    Bearer(BearerToken),
}

impl Auth {
    /// Returns the scheme name as used in the `Authorization` header.
    pub fn scheme(&self) -> &'static str {
        match self {
            Auth::Basic(_) => "Basic",
            Auth::Bearer(_) => "Bearer",
        }
    }
}

impl From<Credentials> for Auth {
    fn from(credentials: Credentials) -> Self {
        Auth::Basic(credentials)
    }
}

impl From<BearerToken> for Auth {
    fn from(token: BearerToken) -> Self {
        Auth::Bearer(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("admin", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn auth_hides_secrets_in_debug() {
        let basic = Auth::from(Credentials::new("admin", "hunter2"));
        let bearer = Auth::from(BearerToken::new("tok-abc"));
        assert!(!format!("{:?}", basic).contains("hunter2"));
        assert!(!format!("{:?}", bearer).contains("tok-abc"));
        assert_eq!(basic.scheme(), "Basic");
        assert_eq!(bearer.scheme(), "Bearer");
    }
}

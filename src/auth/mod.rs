//! Authentication strategies for the Moip API.
//!
//! Every request the SDK sends carries an `Authorization` header produced
//! by an [`Authentication`] implementation. The trait has exactly one
//! method, so any credential scheme the API accepts can be plugged in.
//!
//! Two schemes ship with the SDK:
//!
//! - [`BasicAuth`] — an API token and key pair, encoded as HTTP Basic
//!   credentials. This is the scheme issued in the Moip dashboard.
//! - [`OAuth`] — a Moip Connect access token, sent with the provider's
//!   `OAuth` header scheme.
//!
//! Credential values are wrapped in validated newtypes. Secret-bearing
//! newtypes ([`ApiKey`], [`AccessToken`]) mask their contents in `Debug`
//! output so they cannot leak through logs.
//!
//! # Example
//!
//! ```rust
//! use moip::{ApiKey, ApiToken, BasicAuth};
//!
//! let auth = BasicAuth::new(
//!     ApiToken::new("01010101010101010101010101010101").unwrap(),
//!     ApiKey::new("ABABABABABABABABABABABABABABABABABABABAB").unwrap(),
//! );
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Error;

/// A credential scheme capable of authenticating requests.
///
/// Implementors produce the full `Authorization` header value. The SDK
/// attaches the value to the session at creation time and injects it into
/// every outgoing request; implementations hold no per-request state.
pub trait Authentication: fmt::Debug + Send + Sync {
    /// Returns the `Authorization` header value for a request.
    fn authorization(&self) -> String;
}

/// A validated Moip API token.
///
/// The token identifies the account and is paired with an [`ApiKey`] for
/// Basic authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::EmptyCredential { name: "API token" });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Moip API key.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying `ApiKey(*****)`
/// instead of the actual key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCredential`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, Error> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::EmptyCredential { name: "API key" });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Moip Connect access token.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying
/// `AccessToken(*****)` instead of the actual token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::EmptyCredential {
                name: "access token",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// HTTP Basic authentication with a Moip API token and key pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAuth {
    token: ApiToken,
    key: ApiKey,
}

impl BasicAuth {
    /// Creates a Basic authentication strategy from a token and key.
    #[must_use]
    pub const fn new(token: ApiToken, key: ApiKey) -> Self {
        Self { token, key }
    }
}

impl Authentication for BasicAuth {
    fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.token.as_ref(), self.key.as_ref());
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

/// Moip Connect (OAuth) authentication with an access token.
///
/// The provider expects its own `OAuth` header scheme rather than the
/// standard `Bearer` prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuth {
    access_token: AccessToken,
}

impl OAuth {
    /// Creates an OAuth strategy from an access token.
    #[must_use]
    pub const fn new(access_token: AccessToken) -> Self {
        Self { access_token }
    }
}

impl Authentication for OAuth {
    fn authorization(&self) -> String {
        format!("OAuth {}", self.access_token.as_ref())
    }
}

// Verify the shipped strategies are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BasicAuth>();
    assert_send_sync::<OAuth>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_encodes_token_and_key() {
        let auth = BasicAuth::new(
            ApiToken::new("abc").unwrap(),
            ApiKey::new("def").unwrap(),
        );

        // base64("abc:def")
        assert_eq!(auth.authorization(), "Basic YWJjOmRlZg==");
    }

    #[test]
    fn test_oauth_uses_provider_scheme() {
        let auth = OAuth::new(AccessToken::new("76q2z0g").unwrap());

        assert_eq!(auth.authorization(), "OAuth 76q2z0g");
    }

    #[test]
    fn test_empty_credentials_are_rejected() {
        assert!(matches!(
            ApiToken::new(""),
            Err(Error::EmptyCredential { name: "API token" })
        ));
        assert!(matches!(ApiKey::new(""), Err(Error::EmptyCredential { .. })));
        assert!(matches!(
            AccessToken::new(""),
            Err(Error::EmptyCredential { .. })
        ));
    }

    #[test]
    fn test_secret_newtypes_mask_debug_output() {
        let key = ApiKey::new("super-secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(*****)");

        let token = AccessToken::new("super-secret").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_api_token_debug_is_not_masked() {
        let token = ApiToken::new("plain-token").unwrap();
        assert!(format!("{token:?}").contains("plain-token"));
    }

    #[test]
    fn test_authentication_is_object_safe() {
        let auth: Box<dyn Authentication> = Box::new(OAuth::new(
            AccessToken::new("token").unwrap(),
        ));
        assert!(auth.authorization().starts_with("OAuth "));
    }
}

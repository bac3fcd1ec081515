//! API environment selection.
//!
//! Moip runs two deployments of its v2 API: production at
//! `api.moip.com.br` and a sandbox at `sandbox.moip.com.br`. The
//! [`Endpoint`] chosen at client construction decides which host every
//! request goes to; it is never changed afterwards.
//!
//! A third variant, [`Endpoint::Custom`], points the client at an arbitrary
//! base URL. It exists for integration tests that stand up a local mock
//! server.
//!
//! # Example
//!
//! ```rust
//! use moip::Endpoint;
//!
//! let endpoint = Endpoint::Sandbox;
//! assert_eq!(endpoint.host(), "sandbox.moip.com.br");
//! assert_eq!(endpoint.base_url(), "https://sandbox.moip.com.br/v2");
//! ```

/// Version segment of every API path.
const API_VERSION: &str = "v2";

/// The Moip deployment requests are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// Production deployment at `api.moip.com.br`.
    #[default]
    Production,
    /// Sandbox deployment at `sandbox.moip.com.br`.
    Sandbox,
    /// An arbitrary base URL (scheme included, no trailing slash).
    Custom(String),
}

impl Endpoint {
    /// Production host name.
    pub const PRODUCTION_HOST: &'static str = "api.moip.com.br";

    /// Sandbox host name.
    pub const SANDBOX_HOST: &'static str = "sandbox.moip.com.br";

    /// Creates a custom endpoint from a base URL such as
    /// `http://127.0.0.1:8080`. A trailing slash is trimmed.
    pub fn custom(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self::Custom(base_url)
    }

    /// Returns the host this endpoint targets.
    ///
    /// For [`Endpoint::Custom`] this is the base URL as given.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Production => Self::PRODUCTION_HOST,
            Self::Sandbox => Self::SANDBOX_HOST,
            Self::Custom(base_url) => base_url,
        }
    }

    /// Returns the base URL all resource paths are appended to,
    /// e.g. `https://api.moip.com.br/v2`.
    #[must_use]
    pub fn base_url(&self) -> String {
        match self {
            Self::Production | Self::Sandbox => {
                format!("https://{}/{API_VERSION}", self.host())
            }
            Self::Custom(base_url) => format!("{base_url}/{API_VERSION}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert_eq!(Endpoint::default(), Endpoint::Production);
    }

    #[test]
    fn test_hosts_match_moip_deployments() {
        assert_eq!(Endpoint::Production.host(), "api.moip.com.br");
        assert_eq!(Endpoint::Sandbox.host(), "sandbox.moip.com.br");
    }

    #[test]
    fn test_base_url_appends_version_segment() {
        assert_eq!(
            Endpoint::Production.base_url(),
            "https://api.moip.com.br/v2"
        );
        assert_eq!(
            Endpoint::Sandbox.base_url(),
            "https://sandbox.moip.com.br/v2"
        );
    }

    #[test]
    fn test_custom_endpoint_trims_trailing_slash() {
        let endpoint = Endpoint::custom("http://127.0.0.1:8080/");
        assert_eq!(endpoint.host(), "http://127.0.0.1:8080");
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:8080/v2");
    }
}

//! HTTP session configuration and request dispatch.
//!
//! A [`Session`] wraps a configured `reqwest::Client` together with the
//! options it was built from. Options are kept readable so a caller can
//! verify exactly what was configured; the underlying client is rebuilt
//! only through [`crate::Moip::create_new_session`].
//!
//! Dispatch is a single request/response exchange: no retries, no
//! backpressure, no queueing. Transient failures are the caller's
//! responsibility to retry. Cancellation is exactly the configured
//! timeouts — the connect-timeout bounds connection establishment and the
//! timeout bounds the total response wait.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth::Authentication;
use crate::error::Error;

/// Default total-response timeout, matching the provider SDK convention.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection-establishment timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options a session is configured with.
///
/// Values round-trip: whatever is passed to session creation is readable
/// back from [`Session::options`] unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Bounds the total wait for a response.
    pub timeout: Duration,
    /// Bounds connection establishment.
    pub connect_timeout: Duration,
    /// The `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: super::user_agent::default_user_agent(),
        }
    }
}

/// A raw response from the API, before resource mapping.
///
/// The body is parsed leniently: valid JSON is kept as-is, an empty body
/// becomes `null`, and any other text is preserved as a JSON string so
/// error reporting can surface it verbatim.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Value,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A reusable HTTP client configuration shared across requests issued by
/// one [`crate::Moip`] instance.
///
/// Construction performs no I/O; it only configures local options. The
/// `Authorization` value is produced once by the [`Authentication`]
/// strategy at creation time and injected into each outgoing request.
#[derive(Debug)]
pub struct Session {
    http: reqwest::Client,
    options: SessionOptions,
    authorization: String,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Session {
    /// Builds a session from an authentication strategy and options.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    pub(crate) fn new(authentication: &dyn Authentication, options: SessionOptions) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        tracing::debug!(
            timeout_ms = options.timeout.as_millis() as u64,
            connect_timeout_ms = options.connect_timeout.as_millis() as u64,
            "created new session"
        );

        Self {
            http,
            options,
            authorization: authentication.authorization(),
        }
    }

    /// Returns the options this session was configured with.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Sends a GET request.
    pub(crate) async fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        self.dispatch(self.http.request(Method::GET, url)).await
    }

    /// Sends a POST request with a JSON body.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<HttpResponse, Error> {
        self.dispatch(self.http.request(Method::POST, url).json(body))
            .await
    }

    /// Sends a POST request with no body (capture/void style actions).
    pub(crate) async fn post_empty(&self, url: &str) -> Result<HttpResponse, Error> {
        self.dispatch(self.http.request(Method::POST, url)).await
    }

    /// Completes a request builder with session headers and executes it.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, Error> {
        let response = request
            .header(AUTHORIZATION, self.authorization.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(HttpResponse { status, body })
    }
}

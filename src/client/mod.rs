//! The Moip API client.
//!
//! [`Moip`] is the entry point of the SDK. It holds the authentication
//! strategy and target [`Endpoint`] chosen at construction, owns the HTTP
//! [`Session`] exclusively, and hands out resource accessors through its
//! factory methods.
//!
//! # Example
//!
//! ```rust
//! use moip::{ApiKey, ApiToken, BasicAuth, Endpoint, Moip};
//!
//! let auth = BasicAuth::new(
//!     ApiToken::new("01010101010101010101010101010101").unwrap(),
//!     ApiKey::new("ABABABABABABABABABABABABABABABABABABABAB").unwrap(),
//! );
//! let moip = Moip::with_endpoint(auth, Endpoint::Sandbox);
//!
//! assert_eq!(moip.endpoint().host(), "sandbox.moip.com.br");
//! let customers = moip.customers();
//! ```
//!
//! # Concurrency
//!
//! The session configuration is immutable after creation, so one client
//! may issue any number of independent requests concurrently.
//! [`Moip::create_new_session`] takes `&mut self`; the borrow checker
//! therefore rules out rebuilding the session while requests are in
//! flight.

pub mod session;
pub mod user_agent;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Authentication;
use crate::config::Endpoint;
use crate::error::Error;
use crate::resources::{Customers, Entries, Multiorders, Orders, Payments};

use session::{HttpResponse, Session, SessionOptions};

/// Client for the Moip v2 API.
///
/// Construction performs no network I/O; the session it builds only
/// configures local options (authentication header, timeouts,
/// user-agent). Resources issue requests exclusively through this
/// client's session.
#[derive(Debug)]
pub struct Moip {
    authentication: Box<dyn Authentication>,
    endpoint: Endpoint,
    session: Session,
}

// Verify Moip is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Moip>();
};

impl Moip {
    /// Creates a client targeting the production endpoint.
    #[must_use]
    pub fn new(authentication: impl Authentication + 'static) -> Self {
        Self::with_endpoint(authentication, Endpoint::Production)
    }

    /// Creates a client targeting the given endpoint.
    #[must_use]
    pub fn with_endpoint(
        authentication: impl Authentication + 'static,
        endpoint: Endpoint,
    ) -> Self {
        let authentication: Box<dyn Authentication> = Box::new(authentication);
        let session = Session::new(authentication.as_ref(), SessionOptions::default());
        Self {
            authentication,
            endpoint,
            session,
        }
    }

    /// Rebuilds the HTTP session with new timeout values.
    ///
    /// One session is created at construction with 30-second defaults;
    /// call this to replace it. The user-agent is recomputed and the
    /// authentication header re-attached. Must not be called while
    /// requests are in flight (enforced by the `&mut self` receiver).
    pub fn create_new_session(&mut self, timeout: Duration, connect_timeout: Duration) {
        let options = SessionOptions {
            timeout,
            connect_timeout,
            user_agent: user_agent::default_user_agent(),
        };
        self.session = Session::new(self.authentication.as_ref(), options);
    }

    /// Returns the configured HTTP session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the endpoint this client targets.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns an accessor for the customers resource.
    #[must_use]
    pub const fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Returns an accessor for the orders resource.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    /// Returns an accessor for the payments resource.
    #[must_use]
    pub const fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    /// Returns an accessor for the multiorders resource.
    #[must_use]
    pub const fn multiorders(&self) -> Multiorders<'_> {
        Multiorders::new(self)
    }

    /// Returns an accessor for the ledger entries resource.
    #[must_use]
    pub const fn entries(&self) -> Entries<'_> {
        Entries::new(self)
    }

    /// Builds the absolute URL for a resource path.
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.base_url())
    }

    /// GETs a resource and maps the response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        id: Option<&str>,
    ) -> Result<T, Error> {
        let response = self.session.get(&self.url(path)).await?;
        Self::decode(resource, id, response)
    }

    /// POSTs a serialized payload and maps the response.
    pub(crate) async fn post_json<T, B>(
        &self,
        resource: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.session.post(&self.url(path), body).await?;
        Self::decode(resource, None, response)
    }

    /// POSTs a body-less action (capture/void style) and maps the response.
    pub(crate) async fn post_action<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        id: &str,
    ) -> Result<T, Error> {
        let response = self.session.post_empty(&self.url(path)).await?;
        Self::decode(resource, Some(id), response)
    }

    /// Classifies error statuses and deserializes success bodies.
    fn decode<T: DeserializeOwned>(
        resource: &'static str,
        id: Option<&str>,
        response: HttpResponse,
    ) -> Result<T, Error> {
        if !response.is_success() {
            tracing::warn!(resource, status = response.status, "moip request failed");
            return Err(Error::from_response(
                response.status,
                &response.body,
                resource,
                id,
            ));
        }

        serde_json::from_value(response.body).map_err(|source| Error::UnexpectedResponse {
            status: response.status,
            source,
        })
    }
}

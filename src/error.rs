//! Error types for the Moip SDK.
//!
//! All fallible operations in this crate return [`Error`]. The taxonomy
//! mirrors the three ways a request can fail:
//!
//! - **Transport errors** ([`Error::Network`]) — connection refused, DNS
//!   failure, timeout. Surfaced unchanged from the HTTP layer and never
//!   retried; retry policy belongs to the caller.
//! - **Provider-reported errors** — Moip answered with a 4xx/5xx status.
//!   A 404 becomes [`Error::NotFound`]; everything else becomes
//!   [`Error::Api`]. Both carry the provider's error payload parsed into
//!   [`ApiError`] items.
//! - **Malformed responses** ([`Error::UnexpectedResponse`]) — the body did
//!   not deserialize into the expected resource shape. The SDK never
//!   produces a partially-populated resource.
//!
//! Additionally, [`Error::MissingField`] signals that a request payload
//! failed local required-field validation before any network call was
//! attempted, and [`Error::EmptyCredential`] rejects blank credentials at
//! construction time.
//!
//! # Example
//!
//! ```rust,ignore
//! match moip.orders().get("ORD-UNKNOWN").await {
//!     Ok(order) => println!("status: {:?}", order.status),
//!     Err(moip::Error::NotFound { resource, id, .. }) => {
//!         println!("{resource} {id} does not exist");
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One error item from Moip's error payload.
///
/// Moip reports request problems as a list of items:
///
/// ```json
/// {
///   "errors": [
///     {
///       "code": "CUS-001",
///       "path": "customer.ownId",
///       "description": "ownId inválido"
///     }
///   ]
/// }
/// ```
///
/// All fields are optional; bodies that do not match this shape are
/// preserved verbatim in `description`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error type for all SDK operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A transport-level failure from the HTTP layer.
    ///
    /// Connection refused, DNS failure, TLS problems and timeouts all
    /// surface here, unchanged and unretried.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The requested resource does not exist (HTTP 404).
    ///
    /// Carries the provider's error items so the caller can read Moip's
    /// own description of the failure.
    #[error("{resource} {id} not found")]
    NotFound {
        /// The resource type name (e.g. "customer", "order").
        resource: &'static str,
        /// The identifier that was requested.
        id: String,
        /// Error items parsed from the response body.
        errors: Vec<ApiError>,
    },

    /// Moip rejected the request with a non-404 error status.
    #[error("moip API returned status {status}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Error items parsed from the response body.
        errors: Vec<ApiError>,
    },

    /// A success response carried a body that does not match the expected
    /// resource shape.
    #[error("unexpected response body (status {status})")]
    UnexpectedResponse {
        /// The HTTP status code of the response.
        status: u16,
        /// The deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A request payload is missing a field Moip requires.
    ///
    /// Raised locally, before any network call is attempted, so it is
    /// always distinguishable from a provider-side rejection.
    #[error("missing required field `{field}` for {resource}")]
    MissingField {
        /// The resource type name the payload was built for.
        resource: &'static str,
        /// The wire name of the missing field.
        field: &'static str,
    },

    /// A credential value was empty at construction time.
    #[error("{name} must not be empty")]
    EmptyCredential {
        /// The credential kind (e.g. "API token").
        name: &'static str,
    },
}

impl Error {
    /// Classifies a non-success HTTP response into an [`Error`].
    ///
    /// 404 maps to [`Error::NotFound`]; every other status maps to
    /// [`Error::Api`]. The body is parsed leniently: an `errors` array is
    /// decoded into [`ApiError`] items, and any other body shape is kept
    /// verbatim as a single item's description.
    #[must_use]
    pub fn from_response(
        status: u16,
        body: &Value,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        let errors = parse_api_errors(body);
        if status == 404 {
            Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                errors,
            }
        } else {
            Self::Api { status, errors }
        }
    }

    /// Returns the provider's error items, if this error carries any.
    #[must_use]
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::NotFound { errors, .. } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns the first error description reported by the provider.
    #[must_use]
    pub fn provider_message(&self) -> Option<&str> {
        self.api_errors()
            .iter()
            .find_map(|e| e.description.as_deref())
    }
}

/// Parses Moip's `{"errors": [...]}` payload, falling back to preserving
/// the raw body as a single description when the shape does not match.
fn parse_api_errors(body: &Value) -> Vec<ApiError> {
    if let Some(errors) = body.get("errors") {
        if let Ok(items) = serde_json::from_value::<Vec<ApiError>>(errors.clone()) {
            return items;
        }
        return vec![ApiError {
            description: Some(errors.to_string()),
            ..ApiError::default()
        }];
    }

    match body {
        Value::Null => Vec::new(),
        Value::String(text) if text.trim().is_empty() => Vec::new(),
        Value::String(text) => vec![ApiError {
            description: Some(text.clone()),
            ..ApiError::default()
        }],
        other => vec![ApiError {
            description: Some(other.to_string()),
            ..ApiError::default()
        }],
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

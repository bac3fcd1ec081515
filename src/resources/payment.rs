//! Payment resource.
//!
//! Payments are always created under an order or a multiorder; the
//! provider derives the charged amount from the parent, so a payment
//! request only carries the funding instrument and charging options.
//! Pre-authorized card payments (`delay_capture`) are settled later with
//! [`Payments::capture`] or released with [`Payments::cancel`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Moip;
use crate::error::Error;
use crate::resources::common::{Event, Fee, FundingInstrument};
use crate::resources::require;

const RESOURCE: &str = "payment";

/// Lifecycle states of a payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Waiting,
    InAnalysis,
    PreAuthorized,
    Authorized,
    Cancelled,
    Refunded,
    Reversed,
    Settled,
}

/// Monetary breakdown of a payment, reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A Moip payment.
///
/// On requests only `installment_count`, `statement_descriptor`,
/// `delay_capture` and `funding_instrument` are meaningful; `id`,
/// `status`, `amount`, `fees` and `events` are filled by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_instrument: Option<FundingInstrument>,
    #[serde(skip_serializing)]
    pub amount: Option<PaymentAmount>,
    #[serde(skip_serializing)]
    pub fees: Option<Vec<Fee>>,
    #[serde(skip_serializing)]
    pub events: Option<Vec<Event>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Accessor for the payments endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a Moip,
}

impl<'a> Payments<'a> {
    pub(crate) const fn new(client: &'a Moip) -> Self {
        Self { client }
    }

    /// Returns the client this accessor is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Moip {
        self.client
    }

    /// Creates a payment for an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] before any request is made when no
    /// funding instrument is set.
    pub async fn create(&self, order_id: &str, payment: &Payment) -> Result<Payment, Error> {
        require(RESOURCE, "fundingInstrument", payment.funding_instrument.is_some())?;

        self.client
            .post_json(RESOURCE, &format!("orders/{order_id}/payments"), payment)
            .await
    }

    /// Creates a payment covering every order of a multiorder.
    pub async fn create_for_multiorder(
        &self,
        multiorder_id: &str,
        payment: &Payment,
    ) -> Result<Payment, Error> {
        require(RESOURCE, "fundingInstrument", payment.funding_instrument.is_some())?;

        self.client
            .post_json(
                RESOURCE,
                &format!("multiorders/{multiorder_id}/multipayments"),
                payment,
            )
            .await
    }

    /// Fetches a payment by its Moip id (`PAY-...`).
    pub async fn get(&self, id: &str) -> Result<Payment, Error> {
        self.client
            .get_json(RESOURCE, &format!("payments/{id}"), Some(id))
            .await
    }

    /// Captures a pre-authorized payment.
    pub async fn capture(&self, id: &str) -> Result<Payment, Error> {
        self.client
            .post_action(RESOURCE, &format!("payments/{id}/capture"), id)
            .await
    }

    /// Voids a pre-authorized payment, releasing the reserved amount.
    pub async fn cancel(&self, id: &str) -> Result<Payment, Error> {
        self.client
            .post_action(RESOURCE, &format!("payments/{id}/void"), id)
            .await
    }
}

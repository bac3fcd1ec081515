//! Customer resource.
//!
//! Customers are the buyers orders are created for. Beyond `create` and
//! `get`, the provider lets additional shipping addresses and stored
//! credit cards be attached to an existing customer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Moip;
use crate::error::Error;
use crate::resources::common::{Address, FundingInstrument, Phone, TaxDocument};
use crate::resources::require;

const RESOURCE: &str = "customer";

/// A Moip customer.
///
/// The same struct serves requests and responses: `id`,
/// `funding_instruments` and `created_at` are filled by the provider and
/// omitted from request bodies when unset. `own_id` is the caller's own
/// identifier for the buyer and must be unique per account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_document: Option<TaxDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing)]
    pub funding_instruments: Option<Vec<FundingInstrument>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accessor for the customers endpoints.
///
/// Obtained from [`Moip::customers`]; issues requests only through the
/// client that created it.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a Moip,
}

impl<'a> Customers<'a> {
    pub(crate) const fn new(client: &'a Moip) -> Self {
        Self { client }
    }

    /// Returns the client this accessor is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Moip {
        self.client
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] before any request is made when
    /// `own_id`, `fullname` or `email` is unset; provider rejections
    /// surface as [`Error::Api`].
    pub async fn create(&self, customer: &Customer) -> Result<Customer, Error> {
        require(RESOURCE, "ownId", customer.own_id.is_some())?;
        require(RESOURCE, "fullname", customer.fullname.is_some())?;
        require(RESOURCE, "email", customer.email.is_some())?;

        self.client.post_json(RESOURCE, "customers", customer).await
    }

    /// Fetches a customer by its Moip id (`CUS-...`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id does not exist.
    pub async fn get(&self, id: &str) -> Result<Customer, Error> {
        self.client
            .get_json(RESOURCE, &format!("customers/{id}"), Some(id))
            .await
    }

    /// Attaches an additional shipping address to an existing customer.
    pub async fn add_address(&self, customer_id: &str, address: &Address) -> Result<Address, Error> {
        require(RESOURCE, "zipCode", address.zip_code.is_some())?;

        self.client
            .post_json(RESOURCE, &format!("customers/{customer_id}/addresses"), address)
            .await
    }

    /// Stores a credit card as a funding instrument of an existing
    /// customer, for later one-click payments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when the instrument carries no
    /// credit card.
    pub async fn add_credit_card(
        &self,
        customer_id: &str,
        instrument: &FundingInstrument,
    ) -> Result<FundingInstrument, Error> {
        require(RESOURCE, "creditCard", instrument.credit_card.is_some())?;

        self.client
            .post_json(
                RESOURCE,
                &format!("customers/{customer_id}/fundinginstruments"),
                instrument,
            )
            .await
    }
}

//! Ledger entries resource.
//!
//! Entries are the read-only ledger lines the provider writes for every
//! settled movement on the account. They cannot be created or changed
//! through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Moip;
use crate::error::Error;

const RESOURCE: &str = "entry";

/// Settlement states of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Scheduled,
    Settled,
}

/// Direction of a ledger movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryOperation {
    Credit,
    Debit,
}

/// Monetary breakdown of a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// One ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<EntryOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<EntryAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A page of ledger entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryList {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Accessor for the ledger entries endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Entries<'a> {
    client: &'a Moip,
}

impl<'a> Entries<'a> {
    pub(crate) const fn new(client: &'a Moip) -> Self {
        Self { client }
    }

    /// Returns the client this accessor is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Moip {
        self.client
    }

    /// Fetches a ledger entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id does not exist.
    pub async fn get(&self, id: u64) -> Result<Entry, Error> {
        self.client
            .get_json(RESOURCE, &format!("entries/{id}"), Some(&id.to_string()))
            .await
    }

    /// Lists the account's ledger entries.
    pub async fn list(&self) -> Result<EntryList, Error> {
        self.client.get_json(RESOURCE, "entries", None).await
    }
}

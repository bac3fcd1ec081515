//! Multiorders resource.
//!
//! A multiorder groups several orders, possibly for different receivers,
//! into a single payable unit. Payments against a multiorder go through
//! [`crate::resources::Payments::create_for_multiorder`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Moip;
use crate::error::Error;
use crate::resources::common::OrderAmount;
use crate::resources::orders::{Order, OrderStatus};
use crate::resources::require;

const RESOURCE: &str = "multiorder";

/// A Moip multiorder.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Multiorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_id: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing)]
    pub amount: Option<OrderAmount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Accessor for the multiorders endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Multiorders<'a> {
    client: &'a Moip,
}

impl<'a> Multiorders<'a> {
    pub(crate) const fn new(client: &'a Moip) -> Self {
        Self { client }
    }

    /// Returns the client this accessor is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Moip {
        self.client
    }

    /// Creates a multiorder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] before any request is made when
    /// `own_id` is unset or no orders are given.
    pub async fn create(&self, multiorder: &Multiorder) -> Result<Multiorder, Error> {
        require(RESOURCE, "ownId", multiorder.own_id.is_some())?;
        require(RESOURCE, "orders", !multiorder.orders.is_empty())?;

        self.client
            .post_json(RESOURCE, "multiorders", multiorder)
            .await
    }

    /// Fetches a multiorder by its Moip id (`MOR-...`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id does not exist.
    pub async fn get(&self, id: &str) -> Result<Multiorder, Error> {
        self.client
            .get_json(RESOURCE, &format!("multiorders/{id}"), Some(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_nests_orders() {
        let multiorder = Multiorder {
            own_id: Some("meu_multiorder_1".into()),
            orders: vec![
                Order {
                    own_id: Some("pedido_1".into()),
                    ..Order::default()
                },
                Order {
                    own_id: Some("pedido_2".into()),
                    ..Order::default()
                },
            ],
            ..Multiorder::default()
        };

        let value = serde_json::to_value(&multiorder).unwrap();

        assert_eq!(value["ownId"], "meu_multiorder_1");
        assert_eq!(value["orders"][1]["ownId"], "pedido_2");
        assert!(value.get("status").is_none());
        assert!(value.get("amount").is_none());
    }

    #[test]
    fn test_response_deserializes_aggregate_amount() {
        let multiorder: Multiorder = serde_json::from_value(json!({
            "id": "MOR-E8UPCF1B34BY",
            "ownId": "meu_multiorder_1",
            "status": "CREATED",
            "amount": {"total": 17000, "currency": "BRL"},
            "orders": [
                {"id": "ORD-F2ZQ4TJHIOLZ", "ownId": "pedido_1"},
                {"id": "ORD-BVXMVA0SCL0R", "ownId": "pedido_2"}
            ],
            "createdAt": "2018-07-19T15:27:10-03:00"
        }))
        .unwrap();

        assert_eq!(multiorder.id.as_deref(), Some("MOR-E8UPCF1B34BY"));
        assert_eq!(multiorder.status, Some(OrderStatus::Created));
        assert_eq!(multiorder.amount.unwrap().total, Some(17000));
        assert_eq!(multiorder.orders.len(), 2);
    }
}

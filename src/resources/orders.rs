//! Orders resource.
//!
//! An order ties a buyer to a list of items and an amount breakdown.
//! Payments, ledger entries and lifecycle events accumulate on the order
//! as the provider processes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Moip;
use crate::error::Error;
use crate::resources::common::{Event, OrderAmount, OrderItem};
use crate::resources::customer::Customer;
use crate::resources::entry::Entry;
use crate::resources::payment::Payment;
use crate::resources::require;

const RESOURCE: &str = "order";

/// Lifecycle states of an order or multiorder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Waiting,
    Paid,
    NotPaid,
    Reverted,
}

/// A Moip order.
///
/// `id`, `status`, `payments`, `entries`, `events` and the timestamps are
/// filled by the provider and omitted from request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_id: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<OrderAmount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<Payment>>,
    #[serde(skip_serializing)]
    pub entries: Option<Vec<Entry>>,
    #[serde(skip_serializing)]
    pub events: Option<Vec<Event>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregate figures returned alongside an order listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// A page of orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<OrderSummary>,
}

/// Accessor for the orders endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    client: &'a Moip,
}

impl<'a> Orders<'a> {
    pub(crate) const fn new(client: &'a Moip) -> Self {
        Self { client }
    }

    /// Returns the client this accessor is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Moip {
        self.client
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] before any request is made when
    /// `own_id`, the item list or the customer is unset.
    pub async fn create(&self, order: &Order) -> Result<Order, Error> {
        require(RESOURCE, "ownId", order.own_id.is_some())?;
        require(RESOURCE, "items", !order.items.is_empty())?;
        require(RESOURCE, "customer", order.customer.is_some())?;

        self.client.post_json(RESOURCE, "orders", order).await
    }

    /// Fetches an order by its Moip id (`ORD-...`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id does not exist.
    pub async fn get(&self, id: &str) -> Result<Order, Error> {
        self.client
            .get_json(RESOURCE, &format!("orders/{id}"), Some(id))
            .await
    }

    /// Lists the account's orders.
    pub async fn list(&self) -> Result<OrderList, Error> {
        self.client.get_json(RESOURCE, "orders", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::common::Subtotals;
    use serde_json::json;

    fn test_order() -> Order {
        Order {
            own_id: Some("pedido_sandbox_1".into()),
            amount: Some(OrderAmount::brl(Subtotals {
                shipping: Some(1490),
                ..Subtotals::default()
            })),
            items: vec![OrderItem {
                product: Some("Bicicleta Specialized Tarmac 26 Shimano Alivio".into()),
                quantity: Some(1),
                detail: Some("uma bicicleta".into()),
                price: Some(10000),
                ..OrderItem::default()
            }],
            customer: Some(Customer {
                id: Some("CUS-V64MYZ2J6DLV".into()),
                ..Customer::default()
            }),
            ..Order::default()
        }
    }

    #[test]
    fn test_request_body_matches_wire_format() {
        let value = serde_json::to_value(test_order()).unwrap();

        assert_eq!(value["ownId"], "pedido_sandbox_1");
        assert_eq!(value["amount"]["currency"], "BRL");
        assert_eq!(value["amount"]["subtotals"]["shipping"], 1490);
        assert_eq!(value["items"][0]["price"], 10000);
        assert_eq!(value["customer"], json!({"id": "CUS-V64MYZ2J6DLV"}));
        assert!(value.get("status").is_none());
        assert!(value.get("payments").is_none());
    }

    #[test]
    fn test_response_deserializes_embedded_collections() {
        let order: Order = serde_json::from_value(json!({
            "id": "ORD-KZCH1S1ORAHM",
            "ownId": "pedido_sandbox_1",
            "status": "PAID",
            "amount": {
                "paid": 31490,
                "total": 31490,
                "fees": 1837,
                "refunds": 0,
                "liquid": 29653,
                "currency": "BRL",
                "subtotals": {"shipping": 1490, "addition": 0, "discount": 0, "items": 30000}
            },
            "items": [
                {"product": "Bicicleta", "quantity": 1, "detail": "uma bicicleta", "price": 30000}
            ],
            "customer": {"id": "CUS-V64MYZ2J6DLV", "fullname": "Jose Silva"},
            "payments": [{"id": "PAY-CRUP39MFNEMV", "status": "AUTHORIZED"}],
            "entries": [],
            "events": [{"type": "ORDER.PAID", "createdAt": "2018-07-19T15:27:12-03:00"}],
            "createdAt": "2018-07-19T15:27:10-03:00",
            "updatedAt": "2018-07-19T15:27:12-03:00"
        }))
        .unwrap();

        assert_eq!(order.status, Some(OrderStatus::Paid));
        assert_eq!(order.amount.as_ref().unwrap().paid, Some(31490));
        assert_eq!(order.items.len(), 1);
        assert_eq!(
            order.payments.as_ref().unwrap()[0].id.as_deref(),
            Some("PAY-CRUP39MFNEMV")
        );
        assert_eq!(order.events.unwrap().len(), 1);
    }

    #[test]
    fn test_order_list_defaults_to_empty_page() {
        let list: OrderList = serde_json::from_value(json!({})).unwrap();
        assert!(list.orders.is_empty());
        assert!(list.summary.is_none());

        let list: OrderList = serde_json::from_value(json!({
            "summary": {"count": 2, "amount": 62980},
            "orders": [{"id": "ORD-1"}, {"id": "ORD-2"}]
        }))
        .unwrap();
        assert_eq!(list.orders.len(), 2);
        assert_eq!(list.summary.unwrap().count, Some(2));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::NotPaid).unwrap(),
            "\"NOT_PAID\""
        );
    }
}

//! Typed wrappers over the Moip v2 resource endpoints.
//!
//! Each submodule pairs a resource accessor with the serde models for its
//! entity. Accessors are lightweight, stateless handles that borrow the
//! [`crate::Moip`] client that created them; they know their relative API
//! paths and the serialization shape of their entity, validate required
//! fields locally before serializing, and delegate everything else to the
//! remote service.
//!
//! Models follow the provider's camelCase wire format. One struct serves
//! both directions per entity: server-generated fields are optional and
//! omitted from request bodies when unset.

pub mod common;
pub mod customer;
pub mod entry;
pub mod multiorders;
pub mod orders;
pub mod payment;

pub use customer::{Customer, Customers};
pub use entry::{Entries, Entry, EntryAmount, EntryList, EntryOperation, EntryStatus};
pub use multiorders::{Multiorder, Multiorders};
pub use orders::{Order, OrderList, OrderSummary, Orders};
pub use payment::{Payment, PaymentAmount, Payments};

use crate::error::Error;

/// Fails with [`Error::MissingField`] when a required field is absent.
pub(crate) fn require(
    resource: &'static str,
    field: &'static str,
    present: bool,
) -> Result<(), Error> {
    if present {
        Ok(())
    } else {
        Err(Error::MissingField { resource, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_passes_through_present_fields() {
        assert!(require("customer", "ownId", true).is_ok());
    }

    #[test]
    fn test_require_names_the_missing_field() {
        let error = require("order", "items", false).unwrap_err();
        assert!(matches!(
            error,
            Error::MissingField {
                resource: "order",
                field: "items"
            }
        ));
    }
}

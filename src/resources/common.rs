//! Value objects shared across resources.
//!
//! Amounts are integer cents (centavos); Moip only settles BRL. Dates
//! with no time component (birth dates, boleto expiration) are plain
//! `NaiveDate`s; event timestamps carry an offset and normalize to UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Monetary breakdown of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotals: Option<Subtotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquid: Option<i64>,
}

impl OrderAmount {
    /// An amount in BRL with the given subtotals.
    #[must_use]
    pub fn brl(subtotals: Subtotals) -> Self {
        Self {
            currency: Some("BRL".to_string()),
            subtotals: Some(subtotals),
            ..Self::default()
        }
    }
}

/// Amount components the caller controls; item totals come from the items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subtotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addition: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<i64>,
}

/// One purchasable item inside an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

/// Brazilian tax document kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxDocumentType {
    Cpf,
    Cnpj,
}

/// A CPF or CNPJ document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaxDocument {
    #[serde(rename = "type")]
    pub kind: TaxDocumentType,
    pub number: String,
}

impl TaxDocument {
    /// A CPF (natural person) document.
    #[must_use]
    pub fn cpf(number: impl Into<String>) -> Self {
        Self {
            kind: TaxDocumentType::Cpf,
            number: number.into(),
        }
    }

    /// A CNPJ (legal entity) document.
    #[must_use]
    pub fn cnpj(number: impl Into<String>) -> Self {
        Self {
            kind: TaxDocumentType::Cnpj,
            number: number.into(),
        }
    }
}

/// A phone number split the way the provider expects it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Billing vs. shipping address discriminator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AddressType {
    Billing,
    Shipping,
}

/// A Brazilian street address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AddressType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Card or boleto holder identification.
///
/// The provider spells this object's birth date `birthdate`, unlike the
/// customer's `birthDate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Holder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(rename = "birthdate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_document: Option<TaxDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

/// Payment methods accepted by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Boleto,
    OnlineBankDebit,
}

/// Credit card details.
///
/// On requests either an encrypted `hash` or the raw card data is sent;
/// responses only ever echo the identification fields (`id`, `brand`,
/// `first6`, `last4`, `store`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<Holder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
}

/// Boleto instruction lines printed on the document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstructionLines {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third: Option<String>,
}

/// Boleto (bank slip) details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Boleto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_lines: Option<InstructionLines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
}

/// How a payment is funded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundingInstrument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto: Option<Boleto>,
}

impl FundingInstrument {
    /// A credit card funding instrument.
    #[must_use]
    pub fn credit_card(card: CreditCard) -> Self {
        Self {
            method: Some(PaymentMethod::CreditCard),
            credit_card: Some(card),
            boleto: None,
        }
    }

    /// A boleto funding instrument.
    #[must_use]
    pub fn boleto(boleto: Boleto) -> Self {
        Self {
            method: Some(PaymentMethod::Boleto),
            credit_card: None,
            boleto: Some(boleto),
        }
    }
}

/// A lifecycle event attached to a resource by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A fee withheld by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tax_document_uses_provider_field_names() {
        let document = TaxDocument::cpf("22222222222");
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value, json!({"type": "CPF", "number": "22222222222"}));
    }

    #[test]
    fn test_address_serializes_camel_case() {
        let address = Address {
            street: Some("Rua de teste".into()),
            street_number: Some("123".into()),
            district: Some("Centro".into()),
            city: Some("Sorocaba".into()),
            state: Some("SP".into()),
            country: Some("BRA".into()),
            zip_code: Some("18040360".into()),
            ..Address::default()
        };

        let value = serde_json::to_value(&address).unwrap();

        assert_eq!(value["streetNumber"], "123");
        assert_eq!(value["zipCode"], "18040360");
        assert!(value.get("complement").is_none());
        assert!(value.get("type").is_none());
    }

    #[test]
    fn test_holder_birth_date_uses_lowercase_wire_name() {
        let holder = Holder {
            fullname: Some("Jose Silva".into()),
            birth_date: Some(NaiveDate::from_ymd_opt(1988, 12, 30).unwrap()),
            ..Holder::default()
        };

        let value = serde_json::to_value(&holder).unwrap();

        assert_eq!(value["birthdate"], "1988-12-30");
        assert!(value.get("birthDate").is_none());
    }

    #[test]
    fn test_funding_instrument_constructors_set_method() {
        let card = FundingInstrument::credit_card(CreditCard {
            hash: Some("abc123".into()),
            ..CreditCard::default()
        });
        assert_eq!(card.method, Some(PaymentMethod::CreditCard));
        assert!(card.boleto.is_none());

        let boleto = FundingInstrument::boleto(Boleto {
            expiration_date: NaiveDate::from_ymd_opt(2020, 6, 20),
            ..Boleto::default()
        });
        let value = serde_json::to_value(&boleto).unwrap();
        assert_eq!(value["method"], "BOLETO");
        assert_eq!(value["boleto"]["expirationDate"], "2020-06-20");
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"CREDIT_CARD\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::OnlineBankDebit).unwrap(),
            "\"ONLINE_BANK_DEBIT\""
        );
    }

    #[test]
    fn test_order_amount_brl_defaults() {
        let amount = OrderAmount::brl(Subtotals {
            shipping: Some(1490),
            ..Subtotals::default()
        });

        let value = serde_json::to_value(&amount).unwrap();

        assert_eq!(value["currency"], "BRL");
        assert_eq!(value["subtotals"]["shipping"], 1490);
        assert!(value.get("total").is_none());
    }

    #[test]
    fn test_event_timestamp_normalizes_to_utc() {
        let event: Event = serde_json::from_value(json!({
            "type": "ORDER.CREATED",
            "createdAt": "2016-02-18T16:27:16-02:00",
            "description": ""
        }))
        .unwrap();

        let created_at = event.created_at.unwrap();
        assert_eq!(created_at.to_rfc3339(), "2016-02-18T18:27:16+00:00");
    }

    #[test]
    fn test_credit_card_response_fields_round_trip() {
        let card: CreditCard = serde_json::from_value(json!({
            "id": "CRC-3JD2E8MWA3RW",
            "brand": "VISA",
            "first6": "401200",
            "last4": "3335",
            "store": true
        }))
        .unwrap();

        assert_eq!(card.id.as_deref(), Some("CRC-3JD2E8MWA3RW"));
        assert_eq!(card.last4.as_deref(), Some("3335"));
        assert_eq!(card.store, Some(true));
        assert!(card.number.is_none());
    }
}

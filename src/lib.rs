//! # Moip Rust SDK
//!
//! A Rust SDK for the Moip v2 payments API, providing authenticated HTTP
//! session handling and typed resource access for customers, orders,
//! payments, multiorders and ledger entries.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A [`Moip`] client holding credentials and the target [`Endpoint`]
//!   (production or sandbox), with a lazily rebuildable HTTP session
//! - An [`Authentication`] trait with [`BasicAuth`] (API token + key) and
//!   [`OAuth`] (Moip Connect access token) strategies
//! - Typed resource accessors with local required-field validation and
//!   camelCase wire mapping
//! - A single [`Error`] taxonomy separating transport failures, provider
//!   rejections and malformed responses
//!
//! ## Quick Start
//!
//! ```rust
//! use moip::{ApiKey, ApiToken, BasicAuth, Endpoint, Moip};
//!
//! let auth = BasicAuth::new(
//!     ApiToken::new("01010101010101010101010101010101").unwrap(),
//!     ApiKey::new("ABABABABABABABABABABABABABABABABABABABAB").unwrap(),
//! );
//! let moip = Moip::with_endpoint(auth, Endpoint::Sandbox);
//! ```
//!
//! ## Creating an order and paying it
//!
//! ```rust,ignore
//! use moip::resources::common::{CreditCard, FundingInstrument, OrderAmount, OrderItem, Subtotals};
//! use moip::resources::{Customer, Order, Payment};
//!
//! let customer = moip
//!     .customers()
//!     .create(&Customer {
//!         own_id: Some("my_customer_1".into()),
//!         fullname: Some("Jose Silva".into()),
//!         email: Some("jose@example.com".into()),
//!         ..Customer::default()
//!     })
//!     .await?;
//!
//! let order = moip
//!     .orders()
//!     .create(&Order {
//!         own_id: Some("my_order_1".into()),
//!         amount: Some(OrderAmount::brl(Subtotals::default())),
//!         items: vec![OrderItem {
//!             product: Some("Bicicleta".into()),
//!             quantity: Some(1),
//!             price: Some(10000),
//!             ..OrderItem::default()
//!         }],
//!         customer: Some(Customer { id: customer.id, ..Customer::default() }),
//!         ..Order::default()
//!     })
//!     .await?;
//!
//! let payment = moip
//!     .payments()
//!     .create(
//!         order.id.as_deref().unwrap(),
//!         &Payment {
//!             funding_instrument: Some(FundingInstrument::credit_card(CreditCard {
//!                 hash: Some("<card hash>".into()),
//!                 ..CreditCard::default()
//!             })),
//!             ..Payment::default()
//!         },
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials and endpoint live on the client and
//!   are passed explicitly
//! - **One request per operation**: no retries, no queueing; transient
//!   failures are the caller's to handle
//! - **Thread-safe**: the client is `Send + Sync` and may serve
//!   concurrent requests; session recreation requires `&mut` access
//! - **Errors are classified, not swallowed**: provider error payloads
//!   are surfaced unchanged

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, ApiKey, ApiToken, Authentication, BasicAuth, OAuth};
pub use client::session::{Session, SessionOptions, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
pub use client::user_agent::{build_user_agent, OsInfo};
pub use client::Moip;
pub use config::Endpoint;
pub use error::{ApiError, Error};

// Re-export resource accessors and top-level models
pub use resources::{
    Customer, Customers, Entries, Entry, EntryList, Multiorder, Multiorders, Order, OrderList,
    Orders, Payment, Payments,
};

//! Bento Client - HTTP glue for the ordering frontend
//!
//! Menu fetching, checkout routing (kitchen intake for dine-in, payment
//! intent for takeout), payment status mapping and the chat-widget config
//! loader. Domain logic lives in `bento-core`.

pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod menu;
pub mod payment;
pub mod widget;

pub use checkout::{CheckoutClient, CheckoutOutcome};
pub use config::{ClientConfig, ServiceContext, ServiceMode};
pub use error::{ClientError, ClientResult};
pub use http::HttpGateway;
pub use menu::MenuClient;
pub use payment::PaymentStatus;
pub use widget::WidgetLoader;

// Re-export core types for convenience
pub use bento_core::{Cart, MenuCategory, MenuItem, Totals};

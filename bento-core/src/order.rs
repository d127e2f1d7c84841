//! Order assembly and wire payloads
//!
//! An [`Order`] is transient: constructed only at checkout time from a cart
//! snapshot, submitted once, and discarded. It never persists client-side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, Totals};
use crate::error::CartError;
use crate::models::cart::{CartLine, SelectedOptions};
use crate::money::round_money;
use crate::util::{now_iso, order_token};

/// Where the order is routed at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    DineIn,
    Takeout,
}

/// A checkout-time order snapshot.
#[derive(Debug, Clone)]
pub struct Order {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
    pub note: String,
    /// Short human-facing reference, regenerated per checkout attempt
    pub order_id: String,
    /// ISO-8601 creation timestamp
    pub timestamp: String,
    pub destination: Destination,
    /// Present for dine-in orders only
    pub table: Option<String>,
}

impl Order {
    /// Snapshot the cart into an order.
    ///
    /// Fails on an empty cart (a zero-item order is never submitted) and on
    /// a dine-in order with no table identifier.
    pub fn assemble(
        cart: &Cart,
        tax_rate: Decimal,
        note: &str,
        destination: Destination,
        table: Option<String>,
    ) -> Result<Self, CartError> {
        if cart.is_empty() {
            return Err(CartError::EmptyOrder);
        }
        if destination == Destination::DineIn && table.as_deref().is_none_or(str::is_empty) {
            return Err(CartError::MissingTable);
        }
        Ok(Self {
            lines: cart.lines().to_vec(),
            totals: cart.totals(tax_rate),
            note: note.to_string(),
            order_id: order_token(),
            timestamp: now_iso(),
            destination,
            table,
        })
    }

    /// Build the kitchen order-intake payload (dine-in POST body).
    pub fn intake_payload(&self) -> OrderPayload {
        OrderPayload {
            items: self
                .lines
                .iter()
                .map(|line| OrderPayloadItem {
                    id: line.item.id.clone(),
                    name: line.item.name.clone(),
                    price: round_money(line.final_unit_price),
                    quantity: line.quantity,
                    subtotal: round_money(line.line_total()),
                    location: line.item.location_tag.clone(),
                    options: line.flattened_options(),
                })
                .collect(),
            total: self.totals.total_rounded(),
            order_date: self.timestamp.clone(),
            order_id: self.order_id.clone(),
            notes: self.note.clone(),
            table: self.table.clone().unwrap_or_default(),
            order_type: self.destination,
        }
    }

    /// Build the payment-intent creation request (takeout POST body).
    ///
    /// The amount is the rounded total in integer minor units.
    pub fn intent_request(&self) -> PaymentIntentRequest {
        PaymentIntentRequest {
            amount: self.totals.total_minor_units(),
            cart: self
                .lines
                .iter()
                .map(|line| PaymentCartLine {
                    id: line.item.id.clone(),
                    name: line.item.name.clone(),
                    quantity: line.quantity,
                    price: round_money(line.final_unit_price),
                    selected_options: line.selected_options.clone(),
                })
                .collect(),
            metadata: IntentMetadata {
                order_id: self.order_id.clone(),
            },
            notes: self.note.clone(),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// One line of the kitchen order-intake payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayloadItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
    /// Kitchen routing tag for the printer listener
    pub location: String,
    /// Flattened selections, `"Group: Choice; Group: Choice"`
    pub options: String,
}

/// Kitchen order-intake POST body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    pub items: Vec<OrderPayloadItem>,
    pub total: Decimal,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    pub order_id: String,
    pub notes: String,
    pub table: String,
    #[serde(rename = "orderType")]
    pub order_type: Destination,
}

/// Payment-intent creation POST body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntentRequest {
    /// Integer minor currency units (cents)
    pub amount: i64,
    pub cart: Vec<PaymentCartLine>,
    pub metadata: IntentMetadata,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// One cart line as sent to the payment backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentCartLine {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(rename = "selectedOptions")]
    pub selected_options: SelectedOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentMetadata {
    pub order_id: String,
}

/// Payment backend response: exactly one of the two fields is set
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: Option<String>,
    pub error: Option<String>,
}

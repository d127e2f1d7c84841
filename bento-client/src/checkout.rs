//! Checkout routing
//!
//! One state variable drives the routing: dine-in orders POST once to the
//! kitchen intake endpoint (at-most-one endpoint, no secondary mirror);
//! takeout orders request a payment-intent handle and stop there, leaving
//! confirmation to the external payment SDK.

use tracing::{info, warn};

use crate::config::{ClientConfig, ServiceContext, ServiceMode};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpGateway;
use bento_core::cart::Cart;
use bento_core::order::{Destination, Order, PaymentIntentResponse};

/// Terminal result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Dine-in order accepted by the kitchen; cart and note were cleared
    Accepted { order_id: String },
    /// Takeout intent created; the payment UI binds to this handle and the
    /// cart stays intact until the SDK reports payment success
    PaymentPending {
        order_id: String,
        client_secret: String,
    },
}

/// Routes checkout to the endpoint matching the service mode.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    gateway: HttpGateway,
    config: ClientConfig,
}

impl CheckoutClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let gateway = HttpGateway::new(config.timeout)?;
        Ok(Self { gateway, config })
    }

    pub fn with_gateway(config: ClientConfig, gateway: HttpGateway) -> Self {
        Self { gateway, config }
    }

    /// Submit the cart.
    ///
    /// An empty cart is rejected before anything is assembled or sent. On a
    /// dine-in success the cart and note are cleared; on any failure both
    /// are preserved so the customer can retry or show staff.
    pub async fn checkout(
        &self,
        cart: &mut Cart,
        note: &mut String,
        context: &ServiceContext,
    ) -> ClientResult<CheckoutOutcome> {
        if cart.is_empty() {
            return Err(ClientError::EmptyCart);
        }
        match context.mode {
            ServiceMode::DineIn => self.submit_dine_in(cart, note, context).await,
            ServiceMode::Takeout => self.create_payment_intent(cart, note).await,
        }
    }

    async fn submit_dine_in(
        &self,
        cart: &mut Cart,
        note: &mut String,
        context: &ServiceContext,
    ) -> ClientResult<CheckoutOutcome> {
        let order = Order::assemble(
            cart,
            self.config.tax_rate,
            note,
            Destination::DineIn,
            context.table.clone(),
        )?;
        let url = self.config.require_order_url()?;
        let api_key = self.config.require_api_key()?;

        match self
            .gateway
            .post_expect_ok(url, Some(api_key), &order.intake_payload())
            .await
        {
            Ok(()) => {
                info!(order_id = %order.order_id, table = ?order.table, "order accepted");
                cart.clear();
                note.clear();
                Ok(CheckoutOutcome::Accepted {
                    order_id: order.order_id,
                })
            }
            Err(err) => {
                // Cart state intentionally preserved for retry
                warn!(error = %err, "order submission failed");
                Err(err)
            }
        }
    }

    async fn create_payment_intent(
        &self,
        cart: &mut Cart,
        note: &str,
    ) -> ClientResult<CheckoutOutcome> {
        let order = Order::assemble(
            cart,
            self.config.tax_rate,
            note,
            Destination::Takeout,
            None,
        )?;
        let url = self.config.require_payment_url()?;

        let response: PaymentIntentResponse = self
            .gateway
            .post_json(url, None, &order.intent_request())
            .await?;

        if let Some(message) = response.error {
            return Err(ClientError::Payment(message));
        }
        match response.client_secret {
            Some(client_secret) => {
                info!(order_id = %order.order_id, amount = order.totals.total_minor_units(), "payment intent created");
                Ok(CheckoutOutcome::PaymentPending {
                    order_id: order.order_id,
                    client_secret,
                })
            }
            None => Err(ClientError::InvalidResponse(
                "payment response missing clientSecret".into(),
            )),
        }
    }
}

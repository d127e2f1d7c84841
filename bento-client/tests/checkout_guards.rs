//! Checkout guard behavior that must hold before any network I/O happens.

use bento_client::{
    CheckoutClient, ClientConfig, ClientError, MenuClient, ServiceContext, ServiceMode,
};
use bento_core::error::CartError;
use bento_core::models::menu::MenuItem;
use bento_core::money::to_decimal;
use bento_core::Cart;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn sample_item() -> MenuItem {
    MenuItem {
        id: "1".into(),
        name: "Gyoza".into(),
        description: String::new(),
        base_price: to_decimal(6.0),
        category_slug: "sides".into(),
        location_tag: "front".into(),
        option_groups: vec![],
    }
}

#[tokio::test]
async fn empty_cart_checkout_is_rejected_without_submitting() {
    init_tracing();
    // No URLs configured: if checkout tried to submit, it would fail on
    // missing config rather than the empty-cart guard.
    let client = CheckoutClient::new(ClientConfig::new()).unwrap();
    let mut cart = Cart::new();
    let mut note = String::from("keep me");
    let context = ServiceContext {
        mode: ServiceMode::DineIn,
        table: Some("4".into()),
    };

    let err = client.checkout(&mut cart, &mut note, &context).await.unwrap_err();
    assert!(matches!(err, ClientError::EmptyCart));
    assert_eq!(note, "keep me");
}

#[tokio::test]
async fn dine_in_without_table_fails_before_any_request() {
    init_tracing();
    let client = CheckoutClient::new(ClientConfig::new()).unwrap();
    let mut cart = Cart::new();
    cart.add_simple(sample_item());
    let mut note = String::new();
    let context = ServiceContext {
        mode: ServiceMode::DineIn,
        table: None,
    };

    let err = client.checkout(&mut cart, &mut note, &context).await.unwrap_err();
    assert!(matches!(err, ClientError::Order(CartError::MissingTable)));
    // Failure preserves the cart
    assert_eq!(cart.lines().len(), 1);
}

#[tokio::test]
async fn dine_in_demands_intake_url_and_key() {
    init_tracing();
    let client = CheckoutClient::new(ClientConfig::new()).unwrap();
    let mut cart = Cart::new();
    cart.add_simple(sample_item());
    let mut note = String::new();
    let context = ServiceContext {
        mode: ServiceMode::DineIn,
        table: Some("4".into()),
    };

    let err = client.checkout(&mut cart, &mut note, &context).await.unwrap_err();
    assert!(matches!(err, ClientError::Config(msg) if msg.contains("ORDER_API_URL")));
}

#[tokio::test]
async fn takeout_demands_payment_url() {
    init_tracing();
    let client = CheckoutClient::new(ClientConfig::new()).unwrap();
    let mut cart = Cart::new();
    cart.add_simple(sample_item());
    let mut note = String::new();
    let context = ServiceContext {
        mode: ServiceMode::Takeout,
        table: None,
    };

    let err = client.checkout(&mut cart, &mut note, &context).await.unwrap_err();
    assert!(matches!(err, ClientError::Config(msg) if msg.contains("PAYMENT_API_URL")));
}

#[tokio::test]
async fn menu_client_demands_menu_url() {
    init_tracing();
    let client = MenuClient::new(ClientConfig::new()).unwrap();
    let err = client.fetch_menu().await.unwrap_err();
    assert!(matches!(err, ClientError::Config(msg) if msg.contains("MENU_API_URL")));
}

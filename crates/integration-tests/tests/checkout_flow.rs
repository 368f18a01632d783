//! Checkout flow integration tests: session lifecycle, pricing, and the
//! single-submission guarantee.

#![allow(clippy::unwrap_used)]

use clementine_core::Price;
use clementine_integration_tests::TestContext;
use clementine_storefront::models::ShippingTier;
use clementine_storefront::services::checkout::{CheckoutError, CheckoutStep, Totals};

// =============================================================================
// Session Lifecycle
// =============================================================================

#[test]
fn test_checkout_with_empty_cart_redirects() {
    let ctx = TestContext::new();

    assert!(matches!(
        ctx.state.checkout(),
        Err(CheckoutError::EmptyCart)
    ));
    // Navigational only; nothing is notified
    assert!(ctx.notifier.all().is_empty());
}

#[test]
fn test_session_starts_at_shipping_with_standard_tier() {
    let ctx = TestContext::new();
    ctx.state
        .cart()
        .add_to_cart(&ctx.product_with_stock(1))
        .unwrap();

    let flow = ctx.state.checkout().unwrap();
    assert_eq!(flow.step().unwrap(), CheckoutStep::Shipping);
    assert_eq!(flow.tier(), ShippingTier::Standard);
    assert!(!flow.is_processing());
    assert!(flow.order_number().is_none());
}

#[test]
fn test_externally_cleared_cart_aborts_session() {
    let ctx = TestContext::new();
    let cart = ctx.state.cart();
    cart.add_to_cart(&ctx.product_with_stock(1)).unwrap();
    let flow = ctx.state.checkout().unwrap();

    cart.clear().unwrap();

    assert!(matches!(flow.step(), Err(CheckoutError::EmptyCart)));
}

// =============================================================================
// Pricing
// =============================================================================

#[test]
fn test_totals_formula_against_cart_subtotal() {
    let ctx = TestContext::new();
    let cart = ctx.state.cart();
    cart.add_to_cart(&ctx.product_with_stock(2)).unwrap();
    let flow = ctx.state.checkout().unwrap();

    for tier in ShippingTier::ALL {
        flow.select_tier(tier).unwrap();
        let totals = flow.totals().unwrap();
        let subtotal = cart.subtotal();

        assert_eq!(totals.subtotal, subtotal);
        assert_eq!(totals.shipping, tier.cost());
        assert_eq!(
            totals.total,
            subtotal + tier.cost() + totals.tax,
        );
    }
}

#[test]
fn test_known_totals_scenario() {
    // subtotal 200.00, standard shipping 12.00, tax 16.00, total 228.00
    let totals = Totals::compute(Price::from_cents(20000), ShippingTier::Standard);
    assert_eq!(totals.total, Price::from_cents(22800));
    assert_eq!(totals.total.display(), "$228.00");
}

#[test]
fn test_tier_change_does_not_mutate_cart() {
    let ctx = TestContext::new();
    let cart = ctx.state.cart();
    cart.add_to_cart(&ctx.product_with_stock(1)).unwrap();
    let flow = ctx.state.checkout().unwrap();
    let before = cart.lines();

    flow.select_tier(ShippingTier::Free).unwrap();
    flow.select_tier(ShippingTier::Express).unwrap();

    assert_eq!(cart.lines(), before);
}

// =============================================================================
// Order Placement
// =============================================================================

#[tokio::test]
async fn test_place_order_end_to_end() {
    let ctx = TestContext::new();
    let cart = ctx.state.cart();
    let product = ctx.product_with_stock(2);
    cart.add_to_cart(&product).unwrap();
    cart.add_to_cart(&product).unwrap();

    let flow = ctx.state.checkout().unwrap();
    flow.proceed_to_payment().unwrap();
    let expected_totals = flow.totals().unwrap();

    let order = flow.place_order().await.unwrap().expect("order placed");

    assert!(!order.number.is_empty());
    assert!(order.number.starts_with("ORD-"));
    assert_eq!(order.total, expected_totals.total);
    assert_eq!(flow.step().unwrap(), CheckoutStep::Success);
    assert!(cart.is_empty());

    let messages: Vec<String> = ctx.notifier.all().iter().map(|n| n.message.clone()).collect();
    assert!(messages.contains(&"Order placed successfully!".to_string()));
}

#[tokio::test]
async fn test_double_submission_yields_single_order() {
    let ctx = TestContext::new();
    ctx.state
        .cart()
        .add_to_cart(&ctx.product_with_stock(1))
        .unwrap();
    let flow = ctx.state.checkout().unwrap();

    let first = flow.place_order().await.unwrap();
    let second = flow.place_order().await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none(), "resubmission must not place again");
}

#[tokio::test]
async fn test_fresh_session_after_completed_order() {
    let ctx = TestContext::new();
    let cart = ctx.state.cart();
    cart.add_to_cart(&ctx.product_with_stock(1)).unwrap();

    let flow = ctx.state.checkout().unwrap();
    flow.place_order().await.unwrap();

    // Cart is empty now, so a new session cannot start until something
    // is added again
    assert!(matches!(
        ctx.state.checkout(),
        Err(CheckoutError::EmptyCart)
    ));

    cart.add_to_cart(&ctx.product_with_stock(1)).unwrap();
    let fresh = ctx.state.checkout().unwrap();
    assert_eq!(fresh.step().unwrap(), CheckoutStep::Shipping);
    assert!(fresh.order_number().is_none());
}

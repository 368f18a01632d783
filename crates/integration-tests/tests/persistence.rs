//! Persistence across engine restarts: each logical key survives
//! independently and malformed documents fall back to defaults.

#![allow(clippy::unwrap_used)]

use clementine_integration_tests::TestContext;
use clementine_storefront::services::theme::Theme;
use clementine_storefront::store::keys;

#[test]
fn test_cart_survives_restart() {
    let ctx = TestContext::new();
    let product = ctx.product_with_stock(2);
    ctx.state.cart().add_to_cart(&product).unwrap();
    ctx.state.cart().add_to_cart(&product).unwrap();

    let reopened = ctx.reopen();

    assert_eq!(reopened.cart().item_count(), 2);
    assert_eq!(reopened.cart().lines()[0].product.id, product.id);
    // The line carries its own product snapshot, so the reopened engine's
    // freshly generated catalog does not affect it
    assert_eq!(reopened.cart().subtotal(), ctx.state.cart().subtotal());
}

#[test]
fn test_profile_and_theme_survive_restart() {
    let ctx = TestContext::new();

    let mut profile = ctx.state.profile().profile();
    profile.name = "Robin Okafor".to_string();
    ctx.state.profile().update(profile).unwrap();
    ctx.state.theme().toggle().unwrap();

    let reopened = ctx.reopen();

    assert_eq!(reopened.profile().profile().name, "Robin Okafor");
    assert_eq!(reopened.theme().theme(), Theme::Dark);
}

#[test]
fn test_keys_are_independent_units() {
    let ctx = TestContext::new();
    ctx.state.cart().add_to_cart(&ctx.product_with_stock(1)).unwrap();
    ctx.state.theme().toggle().unwrap();

    // Clearing one key leaves the others untouched
    ctx.state.cart().clear().unwrap();

    assert!(ctx.state.cart().is_empty());
    assert_eq!(ctx.state.theme().theme(), Theme::Dark);
    assert_eq!(ctx.state.profile().profile().name, "Alex Johnson");
}

#[test]
fn test_malformed_cart_document_falls_back_to_default() {
    let ctx = TestContext::new();
    ctx.state.cart().add_to_cart(&ctx.product_with_stock(1)).unwrap();

    // Corrupt the persisted document behind the store's back
    ctx.state
        .store()
        .set(keys::CART_ITEMS, &"definitely not a line list")
        .unwrap();

    // Read falls back silently; the engine keeps working
    assert!(ctx.state.cart().is_empty());
    ctx.state.cart().add_to_cart(&ctx.product_with_stock(1)).unwrap();
    assert_eq!(ctx.state.cart().item_count(), 1);
}

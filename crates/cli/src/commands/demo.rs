//! Scripted end-to-end walk-through of the cart and checkout flow.
//!
//! Adds products, exercises the stock policy (reject on increment, clamp
//! on absolute set), then checks out with express shipping and places the
//! order. Notifications are collected and replayed at the end, showing
//! what a UI would have toasted.

use std::sync::Arc;

use tracing::info;

use clementine_storefront::models::ShippingTier;
use clementine_storefront::notify::MemoryNotifier;

/// Run the walk-through.
///
/// # Errors
///
/// Returns an error if the engine fails to start or persistence fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let notifier = Arc::new(MemoryNotifier::new());
    let state = super::engine(notifier.clone())?;
    let cart = state.cart();

    // Start from a clean cart so repeated runs behave the same
    cart.clear()?;

    let mut in_stock = state.catalog().products().iter().filter(|p| p.stock > 0);
    let first = in_stock.next().ok_or("catalog has no in-stock products")?;
    let second = in_stock.next().ok_or("catalog has one in-stock product")?;

    info!("adding {} and {}", first.name, second.name);
    cart.add_to_cart(first)?;
    cart.add_to_cart(first)?;
    cart.add_to_cart(second)?;

    // Absolute set beyond stock clamps rather than rejects
    cart.update_quantity(&second.id, i64::from(second.stock) + 5)?;

    info!(
        "cart: {} items, subtotal {}",
        cart.item_count(),
        cart.subtotal().display()
    );

    let checkout = state.checkout()?;
    checkout.select_tier(ShippingTier::Express)?;
    let totals = checkout.totals()?;
    info!(
        "totals: subtotal {} + shipping {} + tax {} = {}",
        totals.subtotal.display(),
        totals.shipping.display(),
        totals.tax.display(),
        totals.total.display()
    );

    checkout.proceed_to_payment()?;
    info!("placing order...");
    let order = checkout
        .place_order()
        .await?
        .ok_or("placement was unexpectedly ignored")?;

    info!(
        "order {} placed for {} ({} lines), cart now has {} items",
        order.number,
        order.total.display(),
        order.lines.len(),
        cart.item_count()
    );

    info!("notifications a UI would have shown:");
    for notification in notifier.drain() {
        info!("  [{}] {}", notification.severity, notification.message);
    }

    Ok(())
}

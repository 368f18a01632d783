//! Cart state management.
//!
//! Operations follow the cart's stock policy: relative increments
//! (`add_to_cart` on an existing line) are *rejected* when they would
//! exceed stock, while absolute sets (`update_quantity`) are *clamped* to
//! stock. The asymmetry is deliberate and load-bearing; tests pin it.
//!
//! Every mutation is mutate-then-persist in one synchronous step, after
//! which the outcome is announced through the notifier. Item count and
//! subtotal are recomputed from the persisted line list on every read.

use std::sync::Arc;

use clementine_core::{Price, ProductId};

use crate::models::cart::{self, CartLine};
use crate::models::product::Product;
use crate::notify::{Notifier, NotifierExt};
use crate::store::{KvStore, StoreError, keys};

/// Outcome of an [`CartService::add_to_cart`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line's quantity was incremented.
    Incremented,
    /// The increment would exceed stock; the cart is unchanged.
    Rejected,
}

/// Outcome of an [`CartService::update_quantity`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Quantity set exactly as requested.
    Set(u32),
    /// Requested quantity exceeded stock; clamped down.
    Clamped(u32),
    /// Requested quantity was zero or negative; line removed.
    Removed,
    /// No line with that product id; nothing happened.
    NotFound,
}

/// The cart: an ordered list of lines with derived aggregates.
#[derive(Clone)]
pub struct CartService {
    store: KvStore,
    notifier: Arc<dyn Notifier>,
}

impl CartService {
    /// Create a cart service over the given store.
    #[must_use]
    pub fn new(store: KvStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// First add creates a line with quantity 1. Subsequent adds increment
    /// the existing line, but only while quantity stays within stock;
    /// otherwise the increment is rejected and the cart is unchanged. A
    /// product with no stock at all is rejected outright.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the cart fails.
    pub fn add_to_cart(&self, product: &Product) -> Result<AddOutcome, StoreError> {
        let mut outcome = AddOutcome::Rejected;

        self.store
            .update(keys::CART_ITEMS, Vec::new(), |lines: &mut Vec<CartLine>| {
                match lines.iter_mut().find(|line| line.product.id == product.id) {
                    Some(line) if line.quantity < line.product.stock => {
                        line.quantity += 1;
                        outcome = AddOutcome::Incremented;
                    }
                    Some(_) => {}
                    None if product.stock > 0 => {
                        lines.push(CartLine::new(product.clone()));
                        outcome = AddOutcome::Added;
                    }
                    None => {}
                }
            })?;

        match outcome {
            AddOutcome::Added => {
                self.notifier.success(format!("Added {} to cart", product.name));
            }
            AddOutcome::Incremented => {
                self.notifier
                    .success(format!("Added another {} to cart", product.name));
            }
            AddOutcome::Rejected => {
                self.notifier
                    .error(format!("Max stock reached for {}", product.name));
            }
        }

        tracing::debug!(product = %product.id, ?outcome, "add to cart");
        Ok(outcome)
    }

    /// Set the quantity of a line to an absolute value.
    ///
    /// Zero or negative removes the line. A value above stock is clamped to
    /// stock (unlike `add_to_cart`, which rejects). An unknown product id
    /// is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the cart fails.
    pub fn update_quantity(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<UpdateOutcome, StoreError> {
        if quantity <= 0 {
            self.remove_from_cart(product_id)?;
            return Ok(UpdateOutcome::Removed);
        }
        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);

        let mut outcome = UpdateOutcome::NotFound;
        let mut clamp_message = None;

        self.store
            .update(keys::CART_ITEMS, Vec::new(), |lines: &mut Vec<CartLine>| {
                if let Some(line) = lines.iter_mut().find(|line| &line.product.id == product_id) {
                    if requested > line.product.stock {
                        line.quantity = line.product.stock;
                        outcome = UpdateOutcome::Clamped(line.product.stock);
                        clamp_message =
                            Some(format!("Sorry, only {} in stock!", line.product.stock));
                    } else {
                        line.quantity = requested;
                        outcome = UpdateOutcome::Set(requested);
                    }
                }
            })?;

        if let Some(message) = clamp_message {
            self.notifier.error(message);
        }

        tracing::debug!(product = %product_id, ?outcome, "update quantity");
        Ok(outcome)
    }

    /// Remove the line for `product_id`, if any. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the cart fails.
    pub fn remove_from_cart(&self, product_id: &ProductId) -> Result<(), StoreError> {
        self.store
            .update(keys::CART_ITEMS, Vec::new(), |lines: &mut Vec<CartLine>| {
                lines.retain(|line| &line.product.id != product_id);
            })?;
        Ok(())
    }

    /// Empty the cart unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the cart fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.set(keys::CART_ITEMS, &Vec::<CartLine>::new())
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.store.get(keys::CART_ITEMS, Vec::new())
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Total units across all lines. Recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        cart::item_count(&self.lines())
    }

    /// Sum of effective price times quantity. Recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        cart::subtotal(&self.lines())
    }
}

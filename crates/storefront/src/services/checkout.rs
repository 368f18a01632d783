//! Checkout flow: a short-lived state machine over a non-empty cart.
//!
//! Steps run strictly forward: `Shipping` -> `Payment` -> `Success`.
//! Shipping method and payment details are collected on one screen, so the
//! first two steps share a screen but stay distinct states. Placing the
//! order is the only suspension point in the engine: it flips a processing
//! flag, waits out the configured simulated latency, then assigns the
//! order number, clears the cart, and lands in `Success`. The processing
//! flag is what prevents a duplicate submission while the first is in
//! flight; there is no cancellation and the simulated call always
//! succeeds.
//!
//! Totals are a pure function of the cart subtotal and the selected tier,
//! recomputed on every read.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use rust_decimal::Decimal;
use thiserror::Error;

use clementine_core::Price;

use crate::models::order::{Order, ShippingTier};
use crate::notify::{Notifier, NotifierExt};
use crate::services::cart::CartService;
use crate::store::StoreError;

/// Sales tax applied to the cart subtotal.
fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Prefix of every generated order number.
const ORDER_NUMBER_PREFIX: &str = "ORD-";

/// Length of the random order number suffix.
const ORDER_NUMBER_SUFFIX_LEN: usize = 9;

/// Errors produced by the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart is (or became) empty while the flow was still active.
    /// Callers route this back to the cart view; it is never notified.
    #[error("cart is empty")]
    EmptyCart,

    /// Persisting state failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Checkout step, strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Success,
}

/// Computed checkout pricing. Pure function of cart subtotal and tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl Totals {
    /// Compute totals for a subtotal and shipping tier.
    ///
    /// All values stay unrounded decimals; display rounding belongs to
    /// [`Price::display`].
    #[must_use]
    pub fn compute(subtotal: Price, tier: ShippingTier) -> Self {
        let shipping = tier.cost();
        let tax = subtotal * tax_rate();
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Mutable session state behind the flow's shared handle.
#[derive(Debug, Default)]
struct SessionState {
    step: CheckoutStep,
    tier: ShippingTier,
    processing: bool,
    order_number: Option<String>,
}

/// One checkout session.
///
/// Created fresh each time checkout is entered and dropped when the flow
/// completes. Clones share the session, so a UI can hand the same session
/// to multiple event handlers; the processing flag stays authoritative
/// across all of them.
#[derive(Clone)]
pub struct CheckoutFlow {
    state: Arc<Mutex<SessionState>>,
    cart: CartService,
    notifier: Arc<dyn Notifier>,
    placement_delay: Duration,
}

impl CheckoutFlow {
    /// Begin a checkout session over the given cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there is nothing to check
    /// out; the caller stays on the cart view.
    pub fn begin(
        cart: CartService,
        notifier: Arc<dyn Notifier>,
        placement_delay: Duration,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            cart,
            notifier,
            placement_delay,
        })
    }

    /// The current step.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart emptied while the
    /// session was still active; the session is dead and the caller must
    /// leave checkout. Re-checked here so the guard runs on every read,
    /// not only at entry.
    pub fn step(&self) -> Result<CheckoutStep, CheckoutError> {
        self.ensure_active()?;
        Ok(self.state().step)
    }

    /// The currently selected shipping tier.
    #[must_use]
    pub fn tier(&self) -> ShippingTier {
        self.state().tier
    }

    /// Whether a placement call is in flight.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.state().processing
    }

    /// The order number, assigned only on entering `Success`.
    #[must_use]
    pub fn order_number(&self) -> Option<String> {
        self.state().order_number.clone()
    }

    /// Select a shipping tier. Recomputes totals on the next read without
    /// touching the cart. Ignored once the session has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the session was aborted.
    pub fn select_tier(&self, tier: ShippingTier) -> Result<(), CheckoutError> {
        self.ensure_active()?;
        let mut state = self.state();
        if state.step == CheckoutStep::Success {
            tracing::debug!("tier change after success ignored");
            return Ok(());
        }
        state.tier = tier;
        Ok(())
    }

    /// Advance from `Shipping` to `Payment`. Later steps stay where they
    /// are; the machine never moves backwards.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the session was aborted.
    pub fn proceed_to_payment(&self) -> Result<CheckoutStep, CheckoutError> {
        self.ensure_active()?;
        let mut state = self.state();
        if state.step == CheckoutStep::Shipping {
            state.step = CheckoutStep::Payment;
        }
        Ok(state.step)
    }

    /// Current totals for the cart and selected tier.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the session was aborted.
    pub fn totals(&self) -> Result<Totals, CheckoutError> {
        self.ensure_active()?;
        Ok(Totals::compute(self.cart.subtotal(), self.tier()))
    }

    /// Place the order.
    ///
    /// Exactly one submission wins: while a placement is in flight, or
    /// after the session has succeeded, further calls return `Ok(None)`
    /// without side effects. The winning call waits out the simulated
    /// latency, assigns the order number, clears the cart, moves to
    /// `Success`, notifies, and returns the receipt.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart emptied before
    /// submission, or a [`StoreError`] if clearing the cart fails.
    pub async fn place_order(&self) -> Result<Option<Order>, CheckoutError> {
        {
            let mut state = self.state();
            if state.processing || state.step == CheckoutStep::Success {
                tracing::debug!("duplicate submission ignored");
                return Ok(None);
            }
            if self.cart.is_empty() {
                return Err(CheckoutError::EmptyCart);
            }
            state.processing = true;
        }

        // Simulated placement call: fixed latency, always succeeds
        tokio::time::sleep(self.placement_delay).await;

        let lines = self.cart.lines();
        let totals = Totals::compute(crate::models::cart::subtotal(&lines), self.tier());

        let (number, tier) = {
            let mut state = self.state();
            state.order_number = Some(generate_order_number());
            state.step = CheckoutStep::Success;
            state.processing = false;
            (
                state.order_number.clone().unwrap_or_default(),
                state.tier,
            )
        };

        self.cart.clear()?;
        self.notifier.success("Order placed successfully!");
        tracing::info!(order = %number, total = %totals.total, "order placed");

        Ok(Some(Order {
            number,
            lines,
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping_cost: totals.shipping,
            total: totals.total,
            tier,
            placed_at: Utc::now(),
        }))
    }

    /// Abort unless the session can still make progress: a cart that
    /// emptied under an unfinished session kills it.
    fn ensure_active(&self) -> Result<(), CheckoutError> {
        if self.state().step != CheckoutStep::Success && self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(())
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `ORD-` plus a random uppercase alphanumeric suffix.
fn generate_order_number() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(ORDER_NUMBER_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{ORDER_NUMBER_PREFIX}{}", suffix.to_ascii_uppercase())
}

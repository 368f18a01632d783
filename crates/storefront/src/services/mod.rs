//! Business logic services for the storefront engine.
//!
//! # Services
//!
//! - `cart` - Cart line mutations and derived aggregates
//! - `checkout` - Checkout state machine and pricing
//! - `profile` - User profile read and wholesale replace
//! - `theme` - Theme preference
//!
//! Each mutation is a synchronous mutate-then-persist transaction against
//! the key-value store, followed by notification dispatch. Services are
//! cheap to clone and share state through the store.

pub mod cart;
pub mod checkout;
pub mod profile;
pub mod theme;

pub use cart::{AddOutcome, CartService, UpdateOutcome};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutStep, Totals};
pub use profile::ProfileService;
pub use theme::{Theme, ThemeService};

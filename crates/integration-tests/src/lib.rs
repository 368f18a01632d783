//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clementine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutation sequences against the public API
//! - `checkout_flow` - Checkout sessions end to end
//! - `persistence` - State across engine restarts

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Duration;

use clementine_storefront::config::StorefrontConfig;
use clementine_storefront::models::Product;
use clementine_storefront::notify::MemoryNotifier;
use clementine_storefront::state::AppState;

/// A full engine over a temporary data directory, with a recording
/// notifier. The directory is dropped with the context.
pub struct TestContext {
    pub state: AppState,
    pub notifier: Arc<MemoryNotifier>,
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Build an engine with zero placement latency in a fresh directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or state cannot be created.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            placement_delay: Duration::ZERO,
        };
        let notifier = Arc::new(MemoryNotifier::new());
        let state = AppState::new(config, notifier.clone()).unwrap();
        Self {
            state,
            notifier,
            dir,
        }
    }

    /// Re-open a second engine over the same data directory, simulating a
    /// restart. The catalog is regenerated; persisted state is shared.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be created.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn reopen(&self) -> AppState {
        let config = StorefrontConfig {
            data_dir: self.dir.path().to_path_buf(),
            placement_delay: Duration::ZERO,
        };
        AppState::new(config, self.notifier.clone()).unwrap()
    }

    /// Some catalog product with at least `min_stock` units available.
    ///
    /// # Panics
    ///
    /// Panics if the generated catalog has no such product (it always
    /// does at the demo catalog's size).
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn product_with_stock(&self, min_stock: u32) -> Product {
        self.state
            .catalog()
            .products()
            .iter()
            .find(|p| p.stock >= min_stock)
            .unwrap()
            .clone()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

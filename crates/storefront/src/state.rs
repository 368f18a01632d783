//! Application state shared across the engine's consumers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::notify::Notifier;
use crate::services::cart::CartService;
use crate::services::checkout::{CheckoutError, CheckoutFlow};
use crate::services::profile::ProfileService;
use crate::services::theme::ThemeService;
use crate::store::KvStore;

/// Application state shared across all consumers.
///
/// Constructed once at process start and passed by reference; there are no
/// ambient globals. This struct is cheaply cloneable via `Arc` and provides
/// access to the catalog, the persisted store, and the services built over
/// them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: KvStore,
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
    cart: CartService,
    profile: ProfileService,
    theme: ThemeService,
}

impl AppState {
    /// Create the application state: open the store, generate the catalog,
    /// and wire up the services.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Result<Self, AppError> {
        let store = KvStore::open(&config.data_dir)?;
        let catalog = Catalog::generate();
        let cart = CartService::new(store.clone(), notifier.clone());
        let profile = ProfileService::new(store.clone(), notifier.clone());
        let theme = ThemeService::new(store.clone());

        tracing::info!(
            data_dir = %config.data_dir.display(),
            products = catalog.len(),
            "storefront state initialized"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog,
                notifier,
                cart,
                profile,
                theme,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the persisted key-value store.
    #[must_use]
    pub fn store(&self) -> &KvStore {
        &self.inner.store
    }

    /// Get a reference to the generated product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the notification sink.
    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.inner.notifier
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Get a reference to the profile service.
    #[must_use]
    pub fn profile(&self) -> &ProfileService {
        &self.inner.profile
    }

    /// Get a reference to the theme service.
    #[must_use]
    pub fn theme(&self) -> &ThemeService {
        &self.inner.theme
    }

    /// Start a fresh checkout session over the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there is nothing to check
    /// out.
    pub fn checkout(&self) -> Result<CheckoutFlow, CheckoutError> {
        CheckoutFlow::begin(
            self.inner.cart.clone(),
            self.inner.notifier.clone(),
            self.inner.config.placement_delay,
        )
    }
}

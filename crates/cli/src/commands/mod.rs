//! CLI command implementations.

pub mod catalog;
pub mod demo;
pub mod profile;
pub mod theme;

use std::sync::Arc;

use clementine_storefront::config::StorefrontConfig;
use clementine_storefront::notify::Notifier;
use clementine_storefront::state::AppState;

/// Build the engine state from environment configuration.
pub fn engine(notifier: Arc<dyn Notifier>) -> Result<AppState, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(AppState::new(config, notifier)?)
}

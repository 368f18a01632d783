//! Unified error handling.
//!
//! Provides a unified `AppError` over the module error types so binaries
//! and embedders work with one `Result` alias. Nothing in this engine is
//! fatal: stock conflicts and the empty-cart guard are ordinary outcomes
//! surfaced through notifications or typed variants, and store reads fall
//! back to defaults instead of erroring.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::checkout::CheckoutError;
use crate::store::StoreError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persisting state failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Checkout flow error (empty cart guard or persistence).
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

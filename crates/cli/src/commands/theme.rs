//! Show or toggle the persisted theme preference.

use std::sync::Arc;

use tracing::info;

use clementine_storefront::notify::TracingNotifier;

/// Print the current theme.
///
/// # Errors
///
/// Returns an error if the engine fails to start.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::engine(Arc::new(TracingNotifier))?;
    info!("theme: {}", state.theme().theme());
    Ok(())
}

/// Flip the theme and print the result.
///
/// # Errors
///
/// Returns an error if the engine fails to start or persistence fails.
pub fn toggle() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::engine(Arc::new(TracingNotifier))?;
    let next = state.theme().toggle()?;
    info!("theme is now {next}");
    Ok(())
}

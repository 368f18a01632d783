//! Show the persisted user profile.

use std::sync::Arc;

use tracing::info;

use clementine_storefront::notify::TracingNotifier;

/// Print the current profile record.
///
/// # Errors
///
/// Returns an error if the engine fails to start.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::engine(Arc::new(TracingNotifier))?;
    let profile = state.profile().profile();

    info!("{} <{}>", profile.name, profile.email);
    info!("  phone: {}", profile.phone);
    info!("  {}", profile.address.street);
    info!(
        "  {}, {} {}",
        profile.address.city, profile.address.state, profile.address.zip
    );
    info!("  {}", profile.address.country);

    Ok(())
}

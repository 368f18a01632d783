//! Inspect the generated product catalog.
//!
//! The catalog is regenerated on every run; ids are stable within a run
//! only. That matches the engine's demo-data contract.

use std::sync::Arc;

use tracing::info;

use clementine_core::ProductId;
use clementine_storefront::models::{Category, Product};
use clementine_storefront::notify::TracingNotifier;

/// List products, with optional category / sale / search filters.
///
/// # Errors
///
/// Returns an error if the category filter does not parse or the engine
/// fails to start.
pub fn list(
    category: Option<&str>,
    sale_only: bool,
    search: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = category
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    let state = super::engine(Arc::new(TracingNotifier))?;
    let catalog = state.catalog();

    let matches: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| !sale_only || p.is_sale)
        .filter(|p| {
            search.is_none_or(|q| {
                let needle = q.to_lowercase();
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
        })
        .collect();

    for product in &matches {
        let price = product.effective_price().display();
        let sale_marker = if product.is_sale { " (sale)" } else { "" };
        info!(
            "{:<10} {:<28} {:>9}{}  stock {:>2}  [{}]",
            product.id.as_str(),
            product.name,
            price,
            sale_marker,
            product.stock,
            product.category
        );
    }
    info!("{} products", matches.len());

    Ok(())
}

/// Show one product in full.
///
/// # Errors
///
/// Returns an error if the id is unknown or the engine fails to start.
pub fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::engine(Arc::new(TracingNotifier))?;
    let id = ProductId::new(id);
    let Some(product) = state.catalog().get(&id) else {
        return Err(format!("no product with id {id}").into());
    };

    info!("{} - {}", product.id, product.name);
    info!("  category: {}", product.category);
    info!("  price: {}", product.price.display());
    if let Some(sale_price) = product.sale_price {
        info!("  sale price: {}", sale_price.display());
    }
    info!("  stock: {}", product.stock);
    info!("  rating: {} ({} reviews)", product.rating, product.reviews);
    info!("  shipping: {}", product.shipping_estimate);
    for (key, value) in &product.details {
        info!("  {key}: {value}");
    }

    Ok(())
}

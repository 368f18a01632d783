//! Cart line items and derived aggregates.
//!
//! The aggregates (`item_count`, `subtotal`) are pure functions of the line
//! list and are recomputed on every read. Nothing stores a running total;
//! that keeps the totals impossible to drift from the lines.

use serde::{Deserialize, Serialize};

use clementine_core::Price;

use super::product::Product;

/// One product entry in the cart with its quantity.
///
/// A line is a snapshot of the product's fields plus a quantity. Identity is
/// the product id; the cart holds at most one line per product. Quantity is
/// always between 1 and the product's stock after any successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a first add, quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The per-unit price: sale price while on sale, base price otherwise.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.product.effective_price()
    }

    /// The line total: effective price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price() * self.quantity
    }
}

/// Total number of units across all lines.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Sum of effective price times quantity across all lines.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::product::tests::test_product;
    use super::*;

    #[test]
    fn test_new_line_has_quantity_one() {
        let line = CartLine::new(test_product("prod-1", 1000, 5));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_total_uses_effective_price() {
        let mut product = test_product("prod-1", 10000, 5);
        product.is_sale = true;
        product.sale_price = Some(Price::from_cents(8000));

        let mut line = CartLine::new(product);
        line.quantity = 3;
        assert_eq!(line.line_total(), Price::from_cents(24000));
    }

    #[test]
    fn test_aggregates_over_empty_cart() {
        assert_eq!(item_count(&[]), 0);
        assert_eq!(subtotal(&[]), Price::zero());
    }

    #[test]
    fn test_aggregates_sum_all_lines() {
        let mut a = CartLine::new(test_product("prod-1", 1000, 9));
        a.quantity = 2;
        let b = CartLine::new(test_product("prod-2", 2500, 9));
        let lines = vec![a, b];

        assert_eq!(item_count(&lines), 3);
        assert_eq!(subtotal(&lines), Price::from_cents(4500));
    }

    #[test]
    fn test_line_serializes_flattened() {
        let line = CartLine::new(test_product("prod-1", 1000, 5));
        let json = serde_json::to_value(&line).unwrap();
        // Product fields sit next to quantity, not nested under "product"
        assert!(json.get("product").is_none());
        assert_eq!(json.get("id").unwrap(), "prod-1");
        assert_eq!(json.get("quantity").unwrap(), 1);
    }
}

//! Product domain types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::{Price, ProductId};

/// Product category.
///
/// The set is fixed; every product belongs to exactly one category.
/// Serialized with the storefront display labels so persisted documents
/// match what a renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home Goods")]
    HomeGoods,
    Beauty,
    Fitness,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    Books,
    Toys,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Fashion,
        Self::HomeGoods,
        Self::Beauty,
        Self::Fitness,
        Self::FoodAndBeverage,
        Self::Books,
        Self::Toys,
    ];

    /// The display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::HomeGoods => "Home Goods",
            Self::Beauty => "Beauty",
            Self::Fitness => "Fitness",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Books => "Books",
            Self::Toys => "Toys",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        match normalized.as_str() {
            "electronics" => Ok(Self::Electronics),
            "fashion" => Ok(Self::Fashion),
            "home goods" | "home-goods" => Ok(Self::HomeGoods),
            "beauty" => Ok(Self::Beauty),
            "fitness" => Ok(Self::Fitness),
            "food & beverage" | "food-and-beverage" => Ok(Self::FoodAndBeverage),
            "books" => Ok(Self::Books),
            "toys" => Ok(Self::Toys),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// A category-specific detail value: free-form string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for DetailValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DetailValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DetailValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// A catalog product. Immutable after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique id (`prod-N`).
    pub id: ProductId,
    pub name: String,
    /// Base price. The sale price, when present, is at most this.
    pub price: Price,
    pub description: String,
    pub category: Category,
    /// Image URL for renderers.
    pub image: String,
    pub stock: u32,
    /// Free-text shipping estimate (e.g., "2-3 Business Days").
    pub shipping_estimate: String,
    pub is_sale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,
    /// Category-specific attributes (e.g., page count for books).
    pub details: BTreeMap<String, DetailValue>,
    pub rating: Decimal,
    pub reviews: u32,
}

impl Product {
    /// The price a buyer actually pays: sale price while on sale, base
    /// price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        if self.is_sale {
            self.sale_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }
}

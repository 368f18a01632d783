//! Shipping tiers and the order receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clementine_core::Price;

use super::cart::CartLine;

/// A shipping option with a fixed cost and lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingTier {
    /// Cheapest and slowest.
    Free,
    #[default]
    Standard,
    /// Fastest and most expensive.
    Express,
}

impl ShippingTier {
    /// All tiers, cheapest first.
    pub const ALL: [Self; 3] = [Self::Free, Self::Standard, Self::Express];

    /// The display name of this tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Saver Shipping",
            Self::Standard => "Standard Shipping",
            Self::Express => "Express Shipping",
        }
    }

    /// The fixed shipping cost of this tier.
    #[must_use]
    pub fn cost(self) -> Price {
        match self {
            Self::Free => Price::zero(),
            Self::Standard => Price::from_cents(1200),
            Self::Express => Price::from_cents(2500),
        }
    }

    /// The delivery lead time of this tier.
    #[must_use]
    pub const fn lead_time(self) -> &'static str {
        match self {
            Self::Free => "5-7 business days",
            Self::Standard => "3-5 business days",
            Self::Express => "1-2 business days",
        }
    }
}

impl std::fmt::Display for ShippingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ShippingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" | "saver" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            _ => Err(format!("unknown shipping tier: {s}")),
        }
    }
}

/// The receipt returned by a successful order placement.
///
/// Not persisted anywhere; the checkout session that produced it is
/// discarded once the flow completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `ORD-` plus a random alphanumeric suffix. Uniqueness is
    /// best-effort, which is enough for a simulated placement.
    pub number: String,
    pub lines: Vec<CartLine>,
    pub subtotal: Price,
    pub tax: Price,
    pub shipping_cost: Price,
    pub total: Price,
    pub tier: ShippingTier,
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_costs() {
        assert_eq!(ShippingTier::Free.cost(), Price::zero());
        assert_eq!(ShippingTier::Standard.cost(), Price::from_cents(1200));
        assert_eq!(ShippingTier::Express.cost(), Price::from_cents(2500));
    }

    #[test]
    fn test_cheapest_tier_is_slowest() {
        assert_eq!(ShippingTier::Free.lead_time(), "5-7 business days");
        assert_eq!(ShippingTier::Express.lead_time(), "1-2 business days");
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("free".parse::<ShippingTier>().unwrap(), ShippingTier::Free);
        assert_eq!(
            "Express".parse::<ShippingTier>().unwrap(),
            ShippingTier::Express
        );
        assert!("overnight".parse::<ShippingTier>().is_err());
    }

    #[test]
    fn test_tier_serde_lowercase() {
        let json = serde_json::to_string(&ShippingTier::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
    }

    #[test]
    fn test_default_tier_is_standard() {
        assert_eq!(ShippingTier::default(), ShippingTier::Standard);
    }
}

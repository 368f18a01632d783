//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in US dollars.
///
/// Arithmetic is exact decimal arithmetic; rounding to two places happens
/// only in [`Price::display`]. Stored values keep full precision so repeated
/// additions never compound rounding error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal amount, unrounded.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format for display, rounded to two decimal places (e.g., "$19.99").
    ///
    /// Rounding happens here and only here; stored amounts stay unrounded.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${rounded:.2}")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1999);
        assert_eq!(price.amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(Price::from_cents(1999).display(), "$19.99");
        assert_eq!(Price::new(Decimal::new(12, 0)).display(), "$12.00");
        assert_eq!(Price::new(Decimal::new(12345, 3)).display(), "$12.35");
    }

    #[test]
    fn test_display_does_not_mutate_amount() {
        let price = Price::new(Decimal::new(12345, 3));
        let _ = price.display();
        assert_eq!(price.amount(), Decimal::new(12345, 3));
    }

    #[test]
    fn test_add_and_sum() {
        let total: Price = [Price::from_cents(100), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(350));
    }

    #[test]
    fn test_mul_quantity() {
        let price = Price::from_cents(1050);
        assert_eq!(price * 3, Price::from_cents(3150));
    }

    #[test]
    fn test_mul_rate() {
        // 8% of $200.00 is exactly $16.00
        let subtotal = Price::from_cents(20000);
        let tax = subtotal * Decimal::new(8, 2);
        assert_eq!(tax, Price::from_cents(1600));
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_cents(4999);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(100) < Price::from_cents(200));
    }
}

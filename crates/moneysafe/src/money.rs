//! Money type stored as a cent count.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The cent count is a `rust_decimal::Decimal`. It is always a whole number
//! unless the value came from `Money::of`, which keeps sub-cent fractions until
//! `Money::round` is called.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::amount::ToAmount;
use crate::conversion::{cents_to_dollars, round_to_cents};
use crate::error::{MoneyError, MoneyResult};
use crate::factory::{DEFAULT_FACTORY, MoneyFactory};

/// An immutable monetary amount.
///
/// Equality, ordering and hashing look at the cent count only; the symbol is
/// cosmetic. Every operation returns a new value.
#[derive(Debug, Clone)]
pub struct Money {
    /// Cent count, possibly fractional (see `Money::of`).
    raw: Decimal,
    /// Display symbol, shared with the constructor that built this value.
    symbol: Arc<str>,
}

impl Money {
    pub(crate) fn from_raw(raw: Decimal, symbol: Arc<str>) -> Self {
        Self { raw, symbol }
    }

    fn with_raw(&self, raw: Decimal) -> Self {
        Self {
            raw,
            symbol: Arc::clone(&self.symbol),
        }
    }

    /// Lifts an amount in dollars: `cents = round(amount * 100)`.
    ///
    /// ```
    /// use moneysafe::Money;
    ///
    /// assert_eq!(Money::from_dollars(0.56).unwrap().cents(), 56);
    /// ```
    pub fn from_dollars<A: ToAmount>(amount: A) -> MoneyResult<Self> {
        DEFAULT_FACTORY.dollars(amount)
    }

    /// Lifts a cent count, rounding to the nearest whole cent.
    pub fn from_cents<A: ToAmount>(cents: A) -> MoneyResult<Self> {
        DEFAULT_FACTORY.cents(cents)
    }

    /// Lifts a cent count without rounding.
    ///
    /// Chains of sub-cent quantities keep their precision; round at the end.
    pub fn of<A: ToAmount>(cents: A) -> MoneyResult<Self> {
        DEFAULT_FACTORY.of(cents)
    }

    /// Parses `<symbol><number>` text, e.g. `$3.18`, `65` or `€115.26`.
    pub fn parse(text: &str) -> MoneyResult<Self> {
        DEFAULT_FACTORY.parse(text)
    }

    /// Returns `$0.00`.
    #[must_use]
    pub fn zero() -> Self {
        DEFAULT_FACTORY.zero()
    }

    /// Returns the constructor this value was built with.
    #[must_use]
    pub fn factory(&self) -> MoneyFactory {
        MoneyFactory::from_shared(Arc::clone(&self.symbol))
    }

    /// Returns the sum of both cent counts.
    ///
    /// Plain integers are read as cents. Adding zero is an identity.
    /// Saturates at the bounds of `Decimal` instead of overflowing.
    #[must_use]
    pub fn add(&self, other: impl Into<Money>) -> Self {
        self.with_raw(self.raw.saturating_add(other.into().raw))
    }

    /// Returns the difference of both cent counts, saturating like `add`.
    #[must_use]
    pub fn subtract(&self, other: impl Into<Money>) -> Self {
        self.with_raw(self.raw.saturating_sub(other.into().raw))
    }

    /// Returns this value snapped to the nearest whole cent.
    #[must_use]
    pub fn round(&self) -> Self {
        self.with_raw(round_to_cents(self.raw))
    }

    /// Returns the raw cent count used in arithmetic and comparisons.
    ///
    /// Never dollars. May carry a sub-cent fraction for values built with
    /// `Money::of`.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.raw
    }

    /// Returns the cent count rounded to a whole cent.
    ///
    /// Saturates at the `i64` bounds, which only arithmetic can reach.
    #[must_use]
    pub fn cents(&self) -> i64 {
        round_to_cents(self.raw).to_i64().unwrap_or(if self.raw.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Returns the amount in dollars, rounded to the cent.
    #[must_use]
    pub fn dollars(&self) -> Decimal {
        cents_to_dollars(self.raw)
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.raw.is_sign_negative() && !self.raw.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        DEFAULT_FACTORY.zero().with_raw(Decimal::from(cents))
    }
}

impl From<i32> for Money {
    fn from(cents: i32) -> Self {
        Self::from(i64::from(cents))
    }
}

impl From<&Money> for Money {
    fn from(money: &Money) -> Self {
        money.clone()
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.raw
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl PartialEq<Decimal> for Money {
    fn eq(&self, other: &Decimal) -> bool {
        self.raw == *other
    }
}

impl PartialOrd<Decimal> for Money {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        self.raw.partial_cmp(other)
    }
}

impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        self.raw == Decimal::from(*other)
    }
}

impl PartialOrd<i64> for Money {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.raw.partial_cmp(&Decimal::from(*other))
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Money::add(&self, rhs)
    }
}

impl std::ops::Add<&Money> for &Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Money {
        Money::add(self, rhs)
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl std::ops::Sub<&Money> for &Money {
    type Output = Money;

    fn sub(self, rhs: &Money) -> Money {
        self.subtract(rhs)
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            raw: -self.raw,
            symbol: self.symbol,
        }
    }
}

/// Sums in cent space. The first value's symbol wins; an empty sum is `$0.00`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|acc, money| acc + money)
            .unwrap_or_else(Self::zero)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.symbol, self.dollars())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Accepts the display string, or a bare number read as dollars.
struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a money string like \"$10.10\" or a number of dollars")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Money::from_dollars(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Money::from_dollars(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_dollars(v).map_err(E::custom)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;

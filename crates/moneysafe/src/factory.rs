//! Money constructors bound to a display symbol.
//!
//! A `MoneyFactory` is the configured counterpart of the `Money::*`
//! constructors: same rounding, same parsing, but every value it produces
//! renders with the factory's symbol. Values from different factories are the
//! same `Money` type and mix freely in arithmetic.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::amount::ToAmount;
use crate::config::{DEFAULT_SYMBOL, MoneyConfig};
use crate::conversion::round_to_cents;
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::parse::split_money;

/// Constructor used by `Money::from_dollars`, `Money::parse` and friends.
pub(crate) static DEFAULT_FACTORY: Lazy<MoneyFactory> =
    Lazy::new(|| MoneyFactory::new(DEFAULT_SYMBOL));

/// Largest cent count a constructor accepts, in either direction.
const MAX_CENTS: Decimal = Decimal::from_parts(u32::MAX, u32::MAX >> 1, 0, false, 0);

/// Builds a constructor from configuration.
///
/// See `MoneyFactory::new` for which symbols survive a parse round trip.
///
/// ```
/// use moneysafe::{MoneyConfig, configure_money};
///
/// let hash = configure_money(&MoneyConfig::with_symbol("#"));
/// assert_eq!(hash.dollars(10.1).unwrap().to_string(), "#10.10");
/// ```
#[must_use]
pub fn configure_money(config: &MoneyConfig) -> MoneyFactory {
    MoneyFactory::new(config.symbol.as_str())
}

/// A money constructor bound to a display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoneyFactory {
    symbol: Arc<str>,
}

impl Default for MoneyFactory {
    fn default() -> Self {
        DEFAULT_FACTORY.clone()
    }
}

impl MoneyFactory {
    /// Creates a constructor for the given symbol.
    ///
    /// Any symbol is accepted for display, but `parse` stops the symbol at the
    /// first ASCII digit, `-` or `.`. Text formatted with a symbol such as
    /// `Rs.` (`Rs.10.00`) therefore does not parse back; use `Rs` or `₨`.
    pub fn new(symbol: impl Into<Arc<str>>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub(crate) fn from_shared(symbol: Arc<str>) -> Self {
        Self { symbol }
    }

    /// Returns the symbol this constructor renders with.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Lifts an amount in dollars, rounding to the nearest cent.
    pub fn dollars<A: ToAmount>(&self, amount: A) -> MoneyResult<Money> {
        let dollars = amount.to_amount()?;
        let cents = dollars
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| MoneyError::invalid_amount(dollars, "amount is out of range"))?;
        self.lift(round_to_cents(cents))
    }

    /// Lifts a cent count, rounding fractional cents away.
    pub fn cents<A: ToAmount>(&self, cents: A) -> MoneyResult<Money> {
        self.lift(round_to_cents(cents.to_amount()?))
    }

    /// Lifts a cent count, keeping any sub-cent fraction until `Money::round`.
    pub fn of<A: ToAmount>(&self, cents: A) -> MoneyResult<Money> {
        self.lift(cents.to_amount()?)
    }

    /// Parses `<symbol><number>` text as dollars.
    ///
    /// The parsed symbol is kept; text without one takes this constructor's
    /// symbol.
    pub fn parse(&self, text: &str) -> MoneyResult<Money> {
        let parsed = split_money(text)?;
        let factory = if parsed.symbol.is_empty() || parsed.symbol == &*self.symbol {
            self.clone()
        } else {
            Self::new(parsed.symbol)
        };
        factory.dollars(parsed.dollars).map_err(|e| match e {
            MoneyError::InvalidAmount { reason, .. } => MoneyError::parse(text, reason),
            parse @ MoneyError::Parse { .. } => parse,
        })
    }

    /// Returns zero with this constructor's symbol.
    #[must_use]
    pub fn zero(&self) -> Money {
        Money::from_raw(Decimal::ZERO, Arc::clone(&self.symbol))
    }

    fn lift(&self, cents: Decimal) -> MoneyResult<Money> {
        if cents.abs() > MAX_CENTS {
            return Err(MoneyError::invalid_amount(cents, "cent count is out of range"));
        }
        Ok(Money::from_raw(cents, Arc::clone(&self.symbol)))
    }
}

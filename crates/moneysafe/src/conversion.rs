//! Dollar/cent conversion helpers.
//!
//! Rounding strategy: half away from zero (`0.5 -> 1`, `-0.5 -> -1`), the
//! conventional rounding for monetary amounts. Never goes through `f64`.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Rounding applied whenever an amount is snapped to cents or displayed.
pub(crate) const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Converts an amount in dollars to whole cents.
///
/// Saturates at the bounds of `Decimal` instead of overflowing.
///
/// ```
/// use rust_decimal_macros::dec;
/// use moneysafe::dollars_to_cents;
///
/// assert_eq!(dollars_to_cents(dec!(10.106)), dec!(1011));
/// ```
#[must_use]
pub fn dollars_to_cents(amount: Decimal) -> Decimal {
    round_to_cents(amount.saturating_mul(Decimal::ONE_HUNDRED))
}

/// Converts a cent count to dollars, rounded to the nearest hundredth.
///
/// ```
/// use rust_decimal_macros::dec;
/// use moneysafe::cents_to_dollars;
///
/// assert_eq!(cents_to_dollars(dec!(1010)), dec!(10.1));
/// ```
#[must_use]
pub fn cents_to_dollars(cents: Decimal) -> Decimal {
    let dollars = (cents / Decimal::ONE_HUNDRED).round_dp_with_strategy(2, ROUNDING);
    // -0.003 rounds to a signed zero
    if dollars.is_zero() {
        Decimal::ZERO
    } else {
        dollars
    }
}

/// Rounds a (possibly fractional) cent count to a whole cent.
pub(crate) fn round_to_cents(cents: Decimal) -> Decimal {
    let rounded = cents.round_dp_with_strategy(0, ROUNDING);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

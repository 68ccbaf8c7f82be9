//! Property-based tests for money operations.
//!
//! - Lifting dollars rounds to the nearest cent
//! - Addition is commutative, associative and has zero as identity
//! - Formatting and parsing round-trip

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::conversion::dollars_to_cents;
use crate::factory::MoneyFactory;
use crate::money::Money;

/// Strategy to generate cent counts (-1,000,000.00 to 1,000,000.00 dollars).
fn cent_count() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy to generate dollar amounts with up to 4 decimal places.
fn dollar_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate display symbols without digits, `-` or `.`.
fn symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("$".to_string()),
        Just("€".to_string()),
        Just("💰".to_string()),
        "[A-Z]{1,3} ?",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* dollar amount, the stored cents SHALL equal round(amount * 100).
    #[test]
    fn prop_dollars_round_to_cents(amount in dollar_amount()) {
        let money = Money::from_dollars(amount).unwrap();
        prop_assert_eq!(money.value(), dollars_to_cents(amount));
        prop_assert_eq!(money.value().fract(), Decimal::ZERO);
    }

    /// *For any* integer n, lifting n cents SHALL keep exactly n cents.
    #[test]
    fn prop_cents_are_exact(n in cent_count()) {
        prop_assert_eq!(Money::from_cents(n).unwrap().cents(), n);
    }

    /// Addition SHALL be commutative in cent space.
    #[test]
    fn prop_add_commutative(a in cent_count(), b in cent_count()) {
        let a = Money::from_cents(a).unwrap();
        let b = Money::from_cents(b).unwrap();
        prop_assert_eq!(a.add(&b).cents(), b.add(&a).cents());
    }

    /// Addition SHALL be associative in cent space.
    #[test]
    fn prop_add_associative(a in cent_count(), b in cent_count(), c in cent_count()) {
        let a = Money::from_cents(a).unwrap();
        let b = Money::from_cents(b).unwrap();
        let c = Money::from_cents(c).unwrap();
        prop_assert_eq!(a.add(&b).add(&c).cents(), a.add(b.add(&c)).cents());
    }

    /// Adding zero SHALL be an identity; subtracting a value from itself SHALL give zero.
    #[test]
    fn prop_add_identity(a in cent_count()) {
        let a = Money::from_cents(a).unwrap();
        prop_assert_eq!(a.add(Money::from_cents(0).unwrap()).cents(), a.cents());
        prop_assert!(a.subtract(&a).is_zero());
    }

    /// *For any* value, parsing its text SHALL reproduce the same text.
    #[test]
    fn prop_parse_round_trip(n in cent_count(), symbol in symbol()) {
        let money = MoneyFactory::new(symbol.as_str()).cents(n).unwrap();
        let text = money.to_string();
        let parsed = Money::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed.cents(), n);
    }
}

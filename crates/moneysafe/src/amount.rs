//! Numeric coercion of constructor inputs.
//!
//! Constructors accept anything that can be read as a finite decimal: integers,
//! floats, `Decimal`, or numeric strings. Floats are read with the shortest
//! decimal that round-trips (`0.1` becomes exactly `0.1`), so binary float
//! error never reaches the stored cent count.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use crate::error::{MoneyError, MoneyResult};

/// A value that can be read as a monetary amount.
pub trait ToAmount {
    /// Reads the value as a finite decimal.
    fn to_amount(&self) -> MoneyResult<Decimal>;
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        Ok(*self)
    }
}

macro_rules! integer_amount {
    ($($ty:ty),*) => {
        $(
            impl ToAmount for $ty {
                fn to_amount(&self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

integer_amount!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl ToAmount for f64 {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            debug!(input = %self, "Rejected non-finite amount");
            return Err(MoneyError::invalid_amount(self, "amount must be finite"));
        }
        Decimal::from_f64(*self).ok_or_else(|| {
            debug!(input = %self, "Rejected out-of-range amount");
            MoneyError::invalid_amount(self, "amount is out of range")
        })
    }
}

impl ToAmount for f32 {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            debug!(input = %self, "Rejected non-finite amount");
            return Err(MoneyError::invalid_amount(self, "amount must be finite"));
        }
        Decimal::from_f32(*self)
            .ok_or_else(|| MoneyError::invalid_amount(self, "amount is out of range"))
    }
}

impl ToAmount for str {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        let trimmed = self.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| {
                debug!(input = self, error = %e, "Rejected amount text");
                // Finite but beyond Decimal's range or precision, e.g. "1e-400"
                if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
                    MoneyError::invalid_amount(self, "amount is out of range")
                } else {
                    MoneyError::invalid_amount(self, "not a number")
                }
            })
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        self.as_str().to_amount()
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> MoneyResult<Decimal> {
        (**self).to_amount()
    }
}

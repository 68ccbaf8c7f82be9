//! Safe money values for Moneysafe.
//!
//! Amounts are stored as cent counts in a `rust_decimal::Decimal`, so adding
//! `$0.10` and `$0.20` gives exactly `$0.30`. Dollars go in and come out; cents
//! are what gets computed.
//!
//! # Modules
//!
//! - `money` - The `Money` value type
//! - `factory` - Constructors bound to a display symbol
//! - `conversion` - Dollar/cent conversion helpers
//! - `config` - Configuration loading
//! - `error` - Error types
//!
//! ```
//! use moneysafe::Money;
//!
//! let total = Money::from_dollars(0.1).unwrap().add(Money::from_dollars(0.2).unwrap());
//! assert_eq!(total.cents(), 30);
//! assert_eq!(total.to_string(), "$0.30");
//! ```

pub mod amount;
pub mod config;
pub mod conversion;
pub mod error;
pub mod factory;
pub mod money;
mod parse;

#[cfg(test)]
mod props;

pub use amount::ToAmount;
pub use crate::config::{DEFAULT_SYMBOL, MoneyConfig};
pub use conversion::{cents_to_dollars, dollars_to_cents};
pub use error::{MoneyError, MoneyResult};
pub use factory::{MoneyFactory, configure_money};
pub use money::Money;

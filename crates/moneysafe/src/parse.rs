//! Splitting money text into symbol and amount.
//!
//! Grammar: `<symbol><number>` where
//! - `symbol` is the longest leading run of characters other than ASCII
//!   digits, `-` and `.` (may be empty),
//! - `number` is `-?[0-9]+(\.[0-9]+)?` and must end the text.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{MoneyError, MoneyResult};

/// Text split into its display symbol and its dollar amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedMoney<'a> {
    pub symbol: &'a str,
    pub dollars: Decimal,
}

/// Splits `text` into symbol and dollar amount.
pub(crate) fn split_money(text: &str) -> MoneyResult<ParsedMoney<'_>> {
    let reject = |reason: String| {
        debug!(input = text, reason = %reason, "Rejected money text");
        MoneyError::parse(text, reason)
    };

    let Some(start) = text.find(|c: char| c.is_ascii_digit() || c == '-' || c == '.') else {
        return Err(reject("missing numeric amount".to_string()));
    };
    let (symbol, number) = text.split_at(start);

    let end = scan_number(number).map_err(&reject)?;
    if let Some(extra) = number[end..].chars().next() {
        return Err(reject(format!("unexpected '{extra}' after amount")));
    }

    let dollars = Decimal::from_str(number).map_err(|e| reject(e.to_string()))?;
    trace!(input = text, symbol, %dollars, "Parsed money text");
    Ok(ParsedMoney { symbol, dollars })
}

/// Returns the byte length of the leading `-?digits(.digits)?` in `number`.
fn scan_number(number: &str) -> Result<usize, String> {
    let bytes = number.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let int_digits = count_digits(&bytes[pos..]);
    if int_digits == 0 {
        return Err("expected digits".to_string());
    }
    pos += int_digits;

    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[pos + 1..]);
        if frac_digits == 0 {
            return Err("expected digits after decimal point".to_string());
        }
        pos += 1 + frac_digits;
    }

    Ok(pos)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

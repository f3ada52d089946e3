use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: u32 = 2;

/// Displays an amount as US dollars, e.g. `$1,234.56` or `-$5.00`.
///
/// Amounts are kept as `f64` everywhere else; the conversion to `Decimal` only
/// exists so that rounding to cents is exact and rounds half away from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usd(pub f64);

impl Display for Usd {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let Some(value) = Decimal::from_f64(self.0) else {
            //NOTE: Only reachable for values outside of Decimal's range
            return write!(formatter, "${:.2}", self.0);
        };

        let rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let text = format!("{:.2}", rounded.abs());
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        write!(formatter, "{}${}.{}", sign, group_thousands(integer), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

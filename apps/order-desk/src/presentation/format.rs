//! Value formatting shared by the views.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::shared::Timestamp;

/// Section divider.
pub const DIVIDER: &str = "====================================================";

/// Quantities below one keep three significant digits; others get two decimals.
///
/// `0.5` → `0.500`, `0.012345` → `0.0123`, `2` → `2.00`.
#[must_use]
pub fn format_quantity(quantity: Decimal) -> String {
    if quantity.is_zero() {
        return "0.00".to_string();
    }

    if quantity.abs() >= Decimal::ONE {
        return fixed(quantity, 2);
    }

    let tenth = Decimal::new(1, 1);
    let mut scaled = quantity.abs();
    let mut leading_zeros = 0;
    while scaled < tenth {
        scaled *= Decimal::TEN;
        leading_zeros += 1;
    }

    let rounded = fixed(quantity, leading_zeros + 3);
    // 0.9996 rounds up to a whole unit and falls back to two decimals.
    if rounded.trim_start_matches('-').starts_with('1') {
        fixed(quantity, 2)
    } else {
        rounded
    }
}

/// `$` with thousands separators and two decimals, or `-` when absent.
#[must_use]
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) if !p.is_zero() => {
            let text = fixed(p, 2);
            let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
            let (sign, digits) = whole
                .strip_prefix('-')
                .map_or(("", whole), |rest| ("-", rest));
            format!("{sign}${}.{cents}", group_thousands(digits))
        }
        _ => "-".to_string(),
    }
}

/// `HH:MM:SS`, 24-hour.
#[must_use]
pub fn format_time(timestamp: &Timestamp) -> String {
    timestamp.time_of_day()
}

fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

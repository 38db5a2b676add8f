//! Money display formatting for labels and confirmations.
//!
//! INR amounts use Indian digit grouping (`₹1,11,000`); other currencies use
//! groups of three with the currency code as prefix. Whole units only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount in whole currency units, halves rounding away from zero
///
/// ```
/// use rust_decimal_macros::dec;
/// use travelgenie_web::pricing::format_money;
///
/// assert_eq!(format_money(dec!(111000), "INR"), "₹1,11,000");
/// assert_eq!(format_money(dec!(1234567), "EUR"), "EUR 1,234,567");
/// ```
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let grouped = if currency.eq_ignore_ascii_case("INR") {
        group_indian(&digits)
    } else {
        group_thousands(&digits)
    };

    let sign = if negative { "-" } else { "" };
    if currency.eq_ignore_ascii_case("INR") {
        format!("{}₹{}", sign, grouped)
    } else {
        format!("{}{} {}", sign, currency, grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

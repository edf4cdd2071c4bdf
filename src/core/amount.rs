//! Lenient amount parsing and display formatting.
//!
//! Calculator inputs come straight from form fields, so parsing never fails:
//! anything that is not a number in `0..=MAX_AMOUNT` becomes zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Largest amount any calculator accepts. An amount and a percentage rate
/// both within it multiply without overflowing `Decimal` once the rate is
/// divided by 100 first.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Parse a raw form value into an amount.
///
/// Accepts `.` or `,` as the decimal separator and ignores spaces (including
/// non-breaking ones) used as thousands separators. When both separators are
/// present the last one is the decimal separator. Empty, malformed,
/// negative and oversized input all yield zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    let normalised = match cleaned.rfind(['.', ',']) {
        Some(pos) => {
            let (int_part, frac_part) = cleaned.split_at(pos);
            let int_part: String = int_part.chars().filter(|c| *c != '.' && *c != ',').collect();
            format!("{}.{}", int_part, &frac_part[1..])
        }
        None => cleaned,
    };

    match normalised.parse::<Decimal>() {
        Ok(amount) => coerce_amount(amount),
        Err(_) => {
            log::debug!("Coercing unparseable amount {:?} to zero", raw);
            Decimal::ZERO
        }
    }
}

/// Negative amounts and amounts above [`MAX_AMOUNT`] count as zero.
pub fn coerce_amount(amount: Decimal) -> Decimal {
    if amount < Decimal::ZERO || amount > MAX_AMOUNT {
        Decimal::ZERO
    } else {
        amount
    }
}

/// Round to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `1250.5` -> `"1250,50"`, the format the invoice PDF layer prints.
pub fn format_decimal_comma(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount)).replace('.', ",")
}

/// `1250.5` -> `"1 250,50"`
pub fn format_grouped(amount: Decimal) -> String {
    let plain = format_decimal_comma(amount);
    let (sign, plain) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = plain.split_once(',').unwrap_or((plain, "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit);
    }
    format!("{sign}{grouped},{frac_part}")
}

/// Euro amount for terminal output, e.g. `"1 250,50 €"`.
pub fn format_eur(amount: Decimal) -> String {
    format!("{} €", format_grouped(amount))
}

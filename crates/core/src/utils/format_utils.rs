//! Number parsing and display helpers shared by form handling and attribute rendering.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses the leading decimal number of `input`, ignoring trailing garbage.
///
/// Mirrors how the entry forms coerce free text: `"12.40"` and `"12.40 USD"`
/// both read as 12.40, while `""` or `"abc"` yield `None`. Exponents and digit
/// grouping are not recognized (`"1,000"` reads as 1).
pub fn parse_leading_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    let candidate = trimmed[..end].trim_start_matches('+');
    let candidate = if candidate.starts_with('.') {
        format!("0{}", candidate)
    } else if let Some(rest) = candidate.strip_prefix("-.") {
        format!("-0.{}", rest)
    } else {
        candidate.to_string()
    };
    candidate.parse::<Decimal>().ok()
}

/// Like [`parse_leading_decimal`] but reads unparsable input as zero.
pub fn parse_amount_or_zero(input: &str) -> Decimal {
    parse_leading_decimal(input).unwrap_or(Decimal::ZERO)
}

/// Formats `value` with comma digit grouping and at most `max_fraction_digits`
/// decimals, dropping trailing zeros (`1234567.5` → `"1,234,567.5"`).
///
/// Midpoints round away from zero.
pub fn format_grouped(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

//! Currency and percentage formatting.

/// Group the digits of an unsigned integer string with commas.
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

/// Format with thousands separators and a fixed number of decimals.
///
/// Negative values keep the sign in front of the digits: `-1,234.50`.
pub fn fmt_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(int_part)),
    }
}

/// Aggregate money, no decimals: `$1,234,568`.
pub fn fmt_money(value: f64) -> String {
    format!("${}", fmt_grouped(value, 0))
}

/// Per-share price, two decimals: `$1,234.57`.
pub fn fmt_price(value: f64) -> String {
    format!("${}", fmt_grouped(value, 2))
}

/// A fraction shown as a percentage with two decimals: `0.1234` is `12.34%`.
pub fn fmt_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

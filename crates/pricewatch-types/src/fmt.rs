//! Number formatting for messages and reports.

/// Formats a number with a fixed number of decimals and thousands separators.
///
/// # Example
///
/// ```
/// use pricewatch_types::fmt::with_separators;
///
/// assert_eq!(with_separators(106_000.0, 2), "106,000.00");
/// assert_eq!(with_separators(-1_234.5, 1), "-1,234.5");
/// ```
#[must_use]
pub fn with_separators(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a dollar amount with two decimals, e.g. `$95,000.00`.
#[must_use]
pub fn usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", with_separators(-value, 2))
    } else {
        format!("${}", with_separators(value, 2))
    }
}

/// Formats a signed percentage with two decimals, e.g. `+6.00%`.
#[must_use]
pub fn signed_pct(value: f64) -> String {
    format!("{value:+.2}%")
}

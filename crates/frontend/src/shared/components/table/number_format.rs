//! Number and money formatting for table cells

/// Formats a number with a space thousands separator and the given decimals:
/// `1234.567, 2` -> "1 234.57"
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Currency symbol for an ISO 4217 code, falling back to the upper-cased code
pub fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_lowercase().as_str() {
        "eur" => "€".to_string(),
        "usd" => "$".to_string(),
        "gbp" => "£".to_string(),
        other => other.to_ascii_uppercase(),
    }
}

/// Formats an amount given in minor units (cents), e.g. `123456, "EUR"` -> "€ 1 234.56"
pub fn format_amount_with_symbol(amount_minor: i64, currency: &str, digits: usize) -> String {
    let value = amount_minor as f64 / 100.0;
    format!(
        "{} {}",
        currency_symbol(currency),
        format_number_with_decimals(value, digits)
    )
}

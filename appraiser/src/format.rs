/// Renders an amount as whole US dollars with comma thousands separators, e.g. `USD 1,234,567`.
pub fn format_usd(value: f64) -> String {
    format!("USD {}", group_thousands(value))
}

/// Rounds to a whole number (ties to even) and inserts comma thousands separators.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits.bytes().any(|b| b != b'0') {
        out.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

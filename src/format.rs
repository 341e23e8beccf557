//! Display formatting for currency amounts and shares.

/// Formats `value` with two decimals and thousands separators, e.g. `$8,364.40`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Formats a share with two decimals, e.g. `50.21%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.2}%", value)
}

/// Formats a payment count, keeping one decimal when it is fractional, e.g.
/// `240 months` or `87.6 months`.
pub fn format_months(months: f64) -> String {
    if !months.is_finite() {
        return "-".to_string();
    }
    if (months - months.round()).abs() < 1e-9 {
        format!("{:.0} months", months)
    } else {
        format!("{:.1} months", months)
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

//! Unit-aware display formatting for summary cards and chart tooltips.
//!
//! Output follows the Traditional Chinese (zh-TW) conventions the dashboard is
//! written for: currency symbols as that locale prints them, comma thousands
//! separators and no fractional digits for money.
//!
//! None of these functions can fail. Non-finite input (NaN, ±∞) and unusable
//! currency codes produce [`INVALID_PLACEHOLDER`], because tooltips call in
//! here on every hover.

/// Rendered in place of any value that cannot be formatted.
pub const INVALID_PLACEHOLDER: &str = "--";

/// Symbol used by zh-TW for a currency code, if it has a dedicated one.
/// Codes without an entry are printed as the code followed by a non-breaking space.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "TWD" => Some("$"),
        "USD" => Some("US$"),
        "HKD" => Some("HK$"),
        "CNY" => Some("CN¥"),
        "JPY" => Some("¥"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "KRW" => Some("￦"),
        "AUD" => Some("AU$"),
        "CAD" => Some("CA$"),
        _ => None,
    }
}

/// Format money with zero fractional digits, e.g. `1234567, "USD"` → `"US$1,234,567"`.
pub fn format_currency(value: f64, currency_code: &str) -> String {
    if !value.is_finite() {
        return INVALID_PLACEHOLDER.to_string();
    }
    let code = currency_code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return INVALID_PLACEHOLDER.to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code}\u{a0}{digits}"),
    }
}

/// Two fractional digits and a trailing `%`, e.g. `12.345` → `"12.35%"`.
///
/// Rounds `value * 100` to the nearest integer, halves away from zero. The
/// product is a binary float, so inputs such as `1.005` (stored just below
/// the half) round down to `"1.00%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return INVALID_PLACEHOLDER.to_string();
    }
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // Magnitudes this large carry no fractional digits to round.
        return format!("{value:.2}%");
    }
    // `+ 0.0` folds -0.0 into 0.0 so tiny losses don't print as "-0.00%".
    let rounded = scaled.round() / 100.0 + 0.0;
    format!("{rounded:.2}%")
}

/// Round to the nearest whole unit (halves up) and append the unit label,
/// e.g. `1000.6, "股"` → `"1001 股"`.
pub fn format_count(value: f64, unit_label: &str) -> String {
    if !value.is_finite() {
        return INVALID_PLACEHOLDER.to_string();
    }
    let rounded = (value + 0.5).floor() + 0.0;
    if unit_label.is_empty() {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.0} {unit_label}")
    }
}

/// Correlation coefficient as received (shortest round-trip representation).
pub fn format_correlation(value: f64) -> String {
    if !value.is_finite() {
        return INVALID_PLACEHOLDER.to_string();
    }
    format!("{value}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

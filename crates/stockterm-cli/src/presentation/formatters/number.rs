use stockterm_runtime::DisplayConfig;
use stockterm_types::finite;

/// Magnitude-suffixed number: `1.2T`, `3.4B`, `5.6M`, else `decimals` places.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let Some(v) = finite(value) else {
        return "-".to_string();
    };
    let abs = v.abs();
    if abs >= 1e12 {
        format!("{:.1}T", v / 1e12)
    } else if abs >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else {
        format!("{:.*}", decimals, v)
    }
}

/// Ratio as a table percentage: `0.153` -> `15.3`.
pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{:.1}", v * 100.0),
        None => "-".to_string(),
    }
}

/// Ratio as a detail percentage: `0.153` -> `15.30%`.
pub fn format_percent_detail(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "-".to_string(),
    }
}

/// Already-scaled percentage with an explicit sign: `1.234` -> `+1.2%`.
pub fn format_signed_percent(pct: Option<f64>) -> String {
    match finite(pct) {
        Some(v) => format!("{}{:.1}%", sign(v), v),
        None => "-".to_string(),
    }
}

/// Locale grouping with at most `max_fraction` digits; trailing zeros of the
/// fraction are dropped.
pub fn group_number(value: f64, max_fraction: usize, display: &DisplayConfig) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(fixed.len() + 4);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push_str(&display.thousands_separator);
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push_str(&display.decimal_separator);
        grouped.push_str(frac_part);
    }

    let is_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');
    if value < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_price(value: Option<f64>, display: &DisplayConfig) -> String {
    match finite(value) {
        Some(v) => group_number(v, 3, display),
        None => "-".to_string(),
    }
}

pub fn format_currency(value: Option<f64>, display: &DisplayConfig) -> String {
    match finite(value) {
        Some(v) => format!("{} {}", display.currency_prefix, group_number(v, 3, display)),
        None => "-".to_string(),
    }
}

/// Absolute change with its percentage: `+50 (+1.2%)`.
pub fn format_change(change: Option<f64>, pct: Option<f64>, display: &DisplayConfig) -> String {
    let Some(c) = finite(change) else {
        return "-".to_string();
    };
    let text = format!("{}{}", sign(c), group_number(c, 3, display));
    match finite(pct) {
        Some(_) => format!("{} ({})", text, format_signed_percent(pct)),
        None => text,
    }
}

fn sign(value: f64) -> &'static str {
    if value > 0.0 { "+" } else { "" }
}

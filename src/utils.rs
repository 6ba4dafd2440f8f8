use crate::types::QueryMode;

/// Parses the lookup mode as sent by the form or given on the command line.
pub fn parse_query_mode(s: &str) -> Result<QueryMode, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "url" => Ok(QueryMode::Url),
        "isrc" => Ok(QueryMode::Isrc),
        _ => Err(r#"Mode must be either "url" or "isrc""#.to_string()),
    }
}

/// Formats a count with `,` thousands separators, e.g. `1234567` → `1,234,567`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders a [0, 1] value as a bar of `width` cells.
///
/// Values outside the range are drawn as empty or full; the number itself is
/// never altered.
pub fn feature_bar(value: f64, width: usize) -> String {
    let filled = if value.is_nan() {
        0
    } else {
        (value.clamp(0.0, 1.0) * width as f64).round() as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

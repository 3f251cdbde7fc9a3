// src/core/sanitize.rs

/// Collapse runs of whitespace (including non-breaking spaces) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop thousands separators and surrounding whitespace: `" 15,000 "` → `"15000"`.
pub fn strip_thousands(s: &str) -> String {
    s.trim().chars().filter(|&c| c != ',').collect()
}

/// Lenient float parse for market cells: tolerates separators and a leading `+`.
pub fn parse_f64(s: &str) -> Option<f64> {
    let t = strip_thousands(s);
    let t = t.strip_prefix('+').unwrap_or(&t);
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient unsigned parse for volume-like cells.
pub fn parse_u64(s: &str) -> Option<u64> {
    let t = strip_thousands(s);
    if t.is_empty() { return None; }
    t.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_nbsp() {
        assert_eq!(normalize_ws("  ABC \n\t Corp\u{a0} "), "ABC Corp");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn parses_with_separators() {
        assert_eq!(parse_f64("1,234.50"), Some(1234.5));
        assert_eq!(parse_f64("+2.30"), Some(2.3));
        assert_eq!(parse_f64("-0.75"), Some(-0.75));
        assert_eq!(parse_u64("15,000"), Some(15_000));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_f64("n/a"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_u64("-5"), None);
        assert_eq!(parse_u64("1.5"), None);
    }
}

//! Pure display formatting for table cells and the preview overlay.
//!
//! `cpu`/`memory` are stored as fractions in [0, 1]; these helpers are the
//! only place the ×100 scaling happens.

/// Fraction -> row cell text, one decimal and no suffix: `0.12` -> `"12.0"`.
pub fn format_load_cell(fraction: f64) -> String {
    format!("{:.1}", fraction * 100.0)
}

/// Fraction -> preview text, two decimals with percent: `0.12` -> `"12.00%"`.
pub fn format_load_detail(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Truncates to `max` characters, appending `…` iff the input is longer.
/// Operates on characters, never raw bytes.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push('…');
    out
}

/// Elapsed-time passthrough; empty input renders as "00:00:00".
pub fn format_elapsed(time: &str) -> String {
    if time.is_empty() {
        "00:00:00".to_string()
    } else {
        time.to_string()
    }
}

/// Collapses newlines, tabs and space runs so untrusted strings occupy a
/// single terminal row without breaking the table layout.
pub fn normalize_for_display(s: &str) -> String {
    let s = s.replace(['\n', '\t'], " ").replace('\r', "");
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                result.push(ch);
            }
            prev_space = true;
        } else {
            result.push(ch);
            prev_space = false;
        }
    }
    result
}

/// A textual load bar for the preview overlay, filled proportionally to the
/// fraction (clamped to [0, 1]).
pub fn load_bar(fraction: f64, width: usize) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

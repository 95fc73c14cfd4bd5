//! Character-safe slicing helpers shared by the analysis stages.
//!
//! Regex matches report byte offsets; every window here is measured in
//! `char`s so Devanagari text never gets cut inside a code point.

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Slice of `text` spanning `radius` characters on either side of the byte
/// range `start..end`.
pub fn char_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let from = if radius == 0 { start } else { from };

    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_code_points() {
        assert_eq!(truncate_chars("समझौता", 3), "समझ");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_char_window_clamps_at_edges() {
        let text = "0123456789";
        assert_eq!(char_window(text, 4, 6, 2), "234567");
        assert_eq!(char_window(text, 0, 1, 5), "012345");
        assert_eq!(char_window(text, 8, 10, 5), "3456789");
    }

    #[test]
    fn test_char_window_on_devanagari() {
        let text = "कुल ₹500 राशि";
        let start = text.find('₹').unwrap();
        let end = start + "₹500".len();
        assert_eq!(char_window(text, start, end, 2), "ल ₹500 र");
    }
}

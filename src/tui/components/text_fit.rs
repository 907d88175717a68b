//! Width-aware text fitting for card lines.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Fits `text` into `max_width` terminal columns.
///
/// Text that already fits is returned unchanged. Longer text is cut at a
/// character boundary and suffixed with `...`; widths too narrow for the
/// suffix are filled with dots instead. Width is measured in columns, so
/// wide glyphs count double.
pub(crate) fn fit_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push_str(ELLIPSIS);
    fitted
}

/// Flattens multi-line text into a single line.
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

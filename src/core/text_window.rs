//! Fitting text into fixed-width terminal cells.
//!
//! Offsets are byte offsets and always land on `char` boundaries.

use unicode_width::UnicodeWidthChar;

/// How many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Longest suffix of `s` that fits into `max_width` cells; used for
/// single-line inputs whose cursor sits at the end.
pub fn visible_tail(s: &str, max_width: usize) -> &str {
    let mut used = 0usize;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;

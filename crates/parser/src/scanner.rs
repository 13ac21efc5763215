//! Delimiter balancing
//!
//! Grammar-agnostic scanning for the closing delimiter that balances an
//! already-consumed opening one. Delimiters inside string literals or comments
//! are counted like any other, so a stray `{` inside a quoted string can
//! unbalance the scan.

/// An opening/closing delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: u8,
    pub close: u8,
}

impl Delimiters {
    pub const BRACES: Delimiters = Delimiters {
        open: b'{',
        close: b'}',
    };

    pub const PARENS: Delimiters = Delimiters {
        open: b'(',
        close: b')',
    };
}

/// Scan forward from `start`, which sits just after an opening brace.
///
/// Returns the index one past the brace that brings the depth back to zero,
/// or `text.len()` when the text ends first.
pub fn scan_balanced(text: &str, start: usize) -> usize {
    scan_balanced_with(text, start, Delimiters::BRACES)
}

/// [`scan_balanced`] for an arbitrary delimiter pair
pub fn scan_balanced_with(text: &str, start: usize, delimiters: Delimiters) -> usize {
    find_closing(text, start, delimiters)
        .map(|close| close + 1)
        .unwrap_or(text.len())
}

/// Text between `start` and the balancing closing brace, excluding the brace.
///
/// An unbalanced region is truncated at the end of the text.
pub fn balanced_region(text: &str, start: usize) -> &str {
    if start >= text.len() {
        return "";
    }

    match find_closing(text, start, Delimiters::BRACES) {
        Some(close) => &text[start..close],
        None => &text[start..],
    }
}

/// Index of the closing delimiter at depth zero, if the text has one
fn find_closing(text: &str, start: usize, delimiters: Delimiters) -> Option<usize> {
    let mut depth = 1usize;

    for (offset, &byte) in text.as_bytes().iter().enumerate().skip(start) {
        if byte == delimiters.open {
            depth += 1;
        } else if byte == delimiters.close {
            depth -= 1;
            if depth == 0 {
                return Some(offset);
            }
        }
    }

    None
}

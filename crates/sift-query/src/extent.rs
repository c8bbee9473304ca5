//! Field value boundaries.
//!
//! After a `key:` separator the scanner needs to know which characters belong to the
//! value so it can parse them on their own and resume after them.

/// Location of a field value within the text following the colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Index of the first character of the value text.
    pub start: usize,
    /// Index one past the last character of the value text.
    pub end: usize,
    /// Number of characters the outer scan must skip.
    pub consumed: usize,
}

/// Finds the value that starts at the beginning of `rest`.
///
/// - `(…)` values span to the matching close parenthesis; the value text is the interior
///   and the close parenthesis is consumed.
/// - `"…"` values span to the closing quote; the value text keeps its quotes so the
///   nested parse yields an exact phrase.
/// - Bare values run up to whitespace, a quote, a parenthesis or the end of input, the
///   same characters that end a term outside a field. Trailing whitespace is consumed;
///   quotes and parentheses are left for the outer scan.
///
/// Returns `None` for an empty value or an unterminated group or phrase.
pub fn value_extent(rest: &[char]) -> Option<Extent> {
    match rest.first()? {
        '(' => grouped(rest),
        '"' => quoted(rest),
        _ => bare(rest),
    }
}

/// Balanced scan of a parenthesized value. Parentheses inside quotes are not counted.
fn grouped(rest: &[char]) -> Option<Extent> {
    let mut depth = 0usize;
    let mut quoted = false;
    for (i, &ch) in rest.iter().enumerate() {
        match ch {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => {
                depth -= 1;
                if depth == 0 {
                    return Some(Extent {
                        start: 1,
                        end: i,
                        consumed: i + 1,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

/// Scan of a quoted value up to and including the closing quote.
fn quoted(rest: &[char]) -> Option<Extent> {
    let close = rest.iter().skip(1).position(|&ch| ch == '"')? + 1;
    Some(Extent {
        start: 0,
        end: close + 1,
        consumed: close + 1,
    })
}

/// Scan of a bare value up to the next separator.
fn bare(rest: &[char]) -> Option<Extent> {
    let end = rest
        .iter()
        .position(|&ch| ch.is_whitespace() || matches!(ch, '"' | '(' | ')'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let consumed = match rest.get(end) {
        Some(ch) if ch.is_whitespace() => end + 1,
        _ => end,
    };
    Some(Extent {
        start: 0,
        end,
        consumed,
    })
}

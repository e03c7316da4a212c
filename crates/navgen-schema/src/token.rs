//! Shape of template placeholder tokens.
//!
//! A token is `[` followed by an uppercase ASCII letter, any run of
//! uppercase letters, digits or `_`, and a closing `]`. Templates use these
//! to mark substitution points, so user-supplied strings must never contain
//! one.

use std::ops::Range;

pub const TOKEN_OPEN: u8 = b'[';
pub const TOKEN_CLOSE: u8 = b']';

/// Byte range (brackets included) of the first token-shaped span in `text`.
#[must_use]
pub fn find_token(text: &str) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(offset) = bytes[start..].iter().position(|b| *b == TOKEN_OPEN) {
        let open = start + offset;
        if let Some(end) = token_end(bytes, open) {
            return Some(open..end);
        }
        start = open + 1;
    }

    None
}

#[must_use]
pub fn contains_token(text: &str) -> bool {
    find_token(text).is_some()
}

/// The token name without its brackets.
#[must_use]
pub fn token_name(text: &str, span: Range<usize>) -> &str {
    &text[span.start + 1..span.end - 1]
}

/// Wrap a name in token brackets.
#[must_use]
pub fn token(name: &str) -> String {
    format!("[{name}]")
}

// Exclusive end of a token opening at `open`, if the bytes form one.
fn token_end(bytes: &[u8], open: usize) -> Option<usize> {
    let first = *bytes.get(open + 1)?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    let mut i = open + 2;
    while let Some(&b) = bytes.get(i) {
        match b {
            TOKEN_CLOSE => return Some(i + 1),
            b if b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_' => i += 1,
            _ => return None,
        }
    }

    None
}

///
/// TESTS
///

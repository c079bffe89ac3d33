//! Marker tokens written into the working text in place of replaced occurrences.
//!
//! A marker is the sentinel character followed by the decimal digits of an
//! entry id, e.g. `&0` or `&17`. Neither the sentinel nor a digit is ever
//! eligible for matching, so markers are never picked up as repeated content.

use std::fmt;

/// Character that opens every marker token.
pub const SENTINEL: char = '&';

/// Shortest repeated substring worth replacing.
pub const MIN_SUBSTRING_LENGTH: usize = 3;

/// Returns true if `c` may take part in a repeated-substring match.
#[inline]
pub fn is_eligible(c: char) -> bool {
    c != SENTINEL && !c.is_ascii_digit()
}

/// The marker token for a single entry id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Marker {
    chars: Vec<char>,
}

impl Marker {
    pub(crate) fn new(id: u32) -> Self {
        let mut chars = Vec::with_capacity(11);
        chars.push(SENTINEL);
        chars.extend(id.to_string().chars());
        Self { chars }
    }

    /// Width of the token in characters.
    pub(crate) fn width(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Checks whether the token appears exactly at `pos` in `text`.
    ///
    /// Out-of-range positions simply do not match.
    pub(crate) fn matches_at(&self, text: &[char], pos: usize) -> bool {
        pos.checked_add(self.width())
            .and_then(|end| text.get(pos..end))
            .is_some_and(|span| span == self.as_chars())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

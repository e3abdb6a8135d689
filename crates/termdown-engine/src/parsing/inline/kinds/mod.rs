//! # Inline Kinds
//!
//! One matcher per inline syntax. Each kind owns its delimiter constants and
//! exposes `find(s)`, which returns the leftmost match in `s` as byte ranges.
//!
//! ## Types
//!
//! - **`Comment`**: `<!--` ... `-->`
//! - **`Image`** / **`Link`**: `![alt](url)` / `[text](url)`
//! - **`Bold`** / **`Italic`**: `**`/`__` pairs, single `*`/`_` pairs
//! - **`CodeSpan`**: `` ` `` ... `` ` ``
//!
//! No match ever spans a line break.

pub mod code_span;
pub mod comment;
pub mod emphasis;
pub mod link;

use std::ops::Range;

pub use code_span::CodeSpan;
pub use comment::Comment;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};

/// The inline syntaxes, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Comment,
    Image,
    Bold,
    Italic,
    Code,
    Link,
}

impl Candidate {
    /// Evaluation order. On equal start positions the earlier entry wins.
    pub const ALL: [Candidate; 6] = [
        Candidate::Comment,
        Candidate::Image,
        Candidate::Bold,
        Candidate::Italic,
        Candidate::Code,
        Candidate::Link,
    ];

    pub fn find(self, s: &str) -> Option<SpanMatch> {
        match self {
            Candidate::Comment => Comment::find(s),
            Candidate::Image => Image::find(s),
            Candidate::Bold => Bold::find(s),
            Candidate::Italic => Italic::find(s),
            Candidate::Code => CodeSpan::find(s),
            Candidate::Link => Link::find(s),
        }
    }
}

/// Byte ranges of one match, relative to the searched string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch {
    /// Start of the opening delimiter.
    pub start: usize,
    /// End of the closing delimiter (exclusive).
    pub end: usize,
    /// Body: comment text, emphasis body, code text, link text or image alt.
    pub body: Range<usize>,
    /// Link or image target.
    pub url: Option<Range<usize>>,
}

/// Finds the candidate match that starts earliest in `s`.
pub fn earliest(s: &str) -> Option<(Candidate, SpanMatch)> {
    let mut best: Option<(Candidate, SpanMatch)> = None;
    for candidate in Candidate::ALL {
        let Some(m) = candidate.find(s) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, b)| m.start < b.start) {
            best = Some((candidate, m));
        }
    }
    best
}

/// Finds `pat` at or after `from`, provided no `\n` comes first.
pub(crate) fn find_on_line(s: &str, from: usize, pat: &str) -> Option<usize> {
    let hay = s.get(from..)?;
    let at = hay.find(pat)?;
    if hay[..at].contains('\n') {
        return None;
    }
    Some(from + at)
}

/// Byte offsets of every occurrence of `pat`, left to right, overlaps included.
pub(crate) fn occurrences<'a>(s: &'a str, pat: &'a str) -> impl Iterator<Item = usize> + 'a {
    s.match_indices(pat.get(..1).unwrap_or_default())
        .map(|(i, _)| i)
        .filter(move |&i| s[i..].starts_with(pat))
}

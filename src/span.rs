//! Defines a [`Span`] which represents a byte region in the raw template
//! text.

use std::ops::{Index, Range};

/// A byte range `m..n` into the template source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    pub m: usize,
    pub n: usize,
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Self {
            m: r.start,
            n: r.end,
        }
    }
}

impl Index<Span> for str {
    type Output = str;

    fn index(&self, span: Span) -> &Self::Output {
        let Span { m, n } = span;
        &self[m..n]
    }
}

//! Scans raw template text into literal segments and hole slots.
//!
//! The scanner is a single left-to-right pass over the source bytes. A `{`
//! that is not immediately followed by another `{` opens a hole region which
//! runs to the next `}`. Text between hole regions becomes a literal
//! segment. Both segments and specifiers are stored as spans into the
//! original source rather than owned strings.

use crate::span::Span;

/// The decomposed text structure of a template.
///
/// Invariant: `segments.len() == slots.len() + 1`. Rendering order is
/// `segments[0], slot[0], segments[1], slot[1], ..., segments[last]`.
pub(crate) struct Layout {
    pub source: String,
    pub segments: Vec<Span>,
    pub slots: Vec<Slot>,
}

/// A single hole region in the source.
pub(crate) struct Slot {
    /// The full region including the braces.
    pub span: Span,
    /// The trimmed specifier text after the first `:`, empty if absent.
    pub spec: Span,
}

impl Layout {
    pub fn segment(&self, i: usize) -> &str {
        &self.source.as_str()[self.segments[i]]
    }

    pub fn spec(&self, i: usize) -> &str {
        &self.source.as_str()[self.slots[i].spec]
    }
}

/// Decompose the source into segments and slots.
///
/// This function is total: malformed input (an unterminated hole region)
/// consumes to the end of the source, and the segment invariant holds for
/// every possible input, including the empty string.
pub(crate) fn scan(source: String) -> Layout {
    let bytes = source.as_bytes();
    let len = bytes.len();

    let mut segments = Vec::new();
    let mut slots = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < len {
        if i + 1 == len {
            segments.push(Span::from(start..len));
            break;
        }

        // A lone `{` opens a hole region; `{{` suppresses it for exactly
        // the next byte.
        if bytes[i] == b'{' && bytes[i + 1] != b'{' {
            segments.push(Span::from(start..i));

            let open = i;
            let mut j = i + 2;
            while j < len && bytes[j] != b'}' {
                j += 1;
            }
            let close = if j < len { j + 1 } else { len };
            slots.push(Slot {
                span: Span::from(open..close),
                spec: spec_span(&source, open, j.min(len)),
            });

            start = close;
            i = close;
            if start >= len {
                segments.push(Span::from(len..len));
                break;
            }
            continue;
        }

        i += 1;
    }

    // The empty source never enters the loop; a source consumed exactly by
    // the scan still needs its closing segment.
    if segments.len() == slots.len() {
        segments.push(Span::from(len..len));
    }

    Layout {
        source,
        segments,
        slots,
    }
}

/// The trimmed span after the first `:` in `source[open..end]`.
fn spec_span(source: &str, open: usize, end: usize) -> Span {
    match source[open..end].find(':') {
        Some(p) => {
            let m = open + p + 1;
            let raw = &source[m..end];
            let trimmed = raw.trim();
            let lead = raw.len() - raw.trim_start().len();
            Span::from(m + lead..m + lead + trimmed.len())
        }
        None => Span::from(end..end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(layout: &Layout) -> Vec<&str> {
        (0..layout.segments.len())
            .map(|i| layout.segment(i))
            .collect()
    }

    fn specs(layout: &Layout) -> Vec<&str> {
        (0..layout.slots.len()).map(|i| layout.spec(i)).collect()
    }

    #[test]
    fn scan_empty() {
        let layout = scan(String::new());
        assert_eq!(segments(&layout), [""]);
        assert!(layout.slots.is_empty());
    }

    #[test]
    fn scan_literal_only() {
        let layout = scan(String::from("abc"));
        assert_eq!(segments(&layout), ["abc"]);
        assert!(layout.slots.is_empty());
    }

    #[test]
    fn scan_hole_positions() {
        let layout = scan(String::from("{0}abc"));
        assert_eq!(segments(&layout), ["", "abc"]);
        assert_eq!(specs(&layout), [""]);

        let layout = scan(String::from("abc{0}"));
        assert_eq!(segments(&layout), ["abc", ""]);
        assert_eq!(specs(&layout), [""]);

        let layout = scan(String::from("qq{0}abc{1}pp"));
        assert_eq!(segments(&layout), ["qq", "abc", "pp"]);
        assert_eq!(specs(&layout), ["", ""]);
    }

    #[test]
    fn scan_specifiers() {
        let layout = scan(String::from("{0:9999}"));
        assert_eq!(segments(&layout), ["", ""]);
        assert_eq!(specs(&layout), ["9999"]);

        let layout = scan(String::from("{0:9999}x{1: x}"));
        assert_eq!(segments(&layout), ["", "x", ""]);
        assert_eq!(specs(&layout), ["9999", "x"]);

        // only the first `:` splits, the rest belongs to the specifier
        let layout = scan(String::from("{0:a:b}"));
        assert_eq!(specs(&layout), ["a:b"]);
    }

    #[test]
    fn scan_double_brace_stays_literal() {
        let layout = scan(String::from("qq{{"));
        assert_eq!(segments(&layout), ["qq{{"]);
        assert!(layout.slots.is_empty());

        let layout = scan(String::from("{{{{"));
        assert_eq!(segments(&layout), ["{{{{"]);
        assert!(layout.slots.is_empty());
    }

    #[test]
    fn scan_unterminated_region() {
        let layout = scan(String::from("ab{x"));
        assert_eq!(segments(&layout), ["ab", ""]);
        assert_eq!(specs(&layout), [""]);
    }
}

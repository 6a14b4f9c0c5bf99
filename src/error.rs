use std::cmp::max;
use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::span::Span;

/// An error that can occur while rendering a template or building a mapping.
///
/// If the error originated while dispatching a particular hole, the error
/// carries the template source and the hole's span, and the alternate
/// `{:#}` display annotates the offending region.
#[derive(Clone)]
pub struct Error {
    msg: String,
    span: Option<(String, Span)>,
}

impl Error {
    /// Attach source context to an error that does not have any yet.
    ///
    /// Errors propagated from nested dictionary templates keep their own,
    /// more precise context.
    pub(crate) fn with_span(mut self, source: &str, span: Span) -> Self {
        if self.span.is_none() && !source.is_empty() {
            self.span = Some((source.to_owned(), span));
        }
        self
    }
}

impl From<crate::fmt::Error> for Error {
    fn from(err: crate::fmt::Error) -> Self {
        let msg = err
            .message()
            .unwrap_or_else(|| String::from("unable to format value"));
        Self { msg, span: None }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self {
            msg: msg.to_string(),
            span: None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(&self.msg, source, *span, f),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => {
                if f.alternate() {
                    fmt_pretty(&self.msg, source, *span, f)
                } else {
                    write!(f, "{} between bytes {} and {}", self.msg, span.m, span.n)
                }
            }
            None => write!(f, "{}", self.msg),
        }
    }
}

fn fmt_pretty(msg: &str, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, span.m);
    let width = max(1, source[span].width());
    let code = lines.get(line).unwrap_or_else(|| lines.last().unwrap());

    let num = (line + 1).to_string();
    let pad = num.width();
    let underline = "^".repeat(width);

    writeln!(f)?;
    writeln!(f, " {:pad$} |", "")?;
    writeln!(f, " {num} | {code}")?;
    writeln!(f, " {:pad$} | {underline:>ucol$} {msg}", "", ucol = col + width)
}

fn to_line_col(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.width() + 1;
        if n + len > offset {
            return (i, offset - n);
        }
        n += len;
    }
    (lines.len(), lines.last().map(|l| l.width()).unwrap_or(0))
}

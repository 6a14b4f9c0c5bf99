//! Replays a parsed template into a growable buffer.

mod buf;

pub use crate::render::buf::Buffer;

use crate::fmt::{self, FormatFn, Formatter};
use crate::hole::Adapt;
use crate::{Result, Template, Value};

/// A string renderer for a compiled [`Template`].
///
/// Construction is cheap; the intended pattern is to build the template and
/// renderer once per distinct format and replay them per subject value.
/// Rendering interleaves the template's literal segments with each hole's
/// rendered form, in template order.
pub struct Renderer<T> {
    template: Template<T>,
    format: Box<FormatFn>,
}

impl<T> Renderer<T> {
    /// Construct a renderer using the [default formatter][fmt::default].
    pub fn new(template: Template<T>) -> Self {
        Self {
            template,
            format: Box::new(fmt::default),
        }
    }

    /// Replace the hole formatter.
    ///
    /// The formatter receives every hole value that does not take a buffer
    /// fast path, along with the hole's format specifier.
    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Formatter<'_>, &Value, &str) -> fmt::Result + Send + Sync + 'static,
    {
        self.format = Box::new(f);
        self
    }

    /// Returns the original template source.
    pub fn source(&self) -> &str {
        self.template.source()
    }

    /// Render the template for `subject` into the given buffer.
    ///
    /// Output is appended; the buffer is not cleared first.
    pub fn apply(&self, buf: &mut Buffer, subject: &T) -> Result<()> {
        let layout = &self.template.layout;
        for (i, hole) in self.template.holes.iter().enumerate() {
            buf.push_str(layout.segment(i));
            let mut sink = Sink {
                buf: &mut *buf,
                format: &*self.format,
            };
            hole.apply(&mut sink, subject, layout.spec(i))
                .map_err(|e| e.with_span(&layout.source, layout.slots[i].span))?;
        }
        buf.push_str(layout.segment(self.template.holes.len()));
        Ok(())
    }

    /// Render the template for `subject` to a new string.
    pub fn render(&self, subject: &T) -> Result<String> {
        let mut buf = Buffer::with_capacity(self.template.source().len());
        self.apply(&mut buf, subject)?;
        Ok(buf.into_string())
    }
}

/// The buffer-backed adapter: integer and character holes take dedicated
/// append paths, everything else goes through the formatter.
struct Sink<'a> {
    buf: &'a mut Buffer,
    format: &'a FormatFn,
}

impl Adapt for Sink<'_> {
    fn int(&mut self, v: i64, spec: &str) -> fmt::Result {
        if spec.is_empty() {
            self.buf.push_i64(v);
            Ok(())
        } else {
            (self.format)(&mut Formatter::new(self.buf), &Value::Integer(v), spec)
        }
    }

    fn chr(&mut self, v: char, _spec: &str) -> fmt::Result {
        self.buf.push(v);
        Ok(())
    }

    fn value(&mut self, v: Value, spec: &str) -> fmt::Result {
        (self.format)(&mut Formatter::new(self.buf), &v, spec)
    }
}

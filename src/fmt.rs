//! Types for hole formatters.
//!
//! A formatter turns a hole's [`Value`] and its format specifier (the text
//! after `:` inside the braces) into rendered output. The engine treats the
//! specifier as opaque; interpreting it is entirely up to the formatter
//! installed with [`Renderer::with_formatter`][crate::Renderer::with_formatter].
//!
//! This module defines a [`Formatter`] type that is similar to
//! [`std::fmt::Formatter`] so it should be a familiar API. A mutable
//! reference to this struct is passed to formatter functions and writing to
//! it appends to the render buffer.
//!
//! All formatter functions must have the following signature.
//!
//! ```text
//! Fn(&mut fmt::Formatter<'_>, &Value, &str) -> fmt::Result
//! ```
//!
//! Since [`Error`] implements `From<String>` and `From<&str>` it is possible
//! to return custom messages from formatter functions. You can also easily
//! propagate the standard library [`std::fmt::Error`].
//!
//! # Examples
//!
//! A formatter that zero-pads integers to the width given by the specifier,
//! falling back to the default formatter for everything else.
//!
//! ```
//! use std::fmt::Write;
//! use imprint::{fmt, Hole, Renderer, Template, Value};
//!
//! fn pad(f: &mut fmt::Formatter<'_>, value: &Value, spec: &str) -> fmt::Result {
//!     match (value, spec.parse::<usize>()) {
//!         (Value::Integer(n), Ok(width)) => Ok(write!(f, "{:0>width$}", n)?),
//!         _ => fmt::default(f, value, spec),
//!     }
//! }
//!
//! let template = Template::parse("id-{0:6}", vec![Hole::int(|n: &i64| *n)]);
//! let renderer = Renderer::new(template).with_formatter(pad);
//! assert_eq!(renderer.render(&42)?, "id-000042");
//! # Ok::<(), imprint::Error>(())
//! ```

use std::fmt;
use std::fmt::Write;

use crate::render::Buffer;
use crate::Value;

/// A formatter function or closure.
pub(crate) type FormatFn =
    dyn Fn(&mut Formatter<'_>, &Value, &str) -> Result + Send + Sync + 'static;

/// A [`std::fmt::Write`] façade over the render buffer.
pub struct Formatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
}

/// The result type returned from a formatter function.
pub type Result = std::result::Result<(), Error>;

/// The error type returned from a formatter function.
#[derive(Debug, Clone)]
pub struct Error(Option<String>);

impl<'a> Formatter<'a> {
    pub(crate) fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }
}

impl fmt::Write for Formatter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(self.buf, s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        fmt::Write::write_char(self.buf, c)
    }

    #[inline]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self.buf, args)
    }
}

impl Error {
    pub(crate) fn message(self) -> Option<String> {
        self.0
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(msg) => write!(f, "{msg}"),
            None => write!(f, "format error"),
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self(Some(msg.to_owned()))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self(Some(msg))
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self(None)
    }
}

/// The default hole formatter.
///
/// Values are formatted as follows, ignoring the specifier:
/// - [`Value::None`]: empty string
/// - [`Value::Bool`]: `true` or `false`
/// - [`Value::Integer`]: the integer formatted using [`Display`][std::fmt::Display]
/// - [`Value::Float`]: the float formatted using [`Display`][std::fmt::Display]
/// - [`Value::String`]: the string, unescaped
///
/// Errors if the value is a [`Value::List`] or [`Value::Map`].
#[inline]
pub fn default(f: &mut Formatter<'_>, value: &Value, _spec: &str) -> Result {
    match value {
        Value::None => {}
        Value::Bool(b) => write!(f, "{b}")?,
        Value::Integer(n) => write!(f, "{n}")?,
        Value::Float(n) => write!(f, "{n}")?,
        Value::String(s) => write!(f, "{s}")?,
        value => {
            return Err(Error::from(format!(
                "hole evaluated to unformattable type {}",
                value.human()
            )));
        }
    }
    Ok(())
}

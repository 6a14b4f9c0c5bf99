//! A lightweight string interpolation and mapping engine.
//!
//! # Overview
//!
//! A template is a literal text skeleton with ordered, typed holes. Parse it
//! once, then replay it per subject value in either of two ways:
//!
//! - [`Renderer`] substitutes every hole and produces the flat rendered
//!   text, appending to a growable [`Buffer`] with dedicated fast paths for
//!   integer and character holes.
//! - [`Dict`] re-interprets the template as line-oriented `key: value`
//!   records and produces a nested mapping, keeping each hole's value typed
//!   instead of rendered.
//!
//! Hole syntax is `{..}` with an optional format specifier after the first
//! `:`, e.g. `{0:04}`. The text inside the braces before the `:` is
//! ignored; holes bind to the supplied [`Hole`] descriptors in order. A `{`
//! immediately followed by another `{` does not open a hole.
//!
//! # Getting started
//!
//! Parse a template by pairing the raw text with one descriptor per hole,
//! then build a renderer. Construction is intended to happen once per
//! distinct template, with the built value cached for the lifetime of the
//! program; `render` calls are cheap and thread-safe.
//!
//! ```
//! use imprint::{Hole, Renderer, Template};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let renderer = Renderer::new(Template::parse(
//!     "Hello {0}, you are {1}!",
//!     vec![
//!         Hole::get(|u: &User| u.name.clone()),
//!         Hole::int(|u: &User| u.age),
//!     ],
//! ));
//!
//! let user = User { name: String::from("John Smith"), age: 42 };
//! assert_eq!(renderer.render(&user)?, "Hello John Smith, you are 42!");
//! # Ok::<(), imprint::Error>(())
//! ```
//!
//! # Building mappings
//!
//! The same parsed form can be consumed as `key: value` lines. A hole that
//! is the entire right-hand side of a line keeps its typed value, and a
//! hole built with [`Hole::nested`] yields a nested mapping. Decorative
//! lines, lines with an empty key, and lines mixing a hole with other text
//! are dropped silently.
//!
//! ```
//! use imprint::{value, Dict, Hole, Template, Value};
//!
//! struct Reading {
//!     id: i64,
//!     total: i64,
//! }
//!
//! let meta = Dict::new(Template::parse(
//!     "unit: 1\nvalue: {0}\n",
//!     vec![Hole::int(|id: &i64| *id)],
//! ));
//!
//! let dict = Dict::new(Template::parse(
//!     "\n  id: {0}\n  total: {1}\n\n  meta: {2}\n",
//!     vec![
//!         Hole::int(|r: &Reading| r.id),
//!         Hole::int(|r: &Reading| r.total),
//!         Hole::nested(|r: &Reading| r.id, meta),
//!     ],
//! ));
//!
//! let map = dict.to_map(&Reading { id: 30, total: 70 })?;
//! assert_eq!(
//!     Value::Map(map),
//!     value! {
//!         id: 30,
//!         total: 70,
//!         meta: { unit: "1", value: 30 },
//!     }
//! );
//! # Ok::<(), imprint::Error>(())
//! ```
//!
//! # Format specifiers
//!
//! The engine records specifier text verbatim and passes it, opaque, to the
//! formatter together with the hole's value. The
//! [default formatter][fmt::default] ignores it; install your own with
//! [`Renderer::with_formatter`] to interpret it. See the [`fmt`] module
//! documentation for an example.

mod compile;
mod dict;
mod error;
pub mod fmt;
mod hole;
mod macros;
mod render;
mod span;
pub mod value;

pub use crate::dict::Dict;
pub use crate::error::Error;
pub use crate::hole::Hole;
pub use crate::render::{Buffer, Renderer};
#[cfg(feature = "serde")]
pub use crate::value::to_value;
pub use crate::value::Value;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A parsed template over subject type `T`.
///
/// Holds the literal segments, the per-hole format specifiers, and the
/// typed hole descriptors. Parsing happens exactly once; the template is
/// immutable afterwards and both [`Renderer`] and [`Dict`] consume it
/// without re-scanning the source.
pub struct Template<T> {
    pub(crate) layout: compile::Layout,
    pub(crate) holes: Vec<Hole<T>>,
}

impl<T> Template<T> {
    /// Parse raw template text, binding one descriptor per hole in order.
    ///
    /// Parsing is total: there is no error case for any input text.
    /// Supplying a descriptor count different from the number of holes in
    /// the text is a caller contract violation.
    pub fn parse(raw: impl Into<String>, holes: Vec<Hole<T>>) -> Self {
        let layout = compile::scan(raw.into());
        debug_assert_eq!(
            layout.slots.len(),
            holes.len(),
            "hole count does not match template"
        );
        Self { layout, holes }
    }

    /// Returns the original template source.
    pub fn source(&self) -> &str {
        &self.layout.source
    }

    /// The literal segments, in order. Always one more than the number of
    /// holes.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        (0..self.layout.segments.len()).map(move |i| self.layout.segment(i))
    }

    /// The per-hole format specifiers, in order.
    pub fn specifiers(&self) -> impl Iterator<Item = &str> {
        (0..self.layout.slots.len()).map(move |i| self.layout.spec(i))
    }
}

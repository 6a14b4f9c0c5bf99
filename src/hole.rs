//! Typed hole descriptors and the dispatch capability.
//!
//! A [`Hole`] binds, at template construction time, the way a value is
//! extracted from the subject. At use time the consuming component supplies
//! an [`Adapt`] implementation and [`Hole::apply`] routes the extracted
//! value through it: the renderer's adapter appends to the buffer while the
//! dictionary builder's [`Capture`] records the typed value verbatim. One
//! parsed template therefore serves both consumers without re-parsing.

use crate::dict::Dict;
use crate::value::{Map, Value};
use crate::{fmt, Result};

type Extract<T, K> = Box<dyn Fn(&T) -> K + Send + Sync>;

/// A typed hole descriptor for a template over subject type `T`.
pub struct Hole<T>(Kind<T>);

enum Kind<T> {
    /// A constant value, independent of the subject.
    Const(Value),
    /// An integer extraction, eligible for the buffer's digit fast path.
    Int(Extract<T, i64>),
    /// A single character extraction, appended directly.
    Char(Extract<T, char>),
    /// A generic extraction to a [`Value`].
    Get(Extract<T, Result<Value>>),
    /// The subject projected through a nested dictionary template.
    Nested(Extract<T, Result<Map<String, Value>>>),
}

impl<T> Hole<T> {
    /// A hole holding a constant value.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self(Kind::Const(value.into()))
    }

    /// A hole extracting an integer from the subject.
    pub fn int<F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self(Kind::Int(Box::new(f)))
    }

    /// A hole extracting a single character from the subject.
    pub fn chr<F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> char + Send + Sync + 'static,
    {
        Self(Kind::Char(Box::new(f)))
    }

    /// A hole extracting any value convertible to a [`Value`].
    pub fn get<K, F>(f: F) -> Self
    where
        T: 'static,
        K: Into<Value>,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self(Kind::Get(Box::new(move |subject| Ok(f(subject).into()))))
    }

    /// A hole extracting any serializable value.
    #[cfg(feature = "serde")]
    pub fn serialize<K, F>(f: F) -> Self
    where
        T: 'static,
        K: serde::Serialize,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self(Kind::Get(Box::new(move |subject| {
            crate::to_value(f(subject))
        })))
    }

    /// A hole projecting the subject into a nested dictionary template.
    ///
    /// The selector picks the nested subject out of `T` and `dict` turns it
    /// into a nested mapping. The dictionary builder stores the mapping
    /// under the line's key; the string renderer treats the mapping like any
    /// other value and hands it to the formatter.
    pub fn nested<K, F>(f: F, dict: Dict<K>) -> Self
    where
        T: 'static,
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self(Kind::Nested(Box::new(move |subject| {
            dict.to_map(&f(subject))
        })))
    }

    /// Route the hole's value for `subject` through the adapter.
    pub(crate) fn apply(&self, adapter: &mut dyn Adapt, subject: &T, spec: &str) -> Result<()> {
        match &self.0 {
            Kind::Const(value) => adapter.value(value.clone(), spec)?,
            Kind::Int(f) => adapter.int(f(subject), spec)?,
            Kind::Char(f) => adapter.chr(f(subject), spec)?,
            Kind::Get(f) => adapter.value(f(subject)?, spec)?,
            Kind::Nested(f) => adapter.value(Value::Map(f(subject)?), spec)?,
        }
        Ok(())
    }
}

/// The capability a hole dispatches its extracted value through.
///
/// Implemented by the renderer's buffer sink and by [`Capture`].
pub(crate) trait Adapt {
    fn int(&mut self, v: i64, spec: &str) -> fmt::Result;
    fn chr(&mut self, v: char, spec: &str) -> fmt::Result;
    fn value(&mut self, v: Value, spec: &str) -> fmt::Result;
}

/// An adapter that records the last adapted value verbatim.
///
/// The dictionary builder uses a fresh `Capture` per entry production so
/// that hole values stay typed instead of being rendered to text.
#[derive(Default)]
pub(crate) struct Capture {
    last: Option<Value>,
}

impl Capture {
    pub fn finish(self) -> Value {
        self.last.unwrap_or(Value::None)
    }
}

impl Adapt for Capture {
    fn int(&mut self, v: i64, _spec: &str) -> fmt::Result {
        self.last = Some(Value::Integer(v));
        Ok(())
    }

    fn chr(&mut self, v: char, _spec: &str) -> fmt::Result {
        self.last = Some(Value::String(String::from(v)));
        Ok(())
    }

    fn value(&mut self, v: Value, _spec: &str) -> fmt::Result {
        self.last = Some(v);
        Ok(())
    }
}

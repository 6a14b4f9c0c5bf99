//! Re-interprets a parsed template as line-oriented `key: value` records.
//!
//! Construction walks the template's literal segments character by
//! character with exactly one hole boundary between consecutive segments,
//! committing an [`Entry`] per well-formed line. The scan happens once;
//! [`Dict::to_map`] then replays the committed entries against a subject
//! value, so repeated calls never re-parse.
//!
//! The line grammar is deliberately forgiving: lines with an empty key,
//! lines where a hole is not the entire right-hand side, and lines that
//! never reach a `:` are dropped without error.

use std::mem;

use crate::hole::Capture;
use crate::value::{Map, Value};
use crate::{Result, Template};

/// A dictionary builder for a compiled [`Template`].
///
/// Like [`Renderer`][crate::Renderer], a `Dict` is immutable once built and
/// safe to share across threads; each [`to_map`][Dict::to_map] call
/// allocates a fresh mapping.
pub struct Dict<T> {
    template: Template<T>,
    entries: Vec<Entry>,
}

/// A committed `key: value` line.
struct Entry {
    key: String,
    producer: Producer,
}

/// How an entry's value is produced at `to_map` time.
enum Producer {
    /// A literal line: the trimmed value text, subject independent.
    Text(String),
    /// A hole line: the hole at this index re-captures per subject.
    Slot(usize),
}

impl<T> Dict<T> {
    /// Scan the template's lines and build the entry list.
    pub fn new(template: Template<T>) -> Self {
        let mut parser = Parser::new();
        let slots = template.holes.len();
        for i in 0..=slots {
            parser.text(template.layout.segment(i), i == slots);
            if i < slots {
                parser.slot(i);
            }
        }
        Self {
            template,
            entries: parser.entries,
        }
    }

    /// Returns the original template source.
    pub fn source(&self) -> &str {
        self.template.source()
    }

    /// Produce the mapping for `subject`.
    ///
    /// Literal entries yield their stored text; hole entries re-run the
    /// hole's extraction through a fresh capture so values stay typed.
    /// Duplicate keys keep the last committed line. A template with no
    /// well-formed lines yields an empty mapping.
    pub fn to_map(&self, subject: &T) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        for entry in &self.entries {
            let value = match &entry.producer {
                Producer::Text(text) => Value::String(text.clone()),
                Producer::Slot(i) => {
                    let layout = &self.template.layout;
                    let mut capture = Capture::default();
                    self.template.holes[*i]
                        .apply(&mut capture, subject, layout.spec(*i))
                        .map_err(|e| e.with_span(&layout.source, layout.slots[*i].span))?;
                    capture.finish()
                }
            };
            map.insert(entry.key.clone(), value);
        }
        Ok(map)
    }
}

/// Scan state for a single line.
enum State {
    /// Accumulating a key name, terminated by `:`.
    Key,
    /// Accumulating value text, terminated by a line end.
    Value,
    /// Discarding the rest of a malformed line.
    IgnoreLine,
}

/// The line state machine.
///
/// All per-line state lives here explicitly: the current scan state, the
/// pending accumulator, the committed key, and the hole inserted into the
/// current line, if any.
struct Parser {
    state: State,
    acc: String,
    key: String,
    inserted: Option<usize>,
    entries: Vec<Entry>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::Key,
            acc: String::new(),
            key: String::new(),
            inserted: None,
            entries: Vec::new(),
        }
    }

    /// Scan one literal segment. `last` marks the template's final segment,
    /// whose final character terminates the line even without a newline.
    fn text(&mut self, s: &str, last: bool) {
        for (i, c) in s.char_indices() {
            if c == '\n' || (last && i + c.len_utf8() == s.len()) {
                self.line_end();
                continue;
            }
            match self.state {
                State::Key => {
                    if c == ':' {
                        self.key = self.acc.trim().to_owned();
                        self.acc.clear();
                        self.state = if self.key.is_empty() {
                            State::IgnoreLine
                        } else {
                            State::Value
                        };
                    } else {
                        self.acc.push(c);
                    }
                }
                State::Value => self.acc.push(c),
                State::IgnoreLine => {}
            }
        }
    }

    /// Handle the hole boundary between two segments.
    ///
    /// A hole is honored only as the entire right-hand side of a line: the
    /// scan must be in value state with nothing but whitespace accumulated
    /// since the `:`. A later hole on the same line replaces an earlier
    /// one. Anything else poisons the line.
    fn slot(&mut self, i: usize) {
        let clean = matches!(self.state, State::Value) && self.acc.trim().is_empty();
        self.acc.clear();
        if clean {
            self.inserted = Some(i);
        } else {
            self.state = State::IgnoreLine;
        }
    }

    /// Commit the line's entry, if any, and reset for the next line.
    fn line_end(&mut self) {
        if let State::Value = self.state {
            let value = self.acc.trim();
            match self.inserted {
                // a hole line is only committed when no text followed the hole
                Some(slot) => {
                    if value.is_empty() {
                        self.entries.push(Entry {
                            key: mem::take(&mut self.key),
                            producer: Producer::Slot(slot),
                        });
                    }
                }
                None => self.entries.push(Entry {
                    key: mem::take(&mut self.key),
                    producer: Producer::Text(value.to_owned()),
                }),
            }
        }
        self.acc.clear();
        self.key.clear();
        self.inserted = None;
        self.state = State::Key;
    }
}

//! Contextual text captured where an error is raised or wrapped

mod dump;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// What a [`Trace`] is built from
///
/// Specific shapes are listed before [`TraceSource::Other`], which holds an
/// already stringified value. Use [`TraceSource::display`] or
/// [`TraceSource::debug`] to reach the fallback for arbitrary values.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceSource {
    /// Free-form text
    Text(String),
    /// Raw bytes, decoded lossily as UTF-8
    Bytes(Vec<u8>),
    /// Display string of an error
    Error(String),
    /// An existing trace, copied verbatim
    Trace(Trace),
    /// Stringified fallback
    Other(String),
}

impl TraceSource {
    /// Capture an error through its display string
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Error(err.to_string())
    }

    /// Stringify any displayable value
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Other(value.to_string())
    }

    /// Stringify any value through its `Debug` representation
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Other(format!("{value:?}"))
    }
}

impl From<&str> for TraceSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TraceSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for TraceSource {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Vec<u8>> for TraceSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for TraceSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Trace> for TraceSource {
    fn from(trace: Trace) -> Self {
        Self::Trace(trace)
    }
}

impl From<&Trace> for TraceSource {
    fn from(trace: &Trace) -> Self {
        Self::Trace(trace.clone())
    }
}

impl From<&crate::Error> for TraceSource {
    fn from(err: &crate::Error) -> Self {
        Self::error(err)
    }
}

impl From<crate::Error> for TraceSource {
    fn from(err: crate::Error) -> Self {
        Self::error(&err)
    }
}

/// Debug context attached to a classified error
///
/// A trace is never mutated once built; [`Trace::with_values`] consumes the
/// trace and returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    text: String,
    values: Vec<Value>,
}

impl Trace {
    /// Build a trace from any supported source
    pub fn new(source: impl Into<TraceSource>) -> Self {
        match source.into() {
            TraceSource::Text(text) | TraceSource::Error(text) | TraceSource::Other(text) => Self {
                text,
                values: Vec::new(),
            },
            TraceSource::Bytes(bytes) => Self {
                text: String::from_utf8_lossy(&bytes).into_owned(),
                values: Vec::new(),
            },
            TraceSource::Trace(trace) => trace,
        }
    }

    /// Append debug values
    #[must_use]
    pub fn with_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.values.extend(values);
        self
    }

    /// Captured text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attached debug values
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Render the trace for logs
    ///
    /// Returns the text alone when no values are attached, otherwise the text
    /// and a depth-limited dump of the values separated by `": "`.
    #[must_use]
    pub fn dump(&self) -> String {
        if self.values.is_empty() {
            return self.text.clone();
        }
        format!("{}: {}", self.text, dump::dump_values(&self.values))
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

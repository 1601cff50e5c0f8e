//! Options accepted by [`Error::wrap_with`](super::Error::wrap_with)

use crate::trace::{Trace, TraceSource};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failure to process wrap options
///
/// Not a classified error; it reports a misuse of the wrap options and
/// never appears in a chain.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// More than one trace source was supplied
    #[error("trace source given more than once")]
    DuplicateTrace,

    /// Values were attached without a trace source to carry them
    #[error("trace values given without a trace source")]
    ValuesWithoutTrace,

    /// A trace value could not be serialized
    #[error("trace value could not be serialized: {0}")]
    Value(#[from] serde_json::Error),
}

/// Builder for the options of a wrap envelope
///
/// The only recognized option is the trace source, optionally carrying
/// debug values. Errors are recorded as the builder is used and reported
/// when the wrap is constructed.
#[derive(Debug, Default)]
pub struct WrapOptions {
    trace: Option<TraceSource>,
    values: Vec<Value>,
    failure: Option<OptionsError>,
}

impl WrapOptions {
    /// Empty option set; wraps built from it carry no trace
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Option set holding only a trace source
    #[must_use]
    pub fn with_trace(source: impl Into<TraceSource>) -> Self {
        Self::new().trace(source)
    }

    /// Set the trace source
    #[must_use]
    pub fn trace(mut self, source: impl Into<TraceSource>) -> Self {
        if self.trace.is_some() {
            self.fail(OptionsError::DuplicateTrace);
        } else {
            self.trace = Some(source.into());
        }
        self
    }

    /// Attach a debug value to the trace
    #[must_use]
    pub fn value<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => self.values.push(value),
            Err(err) => self.fail(err.into()),
        }
        self
    }

    fn fail(&mut self, err: OptionsError) {
        // first failure wins
        if self.failure.is_none() {
            self.failure = Some(err);
        }
    }

    pub(super) fn into_trace(self) -> Result<Option<Trace>, OptionsError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        match self.trace {
            Some(source) => Ok(Some(Trace::new(source).with_values(self.values))),
            None if self.values.is_empty() => Ok(None),
            None => Err(OptionsError::ValuesWithoutTrace),
        }
    }
}

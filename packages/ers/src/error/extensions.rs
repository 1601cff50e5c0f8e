//! Extension traits for raising and wrapping at call sites
//!
//! All methods record the location of their caller, not of this module.

use super::types::{Error, Result};
use crate::capability::Capabilities;
use crate::trace::TraceSource;

/// Classification helpers for `Result`
pub trait ResultExt<T> {
    /// Wrap the error in an envelope, keeping its classification
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_err(self) -> Result<T>;

    /// Wrap the error in an envelope carrying a trace
    ///
    /// `source` is only evaluated on the error path.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_err_with<S, F>(self, source: F) -> Result<T>
    where
        S: Into<TraceSource>,
        F: FnOnce() -> S;

    /// Reclassify the error as a new occurrence of `class`
    ///
    /// The original error becomes the trace text of the occurrence and is
    /// not chained.
    ///
    /// # Errors
    ///
    /// Returns the new occurrence when `self` is `Err`.
    fn raise_as(self, class: &Error) -> Result<T>;
}

impl<T, E: Capabilities> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn wrap_err(self) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap(err)),
        }
    }

    #[track_caller]
    fn wrap_err_with<S, F>(self, source: F) -> Result<T>
    where
        S: Into<TraceSource>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap_traced(err, source())),
        }
    }

    #[track_caller]
    fn raise_as(self, class: &Error) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(class.raise(TraceSource::error(&err))),
        }
    }
}

/// Classification helpers for `Option`
pub trait OptionExt<T> {
    /// Turn `None` into an occurrence of `class`
    ///
    /// # Errors
    ///
    /// Returns the occurrence when `self` is `None`.
    fn ok_or_raise(self, class: &Error, source: impl Into<TraceSource>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_raise(self, class: &Error, source: impl Into<TraceSource>) -> Result<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(class.raise(source)),
        }
    }
}

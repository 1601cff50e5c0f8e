//! Display and trait implementations for Error

use super::types::Error;
use std::error::Error as StdError;
use std::fmt;

/// Separator between links in the detailed report
const LINK_SEPARATOR: &str = "\n  - ";

impl fmt::Display for Error {
    /// `{}` prints the minimal string: the cause's own display when there is
    /// a cause, otherwise the trace dump, the message or the reason, the
    /// first that is non-empty.
    ///
    /// `{:#}` prints the detailed report: for every link the trace dump and
    /// call site, continuing into the cause.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.write_report(f);
        }
        if let Some(cause) = &self.inner.cause {
            return write!(f, "{}", cause.as_error());
        }
        if let Some(dump) = self.inner.trace.as_ref().map(|t| t.dump()) {
            if !dump.is_empty() {
                return f.write_str(&dump);
            }
        }
        if self.inner.message.is_empty() {
            f.write_str(&self.inner.reason)
        } else {
            f.write_str(&self.inner.message)
        }
    }
}

impl Error {
    fn write_report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut link = self;
        loop {
            link.write_frame(f)?;
            let Some(cause) = &link.inner.cause else {
                return Ok(());
            };
            f.write_str(LINK_SEPARATOR)?;
            match cause.as_error().downcast_ref::<Error>() {
                Some(next) => link = next,
                None => return write!(f, "{}", cause.as_error()),
            }
        }
    }

    fn write_frame(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = self.inner.trace.as_ref().map(|t| t.dump());
        match (trace, self.inner.location) {
            (Some(dump), Some(location)) => write!(f, "{dump}\n    at {location}"),
            (Some(dump), None) => f.write_str(&dump),
            (None, Some(location)) => write!(f, "    at {location}"),
            // catalog entries carry neither
            (None, None) => write!(f, "{}: {}", self.inner.reason, self.inner.message),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| cause.as_error() as &(dyn StdError + 'static))
    }
}

//! Conversion of classified errors into transport statuses

use crate::code::Code;
use crate::error::Error;
use serde::Serialize;
use std::collections::HashMap;
use tonic_types::{ErrorDetails, StatusExt};

/// Metadata key of the `ErrorInfo` detail holding the detailed report
pub const TRACE_METADATA_KEY: &str = "Trace";

impl Error {
    /// Transport status for this error
    ///
    /// Carries the resolved code and message, and an `ErrorInfo` detail with
    /// the resolved reason and domain and the detailed report under the
    /// [`TRACE_METADATA_KEY`] metadata entry.
    #[must_use]
    pub fn to_status(&self) -> tonic::Status {
        let code = self.code();
        let reason = self.reason().into_owned();
        let domain = self.domain().into_owned();
        tracing::debug!(%code, %reason, %domain, "exporting classified error as status");

        let metadata = HashMap::from([(TRACE_METADATA_KEY.to_string(), format!("{self:#}"))]);
        let details = ErrorDetails::with_error_info(reason, domain, metadata);
        tonic::Status::with_error_details(code.into(), self.message().into_owned(), details)
    }

    /// Serializable snapshot of the resolved attributes
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            code: self.code(),
            reason: self.reason().into_owned(),
            message: self.message().into_owned(),
            domain: self.domain().into_owned(),
            trace: format!("{self:#}"),
            location: self.location().map(ToString::to_string),
        }
    }
}

impl From<Error> for tonic::Status {
    fn from(err: Error) -> Self {
        err.to_status()
    }
}

impl From<&Error> for tonic::Status {
    fn from(err: &Error) -> Self {
        err.to_status()
    }
}

/// Resolved attributes of an error, ready for structured logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Resolved status code
    pub code: Code,
    /// Resolved reason
    pub reason: String,
    /// Resolved message
    pub message: String,
    /// Resolved domain
    pub domain: String,
    /// Detailed report of the whole chain
    pub trace: String,
    /// Call site of the outermost raise or wrap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

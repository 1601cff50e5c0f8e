//! Optional capabilities a cause may expose to resolution
//!
//! Resolution never assumes a shared base type. Each accessor of
//! [`Error`](crate::Error) probes its cause for exactly the capability it
//! needs and falls back to an empty value when the probe returns `None`.
//!
//! A foreign error becomes a capable cause by implementing [`Capabilities`]
//! and overriding the probes it can answer:
//!
//! ```rust
//! use ers::{Capabilities, Code, CodeProvider, Error};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! impl CodeProvider for Timeout {
//!     fn code(&self) -> Code {
//!         Code::DeadlineExceeded
//!     }
//! }
//!
//! impl Capabilities for Timeout {
//!     fn as_code_provider(&self) -> Option<&dyn CodeProvider> {
//!         Some(self)
//!     }
//! }
//!
//! assert_eq!(Error::wrap(Timeout).code(), Code::DeadlineExceeded);
//! ```

use crate::code::Code;
use std::borrow::Cow;
use std::error::Error as StdError;

/// Exposes a status code
pub trait CodeProvider {
    /// Resolved status code
    fn code(&self) -> Code;
}

/// Exposes a human-facing message
pub trait MessageProvider {
    /// Resolved display message
    fn message(&self) -> Cow<'_, str>;
}

/// Exposes a stable reason identifier
pub trait ReasonProvider {
    /// Resolved reason
    fn reason(&self) -> Cow<'_, str>;
}

/// Exposes the domain the error originated from
pub trait DomainProvider {
    /// Resolved domain
    fn domain(&self) -> Cow<'_, str>;
}

/// Exposes a transport status
pub trait StatusProvider {
    /// Transport status describing the error
    fn status(&self) -> tonic::Status;
}

/// Upcast to a plain error trait object
#[doc(hidden)]
pub trait AsStdError {
    /// The value as an error trait object
    fn as_std_error(&self) -> &(dyn StdError + Send + Sync + 'static);
}

impl<T: StdError + Send + Sync + 'static> AsStdError for T {
    fn as_std_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

/// Capability probes of an error usable as a cause
///
/// Every probe defaults to `None`, so `impl Capabilities for MyError {}`
/// declares an error with no capabilities.
pub trait Capabilities: AsStdError + StdError + Send + Sync + 'static {
    /// Probe for a code accessor
    fn as_code_provider(&self) -> Option<&dyn CodeProvider> {
        None
    }

    /// Probe for a message accessor
    fn as_message_provider(&self) -> Option<&dyn MessageProvider> {
        None
    }

    /// Probe for a reason accessor
    fn as_reason_provider(&self) -> Option<&dyn ReasonProvider> {
        None
    }

    /// Probe for a domain accessor
    fn as_domain_provider(&self) -> Option<&dyn DomainProvider> {
        None
    }

    /// Probe for a transport status accessor
    fn as_status_provider(&self) -> Option<&dyn StatusProvider> {
        None
    }
}

impl StatusProvider for tonic::Status {
    fn status(&self) -> tonic::Status {
        self.clone()
    }
}

impl Capabilities for tonic::Status {
    fn as_status_provider(&self) -> Option<&dyn StatusProvider> {
        Some(self)
    }
}

impl Capabilities for std::io::Error {}

impl Capabilities for std::fmt::Error {}

//! Core error types and definitions

use crate::capability::Capabilities;
use crate::code::Code;
use crate::trace::Trace;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

/// Classified error with chain-wide attribute resolution
///
/// Cloning is cheap: the interior is shared and never mutated, apart from
/// the domain which is copied on write.
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug, Clone)]
pub(super) struct ErrorInner {
    pub code: Code,
    pub reason: Cow<'static, str>,
    pub message: Cow<'static, str>,
    pub cause: Option<Cause>,
    pub trace: Option<Trace>,
    /// Call site of the raise or wrap that produced this instance
    pub location: Option<&'static Location<'static>>,
    pub domain: Cow<'static, str>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: Option<Arc<backtrace::Backtrace>>,
}

/// The nested error of a classified error
#[derive(Debug, Clone)]
pub(super) enum Cause {
    /// Cause that answers capability probes
    Capable(Arc<dyn Capabilities>),
    /// Cause with no capabilities at all
    Opaque(Arc<dyn StdError + Send + Sync + 'static>),
}

impl Cause {
    /// The cause itself, never the `Arc` holding it
    pub(super) fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            Cause::Capable(cause) => (**cause).as_std_error(),
            Cause::Opaque(cause) => &**cause,
        }
    }

    pub(super) fn capabilities(&self) -> Option<&dyn Capabilities> {
        match self {
            Cause::Capable(cause) => Some(&**cause),
            Cause::Opaque(_) => None,
        }
    }
}

/// Result type alias using our Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

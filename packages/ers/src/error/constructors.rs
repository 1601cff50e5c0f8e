//! Error constructors and methods

use super::options::{OptionsError, WrapOptions};
use super::types::{Cause, Error, ErrorInner};
use crate::capability::Capabilities;
use crate::code::Code;
use crate::trace::{Trace, TraceSource};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

impl Error {
    /// Create a catalog entry with the given classification
    ///
    /// The entry has no cause, trace or call site. Use [`Error::raise`] to
    /// produce occurrences of it.
    #[must_use]
    pub fn new(
        code: Code,
        reason: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::from_inner(ErrorInner {
            code,
            reason: reason.into(),
            message: message.into(),
            cause: None,
            trace: None,
            location: None,
            domain: Cow::Borrowed(""),
            #[cfg(feature = "full-backtrace")]
            backtrace: None,
        })
    }

    /// Raise a new occurrence of this classification
    ///
    /// Code, reason and message are copied; the occurrence gets a trace built
    /// from `source` and the caller's location. It does not chain to any
    /// earlier error.
    #[track_caller]
    #[must_use]
    pub fn raise(&self, source: impl Into<TraceSource>) -> Self {
        let location = Location::caller();
        tracing::trace!(
            code = %self.inner.code,
            reason = %self.inner.reason,
            %location,
            "raised classified error"
        );
        Self::from_inner(ErrorInner {
            code: self.inner.code,
            reason: self.inner.reason.clone(),
            message: self.inner.message.clone(),
            cause: None,
            trace: Some(Trace::new(source)),
            location: Some(location),
            domain: Cow::Borrowed(""),
            #[cfg(feature = "full-backtrace")]
            backtrace: capture_backtrace(),
        })
    }

    /// Wrap an error without changing its classification
    ///
    /// The envelope carries the sentinel classification and the caller's
    /// location; every resolving accessor sees through it.
    #[track_caller]
    #[must_use]
    pub fn wrap<E: Capabilities>(err: E) -> Self {
        Self::envelope(Cause::Capable(Arc::new(err)), None, Location::caller())
    }

    /// Wrap an error and attach a trace built from `source`
    #[track_caller]
    #[must_use]
    pub fn wrap_traced<E: Capabilities>(err: E, source: impl Into<TraceSource>) -> Self {
        Self::envelope(
            Cause::Capable(Arc::new(err)),
            Some(Trace::new(source)),
            Location::caller(),
        )
    }

    /// Wrap an error with explicit options
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] when the options are malformed. The wrapped
    /// error is dropped in that case.
    #[track_caller]
    pub fn wrap_with<E: Capabilities>(err: E, options: WrapOptions) -> Result<Self, OptionsError> {
        let location = Location::caller();
        let trace = options.into_trace()?;
        Ok(Self::envelope(Cause::Capable(Arc::new(err)), trace, location))
    }

    /// Wrap a foreign error that exposes no capabilities
    ///
    /// Resolution treats such a cause as terminal: code falls back to the
    /// sentinel and message, reason and domain to empty strings. Its display
    /// string still passes through [`Display`](std::fmt::Display).
    #[track_caller]
    #[must_use]
    pub fn wrap_opaque<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::envelope(Cause::Opaque(Arc::new(err)), None, Location::caller())
    }

    /// [`Error::wrap_opaque`] with explicit options
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] when the options are malformed.
    #[track_caller]
    pub fn wrap_opaque_with<E>(err: E, options: WrapOptions) -> Result<Self, OptionsError>
    where
        E: StdError + Send + Sync + 'static,
    {
        let location = Location::caller();
        let trace = options.into_trace()?;
        Ok(Self::envelope(Cause::Opaque(Arc::new(err)), trace, location))
    }

    fn envelope(cause: Cause, trace: Option<Trace>, location: &'static Location<'static>) -> Self {
        let sentinel = &crate::catalog::WRAP.inner;
        tracing::trace!(
            cause = %cause.as_error(),
            traced = trace.is_some(),
            %location,
            "wrapped error"
        );
        Self::from_inner(ErrorInner {
            code: sentinel.code,
            reason: sentinel.reason.clone(),
            message: sentinel.message.clone(),
            cause: Some(cause),
            trace,
            location: Some(location),
            domain: Cow::Borrowed(""),
            #[cfg(feature = "full-backtrace")]
            backtrace: capture_backtrace(),
        })
    }

    fn from_inner(inner: ErrorInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Set the domain the error originated from
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<Cow<'static, str>>) -> Self {
        self.set_domain(domain);
        self
    }

    /// Set the domain in place
    pub fn set_domain(&mut self, domain: impl Into<Cow<'static, str>>) {
        Arc::make_mut(&mut self.inner).domain = domain.into();
    }

    /// Own status code, without resolution
    #[must_use]
    pub fn own_code(&self) -> Code {
        self.inner.code
    }

    /// Own reason, without resolution
    #[must_use]
    pub fn own_reason(&self) -> &str {
        &self.inner.reason
    }

    /// Own message, without resolution
    #[must_use]
    pub fn own_message(&self) -> &str {
        &self.inner.message
    }

    /// Own domain, without resolution
    #[must_use]
    pub fn own_domain(&self) -> &str {
        &self.inner.domain
    }

    /// Whether this is a wrap envelope
    #[must_use]
    pub fn is_wrap(&self) -> bool {
        self.inner.code == Code::Wrap && self.inner.reason.is_empty()
    }

    /// Immediate cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.inner.cause.as_ref().map(Cause::as_error)
    }

    /// Trace attached at the raise or wrap site
    #[must_use]
    pub fn trace(&self) -> Option<&Trace> {
        self.inner.trace.as_ref()
    }

    /// Call site of the raise or wrap that produced this instance
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.inner.location
    }

    /// Backtrace captured with the call site
    ///
    /// Frames are unresolved; clone and call `resolve` before printing.
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> Option<&backtrace::Backtrace> {
        self.inner.backtrace.as_deref()
    }
}

#[cfg(feature = "full-backtrace")]
fn capture_backtrace() -> Option<Arc<backtrace::Backtrace>> {
    Some(Arc::new(backtrace::Backtrace::new_unresolved()))
}

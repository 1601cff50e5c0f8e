//! Chain-wide attribute resolution
//!
//! Every accessor prefers this instance's own non-empty value and otherwise
//! asks the cause through the matching capability. Because a classified
//! cause answers with its own resolving accessor, one hop per link is enough
//! to resolve across the whole chain.

use super::types::{Cause, Error};
use crate::capability::{
    Capabilities, CodeProvider, DomainProvider, MessageProvider, ReasonProvider, StatusProvider,
};
use crate::catalog;
use crate::code::Code;
use std::borrow::Cow;

impl Error {
    /// Effective status code
    ///
    /// A cause exposing a status (probed first) or a code decides the
    /// result; otherwise this instance's own code is returned. A wrap
    /// envelope therefore never masks the code of what it wraps.
    #[must_use]
    pub fn code(&self) -> Code {
        self.inner
            .cause
            .as_ref()
            .and_then(Cause::capabilities)
            .and_then(resolve_code)
            .unwrap_or(self.inner.code)
    }

    /// Effective human-facing message
    ///
    /// Falls back, in order, to the cause's message, to the canned catalog
    /// message for the code of a status-only cause, and to `""`.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        if !self.inner.message.is_empty() {
            return Cow::Borrowed(&self.inner.message);
        }
        let Some(cause) = self.inner.cause.as_ref().and_then(Cause::capabilities) else {
            return Cow::Borrowed("");
        };
        if let Some(provider) = cause.as_message_provider() {
            return provider.message();
        }
        if let Some(provider) = cause.as_status_provider() {
            let code = Code::from(provider.status().code());
            return Cow::Borrowed(catalog::canned_message(code));
        }
        Cow::Borrowed("")
    }

    /// Effective reason
    #[must_use]
    pub fn reason(&self) -> Cow<'_, str> {
        if !self.inner.reason.is_empty() {
            return Cow::Borrowed(&self.inner.reason);
        }
        self.inner
            .cause
            .as_ref()
            .and_then(Cause::capabilities)
            .and_then(Capabilities::as_reason_provider)
            .map_or(Cow::Borrowed(""), ReasonProvider::reason)
    }

    /// Effective domain
    #[must_use]
    pub fn domain(&self) -> Cow<'_, str> {
        if !self.inner.domain.is_empty() {
            return Cow::Borrowed(&self.inner.domain);
        }
        self.inner
            .cause
            .as_ref()
            .and_then(Cause::capabilities)
            .and_then(Capabilities::as_domain_provider)
            .map_or(Cow::Borrowed(""), DomainProvider::domain)
    }
}

fn resolve_code(cause: &dyn Capabilities) -> Option<Code> {
    // a classified cause reports the same code through its status, without
    // rendering one
    if let Some(err) = cause.as_std_error().downcast_ref::<Error>() {
        return Some(err.code());
    }
    if let Some(provider) = cause.as_status_provider() {
        return Some(Code::from(provider.status().code()));
    }
    cause.as_code_provider().map(CodeProvider::code)
}

impl CodeProvider for Error {
    fn code(&self) -> Code {
        Error::code(self)
    }
}

impl MessageProvider for Error {
    fn message(&self) -> Cow<'_, str> {
        Error::message(self)
    }
}

impl ReasonProvider for Error {
    fn reason(&self) -> Cow<'_, str> {
        Error::reason(self)
    }
}

impl DomainProvider for Error {
    fn domain(&self) -> Cow<'_, str> {
        Error::domain(self)
    }
}

impl StatusProvider for Error {
    fn status(&self) -> tonic::Status {
        self.to_status()
    }
}

impl Capabilities for Error {
    fn as_code_provider(&self) -> Option<&dyn CodeProvider> {
        Some(self)
    }

    fn as_message_provider(&self) -> Option<&dyn MessageProvider> {
        Some(self)
    }

    fn as_reason_provider(&self) -> Option<&dyn ReasonProvider> {
        Some(self)
    }

    fn as_domain_provider(&self) -> Option<&dyn DomainProvider> {
        Some(self)
    }

    fn as_status_provider(&self) -> Option<&dyn StatusProvider> {
        Some(self)
    }
}

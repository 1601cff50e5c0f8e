//! Classified error propagation
//!
//! This crate attaches machine-readable status codes, stable reasons,
//! human-facing messages and debug traces to errors as they travel up a call
//! chain:
//! - Catalog entries for the canonical status codes, raised with context
//! - Wrap envelopes that add a trace without changing the classification
//! - Resolution of the effective code, message, reason and domain across
//!   chains that mix classified and foreign errors
//! - Chain predicates compatible with [`std::error::Error::source`]
//! - Export to `tonic::Status` with an `ErrorInfo` detail
//!
//! ```rust
//! use ers::catalog::INTERNAL;
//! use ers::{Code, Error};
//!
//! let err = Error::wrap_traced(INTERNAL.raise("disk full"), "saving profile");
//! assert_eq!(err.own_code(), Code::Wrap);
//! assert_eq!(err.code(), Code::Internal);
//! assert!(err.is(&*INTERNAL));
//! ```

pub mod capability;
pub mod catalog;
pub mod chain;
pub mod code;
pub mod error;
pub mod status;
pub mod trace;

pub use capability::{
    Capabilities, CodeProvider, DomainProvider, MessageProvider, ReasonProvider, StatusProvider,
};
pub use chain::{chain, find, is, Chain};
pub use code::{Code, ParseCodeError};
pub use error::*;
pub use status::{Report, TRACE_METADATA_KEY};
pub use trace::{Trace, TraceSource};

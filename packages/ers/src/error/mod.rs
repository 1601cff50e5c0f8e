//! Classified errors with context propagation
//!
//! Provides the error type at the center of this crate:
//! - Classification by code, reason and message, raised from the catalog
//! - Transparent wrap envelopes that attach traces without reclassifying
//! - Chain-wide resolution of code, message, reason and domain
//! - Call-site capture, backtraces and structured logging

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod options;
pub mod resolution;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use logging::LoggingTransformer;
pub use options::{OptionsError, WrapOptions};
pub use types::{Error, Result};

//! Structured logging of classified errors
//!
//! Provides env_logger-based logging on the standard log crate, with the
//! level of each error derived from its resolved code.

use super::types::Error;
use crate::code::Code;
use log::{debug, info, log, warn, Level};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging of classified errors using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=info` - client and server failures
    /// - `RUST_LOG=error` - server failures only
    /// - `RUST_LOG=ers=debug` - include wrap sentinels and status exports
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured error logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Level an error with the given resolved code is logged at
    ///
    /// Server-side faults log as errors, transient conditions as warnings,
    /// and rejections caused by the caller as info.
    #[must_use]
    pub fn level_for(code: Code) -> Level {
        match code {
            Code::Unknown
            | Code::Internal
            | Code::DataLoss
            | Code::Unimplemented => Level::Error,

            Code::DeadlineExceeded
            | Code::Unavailable
            | Code::ResourceExhausted
            | Code::Aborted => Level::Warn,

            Code::Canceled
            | Code::InvalidArgument
            | Code::NotFound
            | Code::AlreadyExists
            | Code::PermissionDenied
            | Code::FailedPrecondition
            | Code::OutOfRange
            | Code::Unauthenticated => Level::Info,

            Code::Wrap => Level::Debug,
        }
    }

    /// Log an error at the level of its resolved code
    ///
    /// The record carries the JSON report of the error; should the report
    /// fail to serialize, its fields are logged as plain text instead.
    pub fn log_error(err: &Error) {
        let report = err.report();
        let level = Self::level_for(report.code);
        match serde_json::to_string(&report) {
            Ok(json) => log!(level, "Classified error: {json}"),
            Err(serialize_err) => {
                warn!("Error report could not be serialized: {serialize_err}");
                log!(
                    level,
                    "Classified error: code={} reason={} domain={} message={}",
                    report.code,
                    report.reason,
                    report.domain,
                    report.message
                );
            }
        }
        debug!("Error detail:\n{}", report.trace);
    }
}

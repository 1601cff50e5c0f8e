//! Tests for the call-site extension traits and macros

use ers::catalog::{INTERNAL, INVALID_ARGUMENT, NOT_FOUND};
use ers::{Code, Error, OptionExt, ResultExt, Trace, TraceSource};
use std::cell::Cell;

fn parse_port(raw: &str) -> ers::Result<u16> {
    ers::ensure!(!raw.is_empty(), INVALID_ARGUMENT, "empty port");
    raw.parse::<u16>()
        .map_err(|err| INVALID_ARGUMENT.raise(TraceSource::error(&err)))
}

fn read_config() -> std::io::Result<String> {
    Err(std::io::Error::other("permission bits"))
}

#[test]
fn test_wrap_err_keeps_classification() {
    let result: ers::Result<()> = Err(NOT_FOUND.raise("user 1"));
    let (err, line) = (result.wrap_err().expect_err("error path"), line!());

    assert!(err.is_wrap());
    assert_eq!(err.code(), Code::NotFound);
    assert_eq!(err.location().map(|l| l.line()), Some(line));
    assert_eq!(err.location().map(|l| l.file()), Some(file!()));
}

#[test]
fn test_wrap_err_passes_ok_through() {
    let result: ers::Result<u8> = Ok(3);
    assert_eq!(result.wrap_err().expect("ok path"), 3);
}

#[test]
fn test_wrap_err_with_is_lazy() {
    let calls = Cell::new(0);
    let trace = || {
        calls.set(calls.get() + 1);
        "reading config"
    };

    let ok: std::io::Result<u8> = Ok(1);
    assert!(ok.wrap_err_with(trace).is_ok());
    assert_eq!(calls.get(), 0);

    let err = read_config().wrap_err_with(trace).expect_err("error path");
    assert_eq!(calls.get(), 1);
    assert_eq!(err.trace().map(Trace::text), Some("reading config"));
    assert_eq!(err.to_string(), "permission bits");
}

#[test]
fn test_raise_as_reclassifies() {
    let err = read_config().raise_as(&INTERNAL).expect_err("error path");

    assert!(!err.is_wrap());
    assert!(err.cause().is_none());
    assert_eq!(err.code(), Code::Internal);
    assert_eq!(err.trace().map(Trace::text), Some("permission bits"));
}

#[test]
fn test_ok_or_raise() {
    let found = Some(5).ok_or_raise(&NOT_FOUND, "unused");
    assert_eq!(found.expect("value is present"), 5);

    let missing: Option<u8> = None;
    let err = missing.ok_or_raise(&NOT_FOUND, "key 'a'").expect_err("value is absent");
    assert_eq!(err.code(), Code::NotFound);
    assert_eq!(err.to_string(), "key 'a'");
}

#[test]
fn test_raise_macro() {
    let bare = ers::raise!(INTERNAL);
    assert_eq!(bare.to_string(), INTERNAL.own_message());

    let name = "orders";
    let formatted = ers::raise!(INTERNAL, "table {name} is locked");
    assert_eq!(formatted.to_string(), "table orders is locked");
    assert!(formatted.is(&*INTERNAL));
}

#[test]
fn test_ensure_and_reclassified_parse_errors() {
    assert_eq!(parse_port("8080").expect("valid port"), 8080);

    let empty = parse_port("").expect_err("empty port");
    assert_eq!(empty.code(), Code::InvalidArgument);
    assert_eq!(empty.to_string(), "empty port");

    let invalid = parse_port("http").expect_err("not a number");
    assert!(invalid.is(&*INVALID_ARGUMENT));
    assert_eq!(invalid.to_string(), "invalid digit found in string");
}

#[test]
fn test_errors_move_across_threads() {
    let err: Error = NOT_FOUND.raise("remote");
    let handle = std::thread::spawn(move || err.code());

    assert_eq!(handle.join().expect("thread completes"), Code::NotFound);
}

//! Tests for the chain equality protocol
//!
//! Like `std` error matching, `is` walks the chain of its first argument
//! only, so wrapped errors match what they wrap but not the other way round.

use ers::catalog::{INTERNAL, NOT_FOUND};
use ers::{Code, Error, Trace};
use std::error::Error as StdError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
#[error("repository failed")]
struct RepositoryError(#[source] Error);

#[test]
fn test_is_walks_only_the_first_chain() {
    let i1 = INTERNAL.raise(Trace::new("Internal 1"));
    let i2 = INTERNAL.raise(Trace::new("Internal 2"));
    let w1 = Error::wrap_traced(i2.clone(), "Wrap");
    let w2 = Error::wrap_traced(i2.clone(), "Wrap");

    let cases: [(bool, &Error, &Error); 10] = [
        (true, &i1, &i2),
        (true, &w1, &w2),
        (true, &w1, &i1),
        (true, &w1, &i2),
        (true, &w2, &i1),
        (true, &w2, &i2),
        (false, &i1, &w1),
        (false, &i1, &w2),
        (false, &i2, &w1),
        (false, &i2, &w2),
    ];

    for (want, err, target) in cases {
        assert_eq!(ers::is(err, target), want, "is([{err:#}], [{target:#}])");
    }
}

#[test]
fn test_occurrences_match_their_catalog_entry() {
    let err = NOT_FOUND.raise("user 42");

    assert!(err.is(&*NOT_FOUND));
    assert!(NOT_FOUND.is(&err));
    assert!(!err.is(&*INTERNAL));
}

#[test]
fn test_classification_is_code_and_reason() {
    let custom = Error::new(Code::Internal, "QuotaLedger", "The ledger is inconsistent.");
    let err = custom.raise("negative balance");

    assert!(!err.is(&*INTERNAL));
    assert!(err.is(&custom));

    let same_pair = Error::new(Code::Internal, "Internal", "A different message.");
    assert!(INTERNAL.raise("x").with_domain("a").is(&same_pair));
}

#[test]
fn test_same_classification_requires_a_classified_target() {
    let io = std::io::Error::other("disk");

    assert!(!INTERNAL.same_classification(&io));
    assert!(!Error::wrap(io).is(&*INTERNAL));
}

#[test]
fn test_is_follows_foreign_sources() {
    let err = Error::wrap_opaque(RepositoryError(NOT_FOUND.raise("row 3")));

    assert!(err.is(&*NOT_FOUND));
    // resolution stops at a cause without capabilities
    assert_eq!(err.code(), Code::Wrap);
    assert_eq!(err.to_string(), "repository failed");
}

#[test]
fn test_is_matches_identical_foreign_link() {
    let err = Error::wrap_opaque(RepositoryError(INTERNAL.raise("x")));
    let link = err.source().expect("wrap has a cause");

    assert!(ers::is(&err, link));
}

#[test]
fn test_inner_error_does_not_match_its_container() {
    let repository = RepositoryError(NOT_FOUND.raise("row 3"));

    assert!(ers::is(&repository, &repository.0));
    assert!(!ers::is(&repository.0, &repository));
}

#[derive(Debug, ThisError)]
#[error("first")]
struct FirstMarker;

#[derive(Debug, ThisError)]
#[error("second")]
struct SecondMarker;

#[test]
fn test_zero_sized_errors_match_only_their_own_type() {
    let first = Box::new(FirstMarker);
    let second = Box::new(SecondMarker);

    assert!(!ers::is(&*first, &*second));
    assert!(!ers::is(&*second, &*first));
    assert!(!Error::wrap_opaque(FirstMarker).is(&*second));
}

#[test]
fn test_find_returns_first_link_of_type() {
    let err = Error::wrap_opaque(RepositoryError(NOT_FOUND.raise("row 3")));

    let outer = ers::find::<Error>(&err).expect("outermost link is classified");
    assert!(outer.is_wrap());

    let repository = ers::find::<RepositoryError>(&err).expect("foreign link is found");
    let copied: Error = repository.0.clone();
    assert_eq!(copied.code(), Code::NotFound);
    assert_eq!(copied.trace().map(Trace::text), Some("row 3"));

    assert!(ers::find::<std::io::Error>(&err).is_none());
}

fn load_user(id: u32) -> anyhow::Result<()> {
    ers::bail!(NOT_FOUND, "user {id}")
}

#[test]
fn test_matching_through_anyhow() {
    let err = load_user(7).expect_err("user 7 does not exist");

    let dyn_err: &(dyn StdError + 'static) = err.as_ref();
    assert!(ers::is(dyn_err, &*NOT_FOUND));
    assert_eq!(
        err.downcast_ref::<Error>().map(Error::code),
        Some(Code::NotFound)
    );
    assert_eq!(err.to_string(), "user 7");
}

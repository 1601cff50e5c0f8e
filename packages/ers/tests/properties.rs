//! Property tests over the catalog and wrap chains

use ers::catalog;
use ers::{Code, Error, Trace};
use proptest::prelude::*;

fn entry() -> impl Strategy<Value = &'static Error> {
    prop::sample::select(catalog::all().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn raise_preserves_classification(entry in entry(), text in ".*") {
        let err = entry.raise(text.as_str());

        prop_assert_eq!(err.own_code(), entry.own_code());
        prop_assert_eq!(err.own_reason(), entry.own_reason());
        prop_assert_eq!(err.own_message(), entry.own_message());
        prop_assert_eq!(err.trace().map(Trace::text), Some(text.as_str()));
        prop_assert!(err.is(entry));
    }

    #[test]
    fn wraps_are_transparent(entry in entry(), depth in 1usize..16, domain in "[a-z]{1,8}") {
        let mut err = entry.raise("root").with_domain(domain.clone());
        for layer in 0..depth {
            err = Error::wrap_traced(err, format!("layer {layer}"));
        }

        prop_assert_eq!(err.own_code(), Code::Wrap);
        prop_assert_eq!(err.code(), entry.own_code());
        prop_assert_eq!(err.reason(), entry.own_reason());
        prop_assert_eq!(err.message(), entry.own_message());
        prop_assert_eq!(err.domain(), domain.as_str());
        prop_assert_eq!(err.chain().count(), depth + 1);
        prop_assert!(err.is(entry));
        prop_assert!(!entry.is(&err));
    }

    #[test]
    fn occurrences_match_only_their_entry(a in entry(), b in entry()) {
        prop_assert_eq!(a.raise("x").is(b), a.own_code() == b.own_code());
    }

    #[test]
    fn status_export_preserves_code_and_message(entry in entry()) {
        let status = Error::wrap(entry.raise("x")).to_status();

        prop_assert_eq!(Code::from(status.code()), entry.own_code());
        prop_assert_eq!(status.message(), entry.own_message());
        let rewrapped = Error::wrap(status);
        prop_assert_eq!(rewrapped.message(), entry.own_message());
    }
}

//! Chain walking predicates
//!
//! Chains are followed through [`std::error::Error::source`], so any error
//! type that exposes its cause participates, classified or not. Only the
//! first argument's chain is ever walked: `is(outer, inner)` can hold while
//! `is(inner, outer)` does not.
//!
//! Chains are built by callers and assumed acyclic.

use crate::error::Error;
use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over an error and its transitive causes
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterate over `err` and every cause below it
#[must_use]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Whether any link of `err`'s chain matches `target`
///
/// A link matches when it is `target` itself, or when it is a classified
/// error with the same classification as `target`.
#[must_use]
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|link| link_matches(link, target))
}

/// First link of `err`'s chain of type `T`
///
/// Clone the result to take a copy of the link's fields.
#[must_use]
pub fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    chain(err).find_map(|link| link.downcast_ref::<T>())
}

fn link_matches(link: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    if same_object(link, target) {
        return true;
    }
    link.downcast_ref::<Error>()
        .is_some_and(|link| link.same_classification(target))
}

// A newtype shares its address with its first field, so the vtable must take
// part. Duplicated vtables can only yield a false negative.
#[allow(ambiguous_wide_pointer_comparisons)]
fn same_object(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    std::ptr::eq(a, b)
}

impl Error {
    /// Whether `other` is a classified error with the same code and reason
    ///
    /// Raw fields are compared; trace, cause, message and domain take no
    /// part in the comparison.
    #[must_use]
    pub fn same_classification(&self, other: &(dyn StdError + 'static)) -> bool {
        other
            .downcast_ref::<Error>()
            .is_some_and(|other| {
                self.own_code() == other.own_code() && self.own_reason() == other.own_reason()
            })
    }

    /// Whether any link of this error's chain matches `target`
    ///
    /// See [`is`].
    #[must_use]
    pub fn is(&self, target: &(dyn StdError + 'static)) -> bool {
        is(self, target)
    }

    /// Iterate over this error and every cause below it
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        chain(self)
    }
}

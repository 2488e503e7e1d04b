//! Causal-chain operations.
//!
//! Everything here takes `&(dyn Error + 'static)` and follows
//! [`Error::source`], so chains may freely mix [`Trackable`] values with
//! errors from any other crate. Chains are walked lazily and are assumed to
//! be finite; a cyclic `source()` implementation makes [`chain`] endless.

use std::error::Error;
use std::iter::FusedIterator;
use std::ptr;

use smallvec::SmallVec;

use crate::Trackable;

/// A materialized causal chain, outermost error first, root cause last.
pub type Stack<'a> = SmallVec<[&'a (dyn Error + 'static); 8]>;

/// Iterator over an error and its causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// The direct cause of `e`, if any.
#[inline]
pub fn unwrap<'a>(e: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    e.source()
}

/// Lazily walk `e` and every cause below it.
#[inline]
pub fn chain<'a>(e: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(e) }
}

/// Collect the whole chain: `e` first, root cause last.
pub fn as_stack<'a>(e: &'a (dyn Error + 'static)) -> Stack<'a> {
    chain(e).collect()
}

/// View `e` as a [`Trackable`] without unwrapping.
#[inline]
fn as_trackable<'a>(e: &'a (dyn Error + 'static)) -> Option<&'a Trackable> {
    e.downcast_ref::<Trackable>()
}

/// True iff `e` itself is a tracked (or checkpoint) error.
pub fn is_tracked(e: &(dyn Error + 'static)) -> bool {
    as_trackable(e).is_some_and(Trackable::is_tracked)
}

/// True iff `e` itself is a checkpoint error.
pub fn is_checkpoint(e: &(dyn Error + 'static)) -> bool {
    as_trackable(e).is_some_and(Trackable::is_checkpoint)
}

/// True iff `e` or any of its causes is tracked.
pub fn has_tracked(e: &(dyn Error + 'static)) -> bool {
    chain(e).any(is_tracked)
}

/// True iff `e` did not come from this crate.
pub fn is_third_party(e: &(dyn Error + 'static)) -> bool {
    as_trackable(e).is_none()
}

/// Report whether `target` appears anywhere in the chain of `e`.
///
/// A link matches when it is the very same object as `target`, or when both
/// are tracked errors with the same identity. Untracked errors therefore
/// only ever match themselves by reference.
pub fn is(e: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let target_id = as_trackable(target).and_then(Trackable::id);

    chain(e).any(|link: &(dyn Error + 'static)| {
        if ptr::addr_eq(link, target) {
            return true;
        }
        match target_id {
            Some(id) => as_trackable(link).and_then(Trackable::id) == Some(id),
            None => false,
        }
    })
}

/// True iff [`is`] holds for every target. Vacuously true for no targets.
pub fn all(e: &(dyn Error + 'static), targets: &[&(dyn Error + 'static)]) -> bool {
    targets.iter().all(|target| is(e, *target))
}

/// True iff [`is`] holds for at least one target. False for no targets.
pub fn any(e: &(dyn Error + 'static), targets: &[&(dyn Error + 'static)]) -> bool {
    targets.iter().any(|target| is(e, *target))
}

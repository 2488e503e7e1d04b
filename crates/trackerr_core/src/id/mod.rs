//! Identity allocation.
//!
//! Every tracked error carries an [`ErrorId`]: the sequence number issued by
//! its realm's [`IdAllocator`], tagged with the [`RealmId`] of that realm.
//! Sequences start at 1 in every realm, and the realm tag keeps identities
//! from different realms apart.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of realm tags. Shared by every realm in the process.
static NEXT_REALM: IdAllocator = IdAllocator::new();

/// Process-unique tag of a [`Realm`](crate::Realm).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct RealmId(NonZeroU64);

impl RealmId {
    /// Issue the next realm tag.
    pub(crate) fn next() -> Self {
        RealmId(NEXT_REALM.next())
    }

    /// The raw tag value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "realm#{}", self.0)
    }
}

/// Identity of a tracked error.
///
/// Two errors are identity-equal iff their `ErrorId`s are equal. An untracked
/// error has no `ErrorId` at all, which is why it never compares equal by
/// identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct ErrorId {
    realm: RealmId,
    seq: NonZeroU64,
}

impl ErrorId {
    pub(crate) const fn new(realm: RealmId, seq: NonZeroU64) -> Self {
        ErrorId { realm, seq }
    }

    /// The realm that issued this identity.
    #[inline]
    pub const fn realm(self) -> RealmId {
        self.realm
    }

    /// The sequence number within the issuing realm (always positive).
    #[inline]
    pub const fn get(self) -> u64 {
        self.seq.get()
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.realm, self.seq)
    }
}

/// Lock-free counter issuing increasing positive integers.
///
/// Safe to call from any number of threads without locking; each increment
/// is a single atomic update, so no value is handed out twice. Values are strictly
/// increasing up to `u64::MAX`. Past that point the counter saturates:
/// every further call returns `u64::MAX`, so uniqueness only holds for the
/// first `u64::MAX` identities. At one identity per nanosecond that takes
/// over five centuries.
#[derive(Debug, Default)]
pub struct IdAllocator {
    issued: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first [`next`](Self::next) returns 1.
    pub const fn new() -> Self {
        IdAllocator {
            issued: AtomicU64::new(0),
        }
    }

    /// Issue the next identity.
    #[inline]
    pub fn next(&self) -> NonZeroU64 {
        let prev = match self.issued.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
            Some(n.saturating_add(1))
        }) {
            Ok(prev) | Err(prev) => prev,
        };
        NonZeroU64::MIN.saturating_add(prev)
    }

    /// How many identities have been issued so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests;

//! Realms: named construction contexts for trackable errors.
//!
//! Each realm owns an [`IdAllocator`] and a process-unique [`RealmId`].
//! Identities minted by one realm never equal identities minted by another,
//! so isolated realms (one per test, say) cannot cross-contaminate.

use std::error::Error;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::id::{ErrorId, IdAllocator, RealmId};
use crate::Trackable;

/// A named source of trackable errors.
///
/// Realms are `Sync`; tracked errors may be minted concurrently from any
/// number of threads, typically while initializing statics.
#[derive(Debug)]
pub struct Realm {
    name: Arc<str>,
    id: RealmId,
    ids: IdAllocator,
}

impl Realm {
    /// Create a realm with a fresh identity sequence.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let id = RealmId::next();
        debug!(realm = %name, %id, "realm created");
        Realm {
            name,
            id,
            ids: IdAllocator::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn id(&self) -> RealmId {
        self.id
    }

    /// Number of identities this realm has minted.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.ids.issued()
    }

    fn next_id(&self) -> ErrorId {
        let id = ErrorId::new(self.id, self.ids.next());
        trace!(realm = %self.name, %id, "identity issued");
        id
    }

    /// Mint a new tracked error.
    ///
    /// Intended for statics and other one-time initialization; call sites
    /// then [`wrap`](Trackable::wrap) the result with their own causes.
    pub fn track(&self, message: impl Into<Arc<str>>) -> Trackable {
        Trackable::tracked(self.next_id(), message)
    }

    /// Mint a new tracked checkpoint error.
    pub fn checkpoint(&self, message: impl Into<Arc<str>>) -> Trackable {
        Trackable::checkpoint(self.next_id(), message)
    }

    /// Create an error without an identity.
    #[expect(
        clippy::unused_self,
        reason = "every constructor goes through a realm"
    )]
    pub fn untracked(&self, message: impl Into<Arc<str>>) -> Trackable {
        Trackable::untracked(message)
    }

    /// Create an error without an identity that wraps `cause`.
    #[expect(
        clippy::unused_self,
        reason = "every constructor goes through a realm"
    )]
    pub fn wrap<E>(&self, cause: E, message: impl Into<Arc<str>>) -> Trackable
    where
        E: Error + Send + Sync + 'static,
    {
        Trackable::wrapping(cause, message)
    }
}

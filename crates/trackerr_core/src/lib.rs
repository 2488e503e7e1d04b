//! Core model for identifiable, causally-chained errors.
//!
//! - [`IdAllocator`] issues identities, one atomic counter per realm
//! - [`Realm`] is the construction context every tracked error comes from
//! - [`Trackable`] is the immutable error value (tracked, checkpoint, or untracked)
//! - [`chain`] walks causes through `std::error::Error::source`, so third-party
//!   errors participate in every operation
//!
//! # Identity
//!
//! Identity is what makes two errors "the same error", independent of their
//! message text and of anything wrapped around them:
//!
//! ```text
//! let realm = Realm::new("storage");
//! let not_found = realm.track("record not found");
//!
//! let err = not_found.because("key 42 missing from index");
//! assert!(chain::is(&err, &not_found));
//! ```

pub mod chain;
mod id;
mod realm;
mod trackable;

pub use chain::{
    all, any, as_stack, has_tracked, is, is_checkpoint, is_third_party, is_tracked, Chain, Stack,
};
pub use id::{ErrorId, IdAllocator, RealmId};
pub use realm::Realm;
pub use trackable::{Kind, SharedError, Trackable};

//! The trackable error value.
//!
//! A [`Trackable`] is immutable once built. "Wrapping" clones the value and
//! swaps in a new cause, so a sentinel can be wrapped by any number of call
//! sites, on any number of threads, without one wrap leaking into another.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::ErrorId;

/// A shareable, thread-safe error used as a cause.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// What kind of trackable error a value is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    /// No identity; comparable only by reference.
    Untracked,
    /// Identity-bearing error.
    Tracked(ErrorId),
    /// Identity-bearing error marking a named waypoint in a causal chain.
    Checkpoint(ErrorId),
}

impl Kind {
    /// The identity, if this kind carries one.
    #[inline]
    pub fn id(self) -> Option<ErrorId> {
        match self {
            Kind::Untracked => None,
            Kind::Tracked(id) | Kind::Checkpoint(id) => Some(id),
        }
    }
}

/// An error with an optional stable identity and an optional cause.
///
/// Renders as `"<message>: <cause>"` when a cause is present, otherwise as
/// just `"<message>"`. The cause is exposed through [`Error::source`].
///
/// # Equality
///
/// `PartialEq` compares identities only: two values are equal iff both are
/// tracked and carry the same [`ErrorId`]. Messages and causes are ignored.
/// Untracked values are unequal to everything, including themselves, so the
/// type does not implement `Eq`.
#[derive(Clone)]
pub struct Trackable {
    kind: Kind,
    message: Arc<str>,
    cause: Option<SharedError>,
}

impl Trackable {
    pub(crate) fn tracked(id: ErrorId, message: impl Into<Arc<str>>) -> Self {
        Trackable {
            kind: Kind::Tracked(id),
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn checkpoint(id: ErrorId, message: impl Into<Arc<str>>) -> Self {
        Trackable {
            kind: Kind::Checkpoint(id),
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error without an identity.
    pub fn untracked(message: impl Into<Arc<str>>) -> Self {
        Trackable {
            kind: Kind::Untracked,
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error without an identity that wraps `cause`.
    ///
    /// The cause does not have to form part of `message`; it is appended
    /// when the error is displayed.
    pub fn wrapping<E>(cause: E, message: impl Into<Arc<str>>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Trackable::untracked(message).wrap(cause)
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The identity, or `None` for untracked errors.
    #[inline]
    pub fn id(&self) -> Option<ErrorId> {
        self.kind.id()
    }

    /// The message, without the cause.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// True for tracked and checkpoint errors.
    #[inline]
    pub fn is_tracked(&self) -> bool {
        !matches!(self.kind, Kind::Untracked)
    }

    #[inline]
    pub fn is_checkpoint(&self) -> bool {
        matches!(self.kind, Kind::Checkpoint(_))
    }

    /// True iff both errors are tracked with the same identity.
    #[inline]
    pub fn same_identity(&self, other: &Trackable) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Return a copy of this error with its cause replaced by `cause`.
    ///
    /// Identity, message, and checkpoint flag are preserved; `self` is
    /// left untouched. A [`SharedError`] cause is stored as-is rather than
    /// boxed a second time, so the error inside it stays visible to the
    /// chain operations.
    #[must_use]
    pub fn wrap<E>(&self, cause: E) -> Trackable
    where
        E: Error + Send + Sync + 'static,
    {
        match (&cause as &dyn Any).downcast_ref::<SharedError>() {
            Some(shared) => self.wrap_shared(Arc::clone(shared)),
            None => self.wrap_shared(Arc::new(cause)),
        }
    }

    /// Like [`wrap`](Self::wrap), for a cause that is already shared.
    #[must_use]
    pub fn wrap_shared(&self, cause: SharedError) -> Trackable {
        Trackable {
            kind: self.kind,
            message: Arc::clone(&self.message),
            cause: Some(cause),
        }
    }

    /// Wrap an untracked error built from `message`.
    #[must_use]
    pub fn because(&self, message: impl Into<Arc<str>>) -> Trackable {
        self.wrap(Trackable::untracked(message))
    }

    /// Wrap `cause` behind an untracked explanatory error built from
    /// `message`.
    #[must_use]
    pub fn because_of<E>(&self, cause: E, message: impl Into<Arc<str>>) -> Trackable
    where
        E: Error + Send + Sync + 'static,
    {
        self.wrap(Trackable::wrapping(cause, message))
    }

    /// Convert into a [`SharedError`].
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}

impl PartialEq for Trackable {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl fmt::Display for Trackable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl fmt::Debug for Trackable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Trackable");
        match self.kind {
            Kind::Untracked => s.field("kind", &"untracked"),
            Kind::Tracked(id) => s.field("tracked", &id),
            Kind::Checkpoint(id) => s.field("checkpoint", &id),
        };
        s.field("message", &&*self.message);
        if let Some(cause) = &self.cause {
            s.field("cause", cause);
        }
        s.finish()
    }
}

impl Error for Trackable {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

//! Referenceable errors and readable stack traces.
//!
//! Errors minted with [`track`] (or [`track!`]) carry a stable identity.
//! Wrapping one with a cause keeps that identity, so callers can ask
//! "is this the not-found error?" with [`is`] regardless of message text or
//! of how many layers were wrapped around it:
//!
//! ```text
//! static NOT_FOUND: LazyLock<Trackable> = LazyLock::new(|| trackerr::track("record not found"));
//!
//! fn load(key: u64) -> Result<Record, Trackable> {
//!     Err(NOT_FOUND.because(format!("key {key} missing from index")))
//! }
//!
//! let err = load(42).unwrap_err();
//! assert!(trackerr::is(&err, &*NOT_FOUND));
//! print!("{}", trackerr::error_stack(Some(&err)));
//! //   record not found
//! // ⤷ key 42 missing from index
//! ```
//!
//! Everything here goes through a process-wide default [`Realm`]. Tests that
//! want a deterministic identity sequence can create their own realm and use
//! its methods instead.

mod macros;

use std::error::Error;
use std::sync::{Arc, LazyLock, Once};

pub use trackerr_core::chain::{self, unwrap};
pub use trackerr_core::{
    all, any, as_stack, has_tracked, is, is_checkpoint, is_third_party, is_tracked, Chain,
    ErrorId, IdAllocator, Kind, Realm, RealmId, SharedError, Stack, Trackable,
};
pub use trackerr_render::{
    debug, debug_panic, error_stack, error_without_cause, payload_to_error, ColorMode,
    DebugPrinter, StackRenderer, DEBUG_HEADER, NIL_ERROR,
};

static GLOBAL_REALM: LazyLock<Realm> = LazyLock::new(|| Realm::new("global"));

/// Placeholder for unimplemented code paths.
///
/// Handy when working stepwise or test-first.
pub static ERR_TODO: LazyLock<Trackable> = LazyLock::new(|| track("TODO: Implementation needed"));

/// Marks the site of a known bug.
pub static ERR_BUG: LazyLock<Trackable> = LazyLock::new(|| track("BUG: Fix needed"));

/// Raised when a sanity check fails.
pub static ERR_INSANE: LazyLock<Trackable> = LazyLock::new(|| track("Sanity check!!"));

/// The process-wide default realm.
pub fn global_realm() -> &'static Realm {
    &GLOBAL_REALM
}

/// Mint a new tracked error in the default realm.
///
/// Best called once per error kind, to initialize a static that call sites
/// then wrap.
pub fn track(message: impl Into<Arc<str>>) -> Trackable {
    GLOBAL_REALM.track(message)
}

/// Mint a new tracked checkpoint error in the default realm.
pub fn checkpoint(message: impl Into<Arc<str>>) -> Trackable {
    GLOBAL_REALM.checkpoint(message)
}

/// Create an error without an identity.
pub fn untracked(message: impl Into<Arc<str>>) -> Trackable {
    GLOBAL_REALM.untracked(message)
}

/// Create an error without an identity that wraps `cause`.
pub fn wrap<E>(cause: E, message: impl Into<Arc<str>>) -> Trackable
where
    E: Error + Send + Sync + 'static,
{
    GLOBAL_REALM.wrap(cause, message)
}

/// Environment variable read by [`init_tracing`], checked before `RUST_LOG`.
pub const LOG_ENV: &str = "TRACKERR_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for this library's events.
///
/// Does nothing unless [`LOG_ENV`] or `RUST_LOG` is set, e.g.
/// `TRACKERR_LOG=trackerr_core=trace` to see every identity as it is issued.
/// Directives that fail to parse are skipped, and targets not named fall
/// back to `warn`. Safe to call multiple times, and a no-op when the host
/// application already installed a global subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(directives);

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

#[cfg(test)]
mod tests;

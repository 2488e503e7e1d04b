//! `format!`-style constructors for the default realm.
//!
//! The message is formatted once, eagerly, when the error is created.

/// Mint a tracked error with a formatted message.
///
/// ```text
/// let e = track!("shard {} unavailable", shard);
/// ```
#[macro_export]
macro_rules! track {
    ($($arg:tt)+) => {
        $crate::track(::std::format!($($arg)+))
    };
}

/// Mint a tracked checkpoint error with a formatted message.
#[macro_export]
macro_rules! checkpoint {
    ($($arg:tt)+) => {
        $crate::checkpoint(::std::format!($($arg)+))
    };
}

/// Create an untracked error with a formatted message.
#[macro_export]
macro_rules! untracked {
    ($($arg:tt)+) => {
        $crate::untracked(::std::format!($($arg)+))
    };
}

/// Wrap a cause in an untracked error with a formatted message.
///
/// ```text
/// let e = wrap!(io_err, "reading {}", path.display());
/// ```
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($arg:tt)+) => {
        $crate::wrap($cause, ::std::format!($($arg)+))
    };
}

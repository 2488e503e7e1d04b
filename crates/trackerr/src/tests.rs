use super::*;

use pretty_assertions::assert_eq;

#[test]
fn global_realm_is_shared() {
    let a = track("a");
    let b = track("b");

    assert_eq!(a.id().map(ErrorId::realm), Some(global_realm().id()));
    assert_eq!(b.id().map(ErrorId::realm), Some(global_realm().id()));
    assert!(b.id() > a.id());
    assert_eq!(global_realm().name(), "global");
}

#[test]
fn free_constructors() {
    let cp = checkpoint("waypoint");
    assert!(cp.is_checkpoint());

    let plain = untracked("plain");
    assert!(plain.id().is_none());

    let wrapped = wrap(plain, "outer");
    assert_eq!(wrapped.to_string(), "outer: plain");
}

#[test]
fn macros_format_eagerly() {
    let shard = 3;
    let e = crate::track!("shard {shard} unavailable");
    assert_eq!(e.message(), "shard 3 unavailable");
    assert!(e.is_tracked());

    let cp = crate::checkpoint!("step {}", 2);
    assert_eq!(cp.message(), "step 2");
    assert!(cp.is_checkpoint());

    let plain = crate::untracked!("no {}", "identity");
    assert_eq!(plain.message(), "no identity");

    let wrapped = crate::wrap!(plain, "context {}", 1);
    assert_eq!(wrapped.to_string(), "context 1: no identity");
}

#[test]
fn stock_sentinels_are_distinct() {
    assert!(ERR_TODO.is_tracked());
    assert!(ERR_BUG.is_tracked());
    assert!(ERR_INSANE.is_tracked());

    assert!(!is(&*ERR_TODO, &*ERR_BUG));
    assert!(!is(&*ERR_BUG, &*ERR_INSANE));

    let e = ERR_TODO.because("parser not written yet");
    assert!(is(&e, &*ERR_TODO));
    assert_eq!(ERR_TODO.message(), "TODO: Implementation needed");
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    assert_eq!(LOG_ENV, "TRACKERR_LOG");
}

#[test]
fn debug_reports_bytes_written() {
    let e = untracked("visible in test output");
    let written = debug(Some(&e)).ok();
    assert_eq!(
        written,
        Some("[Debugging error]\n  visible in test output\n".len())
    );
    assert_eq!(debug(None).ok(), Some("[Debugging error] nil error\n".len()));
}

#[test]
fn debug_panic_recovers_sentinel() {
    let mut caught = None;
    let result = debug_panic::<()>(Some(&mut caught), || {
        std::panic::panic_any(ERR_INSANE.because("negative length"))
    });

    assert!(result.is_none());
    let matched = caught.map(|err| is(&*err, &*ERR_INSANE));
    assert_eq!(matched, Some(true));
}

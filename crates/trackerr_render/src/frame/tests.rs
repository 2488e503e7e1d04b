use super::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use trackerr_core::Realm;

#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
struct Context {
    context: String,
    #[source]
    source: Leaf,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Leaf(String);

/// Wraps a cause without mentioning it.
#[derive(Debug, thiserror::Error)]
#[error("opaque wrapper")]
struct Silent {
    #[source]
    source: Leaf,
}

#[test]
fn strips_cause_suffix() {
    let e = Context {
        context: "read failed".into(),
        source: Leaf("permission denied".into()),
    };
    assert_eq!(e.to_string(), "read failed: permission denied");
    assert_eq!(error_without_cause(&e), "read failed");
}

#[test]
fn no_cause_is_unchanged() {
    let e = Leaf("  padded: ".into());
    assert_eq!(error_without_cause(&e), "  padded: ");
}

#[test]
fn cause_not_in_text_is_only_trimmed() {
    let e = Silent {
        source: Leaf("hidden".into()),
    };
    assert_eq!(error_without_cause(&e), "opaque wrapper");
}

#[test]
fn trackable_uses_own_message() {
    let realm = Realm::new("test");
    let e = realm.track("save failed").because("disk full");

    assert_eq!(e.to_string(), "save failed: disk full");
    assert_eq!(error_without_cause(&e), "save failed");
}

#[test]
fn trackable_message_is_not_trimmed() {
    let e = Trackable::untracked("ends with colon:");
    assert_eq!(error_without_cause(&e), "ends with colon:");
}

#[test]
fn only_one_trailing_colon_removed() {
    let e = Context {
        context: "odd:".into(),
        source: Leaf("cause".into()),
    };
    assert_eq!(error_without_cause(&e), "odd:");
}

proptest! {
    #[test]
    fn strips_any_conventional_suffix(own in "[a-z][a-z ]{0,16}[a-z]", cause in "[a-z][a-z ]{0,16}") {
        let e = Context {
            context: own.clone(),
            source: Leaf(cause),
        };
        prop_assert_eq!(error_without_cause(&e), own);
    }
}

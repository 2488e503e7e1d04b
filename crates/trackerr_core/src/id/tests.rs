use super::*;

use rayon::prelude::*;
use std::collections::HashSet;

#[test]
fn allocator_starts_at_one() {
    let ids = IdAllocator::new();
    assert_eq!(ids.next().get(), 1);
    assert_eq!(ids.next().get(), 2);
    assert_eq!(ids.next().get(), 3);
    assert_eq!(ids.issued(), 3);
}

#[test]
fn allocator_is_strictly_increasing() {
    let ids = IdAllocator::new();
    let mut last = 0;
    for _ in 0..1_000 {
        let next = ids.next().get();
        assert!(next > last, "{next} should follow {last}");
        last = next;
    }
}

#[test]
fn allocator_saturates_instead_of_wrapping() {
    let ids = IdAllocator {
        issued: AtomicU64::new(u64::MAX - 2),
    };

    assert_eq!(ids.next().get(), u64::MAX - 1);
    assert_eq!(ids.next().get(), u64::MAX);
    assert_eq!(ids.next().get(), u64::MAX);
    assert_eq!(ids.issued(), u64::MAX);
}

#[test]
fn concurrent_allocation_never_duplicates() {
    let ids = IdAllocator::new();

    let issued: Vec<u64> = (0..10_000)
        .into_par_iter()
        .map(|_| ids.next().get())
        .collect();

    let unique: HashSet<u64> = issued.iter().copied().collect();
    assert_eq!(unique.len(), issued.len(), "duplicate identity issued");
    assert_eq!(ids.issued(), 10_000);
    assert_eq!(unique.iter().copied().max(), Some(10_000));
    assert_eq!(unique.iter().copied().min(), Some(1));
}

#[test]
fn realm_ids_are_unique() {
    let a = RealmId::next();
    let b = RealmId::next();
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn error_ids_differ_across_realms() {
    let seq = NonZeroU64::MIN;
    let a = ErrorId::new(RealmId::next(), seq);
    let b = ErrorId::new(RealmId::next(), seq);

    assert_eq!(a.get(), b.get());
    assert_ne!(a, b);
}

#[test]
fn error_id_display() {
    let realm = RealmId::next();
    let id = ErrorId::new(realm, NonZeroU64::MIN);
    assert_eq!(id.to_string(), format!("realm#{}/1", realm.get()));
}

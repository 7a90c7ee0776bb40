use ratakit::ui::core::ScrollLock;

#[test]
fn test_new_lock_is_unlocked() {
    let lock = ScrollLock::new();
    assert!(!lock.is_locked());
    assert_eq!(lock.holders(), 0);
}

#[test]
fn test_guard_locks_until_dropped() {
    let lock = ScrollLock::new();
    let guard = lock.acquire();
    assert!(lock.is_locked());
    drop(guard);
    assert!(!lock.is_locked());
}

#[test]
fn test_lock_counts_multiple_holders() {
    let lock = ScrollLock::new();
    let first = lock.acquire();
    let second = lock.acquire();
    assert_eq!(lock.holders(), 2);

    // Releasing one hold must not unlock while another overlay is open
    drop(first);
    assert!(lock.is_locked());
    drop(second);
    assert!(!lock.is_locked());
}

#[test]
fn test_clones_share_state() {
    let lock = ScrollLock::new();
    let view = lock.clone();
    let guard = lock.acquire();
    assert!(view.is_locked());
    drop(guard);
    assert!(!view.is_locked());
}

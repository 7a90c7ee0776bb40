//! Scroll suppression handle shared between a host and its overlay components.
//!
//! While any overlay holds a guard, the host must not process scroll input.
//! The lock counts holders, so stacked overlays compose; each guard releases
//! its hold when dropped, which covers every exit path including teardown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Reference-counted scroll lock. The host owns one and hands clones to any
/// component that needs to suppress scrolling while visible.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold on the lock. Scrolling stays suppressed until the returned
    /// guard is dropped.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether any holder currently suppresses scrolling
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }

    /// Number of active holds
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// RAII hold on a [`ScrollLock`]; releases on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

use ratakit::ui::components::toast::{Toast, ToastData, ToastKind, ToastManager, ToastState};
use ratakit::ui::core::{Action, Component};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_full_lifecycle_with_auto_dismiss() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let data = ToastData::new("1", "Saved").kind(ToastKind::Success).duration_ms(1000);
    let mut toast = Toast::new(data, t0).on_close(on_close);

    assert_eq!(toast.state(), ToastState::Hidden);
    assert_eq!(toast.tick(at(t0, 5)), ToastState::Hidden);
    assert_eq!(toast.tick(at(t0, 10)), ToastState::Entering);
    assert_eq!(toast.tick(at(t0, 309)), ToastState::Entering);
    assert_eq!(toast.tick(at(t0, 310)), ToastState::Visible);
    assert_eq!(toast.tick(at(t0, 999)), ToastState::Visible);

    // Auto-dismiss starts the close sequence at the duration deadline
    assert_eq!(toast.tick(at(t0, 1000)), ToastState::Exiting);
    assert_eq!(toast.tick(at(t0, 1299)), ToastState::Exiting);
    assert_eq!(closed.load(Ordering::SeqCst), 0);

    assert_eq!(toast.tick(at(t0, 1300)), ToastState::Removed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);

    // Terminal state: further ticks never refire
    assert_eq!(toast.tick(at(t0, 5000)), ToastState::Removed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_large_tick_jump_cascades_to_removed() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let data = ToastData::new("1", "gone").duration_ms(100);
    let mut toast = Toast::new(data, t0).on_close(on_close);

    // One tick far past every deadline resolves the whole lifecycle
    assert_eq!(toast.tick(at(t0, 10_000)), ToastState::Removed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_zero_duration_never_auto_dismisses() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let data = ToastData::new("1", "sticky").duration_ms(0);
    let mut toast = Toast::new(data, t0).on_close(on_close);

    assert_eq!(toast.tick(at(t0, 60_000)), ToastState::Visible);
    assert_eq!(closed.load(Ordering::SeqCst), 0);

    // Explicit close still works
    toast.close(at(t0, 60_000));
    assert_eq!(toast.state(), ToastState::Exiting);
    assert_eq!(toast.tick(at(t0, 60_299)), ToastState::Exiting);
    assert_eq!(toast.tick(at(t0, 60_300)), ToastState::Removed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_manual_close_during_entry() {
    let t0 = Instant::now();
    let data = ToastData::new("1", "brief").duration_ms(5000);
    let mut toast = Toast::new(data, t0);

    toast.tick(at(t0, 5));
    toast.close(at(t0, 5));
    assert_eq!(toast.state(), ToastState::Exiting);

    assert_eq!(toast.tick(at(t0, 304)), ToastState::Exiting);
    assert_eq!(toast.tick(at(t0, 305)), ToastState::Removed);
}

#[test]
fn test_close_is_idempotent() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let data = ToastData::new("1", "once").duration_ms(0);
    let mut toast = Toast::new(data, t0).on_close(on_close);

    toast.tick(at(t0, 400));
    toast.close(at(t0, 400));
    toast.close(at(t0, 500)); // ignored, first request wins

    assert_eq!(toast.tick(at(t0, 699)), ToastState::Exiting);
    assert_eq!(toast.tick(at(t0, 700)), ToastState::Removed);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drop_before_deadline_never_fires_callback() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let data = ToastData::new("1", "torn down").duration_ms(1000);
    let mut toast = Toast::new(data, t0).on_close(on_close);

    toast.tick(at(t0, 500));
    drop(toast);

    assert_eq!(closed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_manager_evicts_and_reports_closed() {
    let t0 = Instant::now();
    let mut manager = ToastManager::new();
    manager.push(ToastData::new("a", "first").duration_ms(100), t0);
    manager.push(ToastData::new("b", "second").duration_ms(200), t0);
    assert_eq!(manager.len(), 2);

    // Nothing closes before the first deadline + exit animation
    assert!(manager.tick(at(t0, 399)).is_empty());
    assert_eq!(manager.len(), 2);

    let actions = manager.tick(at(t0, 400));
    assert_eq!(actions, vec![Action::ToastClosed("a".to_string())]);
    assert_eq!(manager.len(), 1);
    assert!(manager.get("a").is_none());
    assert!(manager.get("b").is_some());

    let actions = manager.tick(at(t0, 500));
    assert_eq!(actions, vec![Action::ToastClosed("b".to_string())]);
    assert!(manager.is_empty());
}

#[test]
fn test_manager_dismiss_by_id() {
    let t0 = Instant::now();
    let mut manager = ToastManager::new();
    manager.push(ToastData::new("a", "sticky").duration_ms(0), t0);

    assert!(!manager.dismiss("unknown", at(t0, 10)));
    assert!(manager.dismiss("a", at(t0, 10)));

    let actions = manager.tick(at(t0, 310));
    assert_eq!(actions, vec![Action::ToastClosed("a".to_string())]);
    assert!(manager.is_empty());
}

#[test]
fn test_manager_concurrent_toasts_are_independent() {
    let t0 = Instant::now();
    let mut manager = ToastManager::new();
    manager.push(ToastData::new("a", "one").duration_ms(0), t0);
    manager.push(ToastData::new("b", "two").duration_ms(0), at(t0, 50));

    manager.dismiss("a", at(t0, 100));
    manager.tick(at(t0, 200));

    // Dismissing one toast leaves the other's lifecycle untouched
    assert_eq!(manager.get("a").map(Toast::state), Some(ToastState::Exiting));
    assert_eq!(manager.get("b").map(Toast::state), Some(ToastState::Entering));
}

#[test]
fn test_notify_generates_unique_ids_with_default_duration() {
    let t0 = Instant::now();
    let mut manager = ToastManager::new();
    manager.set_default_duration(Duration::from_millis(100));

    let first = manager.notify(ToastKind::Info, "one", t0);
    let second = manager.notify(ToastKind::Error, "two", t0);
    assert_ne!(first, second);
    assert_eq!(manager.len(), 2);

    let actions = manager.tick(at(t0, 400));
    assert_eq!(actions.len(), 2);
    assert!(manager.is_empty());
}

#[test]
fn test_newest_closable_skips_unclosable() {
    let t0 = Instant::now();
    let mut manager = ToastManager::new();
    manager.push(ToastData::new("a", "old").duration_ms(0), t0);
    manager.push(ToastData::new("b", "pinned").duration_ms(0).closable(false), t0);

    assert_eq!(manager.newest_closable(), Some("a"));

    manager.dismiss("a", at(t0, 10));
    assert_eq!(manager.newest_closable(), None);
}

#[test]
fn test_manager_push_with_callback() {
    let t0 = Instant::now();
    let (closed, on_close) = counter();
    let mut manager = ToastManager::new();
    manager.push_with(ToastData::new("a", "cb").duration_ms(100), t0, on_close);

    manager.tick(at(t0, 399));
    assert_eq!(closed.load(Ordering::SeqCst), 0);
    manager.tick(at(t0, 400));
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratakit::ui::components::{MenuItem, SidebarMenu};
use ratakit::ui::core::{Action, Component, ScrollLock};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_open_acquires_scroll_lock() {
    let t0 = Instant::now();
    let lock = ScrollLock::new();
    let mut menu = SidebarMenu::new(lock.clone());

    assert!(!menu.is_mounted());
    menu.set_open(true, t0);
    assert!(menu.is_open());
    assert!(menu.is_mounted());
    assert!(lock.is_locked());
}

#[test]
fn test_close_releases_lock_but_stays_mounted_through_exit() {
    let t0 = Instant::now();
    let lock = ScrollLock::new();
    let mut menu = SidebarMenu::new(lock.clone());

    menu.set_open(true, t0);
    menu.set_open(false, at(t0, 100));

    // Lock is restored at close start, before the exit animation ends
    assert!(!menu.is_open());
    assert!(!lock.is_locked());
    assert!(menu.is_mounted());

    menu.tick(at(t0, 399));
    assert!(menu.is_mounted());
    menu.tick(at(t0, 400));
    assert!(!menu.is_mounted());
}

#[test]
fn test_rapid_toggling_settles_without_leaking_lock() {
    let t0 = Instant::now();
    let lock = ScrollLock::new();
    let mut menu = SidebarMenu::new(lock.clone());

    menu.set_open(true, t0);
    menu.set_open(false, at(t0, 10));
    menu.set_open(true, at(t0, 20));
    menu.set_open(false, at(t0, 30));

    menu.tick(at(t0, 330));
    assert!(!menu.is_mounted());
    assert!(!lock.is_locked());
    assert_eq!(lock.holders(), 0);
}

#[test]
fn test_reopen_during_exit_keeps_panel_mounted() {
    let t0 = Instant::now();
    let lock = ScrollLock::new();
    let mut menu = SidebarMenu::new(lock.clone());

    menu.set_open(true, t0);
    menu.set_open(false, at(t0, 500));
    menu.set_open(true, at(t0, 600));

    menu.tick(at(t0, 2000));
    assert!(menu.is_open());
    assert!(menu.is_mounted());
    assert!(lock.is_locked());
}

#[test]
fn test_drop_releases_lock() {
    let t0 = Instant::now();
    let lock = ScrollLock::new();
    let mut menu = SidebarMenu::new(lock.clone());
    menu.set_open(true, t0);
    assert!(lock.is_locked());

    drop(menu);
    assert!(!lock.is_locked());
}

#[test]
fn test_escape_requests_close() {
    let t0 = Instant::now();
    let mut menu = SidebarMenu::new(ScrollLock::new());
    menu.set_open(true, t0);

    assert_eq!(menu.handle_key_events(key(KeyCode::Esc)), Action::CloseMenu);
}

#[test]
fn test_keys_ignored_while_closed() {
    let mut menu = SidebarMenu::new(ScrollLock::new());
    assert_eq!(menu.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(menu.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_leaf_activation_fires_both_callbacks_once() {
    let t0 = Instant::now();
    let leaf_clicks = Arc::new(AtomicUsize::new(0));
    let shared_clicks = Arc::new(AtomicUsize::new(0));

    let leaf_counter = Arc::clone(&leaf_clicks);
    let mut items = vec![
        MenuItem::new("settings", "Settings").children(vec![MenuItem::new("profile", "Profile")
            .children(vec![MenuItem::new("name", "Display name").on_click(move || {
                leaf_counter.fetch_add(1, Ordering::SeqCst);
            })])]),
        MenuItem::new("other", "Other").children(vec![MenuItem::new("child", "Child")]),
    ];
    items[0].expanded = true;
    items[0].children[0].expanded = true;

    let mut menu = SidebarMenu::new(ScrollLock::new());
    menu.set_items(items);
    let shared_counter = Arc::clone(&shared_clicks);
    menu.on_item_click(move |item| {
        assert_eq!(item.id, "name");
        shared_counter.fetch_add(1, Ordering::SeqCst);
    });
    menu.set_open(true, t0);

    // Rows: settings, profile, name, other. Move to the depth-2 leaf.
    menu.handle_key_events(key(KeyCode::Down));
    menu.handle_key_events(key(KeyCode::Down));
    let action = menu.handle_key_events(key(KeyCode::Enter));

    assert_eq!(action, Action::MenuItemActivated("name".to_string()));
    assert_eq!(leaf_clicks.load(Ordering::SeqCst), 1);
    assert_eq!(shared_clicks.load(Ordering::SeqCst), 1);

    // Sibling expansion states are untouched by leaf activation
    assert!(!menu.items()[1].expanded);
}

#[test]
fn test_branch_activation_toggles_only_that_node() {
    let t0 = Instant::now();
    let mut menu = SidebarMenu::new(ScrollLock::new());
    menu.set_items(vec![
        MenuItem::new("a", "A").children(vec![MenuItem::new("a1", "A1")]),
        MenuItem::new("b", "B").children(vec![MenuItem::new("b1", "B1")]),
    ]);
    menu.set_open(true, t0);

    // Activate the first branch: expands it, leaves the sibling collapsed
    let action = menu.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::None);
    assert!(menu.items()[0].expanded);
    assert!(!menu.items()[1].expanded);

    // Activating again collapses it (accordion per node)
    menu.handle_key_events(key(KeyCode::Enter));
    assert!(!menu.items()[0].expanded);
}

//! Constants used throughout the library
//!
//! This module centralizes timing and layout values so components and tests
//! agree on the same numbers.

use std::time::Duration;

// Animation timing
/// Delay between mounting a toast and the start of its entry animation.
pub const ENTER_DELAY: Duration = Duration::from_millis(10);
/// Length of every enter/exit transition (toast slide, menu slide).
pub const TRANSITION: Duration = Duration::from_millis(300);
/// Auto-dismiss duration applied when a toast doesn't specify one.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

// Event loop
/// Tick cadence of the event handler when no input is pending.
pub const TICK_INTERVAL_MS: u64 = 50;

// Layout
/// Horizontal indentation added per tree depth level in the sidebar menu.
pub const INDENT_PER_LEVEL: u16 = 2;
/// Width of a rendered toast, borders included.
pub const TOAST_WIDTH: u16 = 40;
/// Height of a rendered toast, borders included.
pub const TOAST_HEIGHT: u16 = 3;
pub const MENU_DEFAULT_WIDTH: u16 = 32;
pub const MENU_MIN_WIDTH: u16 = 20;
pub const MENU_MAX_WIDTH: u16 = 60;

// Config bounds
/// Upper bound for a configured default toast duration (10 minutes).
pub const TOAST_DURATION_MAX_MS: u64 = 600_000;
pub const TOAST_MAX_VISIBLE_LIMIT: usize = 16;

// UI text
pub const MENU_DEFAULT_TITLE: &str = "Menu";
pub const MENU_FOOTER_HINT: &str = "Esc or click outside to close";

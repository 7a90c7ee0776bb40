//! ratakit - Reusable TUI components for Ratatui
//!
//! A small component library: toast notifications with a timed lifecycle, a
//! slide-in sidebar menu with a recursive collapsible tree, and text inputs
//! with password/clear affordances. Components implement a shared
//! [`ui::core::Component`] trait and communicate with their host through
//! [`ui::core::Action`] values; all time-driven behavior advances through
//! explicit `tick(now)` calls, never hidden timers.
//!
//! # Modules
//!
//! * [`config`] - Configuration management for the showcase binary
//! * [`constants`] - Shared timing and layout values
//! * [`icons`] - Themed glyph service (emoji/unicode/ascii)
//! * [`logger`] - In-memory logging plus file logging setup
//! * [`ui`] - Components, core machinery, and the showcase host

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the component types for convenient access
pub use ui::components::{Input, InputSize, MenuItem, SidebarMenu, Toast, ToastData, ToastKind, ToastManager, ToastState};
pub use ui::core::{Action, Component, ScrollLock};

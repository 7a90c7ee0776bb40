//! Reusable UI components

pub mod input;
pub mod menu_item;
pub mod sidebar_menu;
pub mod toast;

// Component exports
pub use input::{Input, InputSize};
pub use menu_item::{MenuItem, MenuRow};
pub use sidebar_menu::SidebarMenu;
pub use toast::{Toast, ToastData, ToastKind, ToastManager, ToastState};



#[path = "components/sidebar_menu.rs"]
mod sidebar_menu;

#[path = "components/toast.rs"]
mod toast;

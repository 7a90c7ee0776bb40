use crate::ui::components::toast::ToastData;

/// Messages emitted by components and routed through the host's action
/// pipeline. Components consume what they own and pass the rest through.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Sidebar menu
    OpenMenu,
    CloseMenu,
    /// A leaf menu item was activated; payload is its id
    MenuItemActivated(String),

    // Input
    /// The displayed value changed; payload is the full new value
    InputChanged(String),

    // Toasts
    ShowToast(ToastData),
    /// Request the close sequence for the toast with this id
    DismissToast(String),
    /// A toast finished its exit animation and left the collection
    ToastClosed(String),

    // App control
    ShowLogs(bool),
    Quit,
    None,
}

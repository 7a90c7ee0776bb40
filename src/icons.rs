//! Icon service for managing different icon themes
//!
//! Components never hardcode glyphs; they ask the service so the whole UI can
//! be switched between emoji, Unicode and ASCII rendering at once.

use serde::{Deserialize, Serialize};

use crate::ui::components::toast::ToastKind;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Unicode
    }
}

/// Toast notification icons, one per kind
#[derive(Debug, Clone)]
pub struct ToastIcons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

/// Tree expansion chevrons for the sidebar menu
#[derive(Debug, Clone)]
pub struct TreeIcons {
    pub expanded: &'static str,
    pub collapsed: &'static str,
}

/// Input affordance glyphs
#[derive(Debug, Clone)]
pub struct InputIcons {
    /// Shown while the value is masked (press to reveal)
    pub reveal: &'static str,
    /// Shown while the value is revealed (press to mask again)
    pub conceal: &'static str,
    pub clear: &'static str,
}

/// Miscellaneous UI glyphs
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub close: &'static str,
    pub menu: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub toast: ToastIcons,
    pub tree: TreeIcons,
    pub input: InputIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Glyph for a toast kind in the current theme
    #[must_use]
    pub fn toast_icon(&self, kind: ToastKind) -> &'static str {
        let icons = self.icons().toast;
        match kind {
            ToastKind::Success => icons.success,
            ToastKind::Error => icons.error,
            ToastKind::Warning => icons.warning,
            ToastKind::Info => icons.info,
        }
    }

    /// Chevron for a tree node, depending on its expansion state
    #[must_use]
    pub fn chevron(&self, expanded: bool) -> &'static str {
        let icons = self.icons().tree;
        if expanded {
            icons.expanded
        } else {
            icons.collapsed
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                success: "✅",
                error: "❌",
                warning: "⚠️",
                info: "💡",
            },
            tree: TreeIcons {
                expanded: "▼",
                collapsed: "▶",
            },
            input: InputIcons {
                reveal: "👁",
                conceal: "🙈",
                clear: "❌",
            },
            ui: UiIcons { close: "❌", menu: "📋" },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                success: "✓",
                error: "✗",
                warning: "⚠",
                info: "ⓘ",
            },
            tree: TreeIcons {
                expanded: "▼",
                collapsed: "▶",
            },
            input: InputIcons {
                reveal: "◉",
                conceal: "◎",
                clear: "✗",
            },
            ui: UiIcons { close: "✕", menu: "≡" },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            toast: ToastIcons {
                success: "+",
                error: "X",
                warning: "!",
                info: "i",
            },
            tree: TreeIcons {
                expanded: "v",
                collapsed: ">",
            },
            input: InputIcons {
                reveal: "o",
                conceal: "-",
                clear: "x",
            },
            ui: UiIcons { close: "x", menu: "=" },
        }
    }
}

//! Text input field.
//!
//! Works controlled (the host owns the value and feeds edits back through
//! [`Action::InputChanged`]) or uncontrolled (internal buffer). A masked
//! field gets a local reveal toggle that never touches the value; a clearable
//! field gets a clear affordance that routes through the same change path as
//! typing. The component performs no validation: `error` is a caller-supplied
//! display string.

use crate::icons::{IconService, IconTheme};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Padding, Paragraph},
    Frame,
};

/// Presentational size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    fn field_height(self) -> u16 {
        match self {
            InputSize::Small | InputSize::Medium => 3,
            InputSize::Large => 5,
        }
    }

    fn padding(self) -> Padding {
        match self {
            InputSize::Small => Padding::ZERO,
            InputSize::Medium => Padding::horizontal(1),
            InputSize::Large => Padding::new(2, 2, 1, 1),
        }
    }
}

pub struct Input {
    label: Option<String>,
    /// Controlled value; when set it wins over the internal buffer
    value: Option<String>,
    internal: String,
    /// Cursor position in characters over the displayed value
    cursor: usize,
    masked: bool,
    /// Local reveal state for masked fields; never affects the value
    reveal: bool,
    clearable: bool,
    disabled: bool,
    full_width: bool,
    size: InputSize,
    error: Option<String>,
    focused: bool,
    icons: IconService,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            label: None,
            value: None,
            internal: String::new(),
            cursor: 0,
            masked: false,
            reveal: false,
            clearable: false,
            disabled: false,
            full_width: false,
            size: InputSize::default(),
            error: None,
            focused: false,
            icons: IconService::default(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Switch to controlled mode with an initial value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.cursor = value.chars().count();
        self.value = Some(value);
        self
    }

    /// Mask the rendered value (password field)
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    #[must_use]
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconService) -> Self {
        self.icons = icons;
        self
    }

    /// Update the controlled value (no-op for uncontrolled inputs unless a
    /// value was set before)
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.cursor = self.cursor.min(value.chars().count());
        self.value = Some(value);
    }

    /// Caller-supplied error string; `None` clears it
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_masked_now(&self) -> bool {
        self.masked && !self.reveal
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The value currently displayed: controlled if set, else internal
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.internal)
    }

    /// Height this input needs for its current configuration
    pub fn required_height(&self) -> u16 {
        let mut height = self.size.field_height();
        if self.label.is_some() {
            height += 1;
        }
        if self.error.is_some() {
            height += 1;
        }
        height
    }

    fn byte_index(s: &str, char_idx: usize) -> usize {
        s.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(s.len())
    }

    /// Apply an edit to the displayed value and emit the change
    fn commit(&mut self, buf: String) -> Action {
        self.internal = buf.clone();
        Action::InputChanged(buf)
    }

    fn clear(&mut self) -> Action {
        self.cursor = 0;
        self.commit(String::new())
    }

    fn field_width(&self, rect: Rect) -> u16 {
        if self.full_width {
            rect.width
        } else {
            rect.width.min(34)
        }
    }

    fn mask_char(&self) -> char {
        match self.icons.theme() {
            IconTheme::Ascii => '*',
            _ => '•',
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.error.is_some() {
            // An error suppresses normal focus styling
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for Input {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.disabled {
            return Action::None;
        }

        let display_len = self.display_value().chars().count();
        self.cursor = self.cursor.min(display_len);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Reveal toggle is purely local
                KeyCode::Char('r') if self.masked => {
                    self.reveal = !self.reveal;
                    Action::None
                }
                // Clear affordance is hidden for masked fields
                KeyCode::Char('u') if self.clearable && !self.masked => self.clear(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut buf = self.display_value().to_string();
                buf.insert(Self::byte_index(&buf, self.cursor), c);
                self.cursor += 1;
                self.commit(buf)
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return Action::None;
                }
                let mut buf = self.display_value().to_string();
                buf.remove(Self::byte_index(&buf, self.cursor - 1));
                self.cursor -= 1;
                self.commit(buf)
            }
            KeyCode::Delete => {
                if self.cursor >= display_len {
                    return Action::None;
                }
                let mut buf = self.display_value().to_string();
                buf.remove(Self::byte_index(&buf, self.cursor));
                self.commit(buf)
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(display_len);
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = display_len;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = self.field_width(rect);
        let mut y = rect.y;

        if let Some(label) = &self.label {
            if y < rect.bottom() {
                let label_area = Rect::new(rect.x, y, width, 1);
                let paragraph = Paragraph::new(label.clone()).style(Style::default().fg(Color::Gray));
                f.render_widget(paragraph, label_area);
                y += 1;
            }
        }

        let field_height = self.size.field_height().min(rect.bottom().saturating_sub(y));
        if field_height < 3 {
            return;
        }
        let field_area = Rect::new(rect.x, y, width, field_height);
        y += field_height;

        // Visible text, masked if needed, with a block cursor when focused
        let display = self.display_value();
        let mut text: String = if self.is_masked_now() {
            std::iter::repeat(self.mask_char()).take(display.chars().count()).collect()
        } else {
            display.to_string()
        };
        if self.focused && !self.disabled {
            let idx = Self::byte_index(&text, self.cursor);
            text.insert(idx, '█');
        }

        let icon_set = self.icons.icons();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(self.size.padding())
            .border_style(self.border_style());
        if self.masked {
            let glyph = if self.reveal {
                icon_set.input.conceal
            } else {
                icon_set.input.reveal
            };
            block = block.title_bottom(
                Line::from(format!(" Ctrl+R {} ", glyph))
                    .right_aligned()
                    .style(Style::default().fg(Color::DarkGray)),
            );
        } else if self.clearable && !display.is_empty() && !self.disabled {
            block = block.title_bottom(
                Line::from(format!(" Ctrl+U {} ", icon_set.input.clear))
                    .right_aligned()
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }

        let value_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        f.render_widget(Paragraph::new(text).block(block).style(value_style), field_area);

        if let Some(error) = &self.error {
            if y < rect.bottom() {
                let error_area = Rect::new(rect.x, y, width, 1);
                let paragraph = Paragraph::new(error.clone()).style(Style::default().fg(Color::Red));
                f.render_widget(paragraph, error_area);
            }
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

//! Toast notifications with timed lifecycle.
//!
//! A [`Toast`] is an explicit state machine (`Hidden` → `Entering` →
//! `Visible` → `Exiting` → `Removed`) advanced by a single transition
//! function, [`Toast::tick`]. All deadlines are computed against the mount
//! instant, so nothing can fire after an instance is dropped and the whole
//! lifecycle is testable with synthesized instants.
//!
//! [`ToastManager`] owns the ordered collection, renders the stack
//! newest-last at the bottom-right, and emits [`Action::ToastClosed`] when a
//! toast leaves the collection.

use crate::constants::{DEFAULT_TOAST_DURATION, ENTER_DELAY, TOAST_HEIGHT, TOAST_WIDTH, TRANSITION};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Severity of a toast, controls icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn accent(self) -> Color {
        match self {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Info => Color::Blue,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Info",
        }
    }
}

/// Configuration of a single toast, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ToastData {
    /// Unique id, caller-supplied (a timestamp string works fine)
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    /// Auto-dismiss delay; zero means the toast stays until dismissed
    pub duration: Duration,
    /// Whether the toast offers a manual close affordance
    pub closable: bool,
}

impl ToastData {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            kind: ToastKind::Info,
            duration: DEFAULT_TOAST_DURATION,
            closable: true,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Lifecycle states, strictly sequential for a given toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    /// Mounted but not yet animating in
    Hidden,
    /// Slide/fade-in in progress
    Entering,
    Visible,
    /// Close sequence running, exit animation in progress
    Exiting,
    /// Terminal state; the close notification has fired
    Removed,
}

/// A mounted toast instance with its own deadlines
pub struct Toast {
    data: ToastData,
    state: ToastState,
    mounted_at: Instant,
    close_requested_at: Option<Instant>,
    on_close: Option<Box<dyn FnMut() + Send>>,
}

impl Toast {
    pub fn new(data: ToastData, now: Instant) -> Self {
        Self {
            data,
            state: ToastState::Hidden,
            mounted_at: now,
            close_requested_at: None,
            on_close: None,
        }
    }

    /// Attach a callback fired exactly once when the toast reaches `Removed`.
    /// Dropping the toast earlier means the callback never runs.
    #[must_use]
    pub fn on_close(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn data(&self) -> &ToastData {
        &self.data
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn is_removed(&self) -> bool {
        self.state == ToastState::Removed
    }

    /// Start the close sequence (manual close button or external call).
    /// Idempotent: a toast already exiting or removed is left alone.
    pub fn close(&mut self, now: Instant) {
        if self.close_requested_at.is_none() && self.state != ToastState::Removed {
            self.close_requested_at = Some(now);
            self.state = ToastState::Exiting;
        }
    }

    /// The single transition function. Computes the state for `now`; a large
    /// jump cascades through intermediate states in one call. Fires the close
    /// callback on the transition into `Removed`, exactly once.
    pub fn tick(&mut self, now: Instant) -> ToastState {
        if self.state == ToastState::Removed {
            return self.state;
        }

        // Auto-dismiss arms the close sequence at the deadline itself, not at
        // the tick that observed it, so the exit window stays exact.
        if self.close_requested_at.is_none() && !self.data.duration.is_zero() {
            let deadline = self.mounted_at + self.data.duration;
            if now >= deadline {
                self.close_requested_at = Some(deadline);
            }
        }

        self.state = if let Some(requested) = self.close_requested_at {
            if now >= requested + TRANSITION {
                ToastState::Removed
            } else {
                ToastState::Exiting
            }
        } else if now < self.mounted_at + ENTER_DELAY {
            ToastState::Hidden
        } else if now < self.mounted_at + ENTER_DELAY + TRANSITION {
            ToastState::Entering
        } else {
            ToastState::Visible
        };

        if self.state == ToastState::Removed {
            if let Some(f) = self.on_close.as_mut() {
                f();
            }
            self.on_close = None;
        }

        self.state
    }

    /// Horizontal slide offset as a fraction of the toast width: 1.0 is fully
    /// off-screen, 0.0 fully settled.
    pub fn offset_fraction(&self, now: Instant) -> f32 {
        match self.state {
            ToastState::Hidden | ToastState::Removed => 1.0,
            ToastState::Visible => 0.0,
            ToastState::Entering => {
                let elapsed = now.saturating_duration_since(self.mounted_at + ENTER_DELAY);
                1.0 - (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
            }
            ToastState::Exiting => {
                let start = self.close_requested_at.unwrap_or(now);
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
            }
        }
    }
}

impl std::fmt::Debug for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.data.id)
            .field("kind", &self.data.kind)
            .field("state", &self.state)
            .finish()
    }
}

/// Owns the ordered toast collection and renders the stack
pub struct ToastManager {
    toasts: Vec<Toast>,
    default_duration: Duration,
    max_visible: usize,
    icons: IconService,
    logger: Logger,
    last_now: Option<Instant>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            default_duration: DEFAULT_TOAST_DURATION,
            max_visible: 4,
            icons: IconService::default(),
            logger: Logger::new(),
            last_now: None,
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible.max(1);
    }

    /// Mount a toast from caller-supplied data
    pub fn push(&mut self, data: ToastData, now: Instant) {
        self.logger
            .log(format!("Toast: mounting '{}' ({})", data.id, data.kind.label()));
        self.toasts.push(Toast::new(data, now));
    }

    /// Mount a toast with a close callback
    pub fn push_with(&mut self, data: ToastData, now: Instant, on_close: impl FnMut() + Send + 'static) {
        self.logger
            .log(format!("Toast: mounting '{}' ({})", data.id, data.kind.label()));
        self.toasts.push(Toast::new(data, now).on_close(on_close));
    }

    /// Convenience: mount a toast with a generated id and the configured
    /// default duration. Returns the id.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let data = ToastData::new(id.clone(), message)
            .kind(kind)
            .duration(self.default_duration);
        self.push(data, now);
        id
    }

    /// Start the close sequence for a specific toast. Returns false if no
    /// toast with that id is mounted.
    pub fn dismiss(&mut self, id: &str, now: Instant) -> bool {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) {
            self.logger.log(format!("Toast: dismissing '{}'", id));
            toast.close(now);
            true
        } else {
            false
        }
    }

    /// Find the newest toast that still accepts a manual close
    pub fn newest_closable(&self) -> Option<&str> {
        self.toasts
            .iter()
            .rev()
            .find(|t| t.data().closable && !matches!(t.state(), ToastState::Exiting | ToastState::Removed))
            .map(Toast::id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

impl Component for ToastManager {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Dismissal is routed by the host through Action::DismissToast
        Action::None
    }

    fn tick(&mut self, now: Instant) -> Vec<Action> {
        self.last_now = Some(now);
        let mut closed = Vec::new();
        for toast in &mut self.toasts {
            let was_removed = toast.is_removed();
            if toast.tick(now) == ToastState::Removed && !was_removed {
                closed.push(Action::ToastClosed(toast.id().to_string()));
            }
        }
        if !closed.is_empty() {
            for action in &closed {
                if let Action::ToastClosed(id) = action {
                    self.logger.log(format!("Toast: '{}' removed", id));
                }
            }
            self.toasts.retain(|t| !t.is_removed());
        }
        closed
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.toasts.is_empty() {
            return;
        }
        let Some(now) = self.last_now else { return };

        let width = TOAST_WIDTH.min(rect.width.saturating_sub(2));
        if width < 8 {
            return;
        }

        // Newest-last stacks nearest the bottom edge; older toasts sit above.
        let visible_start = self.toasts.len().saturating_sub(self.max_visible);
        let icons = self.icons.clone();
        for (slot, toast) in self.toasts[visible_start..].iter().rev().enumerate() {
            if toast.state() == ToastState::Hidden || toast.is_removed() {
                continue;
            }

            let slot = slot as u16;
            let y_offset = 1 + (slot + 1) * TOAST_HEIGHT;
            if rect.height < y_offset {
                break;
            }
            let y = rect.bottom() - y_offset;

            // Slide in from / out to the right edge
            let shift = (toast.offset_fraction(now) * f32::from(width + 1)).round() as u16;
            if shift > width {
                continue;
            }
            let drawn_width = width - shift;
            if drawn_width < 4 {
                continue;
            }
            let x = rect.right().saturating_sub(1 + drawn_width);
            let area = Rect::new(x, y, drawn_width, TOAST_HEIGHT);

            let data = toast.data();
            let accent = data.kind.accent();
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} {} ", icons.toast_icon(data.kind), data.kind.label()))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(accent));
            if data.closable {
                block = block.title_bottom(Line::from(format!(" {} ", icons.icons().ui.close)).right_aligned());
            }

            let paragraph = Paragraph::new(data.message.clone())
                .block(block)
                .style(Style::default().fg(Color::White));

            f.render_widget(Clear, area);
            f.render_widget(paragraph, area);
        }
    }
}

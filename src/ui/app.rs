//! Showcase application: a host page composing every component.
//!
//! This is the demo counterpart of the library. It wires a small form of
//! inputs, a sidebar menu over a three-level navigation tree, and toast
//! triggers for every kind, routing all component actions through a single
//! pipeline the way a real host would.

use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::toast::{ToastData, ToastKind};
use crate::ui::components::{Input, InputSize, MenuItem, SidebarMenu, ToastManager};
use crate::ui::core::{actions::Action, Component, EventType, ScrollLock};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const INTRO: &str = "ratakit component showcase. Tab moves between fields; every component below \
is independent and talks to this host page through actions. Open the menu to see the scroll \
lock suppress PageUp/PageDown scrolling here.";

pub struct ShowcaseApp {
    inputs: Vec<Input>,
    focus: usize,
    /// Host-owned value for the controlled username field
    username: String,
    menu: SidebarMenu,
    toasts: ToastManager,
    scroll_lock: ScrollLock,
    body_scroll: u16,
    show_logs: bool,
    should_quit: bool,
    logger: Logger,
    last_area: Rect,
    toast_seq: u64,
}

impl ShowcaseApp {
    pub fn new(config: &Config) -> Self {
        let logger = Logger::new();
        let icons = IconService::new(config.ui.icon_theme);
        let scroll_lock = ScrollLock::new();

        let mut menu = SidebarMenu::new(scroll_lock.clone());
        menu.set_width(config.ui.menu_width);
        menu.set_icons(icons.clone());
        menu.set_logger(logger.clone());
        menu.set_title("Navigation");
        menu.set_items(Self::demo_menu_items(&logger));
        let shared_logger = logger.clone();
        menu.on_item_click(move |item| {
            shared_logger.log(format!("Host: menu reported '{}'", item.id));
        });

        let mut toasts = ToastManager::new();
        toasts.set_icons(icons.clone());
        toasts.set_logger(logger.clone());
        toasts.set_default_duration(std::time::Duration::from_millis(config.toast.default_duration_ms));
        toasts.set_max_visible(config.toast.max_visible);

        let mut inputs = vec![
            Input::new()
                .label("Username (controlled)")
                .with_value("")
                .clearable()
                .full_width()
                .with_icons(icons.clone()),
            Input::new()
                .label("Password")
                .masked()
                .full_width()
                .with_icons(icons.clone()),
            Input::new()
                .label("Search")
                .clearable()
                .size(InputSize::Small)
                .full_width()
                .with_icons(icons.clone()),
            Input::new()
                .label("Disabled")
                .with_value("read only")
                .disabled(true)
                .full_width()
                .with_icons(icons),
        ];
        inputs[0].on_focus();

        Self {
            inputs,
            focus: 0,
            username: String::new(),
            menu,
            toasts,
            scroll_lock,
            body_scroll: 0,
            show_logs: false,
            should_quit: false,
            logger,
            last_area: Rect::default(),
            toast_seq: 0,
        }
    }

    fn demo_menu_items(logger: &Logger) -> Vec<MenuItem> {
        let log = |logger: &Logger, id: &'static str| {
            let logger = logger.clone();
            move || logger.log(format!("Item: '{}' clicked", id))
        };

        vec![
            MenuItem::new("dashboard", "Dashboard")
                .icon("◈")
                .on_click(log(logger, "dashboard")),
            MenuItem::new("settings", "Settings").icon("⚙").children(vec![
                MenuItem::new("profile", "Profile").children(vec![
                    MenuItem::new("name", "Display name").on_click(log(logger, "name")),
                    MenuItem::new("avatar", "Avatar").on_click(log(logger, "avatar")),
                ]),
                MenuItem::new("security", "Security").children(vec![
                    MenuItem::new("password", "Change password").on_click(log(logger, "password")),
                    MenuItem::new("sessions", "Active sessions").on_click(log(logger, "sessions")),
                ]),
            ]),
            MenuItem::new("help", "Help").icon("?").on_click(log(logger, "help")),
        ]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn logger(&self) -> Logger {
        self.logger.clone()
    }

    /// Caller-supplied ids are timestamp strings; a sequence number keeps
    /// them unique within a millisecond.
    fn next_toast_id(&mut self) -> String {
        self.toast_seq += 1;
        format!("{}-{}", chrono::Utc::now().timestamp_millis(), self.toast_seq)
    }

    fn toast_for(&mut self, kind: ToastKind) -> ToastData {
        let message = match kind {
            ToastKind::Success => "Changes saved",
            ToastKind::Error => "Something went wrong",
            ToastKind::Warning => "Disk space is running low",
            ToastKind::Info => "A new version is available",
        };
        ToastData::new(self.next_toast_id(), message).kind(kind)
    }

    fn cycle_focus(&mut self, backwards: bool) {
        self.inputs[self.focus].on_blur();
        let len = self.inputs.len();
        self.focus = if backwards {
            (self.focus + len - 1) % len
        } else {
            (self.focus + 1) % len
        };
        self.inputs[self.focus].on_focus();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('b') => {
                    if self.menu.is_open() {
                        Action::CloseMenu
                    } else {
                        Action::OpenMenu
                    }
                }
                KeyCode::Char('s') => Action::ShowToast(self.toast_for(ToastKind::Success)),
                KeyCode::Char('e') => Action::ShowToast(self.toast_for(ToastKind::Error)),
                KeyCode::Char('w') => Action::ShowToast(self.toast_for(ToastKind::Warning)),
                KeyCode::Char('o') => Action::ShowToast(self.toast_for(ToastKind::Info)),
                KeyCode::Char('d') => {
                    // Sticky toast: stays until dismissed manually
                    let data = self
                        .toast_for(ToastKind::Warning)
                        .duration_ms(0)
                        .closable(true);
                    Action::ShowToast(data)
                }
                KeyCode::Char('x') => match self.toasts.newest_closable() {
                    Some(id) => Action::DismissToast(id.to_string()),
                    None => Action::None,
                },
                KeyCode::Char('l') => Action::ShowLogs(!self.show_logs),
                _ => return None,
            };
            return Some(action);
        }

        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(false);
                Some(Action::None)
            }
            KeyCode::BackTab => {
                self.cycle_focus(true);
                Some(Action::None)
            }
            KeyCode::PageUp => {
                if !self.scroll_lock.is_locked() {
                    self.body_scroll = self.body_scroll.saturating_sub(1);
                }
                Some(Action::None)
            }
            KeyCode::PageDown => {
                if !self.scroll_lock.is_locked() {
                    self.body_scroll = self.body_scroll.saturating_add(1);
                }
                Some(Action::None)
            }
            _ => None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType, now: Instant) {
        let action = match event {
            EventType::Key(key) => {
                if self.show_logs {
                    match key.code {
                        KeyCode::Esc => Action::ShowLogs(false),
                        _ => self.handle_global_key(key).unwrap_or(Action::None),
                    }
                } else if self.menu.is_open() {
                    // The menu has priority while visible
                    let menu_action = self.menu.handle_key_events(key);
                    if matches!(menu_action, Action::None) {
                        self.handle_global_key(key).unwrap_or(Action::None)
                    } else {
                        menu_action
                    }
                } else {
                    match self.handle_global_key(key) {
                        Some(action) => action,
                        None => self.inputs[self.focus].handle_key_events(key),
                    }
                }
            }
            EventType::Mouse(mouse) => {
                if self.menu.is_open() {
                    self.menu.handle_mouse(mouse, self.last_area)
                } else {
                    match mouse.kind {
                        MouseEventKind::ScrollUp if !self.scroll_lock.is_locked() => {
                            self.body_scroll = self.body_scroll.saturating_sub(1);
                            Action::None
                        }
                        MouseEventKind::ScrollDown if !self.scroll_lock.is_locked() => {
                            self.body_scroll = self.body_scroll.saturating_add(1);
                            Action::None
                        }
                        _ => Action::None,
                    }
                }
            }
            EventType::Tick => {
                self.on_tick(now);
                Action::None
            }
            EventType::Resize(_, _) | EventType::Render | EventType::Other => Action::None,
        };

        self.handle_app_action(action, now);
    }

    /// Advance all time-driven component state
    fn on_tick(&mut self, now: Instant) {
        self.menu.tick(now);
        for action in self.toasts.tick(now) {
            self.handle_app_action(action, now);
        }
    }

    /// Handle app-level actions that require host logic
    pub fn handle_app_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.logger.log("App: quitting".to_string());
                self.should_quit = true;
            }
            Action::OpenMenu => self.menu.set_open(true, now),
            Action::CloseMenu => self.menu.set_open(false, now),
            Action::MenuItemActivated(id) => {
                let data = ToastData::new(self.next_toast_id(), format!("Selected '{}'", id));
                self.toasts.push(data, now);
            }
            Action::InputChanged(value) => {
                self.logger
                    .log(format!("Input: field {} changed ({} chars)", self.focus, value.chars().count()));
                if self.focus == 0 {
                    // Controlled field: the host owns the value and validates it
                    let error = if value.contains(' ') {
                        Some("Username cannot contain spaces".to_string())
                    } else {
                        None
                    };
                    self.username = value.clone();
                    self.inputs[0].set_value(value);
                    self.inputs[0].set_error(error);
                }
            }
            Action::ShowToast(data) => self.toasts.push(data, now),
            Action::DismissToast(id) => {
                self.toasts.dismiss(&id, now);
            }
            Action::ToastClosed(id) => {
                self.logger.log(format!("Host: toast '{}' evicted", id));
            }
            Action::ShowLogs(show) => self.show_logs = show,
            Action::None => {}
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let shortcuts: &[(&str, &str)] = &[
            ("Tab", " focus"),
            ("Ctrl+B", " menu"),
            ("Ctrl+S/E/W/O", " toasts"),
            ("Ctrl+D", " sticky"),
            ("Ctrl+X", " dismiss"),
            ("Ctrl+L", " logs"),
            ("Ctrl+Q", " quit"),
        ];
        let mut spans = Vec::new();
        for (i, (keys, desc)) in shortcuts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *keys,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
        }
        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        f.render_widget(footer, area);
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(70, 60, area);
        let items: Vec<ListItem> = self
            .logger
            .get_logs()
            .into_iter()
            .map(|line| ListItem::new(Line::from(line)))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Logs (Esc to close) ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Gray));
        f.render_widget(Clear, popup);
        f.render_widget(list, popup);
    }
}

impl Component for ShowcaseApp {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key).unwrap_or(Action::None)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(rect);

        let heading = if self.username.is_empty() {
            "ratakit showcase".to_string()
        } else {
            format!("ratakit showcase - hello, {}", self.username)
        };
        let title = Paragraph::new(heading)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        // Body: intro text then the input form
        let body = chunks[1];
        let intro_height = 4u16.min(body.height);
        let intro_area = Rect::new(body.x + 1, body.y, body.width.saturating_sub(2), intro_height);
        let intro = Paragraph::new(INTRO)
            .wrap(Wrap { trim: true })
            .scroll((self.body_scroll, 0))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(intro, intro_area);

        let mut y = body.y + intro_height + 1;
        for input in &mut self.inputs {
            let height = input.required_height();
            if y + height > body.bottom() {
                break;
            }
            let input_area = Rect::new(body.x + 2, y, body.width.saturating_sub(4), height);
            input.render(f, input_area);
            y += height + 1;
        }

        self.render_footer(f, chunks[2]);

        // Overlays: menu slides over the body, toasts stack on top of everything
        self.menu.render(f, rect);
        self.toasts.render(f, rect);

        if self.show_logs {
            self.render_logs(f, rect);
        }
    }
}

/// Centered popup rectangle, as a percentage of the parent area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

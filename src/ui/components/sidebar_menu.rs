//! Slide-in sidebar navigation menu.
//!
//! The panel is driven by an open/closed flag owned by the host; an internal
//! mounted flag keeps it rendered through the 300ms exit animation so the
//! slide-out stays visible. While open the menu holds a [`ScrollLock`] guard,
//! released on every exit path (close, drop) so the host never ends up with
//! scrolling stuck off.

use crate::constants::{MENU_DEFAULT_TITLE, MENU_DEFAULT_WIDTH, MENU_FOOTER_HINT, TRANSITION};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::menu_item::{self, MenuItem, MenuRow};
use crate::ui::core::{actions::Action, Component, ScrollLock, ScrollLockGuard};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};
use std::time::Instant;

pub struct SidebarMenu {
    title: String,
    items: Vec<MenuItem>,
    width: u16,
    /// Target state set by the host
    open: bool,
    /// Stays true through the exit animation
    mounted: bool,
    opened_at: Option<Instant>,
    closing_since: Option<Instant>,
    last_now: Option<Instant>,
    rows: Vec<MenuRow>,
    list_state: ListState,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
    on_item_click: Option<Box<dyn FnMut(&MenuItem) + Send>>,
    icons: IconService,
    logger: Logger,
}

impl SidebarMenu {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title: MENU_DEFAULT_TITLE.to_string(),
            items: Vec::new(),
            width: MENU_DEFAULT_WIDTH,
            open: false,
            mounted: false,
            opened_at: None,
            closing_since: None,
            last_now: None,
            rows: Vec::new(),
            list_state,
            scroll_lock,
            lock_guard: None,
            on_item_click: None,
            icons: IconService::default(),
            logger: Logger::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.rebuild_rows();
    }

    /// Shared callback fired for every activated leaf, in addition to the
    /// leaf's own `on_click`
    pub fn on_item_click(&mut self, f: impl FnMut(&MenuItem) + Send + 'static) {
        self.on_item_click = Some(Box::new(f));
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the panel is still rendered (true during the exit animation)
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Open or close the panel. Closing releases the scroll lock immediately
    /// and keeps the panel mounted until the exit animation finishes.
    pub fn set_open(&mut self, open: bool, now: Instant) {
        if open == self.open {
            return;
        }
        self.open = open;
        self.last_now = Some(now);

        if open {
            self.mounted = true;
            self.opened_at = Some(now);
            self.closing_since = None;
            if self.lock_guard.is_none() {
                self.lock_guard = Some(self.scroll_lock.acquire());
            }
            self.rebuild_rows();
            self.list_state.select(Some(0));
            self.logger.log("Menu: opened".to_string());
        } else {
            self.closing_since = Some(now);
            self.lock_guard = None;
            self.logger.log("Menu: closing".to_string());
        }
    }

    fn rebuild_rows(&mut self) {
        self.rows = menu_item::visible_rows(&self.items);
        let selected = self.list_state.selected().unwrap_or(0);
        if !self.rows.is_empty() && selected >= self.rows.len() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    fn select_previous(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(selected.saturating_sub(1)));
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((selected + 1).min(self.rows.len() - 1)));
    }

    /// Activate the row at `index`: toggle a branch, fire callbacks on a leaf
    fn activate(&mut self, index: usize) -> Action {
        let Some(path) = self.rows.get(index).map(|row| row.path.clone()) else {
            return Action::None;
        };
        let Some(node) = menu_item::node_at_mut(&mut self.items, &path) else {
            return Action::None;
        };

        if node.has_children() {
            node.expanded = !node.expanded;
            let id = node.id.clone();
            let expanded = node.expanded;
            self.rebuild_rows();
            self.logger.log(format!(
                "Menu: {} '{}'",
                if expanded { "expanded" } else { "collapsed" },
                id
            ));
            return Action::None;
        }

        node.fire_click();
        if let Some(f) = self.on_item_click.as_mut() {
            f(&*node);
        }
        let id = node.id.clone();
        self.logger.log(format!("Menu: activated '{}'", id));
        Action::MenuItemActivated(id)
    }

    /// Panel rectangle for the current animation state, sliding in from the
    /// right edge
    fn panel_rect(&self, area: Rect, now: Instant) -> Option<Rect> {
        let width = self.width.min(area.width);
        let shown = (self.visible_fraction(now) * f32::from(width)).round() as u16;
        if shown == 0 {
            return None;
        }
        Some(Rect::new(area.right() - shown, area.y, shown, area.height))
    }

    fn visible_fraction(&self, now: Instant) -> f32 {
        if let Some(start) = self.closing_since {
            let elapsed = now.saturating_duration_since(start);
            1.0 - (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
        } else if let Some(start) = self.opened_at {
            let elapsed = now.saturating_duration_since(start);
            (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
        } else {
            0.0
        }
    }

    /// Handle mouse events. `area` is the full frame the panel overlays.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !self.open {
            return Action::None;
        }
        let Some(now) = self.last_now else {
            return Action::None;
        };
        let Some(panel) = self.panel_rect(area, now) else {
            return Action::None;
        };

        let in_panel = mouse.column >= panel.x
            && mouse.column < panel.x + panel.width
            && mouse.row >= panel.y
            && mouse.row < panel.y + panel.height;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !in_panel {
                    // Backdrop click closes
                    return Action::CloseMenu;
                }
                if mouse.row == panel.y {
                    // Header row carries the close affordance
                    return Action::CloseMenu;
                }
                if mouse.row > panel.y && mouse.row < panel.y + panel.height - 1 {
                    let local_index = (mouse.row - panel.y - 1) as usize;
                    let clicked_index = self.list_state.offset() + local_index;
                    if clicked_index >= self.rows.len() {
                        return Action::None;
                    }
                    self.list_state.select(Some(clicked_index));
                    return self.activate(clicked_index);
                }
                Action::None
            }
            MouseEventKind::ScrollUp if in_panel => {
                self.select_previous();
                Action::None
            }
            MouseEventKind::ScrollDown if in_panel => {
                self.select_next();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for SidebarMenu {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::CloseMenu,
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => {
                let selected = self.list_state.selected().unwrap_or(0);
                self.activate(selected)
            }
            _ => Action::None,
        }
    }

    fn tick(&mut self, now: Instant) -> Vec<Action> {
        self.last_now = Some(now);
        if let Some(start) = self.closing_since {
            if now >= start + TRANSITION {
                self.mounted = false;
                self.closing_since = None;
                self.opened_at = None;
                self.logger.log("Menu: unmounted".to_string());
            }
        }
        Vec::new()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.mounted {
            return;
        }
        let Some(now) = self.last_now else { return };
        let Some(panel) = self.panel_rect(rect, now) else { return };

        // Dim everything behind the panel
        let buf = f.buffer_mut();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..panel.x {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(Style::default().add_modifier(Modifier::DIM));
                }
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .title_bottom(
                Line::from(MENU_FOOTER_HINT)
                    .centered()
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let selected = self.list_state.selected().unwrap_or(0);
        let list_items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let item = menu_item::node_at(&self.items, &row.path)
                    .expect("visible row paths always resolve");
                menu_item::render_row(item, row.depth, &self.icons, index == selected)
            })
            .collect();

        let list = List::new(list_items)
            .block(block)
            .style(Style::default().fg(Color::White));

        f.render_widget(Clear, panel);
        f.render_stateful_widget(list, panel, &mut self.list_state);
    }
}

//! Menu item tree for the sidebar menu.
//!
//! A [`MenuItem`] is a tagged tree node carrying its own expansion state.
//! Ids are list keys unique only among siblings, so nodes are addressed by
//! index paths, never by id lookups across the tree.

use crate::constants::INDENT_PER_LEVEL;
use crate::icons::IconService;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One node of the menu tree
pub struct MenuItem {
    /// Unique among siblings
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub children: Vec<MenuItem>,
    /// Accordion state, independent per node
    pub expanded: bool,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
            expanded: false,
            on_click: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Callback fired when this node, as a leaf, is activated
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn fire_click(&mut self) {
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("children", &self.children.len())
            .field("expanded", &self.expanded)
            .finish()
    }
}

/// A visible row of the flattened tree walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// Index path from the root item list to the node
    pub path: Vec<usize>,
    pub depth: usize,
}

/// Flatten the tree into its currently visible rows. Children are included
/// only while every ancestor is expanded; depth increases monotonically.
pub fn visible_rows(items: &[MenuItem]) -> Vec<MenuRow> {
    fn walk(items: &[MenuItem], depth: usize, prefix: &mut Vec<usize>, rows: &mut Vec<MenuRow>) {
        for (index, item) in items.iter().enumerate() {
            prefix.push(index);
            rows.push(MenuRow {
                path: prefix.clone(),
                depth,
            });
            if item.has_children() && item.expanded {
                walk(&item.children, depth + 1, prefix, rows);
            }
            prefix.pop();
        }
    }

    let mut rows = Vec::new();
    walk(items, 0, &mut Vec::new(), &mut rows);
    rows
}

/// Look up a node by index path
pub fn node_at<'a>(items: &'a [MenuItem], path: &[usize]) -> Option<&'a MenuItem> {
    let (&first, rest) = path.split_first()?;
    let node = items.get(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at(&node.children, rest)
    }
}

/// Look up a node by index path, mutably
pub fn node_at_mut<'a>(items: &'a mut [MenuItem], path: &[usize]) -> Option<&'a mut MenuItem> {
    let (&first, rest) = path.split_first()?;
    let node = items.get_mut(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at_mut(&mut node.children, rest)
    }
}

/// Render one visible row: indentation by depth, chevron on branches,
/// optional icon, label.
pub fn render_row(item: &MenuItem, depth: usize, icons: &IconService, is_selected: bool) -> ListItem<'static> {
    let style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::raw(" ".repeat(depth * INDENT_PER_LEVEL as usize))];

    if item.has_children() {
        spans.push(Span::styled(
            format!("{} ", icons.chevron(item.expanded)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(icon) = &item.icon {
        spans.push(Span::styled(format!("{} ", icon), Style::default().fg(Color::Gray)));
    }
    spans.push(Span::styled(item.label.clone(), style));

    ListItem::new(Line::from(spans))
}

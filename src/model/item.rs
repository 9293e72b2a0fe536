//! The authored navigation item.
//!
//! `Item` is the single input node shape. An authored tree of items is the
//! source of truth for both compilers; nothing in this crate ever mutates an
//! item after construction.
//!
//! Fields fall into four groups:
//! - routing: `path`, `element`, `loader`, `action`, `index`
//! - presentation hints: `label`, `icon`, `badges`, `status`, `menu_kind`
//! - access restriction: `roles`, `categories` (absent/empty = unrestricted)
//! - structural disambiguation: `group_kind`, `as_group`, `as_group_alone`,
//!   `hidden`, `invisible`, `visible`, `children`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::is_false;

/// Structural classification of an item.
///
/// A `Layout` item mounts its children through a nested outlet in the route
/// tree and, by default, contributes no menu level of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Layout,
    Entry,
}

/// Presentation classification consumed by the menu renderer.
///
/// `Invisible` here is a rendering hint (the sidebar draws a spacer); the
/// boolean `invisible` flag on `Item` is what removes a node from menu
/// compilation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuKind {
    Title,
    ItemWithoutChildren,
    Invisible,
}

/// A single authored node in the source navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Relative path segment. May contain a dynamic parameter marker
    /// (a `:` token), which disqualifies it from absolute menu paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Roles admitted to this node. Absent or empty means everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Categories admitted to this node. Absent or empty means everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Opaque renderable payload, handed through to the route output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Value>,

    /// Opaque data-loading payload, handed through to the route output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<Value>,

    /// Opaque mutation payload, handed through to the route output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,

    /// Marks the default child for its parent in the route tree.
    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_kind: Option<GroupKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_kind: Option<MenuKind>,

    /// Force this node to appear as a collapsible menu group.
    #[serde(default, skip_serializing_if = "is_false")]
    pub as_group: bool,

    /// Force a layout node to additionally appear as a menu group.
    #[serde(default, skip_serializing_if = "is_false")]
    pub as_group_alone: bool,

    /// Exclude from both route and menu compilation.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,

    /// Exclude from menu compilation only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub invisible: bool,

    /// Escape hatch: show a parameterized leaf in the menu anyway.
    #[serde(default, skip_serializing_if = "is_false")]
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Item>>,
}

impl Item {
    /// Children as a slice; `None` and empty are equivalent.
    pub fn children(&self) -> &[Item] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_layout(&self) -> bool {
        matches!(self.group_kind, Some(GroupKind::Layout))
    }
}

/// Fluent builder so authored trees read declaratively.
#[derive(Debug, Clone, Default)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.item.path = Some(path.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.item.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.item.icon = Some(icon.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.item.badges.get_or_insert_with(Vec::new).push(badge.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.item.status = Some(status.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.item.roles.get_or_insert_with(Vec::new).push(role.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.categories.get_or_insert_with(Vec::new).push(category.into());
        self
    }

    pub fn element(mut self, element: Value) -> Self {
        self.item.element = Some(element);
        self
    }

    pub fn loader(mut self, loader: Value) -> Self {
        self.item.loader = Some(loader);
        self
    }

    pub fn action(mut self, action: Value) -> Self {
        self.item.action = Some(action);
        self
    }

    pub fn index(mut self) -> Self {
        self.item.index = true;
        self
    }

    pub fn layout(mut self) -> Self {
        self.item.group_kind = Some(GroupKind::Layout);
        self
    }

    pub fn group_kind(mut self, kind: GroupKind) -> Self {
        self.item.group_kind = Some(kind);
        self
    }

    pub fn menu_kind(mut self, kind: MenuKind) -> Self {
        self.item.menu_kind = Some(kind);
        self
    }

    pub fn as_group(mut self) -> Self {
        self.item.as_group = true;
        self
    }

    pub fn as_group_alone(mut self) -> Self {
        self.item.as_group_alone = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.item.hidden = true;
        self
    }

    pub fn invisible(mut self) -> Self {
        self.item.invisible = true;
        self
    }

    pub fn visible(mut self) -> Self {
        self.item.visible = true;
        self
    }

    pub fn child(mut self, child: Item) -> Self {
        self.item.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn children(mut self, children: Vec<Item>) -> Self {
        self.item.children = Some(children);
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

//! Menu compilation.
//!
//! The menu compiler carries an absolute base path downward as it descends,
//! so every emitted entry can hold a statically linkable `/`-prefixed path.
//! Most of the conditional complexity is the four-flag disposition table in
//! `MenuShape::of`: a node can be a leaf entry, a collapsible group, or a
//! pure pass-through that contributes its children but no menu level.
//!
//! The subtle case is the default layout node: it is flattened out of the
//! menu (a layout is a routing concern) yet still extends the base path, so
//! its descendants compute correct absolute paths.

use crate::access;
use crate::compile::{NavigationConfig, TreeProcessor};
use crate::model::{Item, ProcessedMenu};
use crate::paths;
use crate::visibility;

/// How an item materializes in the menu tree.
///
/// `of` is the full disposition table over
/// `(has_children, is_layout, as_group, as_group_alone)`. Every row is
/// spelled out so adding a combination stays a local, reviewable change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuShape {
    /// Emit the entry itself, no children.
    Leaf,
    /// Emit the entry with its compiled children attached.
    Group,
    /// Emit only the compiled children; the entry itself vanishes.
    Flatten,
}

impl MenuShape {
    fn of(item: &Item) -> Self {
        match (
            item.has_children(),
            item.is_layout(),
            item.as_group,
            item.as_group_alone,
        ) {
            // No children: always a leaf, flags are irrelevant.
            (false, _, _, _) => MenuShape::Leaf,
            // `as_group` forces group emission under any classification.
            (true, _, true, _) => MenuShape::Group,
            // Non-layout parent: a collapsible group.
            (true, false, false, _) => MenuShape::Group,
            // Layout forced to also appear as a group.
            (true, true, false, true) => MenuShape::Group,
            // Default layout: purely a routing concern, no menu level.
            (true, true, false, false) => MenuShape::Flatten,
        }
    }
}

/// Compiles the item tree into a sidebar menu tree with absolute paths.
#[derive(Debug, Clone, Default)]
pub struct MenuCompiler {
    defaults: NavigationConfig,
}

impl MenuCompiler {
    pub fn new(defaults: NavigationConfig) -> Self {
        Self { defaults }
    }

    fn project(item: &Item, absolute_path: Option<&str>) -> ProcessedMenu {
        ProcessedMenu {
            label: item
                .label
                .clone()
                .or_else(|| item.path.clone())
                .unwrap_or_default(),
            path: absolute_path.map(str::to_string),
            icon: item.icon.clone(),
            group_kind: item.group_kind,
            menu_kind: item.menu_kind,
            status: item.status.clone(),
            roles: item.roles.clone(),
            categories: item.categories.clone(),
            children: None,
        }
    }

    /// Base path for descendants: unchanged unless this item is a layout
    /// with a path, in which case the just-computed absolute path (minus its
    /// leading slash) becomes the new base. A layout whose absolute path
    /// could not be computed keeps the current base.
    fn next_base(
        item: &Item,
        absolute_path: Option<&str>,
        config: &NavigationConfig,
    ) -> Option<String> {
        if item.is_layout() && item.path.is_some() {
            absolute_path
                .map(|p| p.strip_prefix('/').unwrap_or(p).to_string())
                .or_else(|| config.base_path.clone())
        } else {
            config.base_path.clone()
        }
    }
}

impl TreeProcessor for MenuCompiler {
    type Output = ProcessedMenu;

    fn defaults(&self) -> &NavigationConfig {
        &self.defaults
    }

    fn expand(&self, item: &Item, config: &NavigationConfig) -> Vec<ProcessedMenu> {
        if !visibility::menu_eligible(item)
            || !access::is_accessible(item, config.role.as_deref(), config.category.as_deref())
        {
            return Vec::new();
        }

        let absolute_path =
            paths::build_absolute_path(config.base_path.as_deref(), item.path.as_deref());
        let entry = Self::project(item, absolute_path.as_deref());

        let next = NavigationConfig {
            base_path: Self::next_base(item, absolute_path.as_deref(), config),
            ..config.clone()
        };

        match MenuShape::of(item) {
            MenuShape::Leaf => vec![entry],
            MenuShape::Group => vec![ProcessedMenu {
                children: Some(self.process(item.children(), &next)),
                ..entry
            }],
            MenuShape::Flatten => self.process(item.children(), &next),
        }
    }
}

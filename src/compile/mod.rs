//! The generic tree-processing contract shared by both compilers.
//!
//! `TreeProcessor` is a depth-first reducer over the item tree with a single
//! customization point, `expand`: each item maps to zero, one, or many output
//! nodes, and `process` concatenates the expansions in order. The config
//! travels downward by value; each `process` call merges the processor's
//! stored defaults into whatever the caller did not specify, never
//! overwriting an explicit value.

mod menus;
mod routes;

pub use menus::MenuCompiler;
pub use routes::RouteCompiler;

use crate::model::Item;

/// Compilation parameters threaded through a single compile call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Acting role; checked against each item's `roles` list.
    pub role: Option<String>,

    /// Acting category; checked against each item's `categories` list.
    pub category: Option<String>,

    /// Prefix for absolute menu paths. Relevant to menu compilation only.
    pub base_path: Option<String>,
}

impl NavigationConfig {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// Fill unset `role`/`category` from the processor's stored defaults.
    /// Explicit values always win; an inherited value is never dropped.
    pub fn merged_with(&self, defaults: &NavigationConfig) -> NavigationConfig {
        NavigationConfig {
            role: self.role.clone().or_else(|| defaults.role.clone()),
            category: self.category.clone().or_else(|| defaults.category.clone()),
            base_path: self.base_path.clone(),
        }
    }
}

/// A depth-first reducer over the item tree.
pub trait TreeProcessor {
    type Output;

    /// Instance-level default config, merged into every `process` call.
    fn defaults(&self) -> &NavigationConfig;

    /// Expand one item into zero, one, or many output nodes.
    fn expand(&self, item: &Item, config: &NavigationConfig) -> Vec<Self::Output>;

    /// Map each item through `expand` and concatenate in order.
    fn process(&self, items: &[Item], config: &NavigationConfig) -> Vec<Self::Output> {
        if items.is_empty() {
            return Vec::new();
        }
        let merged = config.merged_with(self.defaults());
        items
            .iter()
            .flat_map(|item| self.expand(item, &merged))
            .collect()
    }
}

//! Post-pass indexes over a compiled menu tree.
//!
//! Two lookup maps, built in one depth-first walk:
//! - `ordinal_trails`: absolute path -> sequence of sibling positions from
//!   the root down to that node (used to mark the active entry)
//! - `breadcrumb_trails`: absolute path -> the `Breadcrumb` records along
//!   the same walk (used to render the breadcrumb bar)
//!
//! Keys are the absolute paths assigned during menu compilation. Paths are
//! expected unique; on a duplicate, the later node wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ProcessedMenu;

/// One step on the path from the menu root to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    /// Sibling position at this depth.
    pub index: usize,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Lookup maps derived from one compiled menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationIndex {
    pub ordinal_trails: BTreeMap<String, Vec<usize>>,
    pub breadcrumb_trails: BTreeMap<String, Vec<Breadcrumb>>,
}

impl NavigationIndex {
    pub fn build(menus: &[ProcessedMenu]) -> Self {
        let mut index = Self::default();
        index.walk(menus, &[], &[]);
        index
    }

    fn walk(&mut self, nodes: &[ProcessedMenu], ordinals: &[usize], crumbs: &[Breadcrumb]) {
        for (i, node) in nodes.iter().enumerate() {
            let mut trail = ordinals.to_vec();
            trail.push(i);

            let mut breadcrumbs = crumbs.to_vec();
            breadcrumbs.push(Breadcrumb {
                index: i,
                label: node.label.clone(),
                path: node.path.clone(),
            });

            if let Some(path) = &node.path {
                self.ordinal_trails.insert(path.clone(), trail.clone());
                self.breadcrumb_trails.insert(path.clone(), breadcrumbs.clone());
            }

            if let Some(children) = &node.children {
                self.walk(children, &trail, &breadcrumbs);
            }
        }
    }
}

/// Walk an ordinal trail from the root of a compiled menu tree.
///
/// Returns the node the trail lands on, or `None` if the trail runs off the
/// tree (stale trail against a recompiled tree, for instance).
pub fn node_at<'a>(menus: &'a [ProcessedMenu], trail: &[usize]) -> Option<&'a ProcessedMenu> {
    let (&first, rest) = trail.split_first()?;
    let node = menus.get(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at(node.children.as_deref().unwrap_or_default(), rest)
    }
}

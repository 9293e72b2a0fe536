//! The compiled menu node.
//!
//! Unlike `ProcessedRoute`, a menu node carries presentation fields, and its
//! `path` (when present) is always absolute with a leading slash and never
//! parameterized. `label` always has a value: the compiler falls back to the
//! raw path, then to the empty string.

use serde::{Deserialize, Serialize};

use crate::model::{GroupKind, MenuKind};

/// One node of the compiled menu tree, consumable by a sidebar renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedMenu {
    pub label: String,

    /// Absolute path (leading slash, no parameter markers). Absent when the
    /// node is not statically linkable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_kind: Option<GroupKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_kind: Option<MenuKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Copy of the item's role restriction list, for consumer-side display
    /// decisions. Never shares storage with the source tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ProcessedMenu>>,
}

//! The compiled route node.
//!
//! A strict projection of `Item`: only the routing fields survive, absent
//! fields are omitted on the wire, and presentation/access fields never
//! appear (the route consumer does not re-check permissions).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::is_false;

/// One node of the compiled route tree, consumable by a client-side router.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRoute {
    /// Relative path segment, verbatim from the authored item (may be
    /// parameterized; routers resolve parameters, menus do not).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub index: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ProcessedRoute>>,
}

//! Visibility predicates.
//!
//! Two related but distinct gating rules:
//! - `route_eligible`: structural validity for the route tree
//! - `menu_eligible`: structural validity plus explicit hide flags and
//!   dynamic-path suppression for the menu tree
//!
//! Permission is deliberately not checked here. The compilers combine these
//! predicates with `access::is_accessible` as a separate step, so callers
//! can reuse structural validity on its own.

use crate::model::Item;
use crate::paths;

/// Keep an item in the route compilation?
///
/// A route with no path, no element, and no children renders nothing and
/// matches nothing, so it is structurally meaningless.
pub fn route_eligible(item: &Item) -> bool {
    if item.hidden {
        return false;
    }
    item.path.is_some() || item.element.is_some() || item.has_children()
}

/// Keep an item in the menu compilation?
///
/// Dropped when any of:
/// - `hidden` or `invisible`
/// - no usable static path, no children, and no label (nothing to show)
/// - parameterized leaf without the explicit `visible` escape hatch
///   (a parameterized path cannot be rendered as a static link)
pub fn menu_eligible(item: &Item) -> bool {
    if item.hidden || item.invisible {
        return false;
    }

    let dynamic = item.path.as_deref().is_some_and(paths::is_dynamic);
    let has_static_path = item.path.is_some() && !dynamic;

    if !has_static_path && !item.has_children() && item.label.is_none() {
        return false;
    }
    if dynamic && !item.has_children() && !item.visible {
        return false;
    }
    true
}

//! Data model for the navigation compiler.
//!
//! Three families of types live here:
//! - `Item`: the single authored input node, immutable after construction
//! - `ProcessedRoute` / `ProcessedMenu`: the two derived output nodes
//! - the small classification enums (`GroupKind`, `MenuKind`)
//!
//! All wire-facing types serialize with camelCase names and omit absent
//! fields. Opaque payloads (`element`, `loader`, `action`) are JSON values
//! that the compiler clones through without inspecting.

mod item;
mod menu;
mod route;

pub use item::{GroupKind, Item, ItemBuilder, MenuKind};
pub use menu::ProcessedMenu;
pub use route::ProcessedRoute;

/// Serde helper: skip serializing `false` booleans so flag fields are
/// omitted rather than written as `false`.
pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

//! Declarative navigation tree compiler.
//!
//! One authored tree of navigation items is compiled into two independent
//! derived artifacts:
//! - a route tree consumable by a client-side router
//! - a menu tree consumable by a sidebar, together with an ordinal-trail
//!   map and a breadcrumb-trail map for active-entry and breadcrumb UX
//!
//! Both projections share one source of truth and apply permission and
//! category filtering consistently, but with different visibility rules:
//! a layout node nests in the route tree yet, by default, contributes no
//! menu level of its own (while still extending the absolute path prefix
//! for its descendants).
//!
//! Principles:
//! - deterministic: a compile is a pure function of `(tree, config)`;
//!   no I/O, no clocks, no shared mutable state
//! - degrade by omission: malformed-but-well-typed nodes contribute zero
//!   output nodes, nothing throws; `validate()` is the opt-in diagnostic
//! - the source tree is immutable after construction
//!
//! ```
//! use wayfinder_core::{ItemBuilder, NavigationCompiler, NavigationConfig};
//!
//! let compiler = NavigationCompiler::new(vec![ItemBuilder::new()
//!     .path("users")
//!     .label("Users")
//!     .layout()
//!     .child(ItemBuilder::new().path("list").label("All users").build())
//!     .build()]);
//!
//! let compiled = compiler.compile_menus(&NavigationConfig::default());
//! assert_eq!(compiled.menus[0].path.as_deref(), Some("/users/list"));
//! ```

pub mod access;
pub mod compile;
pub mod compiler;
pub mod index;
pub mod model;
pub mod paths;
pub mod validate;
pub mod visibility;

pub use compile::{MenuCompiler, NavigationConfig, RouteCompiler, TreeProcessor};
pub use compiler::{CompiledMenus, CompiledRoutes, NavigationCompiler};
pub use index::{node_at, Breadcrumb, NavigationIndex};
pub use model::{GroupKind, Item, ItemBuilder, MenuKind, ProcessedMenu, ProcessedRoute};
pub use validate::{ValidationError, ValidationReport};

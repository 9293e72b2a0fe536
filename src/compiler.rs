//! The navigation compiler facade.
//!
//! `NavigationCompiler` owns the authored item tree for the lifetime of the
//! application, instantiates the two concrete compilers, and exposes the
//! public compile and query surface. The tree is frozen at construction:
//! every method takes `&self` and nothing in this crate mutates an item, so
//! concurrent compiles over one facade are race-free by construction.
//!
//! Compilation never fails; ineligible or inaccessible nodes simply
//! contribute nothing (see `visibility` and `access`). The only diagnostic
//! surface is `validate`, which is advisory and never invoked implicitly.

use tracing::debug;

use crate::access;
use crate::compile::{MenuCompiler, NavigationConfig, RouteCompiler, TreeProcessor};
use crate::index::NavigationIndex;
use crate::model::{Item, ProcessedMenu, ProcessedRoute};
use crate::validate::{self, ValidationReport};

/// Base path applied when a menu compile does not specify one.
const DEFAULT_BASE_PATH: &str = "/";

/// Output of a route compile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledRoutes {
    pub routes: Vec<ProcessedRoute>,
}

/// Output of a menu compile: the tree plus its lookup maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledMenus {
    pub menus: Vec<ProcessedMenu>,
    pub index: NavigationIndex,
}

/// Owns the frozen source tree and answers compile and query calls.
#[derive(Debug, Clone)]
pub struct NavigationCompiler {
    items: Vec<Item>,
    routes: RouteCompiler,
    menus: MenuCompiler,
}

impl NavigationCompiler {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_defaults(items, NavigationConfig::default())
    }

    /// Construct with instance-level default config, merged into every
    /// compile call that leaves `role`/`category` unset.
    pub fn with_defaults(items: Vec<Item>, defaults: NavigationConfig) -> Self {
        Self {
            items,
            routes: RouteCompiler::new(defaults.clone()),
            menus: MenuCompiler::new(defaults),
        }
    }

    /// The frozen source tree, read-only.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Compile the route tree for the given config. Never fails; an empty
    /// tree yields empty routes.
    pub fn compile_routes(&self, config: &NavigationConfig) -> CompiledRoutes {
        let routes = self.routes.process(&self.items, config);
        debug!(
            items = self.items.len(),
            routes = routes.len(),
            role = ?config.role,
            "compiled route tree"
        );
        CompiledRoutes { routes }
    }

    /// Compile the menu tree plus its lookup maps. The base path defaults
    /// to `/` when unset.
    pub fn compile_menus(&self, config: &NavigationConfig) -> CompiledMenus {
        let mut config = config.clone();
        config
            .base_path
            .get_or_insert_with(|| DEFAULT_BASE_PATH.to_string());

        let menus = self.menus.process(&self.items, &config);
        let index = NavigationIndex::build(&menus);
        debug!(
            items = self.items.len(),
            menus = menus.len(),
            indexed = index.ordinal_trails.len(),
            role = ?config.role,
            category = ?config.category,
            "compiled menu tree"
        );
        CompiledMenus { menus, index }
    }

    /// Filter the raw tree to nodes whose `roles` admit the given role.
    ///
    /// The prune is top-down: a node that fails its own check is dropped
    /// together with its entire subtree, even when children would
    /// individually pass. Authors of deeply nested trees with per-node role
    /// lists should expect this, not a bottom-up rescue.
    pub fn items_by_role(&self, role: &str) -> Vec<Item> {
        prune(&self.items, &|item| {
            access::admits_role(item.roles.as_deref(), Some(role), true)
        })
    }

    /// Symmetric top-down filter by category.
    pub fn items_by_category(&self, category: &str) -> Vec<Item> {
        prune(&self.items, &|item| {
            access::admits_category(item.categories.as_deref(), Some(category), true)
        })
    }

    /// Depth-first exact match over the raw tree's authored `path` fields.
    pub fn find_by_path(&self, path: &str) -> Option<&Item> {
        find(&self.items, path)
    }

    /// Advisory integrity check over the raw tree. Never invoked implicitly
    /// by compilation.
    pub fn validate(&self) -> ValidationReport {
        let report = validate::validate(&self.items);
        debug!(errors = report.errors.len(), "validated navigation tree");
        report
    }
}

fn prune(items: &[Item], keep: &dyn Fn(&Item) -> bool) -> Vec<Item> {
    items
        .iter()
        .filter(|item| keep(item))
        .map(|item| {
            let mut kept = item.clone();
            let children = prune(item.children(), keep);
            kept.children = if children.is_empty() {
                None
            } else {
                Some(children)
            };
            kept
        })
        .collect()
}

fn find<'a>(items: &'a [Item], path: &str) -> Option<&'a Item> {
    for item in items {
        if item.path.as_deref() == Some(path) {
            return Some(item);
        }
        if let Some(found) = find(item.children(), path) {
            return Some(found);
        }
    }
    None
}

//! Route compilation.
//!
//! Expansion rule per item:
//! - fails structural or permission gate: nothing
//! - layout with children: one route wrapping the compiled children
//!   (the router needs a literal nesting level to mount an outlet)
//! - non-layout with children: the compiled children spliced flat, the
//!   node's own route entry discarded (purely organizational parent)
//! - leaf: one route

use crate::access;
use crate::compile::{NavigationConfig, TreeProcessor};
use crate::model::{Item, ProcessedRoute};
use crate::visibility;

/// Compiles the item tree into a nested route descriptor list.
#[derive(Debug, Clone, Default)]
pub struct RouteCompiler {
    defaults: NavigationConfig,
}

impl RouteCompiler {
    pub fn new(defaults: NavigationConfig) -> Self {
        Self { defaults }
    }

    fn project(item: &Item) -> ProcessedRoute {
        ProcessedRoute {
            path: item.path.clone(),
            element: item.element.clone(),
            loader: item.loader.clone(),
            action: item.action.clone(),
            index: item.index,
            children: None,
        }
    }
}

impl TreeProcessor for RouteCompiler {
    type Output = ProcessedRoute;

    fn defaults(&self) -> &NavigationConfig {
        &self.defaults
    }

    fn expand(&self, item: &Item, config: &NavigationConfig) -> Vec<ProcessedRoute> {
        if !visibility::route_eligible(item)
            || !access::is_accessible(item, config.role.as_deref(), config.category.as_deref())
        {
            return Vec::new();
        }

        let route = Self::project(item);

        if item.has_children() {
            if item.is_layout() {
                vec![ProcessedRoute {
                    children: Some(self.process(item.children(), config)),
                    ..route
                }]
            } else {
                self.process(item.children(), config)
            }
        } else {
            vec![route]
        }
    }
}

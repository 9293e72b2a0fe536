//! Advisory integrity checks over the raw item tree.
//!
//! Validation is opt-in and development-time: a defect here never blocks
//! compilation. The walk composes each node's relative path (plain join, no
//! parameter suppression) and reports:
//! - paths that compose identically to an earlier one
//! - non-index nodes without a label
//!
//! A non-empty report indicates a defect in the authored tree, not a
//! runtime fault.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::Item;
use crate::paths;

/// A single authored-tree defect. `Display` output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Duplicate path found: {path}")]
    DuplicatePath { path: String },

    #[error("Route with path \"{path}\" is missing a label")]
    MissingLabel { path: String },
}

/// Outcome of a `validate` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Walk the raw tree and accumulate every defect found.
pub fn validate(items: &[Item]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen = BTreeSet::new();
    walk(items, "", &mut seen, &mut report);
    report
}

fn walk(items: &[Item], base: &str, seen: &mut BTreeSet<String>, report: &mut ValidationReport) {
    for item in items {
        let composed = paths::join(&[base, item.path.as_deref().unwrap_or("")]);

        // Only a node that declares its own path can collide; a path-less
        // grouping node composes to its parent's path by construction.
        if item.path.is_some() && !seen.insert(composed.clone()) {
            report.errors.push(ValidationError::DuplicatePath {
                path: composed.clone(),
            });
        }

        if !item.index && item.label.is_none() {
            report.errors.push(ValidationError::MissingLabel {
                path: composed.clone(),
            });
        }

        walk(item.children(), &composed, seen, report);
    }
}

//! Path segment utilities for the navigation compiler.
//!
//! All functions here are purely string-based:
//! - no filesystem access, no OS path semantics
//! - identical inputs always produce identical outputs
//!
//! The distinction between "no path" (`None`) and an empty-string path
//! matters: an empty segment is a valid index-route path, while `None` means
//! the node has no routing identity at all.

/// The token marking a dynamic URL parameter inside a segment (e.g. `:id`).
pub const PARAM_MARKER: char = ':';

/// True when the segment contains a dynamic parameter marker.
///
/// Parameterized segments cannot be statically linked to, so they are
/// excluded from absolute menu-path generation.
pub fn is_dynamic(segment: &str) -> bool {
    segment.contains(PARAM_MARKER)
}

/// Strip exactly one leading and one trailing slash.
///
/// Tolerant of `None`, which yields the empty string.
pub fn trim(path: Option<&str>) -> String {
    let s = path.unwrap_or("");
    let s = s.strip_prefix('/').unwrap_or(s);
    let s = s.strip_suffix('/').unwrap_or(s);
    s.to_string()
}

/// Trim each non-empty segment, drop empties, join with `/`, trim again.
///
/// Idempotent: `join(&[&join(segments)]) == join(segments)`.
pub fn join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .map(|s| trim(Some(s)))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    trim(Some(&joined))
}

/// Build an absolute path from a base path and a relative segment.
///
/// Returns `None` when the segment is absent (no path to build) or when it
/// is parameterized (no static link exists). Otherwise the result starts
/// with a single leading slash.
pub fn build_absolute_path(base: Option<&str>, segment: Option<&str>) -> Option<String> {
    let segment = segment?;
    if is_dynamic(segment) {
        return None;
    }
    Some(format!("/{}", join(&[base.unwrap_or(""), segment])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_one_slash_each_side() {
        assert_eq!(trim(Some("/a/b/")), "a/b");
        assert_eq!(trim(Some("a/b")), "a/b");
        assert_eq!(trim(Some("//a//")), "/a/");
        assert_eq!(trim(None), "");
        assert_eq!(trim(Some("/")), "");
    }

    #[test]
    fn join_filters_empties_and_is_idempotent() {
        assert_eq!(join(&["a", "b"]), "a/b");
        assert_eq!(join(&["/a/", "", "/b"]), "a/b");
        assert_eq!(join(&["", ""]), "");
        let once = join(&["base", "x/y"]);
        assert_eq!(join(&[&once]), once);
    }

    #[test]
    fn absolute_path_basic() {
        assert_eq!(
            build_absolute_path(Some("admin"), Some("users")),
            Some("/admin/users".to_string())
        );
        assert_eq!(build_absolute_path(None, Some("users")), Some("/users".to_string()));
    }

    #[test]
    fn absolute_path_empty_segment_is_valid() {
        // Index routes carry an empty-string path; that still composes.
        assert_eq!(build_absolute_path(Some("admin"), Some("")), Some("/admin".to_string()));
    }

    #[test]
    fn absolute_path_refuses_missing_or_dynamic_segment() {
        assert_eq!(build_absolute_path(Some("admin"), None), None);
        assert_eq!(build_absolute_path(Some("admin"), Some(":id")), None);
        assert_eq!(build_absolute_path(Some("admin"), Some("users/:id")), None);
    }

    #[test]
    fn is_dynamic_detects_marker() {
        assert!(is_dynamic(":id"));
        assert!(is_dynamic("users/:id"));
        assert!(!is_dynamic("users"));
    }
}

//! Permission predicates.
//!
//! A node declares who may see it through optional `roles` and `categories`
//! allow-lists. The rule is open-by-default: an absent or empty list admits
//! everyone; a non-empty list admits only its members.

use crate::model::Item;

/// Does an allow-list admit the given role?
///
/// Unset or empty list yields `default_if_unset`. A set list requires the
/// role to be present in it; an absent role never matches a set list.
pub fn admits_role(allow: Option<&[String]>, role: Option<&str>, default_if_unset: bool) -> bool {
    match allow {
        None => default_if_unset,
        Some(list) if list.is_empty() => default_if_unset,
        Some(list) => role.is_some_and(|r| list.iter().any(|a| a == r)),
    }
}

/// Symmetric rule for categories.
pub fn admits_category(
    allow: Option<&[String]>,
    category: Option<&str>,
    default_if_unset: bool,
) -> bool {
    match allow {
        None => default_if_unset,
        Some(list) if list.is_empty() => default_if_unset,
        Some(list) => category.is_some_and(|c| list.iter().any(|a| a == c)),
    }
}

/// Conjunction of both checks with open defaults.
pub fn is_accessible(item: &Item, role: Option<&str>, category: Option<&str>) -> bool {
    admits_role(item.roles.as_deref(), role, true)
        && admits_category(item.categories.as_deref(), category, true)
}

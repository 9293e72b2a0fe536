//! End-to-end properties of the navigation compiler, exercised through the
//! public facade: idempotence, role monotonicity, the absolute-path
//! invariant, flatten/preserve divergence between the two projections,
//! breadcrumb consistency, parameterized suppression, and validation.

use wayfinder_core::{
    node_at, ItemBuilder, NavigationCompiler, NavigationConfig, ProcessedMenu,
};

fn console_tree() -> NavigationCompiler {
    NavigationCompiler::new(vec![
        ItemBuilder::new()
            .path("dashboard")
            .label("Dashboard")
            .element(serde_json::json!("DashboardPage"))
            .build(),
        ItemBuilder::new()
            .path("users")
            .label("Users")
            .layout()
            .as_group_alone()
            .child(
                ItemBuilder::new()
                    .path("")
                    .index()
                    .element(serde_json::json!("UserListPage"))
                    .label("All users")
                    .build(),
            )
            .child(ItemBuilder::new().path(":id").label("Detail").build())
            .build(),
        ItemBuilder::new()
            .path("settings")
            .label("Settings")
            .layout()
            .child(
                ItemBuilder::new()
                    .path("profile")
                    .label("Profile")
                    .build(),
            )
            .child(
                ItemBuilder::new()
                    .path("security")
                    .label("Security")
                    .role("admin")
                    .build(),
            )
            .build(),
        ItemBuilder::new()
            .path("billing")
            .label("Billing")
            .role("admin")
            .build(),
    ])
}

fn paths_of(menus: &[ProcessedMenu]) -> Vec<String> {
    let mut out = Vec::new();
    fn walk(nodes: &[ProcessedMenu], out: &mut Vec<String>) {
        for n in nodes {
            if let Some(p) = &n.path {
                out.push(p.clone());
            }
            walk(n.children.as_deref().unwrap_or_default(), out);
        }
    }
    walk(menus, &mut out);
    out
}

#[test]
fn compilation_is_idempotent() {
    let compiler = console_tree();
    let cfg = NavigationConfig::with_role("admin");

    assert_eq!(compiler.compile_routes(&cfg), compiler.compile_routes(&cfg));
    assert_eq!(compiler.compile_menus(&cfg), compiler.compile_menus(&cfg));
}

#[test]
fn wider_role_sees_a_superset_of_menu_paths() {
    let compiler = console_tree();

    let viewer = paths_of(&compiler.compile_menus(&NavigationConfig::with_role("viewer")).menus);
    let admin = paths_of(&compiler.compile_menus(&NavigationConfig::with_role("admin")).menus);

    for p in &viewer {
        assert!(admin.contains(p), "admin lost path {p} that viewer had");
    }
    assert!(admin.contains(&"/billing".to_string()));
    assert!(!viewer.contains(&"/billing".to_string()));
}

#[test]
fn all_menu_paths_are_absolute_and_static() {
    let compiler = console_tree();
    let compiled = compiler.compile_menus(&NavigationConfig::with_role("admin"));

    for p in paths_of(&compiled.menus) {
        assert!(p.starts_with('/'), "{p} is not absolute");
        assert!(!p.contains(':'), "{p} leaked a parameter marker");
    }
}

#[test]
fn layout_flattens_in_menus_but_nests_in_routes() {
    let compiler = NavigationCompiler::new(vec![ItemBuilder::new()
        .path("a")
        .layout()
        .child(ItemBuilder::new().path("b").label("B").build())
        .build()]);

    let menus = compiler.compile_menus(&NavigationConfig::default()).menus;
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].label, "B");
    assert_eq!(menus[0].path.as_deref(), Some("/a/b"));

    let routes = compiler.compile_routes(&NavigationConfig::default()).routes;
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path.as_deref(), Some("a"));
    let children = routes[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].path.as_deref(), Some("b"));
}

#[test]
fn breadcrumbs_are_consistent_with_ordinal_trails() {
    let compiler = console_tree();
    let compiled = compiler.compile_menus(&NavigationConfig::with_role("admin"));

    for (path, trail) in &compiled.index.ordinal_trails {
        let crumbs = &compiled.index.breadcrumb_trails[path];
        assert_eq!(crumbs.last().unwrap().path.as_deref(), Some(path.as_str()));

        let node = node_at(&compiled.menus, trail)
            .unwrap_or_else(|| panic!("trail for {path} fell off the tree"));
        assert_eq!(node.path.as_deref(), Some(path.as_str()));
    }
}

#[test]
fn parameterized_leaf_needs_the_visible_escape_hatch() {
    let hidden_by_default = NavigationCompiler::new(vec![ItemBuilder::new()
        .path(":id")
        .label("Detail")
        .build()]);
    assert!(hidden_by_default
        .compile_menus(&NavigationConfig::default())
        .menus
        .is_empty());

    let pinned = NavigationCompiler::new(vec![ItemBuilder::new()
        .path(":id")
        .label("Detail")
        .visible()
        .build()]);
    let menus = pinned.compile_menus(&NavigationConfig::default()).menus;
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].label, "Detail");
    // Present, but still not statically linkable.
    assert!(menus[0].path.is_none());
}

#[test]
fn index_child_composes_to_the_layout_path() {
    let compiler = console_tree();
    let compiled = compiler.compile_menus(&NavigationConfig::default());

    // "users" is a layout with `as_group_alone`; its empty-path index child
    // composes to the layout's own absolute path.
    let users = compiled
        .menus
        .iter()
        .find(|m| m.label == "Users")
        .expect("users group present");
    let children = users.children.as_ref().unwrap();
    assert_eq!(children[0].path.as_deref(), Some("/users"));
}

#[test]
fn routes_keep_parameterized_segments_verbatim() {
    let compiler = console_tree();
    let routes = compiler.compile_routes(&NavigationConfig::default()).routes;

    let users = routes
        .iter()
        .find(|r| r.path.as_deref() == Some("users"))
        .expect("users layout present");
    let child_paths: Vec<_> = users
        .children
        .as_ref()
        .unwrap()
        .iter()
        .map(|r| r.path.as_deref())
        .collect();
    assert!(child_paths.contains(&Some(":id")));
}

#[test]
fn duplicate_siblings_fail_validation_with_one_error() {
    let compiler = NavigationCompiler::new(vec![ItemBuilder::new()
        .path("x")
        .label("X")
        .child(ItemBuilder::new().path("y").label("First").build())
        .child(ItemBuilder::new().path("y").label("Second").build())
        .build()]);

    let report = compiler.validate();
    assert!(!report.is_valid());
    let messages: Vec<_> = report.errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages, vec!["Duplicate path found: x/y"]);
}

#[test]
fn validation_never_blocks_compilation() {
    let compiler = NavigationCompiler::new(vec![
        ItemBuilder::new().path("dup").label("A").build(),
        ItemBuilder::new().path("dup").label("B").build(),
    ]);

    assert!(!compiler.validate().is_valid());
    // Both nodes still compile; the index keeps the later writer.
    let compiled = compiler.compile_menus(&NavigationConfig::default());
    assert_eq!(compiled.menus.len(), 2);
    assert_eq!(compiled.index.ordinal_trails["/dup"], vec![1]);
}

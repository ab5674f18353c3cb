use super::types::{MenuEntry, RouteTable};
use std::collections::HashSet;

/// Groups sidebar routes into a menu, in table order.
///
/// Routes with `sidebar_childrens` become groups whose children are resolved
/// by exact path; other routes appear only when flagged for the sidebar. A
/// path is emitted at most once, the first occurrence wins.
pub fn build_sidebar_menu(table: &RouteTable) -> Vec<MenuEntry> {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut menu = Vec::new();

    for route in table.iter() {
        if emitted.contains(route.path.as_str()) {
            continue;
        }

        match &route.sidebar_childrens {
            Some(child_paths) => {
                emitted.insert(route.path.as_str());
                let mut children = Vec::with_capacity(child_paths.len());

                for child_path in child_paths {
                    if emitted.contains(child_path.as_str()) {
                        continue;
                    }
                    match table.get(child_path) {
                        Some(child) => {
                            emitted.insert(child.path.as_str());
                            children.push(MenuEntry::leaf(child));
                        }
                        None => {
                            log::debug!(
                                "routes: sidebar child '{child_path}' of '{}' is not in the route table",
                                route.path
                            );
                        }
                    }
                }

                menu.push(MenuEntry::Group {
                    path: route.path.clone(),
                    label: route.label.clone(),
                    icon: route.icon.clone(),
                    children,
                });
            }
            None if route.sidebar => {
                emitted.insert(route.path.as_str());
                menu.push(MenuEntry::leaf(route));
            }
            None => {}
        }
    }

    menu
}

/// Whether a menu entry, or one of its children, lies on the active route chain.
pub fn is_active(entry: &MenuEntry, chain: &[String]) -> bool {
    chain.iter().any(|path| path == entry.path())
        || entry.children().iter().any(|child| is_active(child, chain))
}

use super::types::{Breadcrumb, RouteMeta, RouteTable};
use std::collections::HashSet;

/// Routes from the one matching `current_path` up to its furthest ancestor.
///
/// Parent references are looked up by exact path. A missing parent ends the
/// chain, and so does a parent that was already visited.
fn resolve_chain<'a>(current_path: &str, table: &'a RouteTable) -> Vec<&'a RouteMeta> {
    let Some(current) = table.find_matching(current_path) else {
        log::debug!("routes: no route matches '{current_path}'");
        return Vec::new();
    };

    let mut chain = vec![current];
    let mut visited: HashSet<&str> = HashSet::from([current.path.as_str()]);
    let mut parent = current.parent.as_deref();

    while let Some(parent_path) = parent {
        if !visited.insert(parent_path) {
            log::warn!("routes: parent cycle at '{parent_path}' while resolving '{current_path}'");
            break;
        }

        match table.get(parent_path) {
            Some(route) => {
                chain.push(route);
                parent = route.parent.as_deref();
            }
            None => {
                log::debug!("routes: parent '{parent_path}' is not in the route table");
                break;
            }
        }
    }

    chain
}

/// Breadcrumb trail for a path, root ancestor first.
///
/// Crumbs carry a link only when their route is shown in the sidebar.
pub fn build_breadcrumbs(current_path: &str, table: &RouteTable) -> Vec<Breadcrumb> {
    resolve_chain(current_path, table)
        .into_iter()
        .rev()
        .map(|route| Breadcrumb {
            label: route.label.clone(),
            path: route.sidebar.then(|| route.path.clone()),
            icon: route.icon.clone(),
        })
        .collect()
}

/// Route paths from the current route up to the root, for highlighting
/// active navigation entries.
pub fn active_route_chain(current_path: &str, table: &RouteTable) -> Vec<String> {
    resolve_chain(current_path, table)
        .into_iter()
        .map(|route| route.path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_table() -> RouteTable {
        RouteTable::new(vec![
            RouteMeta::new("/admin", None, "Dashboard", true),
            RouteMeta::new("/admin/gold", Some("/admin"), "Gold", true),
            RouteMeta::new("/admin/gold/edit/:id", Some("/admin/gold"), "Edit Gold", false),
        ])
    }

    fn crumb(label: &str, path: Option<&str>) -> Breadcrumb {
        Breadcrumb {
            label: label.to_string(),
            path: path.map(str::to_string),
            icon: None,
        }
    }

    #[test]
    fn breadcrumbs_are_root_first() {
        assert_eq!(
            build_breadcrumbs("/admin/gold", &gold_table()),
            vec![crumb("Dashboard", Some("/admin")), crumb("Gold", Some("/admin/gold"))]
        );
    }

    #[test]
    fn non_sidebar_crumb_has_no_link() {
        assert_eq!(
            build_breadcrumbs("/admin/gold/edit/9", &gold_table()),
            vec![
                crumb("Dashboard", Some("/admin")),
                crumb("Gold", Some("/admin/gold")),
                crumb("Edit Gold", None),
            ]
        );
    }

    #[test]
    fn unmatched_path_has_no_breadcrumbs() {
        assert!(build_breadcrumbs("/shop/cart", &gold_table()).is_empty());
        assert!(build_breadcrumbs("/admin", &RouteTable::default()).is_empty());
    }

    #[test]
    fn chain_runs_current_to_root() {
        assert_eq!(
            active_route_chain("/admin/gold/edit/9", &gold_table()),
            vec!["/admin/gold/edit/:id", "/admin/gold", "/admin"]
        );
    }

    #[test]
    fn orphan_parent_ends_chain() {
        let table = RouteTable::new(vec![RouteMeta::new("/admin/pages", Some("/admin"), "Pages", true)]);
        assert_eq!(active_route_chain("/admin/pages", &table), vec!["/admin/pages"]);
    }

    #[test]
    fn parent_cycle_is_cut() {
        let table = RouteTable::new(vec![
            RouteMeta::new("/a", Some("/b"), "A", true),
            RouteMeta::new("/b", Some("/a"), "B", true),
        ]);

        assert_eq!(active_route_chain("/a", &table), vec!["/a", "/b"]);
        let labels: Vec<String> = build_breadcrumbs("/b", &table)
            .into_iter()
            .map(|crumb| crumb.label)
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }
}

//! Navigation utilities for the storefront back-office: the category tree
//! built from flat API records, and breadcrumbs, active chains and the sidebar
//! menu resolved from a route metadata table.
//!
//! All resolvers are pure. Missing or malformed data degrades to empty
//! results or the `N/A` sentinel instead of an error.

pub mod categories;
pub mod config;
pub mod format_utils;
pub mod loader;
pub mod logging;
pub mod routes;
pub mod tree_utils;

pub use categories::{build_tree, find_name_by_id, CategoryNode, CategoryRecord};
pub use routes::{
    active_route_chain, admin_routes, build_breadcrumbs, build_sidebar_menu, Breadcrumb,
    MenuEntry, RouteMeta, RouteTable,
};

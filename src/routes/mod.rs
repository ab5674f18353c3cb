// Re-export all types and the resolvers
pub use breadcrumbs::{active_route_chain, build_breadcrumbs};
pub use matcher::PathPattern;
pub use sidebar::{build_sidebar_menu, is_active};
pub use table::{admin_routes, RouteTableValidator};
pub use types::*;

mod breadcrumbs;
pub mod matcher;
mod sidebar;
mod table;
pub mod types;

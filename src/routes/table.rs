use super::types::{RouteMeta, RouteTable};
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

static PARAM_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:[A-Za-z_][A-Za-z0-9_]*$").expect("valid param regex"));

static ADMIN_ROUTES: Lazy<RouteTable> = Lazy::new(|| {
    RouteTable::new(vec![
        RouteMeta::new("/admin", None, "Dashboard", true).with_icon("dashboard"),
        RouteMeta::new("/admin/catalog", Some("/admin"), "Catalog", false)
            .with_icon("catalog")
            .with_sidebar_childrens(&["/admin/categories", "/admin/products", "/admin/inventory"]),
        RouteMeta::new("/admin/categories", Some("/admin"), "Categories", true).with_icon("category"),
        RouteMeta::new("/admin/categories/create", Some("/admin/categories"), "Create Category", false),
        RouteMeta::new("/admin/categories/edit/:id", Some("/admin/categories"), "Edit Category", false),
        RouteMeta::new("/admin/products", Some("/admin"), "Products", true).with_icon("product"),
        RouteMeta::new("/admin/products/create", Some("/admin/products"), "Create Product", false),
        RouteMeta::new("/admin/products/edit/:id", Some("/admin/products"), "Edit Product", false),
        RouteMeta::new("/admin/inventory", Some("/admin"), "Inventory", true).with_icon("inventory"),
        RouteMeta::new("/admin/customers", Some("/admin"), "Customers", true).with_icon("customer"),
        RouteMeta::new("/admin/customers/:id", Some("/admin/customers"), "Customer Details", false),
        RouteMeta::new("/admin/orders", Some("/admin"), "Orders", true).with_icon("order"),
        RouteMeta::new("/admin/orders/:id", Some("/admin/orders"), "Order Details", false),
        RouteMeta::new("/admin/pages", Some("/admin"), "Content Pages", true).with_icon("page"),
        RouteMeta::new("/admin/pages/create", Some("/admin/pages"), "Create Page", false),
        RouteMeta::new("/admin/pages/edit/:id", Some("/admin/pages"), "Edit Page", false),
        RouteMeta::new("/admin/settings", Some("/admin"), "Settings", true).with_icon("settings"),
    ])
});

/// The back-office route table shipped with the crate.
pub fn admin_routes() -> &'static RouteTable {
    &ADMIN_ROUTES
}

/// Consistency checks for route tables loaded from configuration.
pub struct RouteTableValidator;

impl RouteTableValidator {
    /// Every problem found in the table, in table order.
    pub fn collect_errors(table: &RouteTable) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for route in table.iter() {
            if !seen.insert(route.path.as_str()) {
                errors.push(format!("Duplicate route path '{}'", route.path));
            }

            for segment in route.path.split('/').filter(|segment| segment.starts_with(':')) {
                if !PARAM_SEGMENT.is_match(segment) {
                    errors.push(format!(
                        "Route '{}' has malformed parameter segment '{segment}'",
                        route.path
                    ));
                }
            }

            if let Some(parent) = &route.parent {
                if table.get(parent).is_none() {
                    errors.push(format!(
                        "Route '{}' references unknown parent '{parent}'",
                        route.path
                    ));
                }
            }

            for child in route.sidebar_childrens.iter().flatten() {
                if table.get(child).is_none() {
                    errors.push(format!(
                        "Route '{}' lists unknown sidebar child '{child}'",
                        route.path
                    ));
                }
            }
        }

        for cycle in Self::parent_cycles(table) {
            errors.push(format!("Parent cycle between routes: {cycle}"));
        }

        errors
    }

    /// Each distinct parent cycle, members sorted and joined with `, `.
    fn parent_cycles(table: &RouteTable) -> BTreeSet<String> {
        let mut cycles = BTreeSet::new();

        for route in table.iter() {
            let mut walk: Vec<&str> = vec![route.path.as_str()];
            let mut parent = route.parent.as_deref();

            while let Some(parent_path) = parent {
                if let Some(start) = walk.iter().position(|path| *path == parent_path) {
                    let mut members = walk[start..].to_vec();
                    members.sort_unstable();
                    cycles.insert(members.join(", "));
                    break;
                }
                walk.push(parent_path);
                parent = table.get(parent_path).and_then(|route| route.parent.as_deref());
            }
        }

        cycles
    }
}

impl RouteTable {
    /// Fails with every consistency problem of the table listed.
    ///
    /// The resolvers never call this; they tolerate malformed tables.
    pub fn validate(&self) -> Result<()> {
        let errors = RouteTableValidator::collect_errors(self);
        if errors.is_empty() {
            return Ok(());
        }
        bail!(
            "route table has {} problem(s):\n  {}",
            errors.len(),
            errors.join("\n  ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_table_is_consistent() {
        admin_routes().validate().unwrap();
        assert!(admin_routes().get("/admin").is_some());
    }

    #[test]
    fn reports_each_problem() {
        let table = RouteTable::new(vec![
            RouteMeta::new("/a", Some("/b"), "A", true),
            RouteMeta::new("/b", Some("/a"), "B", true),
            RouteMeta::new("/b", None, "B again", true),
            RouteMeta::new("/c/:1id", Some("/missing"), "C", false),
            RouteMeta::new("/d", None, "D", false).with_sidebar_childrens(&["/nowhere"]),
        ]);

        let errors = RouteTableValidator::collect_errors(&table);
        assert_eq!(
            errors,
            vec![
                "Duplicate route path '/b'".to_string(),
                "Route '/c/:1id' has malformed parameter segment ':1id'".to_string(),
                "Route '/c/:1id' references unknown parent '/missing'".to_string(),
                "Route '/d' lists unknown sidebar child '/nowhere'".to_string(),
                "Parent cycle between routes: /a, /b".to_string(),
            ]
        );
        assert!(table.validate().is_err());
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let table = RouteTable::new(vec![RouteMeta::new("/loop", Some("/loop"), "Loop", true)]);
        let message = table.validate().unwrap_err().to_string();
        assert!(message.contains("Parent cycle between routes: /loop"));
    }
}

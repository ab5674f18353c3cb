use crate::categories::{CategoryRecord, NOT_FOUND_LABEL};
use crate::loader;
use crate::routes::{admin_routes, RouteTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    pub routes_file: Option<PathBuf>,
    pub categories_file: Option<PathBuf>,
    pub not_found_label: String,
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            routes_file: None,
            categories_file: None,
            not_found_label: NOT_FOUND_LABEL.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl NavConfig {
    /// The configured route table, or the built-in admin table.
    pub fn route_table(&self) -> Result<RouteTable> {
        match &self.routes_file {
            Some(path) => loader::load_route_table(path),
            None => {
                log::debug!("No routes file configured, using built-in admin routes");
                Ok(admin_routes().clone())
            }
        }
    }

    pub fn categories(&self) -> Result<Vec<CategoryRecord>> {
        let path = self
            .categories_file
            .as_ref()
            .context("No categories file configured (use --categories)")?;
        loader::load_categories(path)
    }

    /// Swaps the built-in `N/A` sentinel for the configured label.
    pub fn display_name(&self, name: String) -> String {
        if name == NOT_FOUND_LABEL {
            self.not_found_label.clone()
        } else {
            name
        }
    }
}

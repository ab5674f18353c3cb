use crate::categories::{decode, normalize, CategoryRecord};
use crate::routes::{RouteMeta, RouteTable};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

/// Parses a category list, either bare or wrapped in the catalog API's
/// `{"data": [...]}` envelope.
///
/// Only a payload that is not a list at all is an error; malformed elements
/// are dropped one by one.
pub fn parse_categories(json: &str) -> Result<Vec<CategoryRecord>> {
    let payload: Value = serde_json::from_str(json).context("Failed to parse category list")?;
    let values = match payload {
        Value::Array(values) => values,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(values)) => values,
            _ => bail!("Category envelope has no \"data\" array"),
        },
        other => bail!("Expected a category list, found {other}"),
    };
    Ok(normalize(decode(values)))
}

pub fn load_categories(path: &Path) -> Result<Vec<CategoryRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read categories from {}", path.display()))?;
    let categories =
        parse_categories(&json).with_context(|| format!("Invalid categories file {}", path.display()))?;
    log::info!("Loaded {} categories from {}", categories.len(), path.display());
    Ok(categories)
}

/// Parses and validates a route table.
pub fn parse_route_table(json: &str) -> Result<RouteTable> {
    let routes: Vec<RouteMeta> = serde_json::from_str(json).context("Failed to parse route table")?;
    let table = RouteTable::new(routes);
    if table.is_empty() {
        log::warn!("Route table is empty, no breadcrumbs or sidebar entries will resolve");
    }
    table.validate()?;
    Ok(table)
}

pub fn load_route_table(path: &Path) -> Result<RouteTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route table from {}", path.display()))?;
    let table =
        parse_route_table(&json).with_context(|| format!("Invalid route table {}", path.display()))?;
    log::info!("Loaded {} routes from {}", table.len(), path.display());
    Ok(table)
}

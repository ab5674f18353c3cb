use super::types::{CategoryRecord, RawCategory, RawId};
use serde_json::Value;

/// Decodes API elements one by one, dropping only the elements that are not
/// category objects at all.
pub fn decode(values: Vec<Value>) -> Vec<RawCategory> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(category) => Some(category),
            Err(e) => {
                log::warn!("categories: dropping undecodable record #{index}: {e}");
                None
            }
        })
        .collect()
}

/// Applies defaults to raw API records.
///
/// Records without a usable id are dropped, a missing name becomes empty and a
/// blank parent id marks the record as top level.
pub fn normalize(raw: Vec<RawCategory>) -> Vec<CategoryRecord> {
    let total = raw.len();
    let records: Vec<CategoryRecord> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let Some(id) = category.id.as_ref().and_then(|id| id.to_key()) else {
                log::warn!("categories: dropping record #{index} without an id");
                return None;
            };

            if let Some(RawId::Other(parent)) = &category.parent_id {
                log::warn!("categories: ignoring unusable parent {parent} of '{id}'");
            }

            Some(CategoryRecord {
                parent_id: category.parent_id.as_ref().and_then(|parent| parent.to_key()),
                name: category.name.unwrap_or_default(),
                id,
            })
        })
        .collect();

    log::debug!(
        "categories: normalized {} of {total} records",
        records.len()
    );
    records
}

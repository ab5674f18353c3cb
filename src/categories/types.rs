use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display name returned when a category id cannot be resolved.
pub const NOT_FOUND_LABEL: &str = "N/A";

/// A category as it arrives from the catalog API, before any defaults are applied.
///
/// Every field is optional. Ids of an unexpected type decode as
/// `RawId::Other` and a non-text name is stringified or dropped, so only a
/// structurally broken record (e.g. repeated keys) fails, and that failure is
/// confined to the record itself by `decode`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    #[serde(default, alias = "_id")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, alias = "parent_id", alias = "parent")]
    pub parent_id: Option<RawId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl RawId {
    /// Trimmed string form of the id, `None` when it is blank or not a scalar id.
    pub fn to_key(&self) -> Option<String> {
        let key = match self {
            RawId::Text(text) => text.trim().to_string(),
            RawId::Number(number) => number.to_string(),
            RawId::Other(_) => return None,
        };
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// A normalized category record. `parent_id` is `None` for top-level categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
}

impl CategoryRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn leaf(record: &CategoryRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            children: Vec::new(),
        }
    }
}

// Unlinks descendants onto a heap stack so dropping a deep chain does not
// recurse once per level.
impl Drop for CategoryNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Row of a flattened category tree, as used by select boxes and tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatCategory {
    pub id: String,
    pub name: String,
    pub level: usize,
    pub path: String,
}

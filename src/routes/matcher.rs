use std::collections::BTreeMap;

/// Segment-wise matching of route patterns such as `/admin/orders/:id`.
pub struct PathPattern;

impl PathPattern {
    /// A pattern matches when both sides have the same number of `/` separated
    /// segments and every literal segment is equal. `:name` segments match anything.
    pub fn matches(pattern: &str, path: &str) -> bool {
        let pattern_segments: Vec<&str> = pattern.split('/').collect();
        let path_segments: Vec<&str> = path.split('/').collect();

        pattern_segments.len() == path_segments.len()
            && pattern_segments
                .iter()
                .zip(&path_segments)
                .all(|(expected, actual)| Self::is_param(expected) || expected == actual)
    }

    /// Values captured by `:name` segments, `None` when the path does not match.
    pub fn params(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
        if !Self::matches(pattern, path) {
            return None;
        }

        Some(
            pattern
                .split('/')
                .zip(path.split('/'))
                .filter(|(segment, _)| Self::is_param(segment))
                .map(|(segment, value)| (segment[1..].to_string(), value.to_string()))
                .collect(),
        )
    }

    pub fn is_dynamic(pattern: &str) -> bool {
        pattern.split('/').any(Self::is_param)
    }

    fn is_param(segment: &str) -> bool {
        segment.starts_with(':')
    }
}

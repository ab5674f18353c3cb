use crate::categories::{CategoryNode, FlatCategory};

/// Utility functions for category tree operations
pub struct TreeUtils;

impl TreeUtils {
    /// Generate a full path from parent path and node name
    pub fn generate_path(parent_path: &str, node_name: &str) -> String {
        if parent_path.is_empty() {
            node_name.to_string()
        } else {
            format!("{parent_path}/{node_name}")
        }
    }

    /// Flatten a forest depth-first, parents before their children
    pub fn flatten(nodes: &[CategoryNode]) -> Vec<FlatCategory> {
        let mut rows = Vec::new();
        let mut stack: Vec<(&CategoryNode, usize, String)> = nodes
            .iter()
            .rev()
            .map(|node| (node, 0, String::new()))
            .collect();

        while let Some((node, level, parent_path)) = stack.pop() {
            let path = Self::generate_path(&parent_path, &node.name);
            for child in node.children.iter().rev() {
                stack.push((child, level + 1, path.clone()));
            }
            rows.push(FlatCategory {
                id: node.id.clone(),
                name: node.name.clone(),
                level,
                path,
            });
        }

        rows
    }

    /// Total number of nodes in a forest
    pub fn count_nodes(nodes: &[CategoryNode]) -> usize {
        let mut count = 0;
        let mut stack: Vec<&CategoryNode> = nodes.iter().collect();

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }

        count
    }

    /// Render a forest as an indented outline, two spaces per level
    pub fn render_outline(nodes: &[CategoryNode]) -> String {
        Self::flatten(nodes)
            .iter()
            .map(|row| format!("{}{} ({})", "  ".repeat(row.level), row.name, row.id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{build_tree, CategoryRecord};

    fn sample() -> Vec<CategoryNode> {
        build_tree(&[
            CategoryRecord::new("1", "Rings", None),
            CategoryRecord::new("2", "Gold", Some("1")),
            CategoryRecord::new("3", "Necklaces", None),
            CategoryRecord::new("4", "18k", Some("2")),
        ])
    }

    #[test]
    fn flatten_is_pre_order_with_levels() {
        let rows = TreeUtils::flatten(&sample());
        let summary: Vec<(&str, usize, &str)> = rows
            .iter()
            .map(|row| (row.id.as_str(), row.level, row.path.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("1", 0, "Rings"),
                ("2", 1, "Rings/Gold"),
                ("4", 2, "Rings/Gold/18k"),
                ("3", 0, "Necklaces"),
            ]
        );
    }

    #[test]
    fn counts_every_node() {
        assert_eq!(TreeUtils::count_nodes(&sample()), 4);
        assert_eq!(TreeUtils::count_nodes(&[]), 0);
    }

    #[test]
    fn deep_chain_counts_and_flattens() {
        let chain: Vec<CategoryRecord> = (0..3_000)
            .map(|index: usize| {
                let parent = index.checked_sub(1).map(|parent| parent.to_string());
                CategoryRecord::new(index.to_string(), "n", parent.as_deref())
            })
            .collect();
        let tree = build_tree(&chain);

        assert_eq!(TreeUtils::count_nodes(&tree), 3_000);
        let rows = TreeUtils::flatten(&tree);
        assert_eq!(rows.len(), 3_000);
        assert_eq!(rows[2_999].level, 2_999);
        assert_eq!(rows[2_999].id, "2999");
    }

    #[test]
    fn outline_indents_children() {
        assert_eq!(
            TreeUtils::render_outline(&sample()),
            "Rings (1)\n  Gold (2)\n    18k (4)\nNecklaces (3)"
        );
    }
}

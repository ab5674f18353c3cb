use super::types::{CategoryNode, CategoryRecord, NOT_FOUND_LABEL};
use std::collections::HashMap;

/// Groups a flat category list into a forest.
///
/// Roots keep input order, children keep input order under their parent. A
/// record whose parent id is not in the input becomes a root. Records caught
/// in a parent cycle are promoted to roots after the regular ones, so every
/// record appears exactly once.
pub fn build_tree(categories: &[CategoryRecord]) -> Vec<CategoryNode> {
    let mut first_index: HashMap<&str, usize> = HashMap::with_capacity(categories.len());
    for (index, category) in categories.iter().enumerate() {
        first_index.entry(category.id.as_str()).or_insert(index);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); categories.len()];
    let mut roots = Vec::new();

    for (index, category) in categories.iter().enumerate() {
        let parent_index = category
            .parent_id
            .as_deref()
            .and_then(|parent_id| first_index.get(parent_id).copied());

        match parent_index {
            Some(parent_index) => children[parent_index].push(index),
            None => {
                if let Some(parent_id) = &category.parent_id {
                    log::debug!(
                        "categories: parent '{parent_id}' of '{}' not found, treating as root",
                        category.id
                    );
                }
                roots.push(index);
            }
        }
    }

    let mut walk = Walk::new(categories.len());
    let mut tops = Vec::new();

    for &root in &roots {
        walk.visit(root, &children);
        tops.push(root);
    }

    for index in 0..categories.len() {
        if !walk.placed[index] {
            log::warn!(
                "categories: '{}' is part of a parent cycle, promoting to root",
                categories[index].id
            );
            walk.visit(index, &children);
            tops.push(index);
        }
    }

    // Pre-order puts every child after its parent, so building in reverse
    // finishes all children before the node that owns them.
    let mut built: Vec<Option<CategoryNode>> = vec![None; categories.len()];
    for &index in walk.order.iter().rev() {
        let mut node = CategoryNode::leaf(&categories[index]);
        node.children = walk.attached[index]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[index] = Some(node);
    }

    tops.into_iter()
        .filter_map(|index| built[index].take())
        .collect()
}

/// Depth-first placement of records, without recursion so arbitrarily deep
/// chains are fine.
struct Walk {
    placed: Vec<bool>,
    order: Vec<usize>,
    attached: Vec<Vec<usize>>,
}

impl Walk {
    fn new(len: usize) -> Self {
        Self {
            placed: vec![false; len],
            order: Vec::with_capacity(len),
            attached: vec![Vec::new(); len],
        }
    }

    fn visit(&mut self, start: usize, children: &[Vec<usize>]) {
        self.placed[start] = true;
        let mut stack = vec![start];

        while let Some(index) = stack.pop() {
            self.order.push(index);
            for &child in &children[index] {
                // Already placed only when a cycle was cut at this record.
                if self.placed[child] {
                    continue;
                }
                self.placed[child] = true;
                self.attached[index].push(child);
                stack.push(child);
            }
        }
    }
}

/// Resolves the display name of a category or one of its direct subcategories.
///
/// Only the top level and one level of children are searched.
pub fn find_name_by_id(id: Option<&str>, categories: &[CategoryNode]) -> String {
    let Some(id) = id else {
        return NOT_FOUND_LABEL.to_string();
    };

    if let Some(category) = categories.iter().find(|category| category.id == id) {
        return category.name.clone();
    }

    categories
        .iter()
        .flat_map(|category| category.children.iter())
        .find(|subcategory| subcategory.id == id)
        .map(|subcategory| subcategory.name.clone())
        .unwrap_or_else(|| NOT_FOUND_LABEL.to_string())
}

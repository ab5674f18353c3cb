use proptest::prelude::*;
use std::collections::HashMap;
use storefront_nav::categories::{build_tree, find_name_by_id, CategoryNode, CategoryRecord};
use storefront_nav::loader::parse_categories;
use storefront_nav::tree_utils::TreeUtils;

fn collect_ids(nodes: &[CategoryNode], counts: &mut HashMap<String, usize>) {
    for node in nodes {
        *counts.entry(node.id.clone()).or_default() += 1;
        collect_ids(&node.children, counts);
    }
}

fn records(parents: &[Option<usize>]) -> Vec<CategoryRecord> {
    parents
        .iter()
        .enumerate()
        .map(|(index, parent)| {
            let parent = parent.map(|parent| format!("c{parent}"));
            CategoryRecord::new(format!("c{index}"), format!("Category {index}"), parent.as_deref())
        })
        .collect()
}

proptest! {
    // Parents may point past the end of the list (orphans) or form cycles.
    #[test]
    fn every_record_appears_exactly_once(
        parents in prop::collection::vec(prop::option::of(0usize..40), 0..32)
    ) {
        let input = records(&parents);
        let forest = build_tree(&input);

        prop_assert_eq!(TreeUtils::count_nodes(&forest), input.len());

        let mut counts = HashMap::new();
        collect_ids(&forest, &mut counts);
        prop_assert_eq!(counts.len(), input.len());
        prop_assert!(counts.values().all(|count| *count == 1));
    }

    #[test]
    fn building_is_idempotent(
        parents in prop::collection::vec(prop::option::of(0usize..20), 0..16)
    ) {
        let input = records(&parents);
        prop_assert_eq!(build_tree(&input), build_tree(&input));
    }
}

#[test]
fn orphaned_record_becomes_second_root() {
    let categories = parse_categories(
        r#"[
            {"id": "a", "name": "Rings", "parent": null},
            {"id": "b", "name": "Gold", "parent": "a"},
            {"id": "c", "name": "Loose", "parent": "x"}
        ]"#,
    )
    .unwrap();
    let tree = build_tree(&categories);

    let roots: Vec<&str> = tree.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(roots, vec!["a", "c"]);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id, "b");
}

#[test]
fn name_lookup_sentinels() {
    assert_eq!(find_name_by_id(Some("a"), &[]), "N/A");

    let tree = build_tree(&[CategoryRecord::new("a", "Rings", None)]);
    assert_eq!(find_name_by_id(None, &tree), "N/A");
    assert_eq!(find_name_by_id(Some("a"), &tree), "Rings");
}

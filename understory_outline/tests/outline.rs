// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_outline` crate.
//!
//! These check flattening, visibility under different expansion sets, and the
//! optional serde shape of `TreeNode`.

use understory_outline::{ExpansionSet, Outline, TreeNode, VisibleRows};

fn library() -> Vec<TreeNode<u32>> {
    vec![
        TreeNode::new(1, "Fiction").with_children([
            TreeNode::new(2, "Fantasy").with_children([
                TreeNode::new(3, "Epic"),
                TreeNode::new(4, "Urban"),
            ]),
            TreeNode::new(5, "Mystery"),
        ]),
        TreeNode::new(6, "Nonfiction")
            .with_disabled(true)
            .with_child(TreeNode::new(7, "History")),
        TreeNode::new(8, "Poetry"),
    ]
}

fn visible_ids(outline: &Outline<u32>, rows: &VisibleRows) -> Vec<u32> {
    rows.rows().iter().map(|&i| outline.nodes()[i].id).collect()
}

#[test]
fn arena_keeps_document_order_and_depth() {
    let outline = Outline::new(&library());
    let ids: Vec<u32> = outline.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);
    let depths: Vec<usize> = outline.nodes().iter().map(|n| n.depth).collect();
    assert_eq!(depths, [0, 1, 2, 2, 1, 0, 1, 0]);
    assert_eq!(outline.parent_id(&4), Some(&2));
    assert_eq!(outline.parent_id(&8), None);
    assert!(outline.get(&6).is_some_and(|n| n.disabled && n.has_children));
}

#[test]
fn collapsed_ancestor_hides_whole_subtree() {
    let outline = Outline::new(&library());

    // Fantasy is expanded but its parent is not, so Epic stays hidden.
    let expanded: ExpansionSet<u32> = [2].into_iter().collect();
    let rows = VisibleRows::compute(&outline, &expanded);
    assert_eq!(visible_ids(&outline, &rows), [1, 6, 8]);

    let expanded: ExpansionSet<u32> = [1, 2, 6].into_iter().collect();
    let rows = VisibleRows::compute(&outline, &expanded);
    assert_eq!(visible_ids(&outline, &rows), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(rows.position_of(outline.index_of(&7).unwrap()), Some(6));
}

#[test]
fn visibility_matches_ancestor_chain() {
    let outline = Outline::new(&library());
    let all = [1, 2, 6];
    // Every subset of the expandable ids.
    for mask in 0_u32..8 {
        let expanded: ExpansionSet<u32> = all
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &id)| id)
            .collect();
        let rows = VisibleRows::compute(&outline, &expanded);
        for index in 0..outline.len() {
            let expected = outline
                .ancestors(index)
                .all(|a| expanded.is_expanded(&outline.nodes()[a].id));
            assert_eq!(rows.is_visible(index), expected, "mask {mask:03b}, row {index}");
        }
    }
}

#[test]
fn recompute_reuses_buffers() {
    let outline = Outline::new(&library());
    let mut expanded = ExpansionSet::new();
    let mut rows = VisibleRows::new();
    rows.recompute(&outline, &expanded);
    assert_eq!(rows.len(), 3);

    expanded.expand(1);
    rows.recompute(&outline, &expanded);
    assert_eq!(visible_ids(&outline, &rows), [1, 2, 5, 6, 8]);

    expanded.collapse(&1);
    rows.recompute(&outline, &expanded);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.first(), outline.index_of(&1));
    assert_eq!(rows.last(), outline.index_of(&8));
}

#[test]
fn ordered_ids_follow_the_tree_then_list_unknown_ids() {
    let outline = Outline::new(&library());
    let expanded: ExpansionSet<u32> = [6, 2, 99, 1].into_iter().collect();
    assert_eq!(expanded.ordered_ids(&outline), [1, 2, 6, 99]);

    let mut unknown = ExpansionSet::<u32>::new().ordered_ids(&outline);
    assert!(unknown.is_empty());
    unknown = [98, 99].into_iter().collect::<ExpansionSet<u32>>().ordered_ids(&outline);
    unknown.sort_unstable();
    assert_eq!(unknown, [98, 99]);
}

#[cfg(feature = "serde")]
#[test]
fn tree_nodes_round_trip_through_json() {
    let json = r#"[
        {"id": "a", "label": "Alpha", "children": [{"id": "a1", "label": "One"}]},
        {"id": "b", "label": "Beta", "disabled": true}
    ]"#;
    let roots: Vec<TreeNode<String>> = serde_json::from_str(json).unwrap();
    assert_eq!(roots[0].children.len(), 1);
    assert!(!roots[0].disabled);
    assert!(roots[1].disabled);

    let written = serde_json::to_string(&roots[1]).unwrap();
    assert_eq!(written, r#"{"id":"b","label":"Beta","disabled":true}"#);
    let leaf = serde_json::to_string(&roots[0].children[0]).unwrap();
    assert_eq!(leaf, r#"{"id":"a1","label":"One"}"#);
}

//! Chapter tree traversal: selection resolution and display-order indexing.

use std::collections::HashMap;

use crate::domain::ChapterNode;

/// Collect every node id anywhere in `tree` that appears in `selected`.
///
/// Depth-first, children in stored order. A matched node contributes itself
/// only, whatever its depth or kind; unmatched branches are skipped without
/// affecting output order. Empty selection or empty tree yields an empty set.
pub fn resolve_selected(tree: &[ChapterNode], selected: &[String]) -> Vec<String> {
  let mut out = Vec::new();
  for node in tree {
    visit(node, selected, &mut out);
  }
  out
}

fn visit(node: &ChapterNode, selected: &[String], out: &mut Vec<String>) {
  if selected.iter().any(|s| s == &node.id) {
    out.push(node.id.clone());
  }
  for child in &node.children {
    visit(child, selected, out);
  }
}

/// DFS position of every node id in the tree. The sort engine uses this so
/// "sort by chapter" follows the order chapters are displayed, not their ids.
pub fn chapter_positions(tree: &[ChapterNode]) -> HashMap<String, usize> {
  let mut positions = HashMap::new();
  let mut next = 0usize;
  for node in tree {
    index(node, &mut positions, &mut next);
  }
  positions
}

fn index(node: &ChapterNode, positions: &mut HashMap<String, usize>, next: &mut usize) {
  positions.insert(node.id.clone(), *next);
  *next += 1;
  for child in &node.children {
    index(child, positions, next);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::NodeKind;

  fn node(id: &str, kind: NodeKind, children: Vec<ChapterNode>) -> ChapterNode {
    ChapterNode {
      id: id.into(),
      label: id.into(),
      kind,
      expanded: false,
      children,
    }
  }

  fn sample_tree() -> Vec<ChapterNode> {
    vec![
      node("ch1", NodeKind::Category, vec![
        node("ch1-1", NodeKind::Item, vec![]),
        node("ch1-2", NodeKind::Item, vec![]),
      ]),
      node("ch2", NodeKind::Category, vec![
        node("ch2-1", NodeKind::Item, vec![]),
      ]),
    ]
  }

  #[test]
  fn resolves_matches_at_any_depth() {
    let tree = sample_tree();
    let selected = vec!["ch1-2".to_string(), "ch2".to_string()];
    assert_eq!(resolve_selected(&tree, &selected), vec!["ch1-2", "ch2"]);
  }

  #[test]
  fn category_resolves_to_itself_not_descendants() {
    let tree = sample_tree();
    let selected = vec!["ch1".to_string()];
    assert_eq!(resolve_selected(&tree, &selected), vec!["ch1"]);
  }

  #[test]
  fn result_is_subset_of_tree_and_superset_of_present_selection() {
    let tree = sample_tree();
    let selected = vec!["ch2-1".to_string(), "missing".to_string()];
    let resolved = resolve_selected(&tree, &selected);
    assert_eq!(resolved, vec!["ch2-1"]);
    let positions = chapter_positions(&tree);
    assert!(resolved.iter().all(|id| positions.contains_key(id)));
  }

  #[test]
  fn empty_inputs_yield_empty_result() {
    assert!(resolve_selected(&[], &["ch1".to_string()]).is_empty());
    assert!(resolve_selected(&sample_tree(), &[]).is_empty());
  }

  #[test]
  fn positions_follow_depth_first_display_order() {
    let positions = chapter_positions(&sample_tree());
    assert_eq!(positions["ch1"], 0);
    assert_eq!(positions["ch1-1"], 1);
    assert_eq!(positions["ch1-2"], 2);
    assert_eq!(positions["ch2"], 3);
    assert_eq!(positions["ch2-1"], 4);
  }
}

//! Conjunctive problem filtering: order-preserving predicates + prefix truncation.

use std::collections::HashSet;

use tracing::debug;

use crate::chapters::resolve_selected;
use crate::domain::{ChapterNode, FilterCriteria, Problem};

/// Narrow `problems` to the subsequence matching every active criterion, then
/// keep the first `limit` matches.
///
/// Dimensions combine with AND. Within the subject dimension a single shared
/// tag is enough (OR). An empty difficulty/type/subject selection leaves that
/// dimension unconstrained; an empty chapter selection is different: it means
/// nothing is selected, so the result is empty (never "show everything").
///
/// Truncation is a strict prefix of the filtered sequence, before any external
/// sort: `None` = unlimited, `Some(n)` = first n, so `Some(0)` = none.
pub fn filter_problems(
  problems: &[Problem],
  tree: &[ChapterNode],
  criteria: &FilterCriteria,
) -> Vec<Problem> {
  if criteria.chapter_ids.is_empty() {
    return Vec::new();
  }

  let chapters: HashSet<String> = resolve_selected(tree, &criteria.chapter_ids)
    .into_iter()
    .collect();

  let mut out: Vec<Problem> = problems
    .iter()
    .filter(|p| matches_chapter(p, &chapters))
    .filter(|p| criteria.difficulties.is_empty() || criteria.difficulties.contains(&p.difficulty))
    .filter(|p| {
      criteria.problem_types.is_empty()
        || criteria.problem_types.iter().any(|t| *t == p.problem_type)
    })
    .filter(|p| {
      criteria.subjects.is_empty() || p.subjects.iter().any(|s| criteria.subjects.contains(s))
    })
    .cloned()
    .collect();

  if let Some(limit) = criteria.limit {
    out.truncate(limit);
  }

  debug!(target: "bank", total = problems.len(), matched = out.len(), "Filtered problem pool");
  out
}

// A problem with no chapter reference can never match a chapter selection.
fn matches_chapter(p: &Problem, chapters: &HashSet<String>) -> bool {
  p.chapter_id
    .as_ref()
    .map(|c| chapters.contains(c))
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, NodeKind, ProblemSource};

  fn tree() -> Vec<ChapterNode> {
    vec![
      ChapterNode {
        id: "ch-a".into(),
        label: "사회·문화 현상의 탐구".into(),
        kind: NodeKind::Category,
        expanded: false,
        children: vec![],
      },
      ChapterNode {
        id: "ch-b".into(),
        label: "개인과 사회 구조".into(),
        kind: NodeKind::Category,
        expanded: false,
        children: vec![],
      },
    ]
  }

  fn problem(id: &str, chapter: Option<&str>, difficulty: Difficulty, ty: &str, subjects: &[&str]) -> Problem {
    Problem {
      id: id.into(),
      source: ProblemSource::Seed,
      chapter_id: chapter.map(|c| c.into()),
      difficulty,
      problem_type: ty.into(),
      subjects: subjects.iter().map(|s| s.to_string()).collect(),
      tags: vec![],
      correct_rate: None,
      exam_year: None,
      question_image: String::new(),
      answer_image: None,
    }
  }

  fn pool() -> Vec<Problem> {
    vec![
      problem("p1", Some("ch-a"), Difficulty::Jung, "수능", &["사회문화"]),
      problem("p2", Some("ch-a"), Difficulty::Sang, "모평", &["사회문화"]),
      problem("p3", Some("ch-b"), Difficulty::Jung, "수능", &["생활과 윤리"]),
      problem("p4", Some("ch-a"), Difficulty::Jung, "학평", &["한국지리"]),
      problem("p5", None, Difficulty::Jung, "수능", &["사회문화"]),
    ]
  }

  fn ids(v: &[Problem]) -> Vec<&str> {
    v.iter().map(|p| p.id.as_str()).collect()
  }

  #[test]
  fn empty_chapter_selection_yields_nothing() {
    let criteria = FilterCriteria {
      difficulties: vec![Difficulty::Jung],
      ..Default::default()
    };
    assert!(filter_problems(&pool(), &tree(), &criteria).is_empty());
  }

  #[test]
  fn dimensions_combine_with_and() {
    let criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into()],
      difficulties: vec![Difficulty::Jung],
      problem_types: vec!["수능".into()],
      ..Default::default()
    };
    assert_eq!(ids(&filter_problems(&pool(), &tree(), &criteria)), vec!["p1"]);
  }

  #[test]
  fn empty_secondary_dimensions_are_unconstrained() {
    let criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into(), "ch-b".into()],
      ..Default::default()
    };
    // p5 has no chapter reference, so it can never match.
    assert_eq!(ids(&filter_problems(&pool(), &tree(), &criteria)), vec!["p1", "p2", "p3", "p4"]);
  }

  #[test]
  fn one_shared_subject_is_enough() {
    let criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into(), "ch-b".into()],
      subjects: vec!["사회문화".into(), "생활과 윤리".into()],
      ..Default::default()
    };
    assert_eq!(ids(&filter_problems(&pool(), &tree(), &criteria)), vec!["p1", "p2", "p3"]);
  }

  #[test]
  fn limit_keeps_a_strict_prefix() {
    let criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into()],
      limit: Some(2),
      ..Default::default()
    };
    assert_eq!(ids(&filter_problems(&pool(), &tree(), &criteria)), vec!["p1", "p2"]);
  }

  #[test]
  fn limit_zero_means_none_and_absent_means_all() {
    let mut criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into()],
      limit: Some(0),
      ..Default::default()
    };
    assert!(filter_problems(&pool(), &tree(), &criteria).is_empty());
    criteria.limit = None;
    assert_eq!(filter_problems(&pool(), &tree(), &criteria).len(), 3);
  }

  #[test]
  fn filtering_an_already_matching_set_is_idempotent() {
    let criteria = FilterCriteria {
      chapter_ids: vec!["ch-a".into()],
      difficulties: vec![Difficulty::Jung],
      ..Default::default()
    };
    let once = filter_problems(&pool(), &tree(), &criteria);
    let twice = filter_problems(&once, &tree(), &criteria);
    assert_eq!(ids(&once), ids(&twice));
  }
}

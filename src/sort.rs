//! Sort-rule engine: ordered (field, direction) rules evaluated left-to-right
//! with sequential tie-breaking, plus preset classification.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Problem, SortDir, SortField, SortPreset, SortRule};

/// Canonical rule sequence behind the "practice" preset:
/// chapters in display order, then tag runs, then easy-to-hard.
pub fn practice_rules() -> Vec<SortRule> {
  vec![
    SortRule { field: SortField::Chapter, dir: SortDir::Asc },
    SortRule { field: SortField::Tags, dir: SortDir::Asc },
    SortRule { field: SortField::CorrectRate, dir: SortDir::Desc },
  ]
}

/// Classify a rule list. Exact match only: length, field, and direction must
/// match the practice sequence position-by-position; everything else
/// non-empty is "custom". An empty list is the "exam-like" preset.
pub fn classify_rules(rules: &[SortRule]) -> SortPreset {
  if rules.is_empty() {
    return SortPreset::ExamLike;
  }
  if rules == practice_rules().as_slice() {
    SortPreset::Practice
  } else {
    SortPreset::Custom
  }
}

/// Order `problems` by the rule list. Stable: with no rules, or on full ties,
/// the input order is preserved unchanged. `chapter_order` maps chapter ids to
/// DFS display positions (see `chapters::chapter_positions`).
pub fn sort_problems(
  mut problems: Vec<Problem>,
  rules: &[SortRule],
  chapter_order: &HashMap<String, usize>,
) -> Vec<Problem> {
  if rules.is_empty() {
    return problems;
  }
  problems.sort_by(|a, b| compare(a, b, rules, chapter_order));
  problems
}

fn compare(a: &Problem, b: &Problem, rules: &[SortRule], chapter_order: &HashMap<String, usize>) -> Ordering {
  for rule in rules {
    let ord = match compare_field(a, b, rule.field, chapter_order) {
      Ordering::Equal => continue,
      ord => ord,
    };
    return match rule.dir {
      SortDir::Asc => ord,
      SortDir::Desc => ord.reverse(),
    };
  }
  Ordering::Equal
}

/// Ascending comparison on one field. Absent values compare greater than any
/// present value; the direction flip in `compare` applies afterwards, so
/// absent sorts last ascending and first descending.
fn compare_field(a: &Problem, b: &Problem, field: SortField, chapter_order: &HashMap<String, usize>) -> Ordering {
  match field {
    SortField::Chapter => cmp_option(chapter_pos(a, chapter_order), chapter_pos(b, chapter_order)),
    SortField::Tags => cmp_option(a.tags.first(), b.tags.first()),
    SortField::CorrectRate => cmp_option(a.correct_rate, b.correct_rate),
    SortField::ExamYear => cmp_option(a.exam_year, b.exam_year),
    SortField::ProblemType => a.problem_type.cmp(&b.problem_type),
    SortField::RelatedSubjects => joined_subjects(a).cmp(&joined_subjects(b)),
  }
}

// A chapter missing from the tree counts as absent, same as no chapter at all.
fn chapter_pos(p: &Problem, chapter_order: &HashMap<String, usize>) -> Option<usize> {
  p.chapter_id.as_ref().and_then(|id| chapter_order.get(id).copied())
}

// Canonical joined representation keeps the comparison deterministic when
// subject sets differ in size.
fn joined_subjects(p: &Problem) -> String {
  p.subjects.join("/")
}

fn cmp_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  match (a, b) {
    (Some(x), Some(y)) => x.cmp(&y),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, ProblemSource};

  fn problem(id: &str, chapter: Option<&str>, rate: Option<u8>, tags: &[&str], year: Option<u16>) -> Problem {
    Problem {
      id: id.into(),
      source: ProblemSource::Seed,
      chapter_id: chapter.map(|c| c.into()),
      difficulty: Difficulty::Jung,
      problem_type: "수능".into(),
      subjects: vec!["사회문화".into()],
      tags: tags.iter().map(|t| t.to_string()).collect(),
      correct_rate: rate,
      exam_year: year,
      question_image: String::new(),
      answer_image: None,
    }
  }

  fn order(chapters: &[&str]) -> HashMap<String, usize> {
    chapters.iter().enumerate().map(|(i, c)| (c.to_string(), i)).collect()
  }

  fn ids(v: &[Problem]) -> Vec<&str> {
    v.iter().map(|p| p.id.as_str()).collect()
  }

  #[test]
  fn empty_rule_list_preserves_input_order() {
    let input = vec![
      problem("p3", Some("b"), Some(70), &[], None),
      problem("p1", Some("a"), Some(30), &[], None),
      problem("p2", Some("a"), Some(90), &[], None),
    ];
    let out = sort_problems(input.clone(), &[], &order(&["a", "b"]));
    assert_eq!(ids(&out), ids(&input));
  }

  #[test]
  fn later_rules_only_break_ties() {
    let rules = vec![
      SortRule { field: SortField::Chapter, dir: SortDir::Asc },
      SortRule { field: SortField::CorrectRate, dir: SortDir::Asc },
    ];
    let input = vec![
      problem("p1", Some("b"), Some(10), &[], None),
      problem("p2", Some("a"), Some(90), &[], None),
      problem("p3", Some("a"), Some(40), &[], None),
    ];
    let out = sort_problems(input, &rules, &order(&["a", "b"]));
    assert_eq!(ids(&out), vec!["p3", "p2", "p1"]);
  }

  #[test]
  fn chapter_comparison_follows_tree_order_not_ids() {
    let rules = vec![SortRule { field: SortField::Chapter, dir: SortDir::Asc }];
    // "z-first" displays before "a-last" in the tree.
    let input = vec![
      problem("p1", Some("a-last"), None, &[], None),
      problem("p2", Some("z-first"), None, &[], None),
    ];
    let out = sort_problems(input, &rules, &order(&["z-first", "a-last"]));
    assert_eq!(ids(&out), vec!["p2", "p1"]);
  }

  #[test]
  fn absent_values_sort_last_ascending_first_descending() {
    let asc = vec![SortRule { field: SortField::CorrectRate, dir: SortDir::Asc }];
    let desc = vec![SortRule { field: SortField::CorrectRate, dir: SortDir::Desc }];
    let input = vec![
      problem("p1", None, None, &[], None),
      problem("p2", None, Some(80), &[], None),
      problem("p3", None, Some(20), &[], None),
    ];
    let up = sort_problems(input.clone(), &asc, &HashMap::new());
    assert_eq!(ids(&up), vec!["p3", "p2", "p1"]);
    let down = sort_problems(input, &desc, &HashMap::new());
    assert_eq!(ids(&down), vec!["p1", "p2", "p3"]);
  }

  #[test]
  fn tags_compare_by_first_tag() {
    let rules = vec![SortRule { field: SortField::Tags, dir: SortDir::Asc }];
    let input = vec![
      problem("p1", None, None, &["갈등론", "가족"], None),
      problem("p2", None, None, &["가족"], None),
      problem("p3", None, None, &[], None),
    ];
    let out = sort_problems(input, &rules, &HashMap::new());
    assert_eq!(ids(&out), vec!["p2", "p1", "p3"]);
  }

  #[test]
  fn exam_year_sorts_numerically() {
    let rules = vec![SortRule { field: SortField::ExamYear, dir: SortDir::Desc }];
    let input = vec![
      problem("p1", None, None, &[], Some(2019)),
      problem("p2", None, None, &[], Some(2024)),
      problem("p3", None, None, &[], Some(2021)),
    ];
    let out = sort_problems(input, &rules, &HashMap::new());
    assert_eq!(ids(&out), vec!["p2", "p3", "p1"]);
  }

  #[test]
  fn related_subjects_use_the_joined_representation() {
    let rules = vec![SortRule { field: SortField::RelatedSubjects, dir: SortDir::Asc }];
    let mut p1 = problem("p1", None, None, &[], None);
    p1.subjects = vec!["사회문화".into(), "생활과 윤리".into()];
    let mut p2 = problem("p2", None, None, &[], None);
    p2.subjects = vec!["사회문화".into()];
    // Joined form makes differing set sizes compare deterministically.
    let out = sort_problems(vec![p1, p2], &rules, &HashMap::new());
    assert_eq!(ids(&out), vec!["p2", "p1"]);
  }

  #[test]
  fn classifier_is_exact_match_only() {
    assert_eq!(classify_rules(&[]), SortPreset::ExamLike);
    assert_eq!(classify_rules(&practice_rules()), SortPreset::Practice);

    // One flipped direction is enough to lose the label.
    let mut flipped = practice_rules();
    flipped[2].dir = SortDir::Asc;
    assert_eq!(classify_rules(&flipped), SortPreset::Custom);

    // So is a subset, a superset, or a reordering.
    assert_eq!(classify_rules(&practice_rules()[..2]), SortPreset::Custom);
    let mut superset = practice_rules();
    superset.push(SortRule { field: SortField::ExamYear, dir: SortDir::Asc });
    assert_eq!(classify_rules(&superset), SortPreset::Custom);
    let mut reordered = practice_rules();
    reordered.swap(0, 1);
    assert_eq!(classify_rules(&reordered), SortPreset::Custom);
  }
}

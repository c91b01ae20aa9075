//! Seed data: a built-in chapter tree and a small problem bank so the app
//! is useful even without an external TOML config.

use crate::domain::{ChapterNode, Difficulty, NodeKind, Problem, ProblemSource};

/// Built-in chapter tree (사회문화 curriculum slice). Top-level nodes are the
/// user-selectable categories; items underneath are the per-unit leaves.
pub fn seed_chapter_tree() -> Vec<ChapterNode> {
  vec![
    category("ch1", "사회·문화 현상의 탐구", vec![
      item("ch1-1", "사회·문화 현상의 이해"),
      item("ch1-2", "탐구 방법"),
      item("ch1-3", "자료 수집 방법"),
    ]),
    category("ch2", "개인과 사회 구조", vec![
      item("ch2-1", "사회적 존재로서의 인간"),
      item("ch2-2", "사회 집단과 사회 조직"),
      item("ch2-3", "일탈 행동의 이해"),
    ]),
    category("ch3", "문화와 일상생활", vec![
      item("ch3-1", "문화의 이해"),
      item("ch3-2", "하위문화와 대중문화"),
    ]),
  ]
}

fn category(id: &str, label: &str, children: Vec<ChapterNode>) -> ChapterNode {
  ChapterNode {
    id: id.into(),
    label: label.into(),
    kind: NodeKind::Category,
    expanded: false,
    children,
  }
}

fn item(id: &str, label: &str) -> ChapterNode {
  ChapterNode {
    id: id.into(),
    label: label.into(),
    kind: NodeKind::Item,
    expanded: false,
    children: vec![],
  }
}

/// Minimal built-in bank. Ids encode year/provenance the way the real bank
/// names its scans, so seeded worksheets look like real ones.
pub fn seed_problems() -> Vec<Problem> {
  vec![
    seed("q-2024-su-03", "ch1-1", Difficulty::Jung, "수능", &["사회문화"], &["기능론"], Some(68), 2024),
    seed("q-2024-su-11", "ch1-2", Difficulty::Jungsang, "수능", &["사회문화"], &["질적 연구"], Some(54), 2024),
    seed("q-2023-mo-07", "ch1-2", Difficulty::Sang, "모평", &["사회문화"], &["양적 연구"], Some(41), 2023),
    seed("q-2023-su-14", "ch1-3", Difficulty::Choesang, "수능", &["사회문화"], &["표본 조사"], Some(23), 2023),
    seed("q-2024-hak-05", "ch2-1", Difficulty::Ha, "학평", &["사회문화", "생활과 윤리"], &["사회화"], Some(85), 2024),
    seed("q-2022-su-09", "ch2-2", Difficulty::Jung, "수능", &["사회문화"], &["관료제"], Some(63), 2022),
    seed("q-2023-hak-16", "ch2-3", Difficulty::Jungsang, "학평", &["사회문화"], &["낙인 이론"], Some(52), 2023),
    seed("q-2022-mo-12", "ch3-1", Difficulty::Jung, "모평", &["사회문화", "한국지리"], &["문화 상대주의"], Some(71), 2022),
    seed("q-2024-su-19", "ch3-2", Difficulty::Choeha, "수능", &["사회문화"], &["대중문화"], Some(93), 2024),
    seed("q-2021-su-18", "ch3-2", Difficulty::Sang, "수능", &["사회문화"], &["세대 문화"], None, 2021),
  ]
}

fn seed(
  id: &str,
  chapter: &str,
  difficulty: Difficulty,
  problem_type: &str,
  subjects: &[&str],
  tags: &[&str],
  correct_rate: Option<u8>,
  exam_year: u16,
) -> Problem {
  Problem {
    id: id.into(),
    source: ProblemSource::Seed,
    chapter_id: Some(chapter.into()),
    difficulty,
    problem_type: problem_type.into(),
    subjects: subjects.iter().map(|s| s.to_string()).collect(),
    tags: tags.iter().map(|t| t.to_string()).collect(),
    correct_rate,
    exam_year: Some(exam_year),
    question_image: format!("bank/{}/question.png", id),
    answer_image: Some(format!("bank/{}/answer.png", id)),
  }
}

//! Domain models used by the backend: problems, the chapter tree, filter criteria,
//! sort rules, and assembled worksheets.

use serde::{Deserialize, Serialize};

/// Named difficulty level of a problem. Six levels, each tied to a fixed
/// correct-rate range (see the `difficulty` module). Hardest level = lowest
/// correct rate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
  #[serde(rename = "최상")] Choesang,
  #[serde(rename = "상")] Sang,
  #[serde(rename = "중상")] Jungsang,
  #[serde(rename = "중")] Jung,
  #[serde(rename = "하")] Ha,
  #[serde(rename = "최하")] Choeha,
}

impl Difficulty {
  pub fn label(&self) -> &'static str {
    match self {
      Difficulty::Choesang => "최상",
      Difficulty::Sang => "상",
      Difficulty::Jungsang => "중상",
      Difficulty::Jung => "중",
      Difficulty::Ha => "하",
      Difficulty::Choeha => "최하",
    }
  }
}

/// Where did the problem come from?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemSource {
  ConfigBank,  // from user-provided TOML bank
  Seed,        // built-in seeds
}

/// One previously administered exam question. Read-only input from the
/// pipeline's perspective.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
  pub id: String,
  pub source: ProblemSource,

  #[serde(default)] pub chapter_id: Option<String>,
  pub difficulty: Difficulty,
  pub problem_type: String,   // exam provenance label (e.g., "수능", "모평", "학평")

  /// Curriculum subjects the question relates to (e.g., "사회문화").
  #[serde(default)] pub subjects: Vec<String>,
  /// Unit/concept tags (e.g., "기능론", "표본 조사").
  #[serde(default)] pub tags: Vec<String>,

  /// Whole-percent correct rate from the original administration, 0-100.
  #[serde(default)] pub correct_rate: Option<u8>,
  #[serde(default)] pub exam_year: Option<u16>,

  // Question/answer artwork lives in external storage; we only carry references.
  #[serde(default)] pub question_image: String,
  #[serde(default)] pub answer_image: Option<String>,
}

/// Category (has children) vs selectable leaf item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
  Category,
  Item,
}
impl Default for NodeKind {
  fn default() -> Self { NodeKind::Item }
}

/// Node of the chapter tree. Strict tree: no cycles, single parent,
/// children kept in display order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChapterNode {
  pub id: String,
  pub label: String,
  #[serde(default)] pub kind: NodeKind,
  #[serde(default)] pub expanded: bool,
  #[serde(default)] pub children: Vec<ChapterNode>,
}

/// Filter selections for one pipeline run. Built per request, never persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
  #[serde(default, rename = "chapterIds")] pub chapter_ids: Vec<String>,
  #[serde(default)] pub difficulties: Vec<Difficulty>,
  #[serde(default, rename = "problemTypes")] pub problem_types: Vec<String>,
  #[serde(default)] pub subjects: Vec<String>,
  /// `None` = unlimited; `Some(n)` keeps the first n matches (so `Some(0)` = none).
  #[serde(default)] pub limit: Option<usize>,
}

/// Field a sort rule orders by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
  Chapter,
  Tags,
  CorrectRate,
  ExamYear,
  ProblemType,
  RelatedSubjects,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
  Asc,
  Desc,
}

/// One (field, direction) ordering rule. An ordered list of these defines a
/// total comparator by sequential tie-breaking.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortRule {
  pub field: SortField,
  pub dir: SortDir,
}

/// Read-only classification of a rule list (see `sort::classify_rules`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortPreset {
  ExamLike,
  Practice,
  Custom,
}

/// Assembled worksheet stored in-memory. `problem_ids` is a frozen snapshot of
/// one pipeline result, in its final order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Worksheet {
  pub id: String,
  pub title: String,
  pub author: String,
  pub problem_ids: Vec<String>,
  pub preset: SortPreset,
  /// Base64 PNG rendered by the client-side preview; kept opaque here.
  #[serde(default)] pub thumbnail_png: Option<String>,
  #[serde(default)] pub published: bool,
}

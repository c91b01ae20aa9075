//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - The selection pipeline: resolve chapters, filter, truncate, sort
//!   - Rule-list classification for the UI preset label
//!   - Worksheet assembly (pipeline snapshot + thumbnail validation)

use base64::Engine;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::chapters::chapter_positions;
use crate::domain::{ChapterNode, FilterCriteria, Problem, SortPreset, SortRule, Worksheet};
use crate::filter::filter_problems;
use crate::sort::{classify_rules, sort_problems};
use crate::state::AppState;
use crate::util::trunc_for_log;

/// The whole selection pipeline as one pure function: filter (chapter
/// resolution + predicates + prefix truncation), then rule-driven sorting.
/// Allocates a fresh output; inputs are never mutated.
pub fn select_problems(
  problems: &[Problem],
  tree: &[ChapterNode],
  criteria: &FilterCriteria,
  rules: &[SortRule],
) -> Vec<Problem> {
  let filtered = filter_problems(problems, tree, criteria);
  let chapter_order = chapter_positions(tree);
  sort_problems(filtered, rules, &chapter_order)
}

/// Snapshot the bank and run the pipeline. Returns the preset label alongside
/// so callers can echo it back to the UI.
#[instrument(level = "info", skip(state, criteria, rules), fields(chapters = criteria.chapter_ids.len(), rules = rules.len()))]
pub async fn run_filter(
  state: &AppState,
  criteria: &FilterCriteria,
  rules: &[SortRule],
) -> (SortPreset, Vec<Problem>) {
  let pool = state.problems_snapshot().await;
  let selected = select_problems(&pool, &state.chapters, criteria, rules);
  let preset = classify_rules(rules);
  info!(target: "bank", pool = pool.len(), selected = selected.len(), ?preset, "Pipeline run");
  (preset, selected)
}

/// Assemble a worksheet from a criteria + rules snapshot and store it.
/// The stored id list is the pipeline output in its final order.
#[instrument(level = "info", skip_all, fields(title_len = title.len(), author_len = author.len()))]
pub async fn build_worksheet(
  state: &AppState,
  title: &str,
  author: &str,
  criteria: &FilterCriteria,
  rules: &[SortRule],
  thumbnail_png: Option<String>,
) -> Result<Worksheet, String> {
  if title.trim().is_empty() {
    return Err("Worksheet title must not be empty.".into());
  }

  if let Some(thumb) = &thumbnail_png {
    if let Err(e) = base64::engine::general_purpose::STANDARD.decode(thumb) {
      error!(target: "worksheet", error = %e, head = %trunc_for_log(thumb, 24), "Rejecting invalid thumbnail payload");
      return Err("Thumbnail is not valid base64.".into());
    }
  }

  let (preset, selected) = run_filter(state, criteria, rules).await;
  if selected.is_empty() {
    return Err("No problems matched the given criteria.".into());
  }

  let w = Worksheet {
    id: Uuid::new_v4().to_string(),
    title: title.trim().to_string(),
    author: author.trim().to_string(),
    problem_ids: selected.iter().map(|p| p.id.clone()).collect(),
    preset,
    thumbnail_png,
    published: false,
  };
  state.insert_worksheet(w.clone()).await;
  info!(target: "worksheet", id = %w.id, problems = w.problem_ids.len(), ?preset, "Worksheet assembled");
  Ok(w)
}

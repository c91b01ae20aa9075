//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{State, Query}, http::StatusCode, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::difficulty::{levels_for_range, range_for_levels};
use crate::protocol::*;
use crate::state::AppState;
use crate::logic::*;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_chapters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(ChaptersOut { chapters: (*state.chapters).clone() })
}

#[instrument(level = "info", skip(state), fields(%q.id))]
pub async fn http_get_problem(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ProblemQuery>,
) -> Result<Json<ProblemOut>, (StatusCode, Json<ErrorOut>)> {
  match state.get_problem(&q.id).await {
    Some(p) => Ok(Json(to_out(&p))),
    None => Err((
      StatusCode::NOT_FOUND,
      Json(ErrorOut { message: format!("Unknown problem id: {}", q.id) }),
    )),
  }
}

#[instrument(level = "info", skip(state, body), fields(chapters = body.criteria.chapter_ids.len(), rules = body.rules.len()))]
pub async fn http_post_filter(
  State(state): State<Arc<AppState>>,
  Json(body): Json<FilterIn>,
) -> impl IntoResponse {
  let (preset, selected) = run_filter(&state, &body.criteria, &body.rules).await;
  info!(target: "bank", total = selected.len(), ?preset, "HTTP filter served");
  Json(FilterOut {
    preset,
    total: selected.len(),
    problems: selected.iter().map(to_out).collect(),
  })
}

#[instrument(level = "info", skip(body), fields(levels = body.levels.len()))]
pub async fn http_post_difficulty_range(Json(body): Json<RangeIn>) -> impl IntoResponse {
  let range = range_for_levels(&body.levels);
  Json(RangeOut { min: range.map(|(lo, _)| lo), max: range.map(|(_, hi)| hi) })
}

#[instrument(level = "info", fields(min = body.min, max = body.max))]
pub async fn http_post_difficulty_levels(Json(body): Json<LevelsIn>) -> impl IntoResponse {
  Json(LevelsOut { levels: levels_for_range(body.min, body.max) })
}

#[instrument(level = "info", skip(state, body), fields(title_len = body.title.len()))]
pub async fn http_post_worksheet(
  State(state): State<Arc<AppState>>,
  Json(body): Json<WorksheetIn>,
) -> Result<Json<WorksheetOut>, (StatusCode, Json<ErrorOut>)> {
  match build_worksheet(&state, &body.title, &body.author, &body.criteria, &body.rules, body.thumbnail_png).await {
    Ok(w) => {
      info!(target: "worksheet", id = %w.id, "HTTP worksheet assembled");
      Ok(Json(worksheet_to_out(&w)))
    }
    Err(message) => Err((StatusCode::BAD_REQUEST, Json(ErrorOut { message }))),
  }
}

#[instrument(level = "info", skip(state), fields(%q.id))]
pub async fn http_get_worksheet(
  State(state): State<Arc<AppState>>,
  Query(q): Query<WorksheetQuery>,
) -> Result<Json<WorksheetOut>, (StatusCode, Json<ErrorOut>)> {
  match state.get_worksheet(&q.id).await {
    Some(w) => Ok(Json(worksheet_to_out(&w))),
    None => Err((
      StatusCode::NOT_FOUND,
      Json(ErrorOut { message: format!("Unknown worksheetId: {}", q.id) }),
    )),
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_worksheets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let worksheets = state.list_published_worksheets().await;
  info!(target: "worksheet", total = worksheets.len(), "HTTP published list served");
  Json(WorksheetsOut { worksheets: worksheets.iter().map(worksheet_to_out).collect() })
}

#[instrument(level = "info", skip(state, body), fields(%body.worksheet_id))]
pub async fn http_post_publish(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PublishIn>,
) -> impl IntoResponse {
  let ok = state.publish_worksheet(&body.worksheet_id).await;
  Json(PublishOut { ok })
}

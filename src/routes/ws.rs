//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::difficulty::{levels_for_range, range_for_levels};
use crate::protocol::{to_out, worksheet_to_out, ClientWsMessage, ServerWsMessage};
use crate::logic::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "gichul_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "gichul_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target = "gichul_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "gichul_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "gichul_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Chapters => {
      ServerWsMessage::Chapters { chapters: (*state.chapters).clone() }
    }

    ClientWsMessage::FilterProblems { criteria, rules } => {
      let (preset, selected) = run_filter(state, &criteria, &rules).await;
      tracing::info!(target: "bank", total = selected.len(), ?preset, "WS filter served");
      ServerWsMessage::Problems {
        preset,
        total: selected.len(),
        problems: selected.iter().map(to_out).collect(),
      }
    }

    ClientWsMessage::DifficultyRange { levels } => {
      let range = range_for_levels(&levels);
      ServerWsMessage::DifficultyRange {
        min: range.map(|(lo, _)| lo),
        max: range.map(|(_, hi)| hi),
      }
    }

    ClientWsMessage::DifficultyLevels { min, max } => {
      ServerWsMessage::DifficultyLevels { levels: levels_for_range(min, max) }
    }

    ClientWsMessage::BuildWorksheet { title, author, criteria, rules, thumbnail_png } => {
      match build_worksheet(state, &title, &author, &criteria, &rules, thumbnail_png).await {
        Ok(w) => {
          tracing::info!(target: "worksheet", id = %w.id, "WS worksheet assembled");
          ServerWsMessage::Worksheet { worksheet: worksheet_to_out(&w) }
        }
        Err(message) => ServerWsMessage::Error { message },
      }
    }

    ClientWsMessage::GetWorksheet { worksheet_id } => {
      match state.get_worksheet(&worksheet_id).await {
        Some(w) => ServerWsMessage::Worksheet { worksheet: worksheet_to_out(&w) },
        None => ServerWsMessage::Error { message: format!("Unknown worksheetId: {}", worksheet_id) },
      }
    }

    ClientWsMessage::ListWorksheets => {
      let worksheets = state.list_published_worksheets().await;
      ServerWsMessage::Worksheets { worksheets: worksheets.iter().map(worksheet_to_out).collect() }
    }

    ClientWsMessage::PublishWorksheet { worksheet_id } => {
      let ok = state.publish_worksheet(&worksheet_id).await;
      ServerWsMessage::Published { ok }
    }
  }
}

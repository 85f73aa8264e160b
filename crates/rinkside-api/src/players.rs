//! Handlers for `/players` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/players` | Optional `?camp_id=&group_id=&position=&status=` |
//! | `POST`   | `/players` | Body: [`NewPlayer`]; returns 201 |
//! | `POST`   | `/players/import` | Body: `[NewPlayer]`; returns 201 |
//! | `GET`    | `/players/:id` | 404 if not found |
//! | `PATCH`  | `/players/:id` | Body: [`PlayerPatch`]; 404 if not found |
//! | `DELETE` | `/players/:id` | Always 204 |
//!
//! `camp_id` and `group_ids` are stored as given; they are not checked
//! against the camps store.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rinkside_core::{
  filter::{Predicates, filter_by_equality, filter_by_group, filter_by_ownership},
  player::{NewPlayer, Player, PlayerAttribute, PlayerPatch},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError, extract::ApiJson, state::transact};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub camp_id:  Option<String>,
  pub group_id: Option<String>,
  pub position: Option<String>,
  pub status:   Option<String>,
}

/// `GET /players[?camp_id=...][&group_id=...][&position=...][&status=...]`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Player>> {
  let store = state.players.read().await;

  let mut players = match params.camp_id.as_deref() {
    Some(camp_id) if !camp_id.is_empty() => {
      filter_by_ownership(store.records(), camp_id)
    }
    _ => store.records().to_vec(),
  };

  if let Some(group_id) = params.group_id.as_deref().filter(|g| !g.is_empty()) {
    players = filter_by_group(&players, group_id);
  }

  let predicates = Predicates::new()
    .with_optional(PlayerAttribute::Position, params.position)
    .with_optional(PlayerAttribute::Status, params.status);
  if !predicates.is_unconstrained() {
    players = filter_by_equality(&players, &predicates);
  }

  Json(players)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /players/:id`
pub async fn get_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
  let store = state.players.read().await;
  store
    .get(&id)
    .cloned()
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("player {id} not found")))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /players` — returns 201 + the stored [`Player`].
pub async fn create(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<NewPlayer>,
) -> impl IntoResponse {
  let player = transact(&state.players, |store| store.add(body)).await;
  tracing::info!(player_id = %player.id, camp_id = %player.camp_id, "player created");
  (StatusCode::CREATED, Json(player))
}

/// `POST /players/import` — bulk add, input order preserved.
pub async fn import(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<Vec<NewPlayer>>,
) -> impl IntoResponse {
  let players = transact(&state.players, |store| store.import_many(body)).await;
  tracing::info!(count = players.len(), "players imported");
  (StatusCode::CREATED, Json(players))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /players/:id`
///
/// As with camps, a missing id is a no-op in the store and a 404 here.
pub async fn update_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
  ApiJson(patch): ApiJson<PlayerPatch>,
) -> Result<Json<Player>, ApiError> {
  transact(&state.players, |store| {
    if !store.contains(&id) {
      return (store, None);
    }
    let store = store.update(&id, patch);
    let player = store.get(&id).cloned();
    (store, player)
  })
  .await
  .map(Json)
  .ok_or_else(|| ApiError::NotFound(format!("player {id} not found")))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /players/:id` — 204 whether or not the player existed.
pub async fn delete_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> StatusCode {
  transact(&state.players, |store| (store.remove(&id), ())).await;
  StatusCode::NO_CONTENT
}

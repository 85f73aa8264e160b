//! Handlers for `/camps` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/camps` | Optional `?level=&location=&active=`; blank values are ignored |
//! | `POST`   | `/camps` | Body: [`NewCamp`]; returns 201 + stored camp |
//! | `POST`   | `/camps/import` | Body: `[NewCamp]`; returns 201 + stored camps in input order |
//! | `GET`    | `/camps/:id` | 404 if not found |
//! | `PATCH`  | `/camps/:id` | Body: [`CampPatch`]; 404 if not found |
//! | `DELETE` | `/camps/:id` | Always 204 |
//! | `GET`    | `/camps/:id/summary` | [`RosterSummary`]; 404 if not found |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rinkside_core::{
  camp::{Camp, CampAttribute, CampPatch, NewCamp},
  filter::{Predicates, filter_by_equality},
  summary::{RosterSummary, roster_summary},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError, extract::ApiJson, state::transact};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub level:    Option<String>,
  pub location: Option<String>,
  /// `true` or `false`.
  pub active:   Option<String>,
}

/// `GET /camps[?level=...][&location=...][&active=...]`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Camp>> {
  let predicates = Predicates::new()
    .with_optional(CampAttribute::Level, params.level)
    .with_optional(CampAttribute::Location, params.location)
    .with_optional(CampAttribute::Active, params.active);

  let store = state.camps.read().await;
  Json(filter_by_equality(store.records(), &predicates))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /camps/:id`
pub async fn get_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<Camp>, ApiError> {
  let store = state.camps.read().await;
  store
    .get(&id)
    .cloned()
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("camp {id} not found")))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /camps` — returns 201 + the stored [`Camp`].
pub async fn create(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<NewCamp>,
) -> impl IntoResponse {
  let camp = transact(&state.camps, |store| store.add(body)).await;
  tracing::info!(camp_id = %camp.id, "camp created");
  (StatusCode::CREATED, Json(camp))
}

/// `POST /camps/import` — every draft is added in order.
pub async fn import(
  State(state): State<AppState>,
  ApiJson(body): ApiJson<Vec<NewCamp>>,
) -> impl IntoResponse {
  let camps = transact(&state.camps, |store| store.import_many(body)).await;
  tracing::info!(count = camps.len(), "camps imported");
  (StatusCode::CREATED, Json(camps))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /camps/:id`
///
/// The store treats an unknown id as a no-op; this endpoint reports it as
/// 404 so clients can tell the patch went nowhere.
pub async fn update_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
  ApiJson(patch): ApiJson<CampPatch>,
) -> Result<Json<Camp>, ApiError> {
  transact(&state.camps, |store| {
    if !store.contains(&id) {
      return (store, None);
    }
    let store = store.update(&id, patch);
    let camp = store.get(&id).cloned();
    (store, camp)
  })
  .await
  .map(Json)
  .ok_or_else(|| ApiError::NotFound(format!("camp {id} not found")))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /camps/:id`
///
/// 204 whether or not the camp existed. Players referencing the camp are
/// left in place.
pub async fn delete_one(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> StatusCode {
  transact(&state.camps, |store| (store.remove(&id), ())).await;
  StatusCode::NO_CONTENT
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// `GET /camps/:id/summary`
pub async fn summary(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<RosterSummary>, ApiError> {
  if !state.camps.read().await.contains(&id) {
    return Err(ApiError::NotFound(format!("camp {id} not found")));
  }
  let players = state.players.read().await;
  Ok(Json(roster_summary(players.records(), &id)))
}

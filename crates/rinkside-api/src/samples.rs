//! Handlers for the catalog.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/samples` | Optional `?color=&material=&finish=`; blank values are ignored |
//! | `GET`  | `/samples/facets` | Distinct color, material and finish values |
//! | `GET`  | `/samples/facets/:attribute` | Distinct values of one attribute; 400 if unknown |

use std::collections::BTreeSet;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use rinkside_core::{
  filter::{Predicates, distinct_values, parse_attribute},
  sample::{Facets, Sample, SampleAttribute},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub color:    Option<String>,
  pub material: Option<String>,
  pub finish:   Option<String>,
}

/// `GET /samples[?color=...][&material=...][&finish=...]`
pub async fn list(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Sample>> {
  let predicates = Predicates::new()
    .with_optional(SampleAttribute::Color, params.color)
    .with_optional(SampleAttribute::Material, params.material)
    .with_optional(SampleAttribute::Finish, params.finish);

  let mut view = state.catalog.view();
  if !predicates.is_unconstrained() {
    view.apply(&predicates);
  }
  tracing::debug!(
    filtered = view.is_filtered(),
    count = view.visible().len(),
    "catalog listed"
  );
  Json(view.visible().to_vec())
}

/// `GET /samples/facets`
pub async fn facets(State(state): State<AppState>) -> Json<Facets> {
  Json(state.catalog.facets())
}

/// `GET /samples/facets/:attribute`
pub async fn facet(
  State(state): State<AppState>,
  Path(attribute): Path<String>,
) -> Result<Json<BTreeSet<String>>, ApiError> {
  let attr: SampleAttribute = parse_attribute(&attribute)?;
  Ok(Json(distinct_values(state.catalog.samples(), attr)))
}

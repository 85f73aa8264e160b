//! JSON REST API for Rinkside.
//!
//! Exposes an axum [`Router`] over an [`AppState`]: the camp and player
//! stores of the coach dashboard, the renovation catalog and the contact
//! form relay. Auth, TLS, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rinkside_api::api_router(state))
//! ```

pub mod camps;
pub mod contact;
pub mod error;
pub mod extract;
pub mod players;
pub mod samples;
pub mod state;

use axum::{
  Router,
  routing::{get, post},
};

pub use error::ApiError;
pub use state::AppState;

/// Build a fully-materialised API router for `state`.
pub fn api_router(state: AppState) -> Router<()> {
  Router::new()
    // Camps
    .route("/camps", get(camps::list).post(camps::create))
    .route("/camps/import", post(camps::import))
    .route(
      "/camps/{id}",
      get(camps::get_one)
        .patch(camps::update_one)
        .delete(camps::delete_one),
    )
    .route("/camps/{id}/summary", get(camps::summary))
    // Players
    .route("/players", get(players::list).post(players::create))
    .route("/players/import", post(players::import))
    .route(
      "/players/{id}",
      get(players::get_one)
        .patch(players::update_one)
        .delete(players::delete_one),
    )
    // Catalog
    .route("/samples", get(samples::list))
    .route("/samples/facets", get(samples::facets))
    .route("/samples/facets/{attribute}", get(samples::facet))
    // Contact form
    .route("/contact", post(contact::handler))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! Shared application state.

use std::sync::Arc;

use rinkside_core::{
  camp::Camp,
  entity::Entity,
  player::Player,
  sample::{Catalog, Sample},
  seed,
  store::EntityStore,
};
use rinkside_notify::Dispatcher;
use tokio::sync::RwLock;

/// One store per entity type plus the catalog and the mail dispatcher.
///
/// Built once by the server and handed to [`crate::api_router`]; there is no
/// global instance.
#[derive(Clone)]
pub struct AppState {
  pub camps:   Arc<RwLock<EntityStore<Camp>>>,
  pub players: Arc<RwLock<EntityStore<Player>>>,
  pub catalog: Arc<Catalog>,
  pub mailer:  Arc<Dispatcher>,
}

impl AppState {
  pub fn new(
    camps: Vec<Camp>,
    players: Vec<Player>,
    samples: Vec<Sample>,
    mailer: Dispatcher,
  ) -> Self {
    Self {
      camps:   Arc::new(RwLock::new(EntityStore::seed(camps))),
      players: Arc::new(RwLock::new(EntityStore::seed(players))),
      catalog: Arc::new(Catalog::new(samples)),
      mailer:  Arc::new(mailer),
    }
  }

  /// State pre-filled with the mock collections from [`seed`].
  pub fn seeded(mailer: Dispatcher) -> Self {
    Self::new(seed::camps(), seed::players(), seed::samples(), mailer)
  }

  /// Empty stores; the catalog still carries the seed samples since it has
  /// no write path.
  pub fn empty(mailer: Dispatcher) -> Self {
    Self::new(Vec::new(), Vec::new(), seed::samples(), mailer)
  }
}

/// Run `op` against the current store and keep the store it returns.
///
/// The write lock holds an empty store while `op` runs, and tokio's
/// `RwLock` does not poison, so `op` must not panic: a panic would leave
/// the store empty.
pub(crate) async fn transact<E, T>(
  lock: &RwLock<EntityStore<E>>,
  op: impl FnOnce(EntityStore<E>) -> (EntityStore<E>, T),
) -> T
where
  E: Entity,
{
  let mut guard = lock.write().await;
  let (next, out) = op(std::mem::take(&mut *guard));
  *guard = next;
  out
}

//! [`EntityStore`] — an ordered, in-memory sequence of one entity type.
//!
//! All operations consume the store and hand back the next one. There is no
//! hidden shared state; whoever holds the returned store holds the current
//! state.

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::entity::Entity;

// ─── Store ───────────────────────────────────────────────────────────────────

/// Insertion-ordered records of a single entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<E> {
  records: Vec<E>,
}

impl<E> Default for EntityStore<E> {
  fn default() -> Self { Self { records: Vec::new() } }
}

impl<E: Entity> EntityStore<E> {
  /// Start from `initial` exactly as given; nothing is validated.
  pub fn seed(initial: Vec<E>) -> Self { Self { records: initial } }

  pub fn records(&self) -> &[E] { &self.records }

  pub fn into_records(self) -> Vec<E> { self.records }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn get(&self, id: &str) -> Option<&E> {
    self.records.iter().find(|r| r.id() == id)
  }

  pub fn contains(&self, id: &str) -> bool { self.get(id).is_some() }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Append a new record built from `draft` and return it alongside the
  /// next store.
  ///
  /// The minted identifier is guaranteed not to collide with any record
  /// already in the sequence. Never fails.
  pub fn add(mut self, draft: E::Draft) -> (Self, E) {
    let id = self.mint_id();
    let record = E::create(id, draft, Utc::now());
    self.records.push(record.clone());
    (self, record)
  }

  /// Shallow-merge `patch` into the record with identifier `id`.
  ///
  /// An unknown `id` is a no-op: the store comes back unchanged and no
  /// error is reported. The target's `updated_at` always moves strictly
  /// forward.
  pub fn update(mut self, id: &str, patch: E::Patch) -> Self {
    if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
      let now = advance(record.updated_at());
      record.merge(patch, now);
    }
    self
  }

  /// Drop the record with identifier `id`. An unknown `id` is a no-op.
  ///
  /// Nothing referencing the record is touched; there is no cascade.
  pub fn remove(mut self, id: &str) -> Self {
    self.records.retain(|r| r.id() != id);
    self
  }

  /// [`add`](Self::add) each draft in order. Every record gets its own
  /// identifier and timestamps.
  pub fn import_many<I>(self, drafts: I) -> (Self, Vec<E>)
  where
    I: IntoIterator<Item = E::Draft>,
  {
    drafts
      .into_iter()
      .fold((self, Vec::new()), |(store, mut created), draft| {
        let (store, record) = store.add(draft);
        created.push(record);
        (store, created)
      })
  }

  fn mint_id(&self) -> String {
    loop {
      let id = format!("{}-{}", E::ID_PREFIX, Uuid::new_v4().simple());
      if !self.contains(&id) {
        return id;
      }
    }
  }
}

/// The current time, or one microsecond past `previous` when the clock has
/// not moved on (or has gone backwards) since it was taken.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
  let now = Utc::now();
  if now > previous {
    now
  } else {
    previous + TimeDelta::microseconds(1)
  }
}

//! The [`Entity`] trait — what a record must provide to live in an
//! [`EntityStore`](crate::store::EntityStore).

use chrono::{DateTime, Utc};

/// A record with a string identifier and creation/update timestamps.
///
/// Identifiers are minted by the store and never change afterwards. Drafts
/// carry everything except the identifier and timestamps; patches carry the
/// subset of fields to overwrite.
pub trait Entity: Clone {
  /// Input to [`EntityStore::add`](crate::store::EntityStore::add).
  type Draft;
  /// Input to [`EntityStore::update`](crate::store::EntityStore::update).
  type Patch;

  /// Prefix for minted identifiers, e.g. `"camp"` yields `camp-<hex>`.
  const ID_PREFIX: &'static str;

  fn id(&self) -> &str;
  fn created_at(&self) -> DateTime<Utc>;
  fn updated_at(&self) -> DateTime<Utc>;

  /// Build a fresh record. `created_at` and `updated_at` are both `now`.
  fn create(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

  /// Shallow-merge `patch` over `self` and set `updated_at` to `now`.
  ///
  /// Every field present in the patch fully replaces the old value;
  /// collections are not merged element-wise.
  fn merge(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// A record that belongs to another entity by identifier.
///
/// The reference is non-owning: nothing checks that the owner exists.
pub trait Owned {
  fn owner_id(&self) -> &str;
}

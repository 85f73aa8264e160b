//! Players — roster members attached to a camp and zero or more groups.

use std::{borrow::Cow, collections::BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
  entity::{Entity, Owned},
  filter::Filterable,
};

// ─── Enumerations ────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Position {
  Center,
  LeftWing,
  RightWing,
  Defense,
  Goalie,
}

/// Where a player stands in the camp's evaluation pipeline.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlayerStatus {
  #[default]
  Invited,
  ToBeEvaluated,
  Locked,
  Active,
  Inactive,
  Injured,
}

// ─── Player ──────────────────────────────────────────────────────────────────

/// A roster member.
///
/// `camp_id` and `group_ids` are plain identifiers; nothing guarantees the
/// camp or groups still exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
  pub id:            String,
  pub first_name:    String,
  pub last_name:     String,
  pub date_of_birth: NaiveDate,
  pub position:      Position,
  /// Not unique, even within a camp.
  pub jersey_number: u32,
  pub status:        PlayerStatus,
  pub group_ids:     BTreeSet<String>,
  pub camp_id:       String,
  pub photo_url:     Option<String>,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

impl Player {
  pub fn in_group(&self, group_id: &str) -> bool {
    self.group_ids.contains(group_id)
  }
}

/// Input to [`EntityStore::add`](crate::store::EntityStore::add) for players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
  pub first_name:    String,
  pub last_name:     String,
  pub date_of_birth: NaiveDate,
  pub position:      Position,
  pub jersey_number: u32,
  #[serde(default)]
  pub status:        PlayerStatus,
  #[serde(default)]
  pub group_ids:     BTreeSet<String>,
  pub camp_id:       String,
  #[serde(default)]
  pub photo_url:     Option<String>,
}

/// Fields to overwrite on an existing player. `None` leaves a field as is.
///
/// `photo_url` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`), which removes the photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPatch {
  pub first_name:    Option<String>,
  pub last_name:     Option<String>,
  pub date_of_birth: Option<NaiveDate>,
  pub position:      Option<Position>,
  pub jersey_number: Option<u32>,
  pub status:        Option<PlayerStatus>,
  pub group_ids:     Option<BTreeSet<String>>,
  pub camp_id:       Option<String>,
  #[serde(
    deserialize_with = "present",
    skip_serializing_if = "Option::is_none"
  )]
  pub photo_url:     Option<Option<String>>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
/// Absent keys fall back to the field default.
fn present<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  T::deserialize(de).map(Some)
}

impl Entity for Player {
  type Draft = NewPlayer;
  type Patch = PlayerPatch;

  const ID_PREFIX: &'static str = "player";

  fn id(&self) -> &str { &self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn create(id: String, draft: NewPlayer, now: DateTime<Utc>) -> Self {
    Self {
      id,
      first_name: draft.first_name,
      last_name: draft.last_name,
      date_of_birth: draft.date_of_birth,
      position: draft.position,
      jersey_number: draft.jersey_number,
      status: draft.status,
      group_ids: draft.group_ids,
      camp_id: draft.camp_id,
      photo_url: draft.photo_url,
      created_at: now,
      updated_at: now,
    }
  }

  fn merge(&mut self, patch: PlayerPatch, now: DateTime<Utc>) {
    if let Some(first_name) = patch.first_name {
      self.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
      self.last_name = last_name;
    }
    if let Some(date_of_birth) = patch.date_of_birth {
      self.date_of_birth = date_of_birth;
    }
    if let Some(position) = patch.position {
      self.position = position;
    }
    if let Some(jersey_number) = patch.jersey_number {
      self.jersey_number = jersey_number;
    }
    if let Some(status) = patch.status {
      self.status = status;
    }
    if let Some(group_ids) = patch.group_ids {
      self.group_ids = group_ids;
    }
    if let Some(camp_id) = patch.camp_id {
      self.camp_id = camp_id;
    }
    if let Some(photo_url) = patch.photo_url {
      self.photo_url = photo_url;
    }
    self.updated_at = now;
  }
}

impl Owned for Player {
  fn owner_id(&self) -> &str { &self.camp_id }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Player fields addressable by equality filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayerAttribute {
  FirstName,
  LastName,
  Position,
  JerseyNumber,
  Status,
  CampId,
  PhotoUrl,
}

impl Filterable for Player {
  type Attribute = PlayerAttribute;

  fn attribute(&self, attr: PlayerAttribute) -> Option<Cow<'_, str>> {
    match attr {
      PlayerAttribute::FirstName => Some(Cow::Borrowed(&self.first_name)),
      PlayerAttribute::LastName => Some(Cow::Borrowed(&self.last_name)),
      PlayerAttribute::Position => Some(Cow::Borrowed(self.position.as_ref())),
      PlayerAttribute::JerseyNumber => {
        Some(Cow::Owned(self.jersey_number.to_string()))
      }
      PlayerAttribute::Status => Some(Cow::Borrowed(self.status.as_ref())),
      PlayerAttribute::CampId => Some(Cow::Borrowed(&self.camp_id)),
      PlayerAttribute::PhotoUrl => self.photo_url.as_deref().map(Cow::Borrowed),
    }
  }
}

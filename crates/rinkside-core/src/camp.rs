//! Camps and the groups they own.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::{
  entity::{Entity, Owned},
  filter::Filterable,
};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Age or competitive category a camp is run for.
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
)]
pub enum Level {
  U7,
  U9,
  U11,
  M13,
  M15,
  M18,
  Junior,
  Senior,
}

/// Semantic color token used to tell groups apart on the roster board.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GroupColor {
  #[default]
  Blue,
  Red,
  Green,
  Yellow,
  Orange,
  Purple,
  Gray,
}

// ─── Group ───────────────────────────────────────────────────────────────────

/// A named, colored subdivision of a camp's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  /// Unique within the owning camp.
  pub id:      String,
  /// Back-reference to the owning camp.
  pub camp_id: String,
  pub name:    String,
  pub color:   GroupColor,
}

/// A group as submitted with a new camp; the identifier is assigned on add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroup {
  pub name:  String,
  #[serde(default)]
  pub color: GroupColor,
}

impl Owned for Group {
  fn owner_id(&self) -> &str { &self.camp_id }
}

// ─── Camp ────────────────────────────────────────────────────────────────────

/// A scheduled training event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
  pub id:         String,
  pub name:       String,
  pub level:      Level,
  pub location:   String,
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  pub groups:     Vec<Group>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub active:     bool,
}

impl Camp {
  pub fn group(&self, group_id: &str) -> Option<&Group> {
    self.groups.iter().find(|g| g.id == group_id)
  }
}

/// Input to [`EntityStore::add`](crate::store::EntityStore::add) for camps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCamp {
  pub name:       String,
  pub level:      Level,
  pub location:   String,
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  #[serde(default)]
  pub groups:     Vec<NewGroup>,
  #[serde(default = "default_active")]
  pub active:     bool,
}

fn default_active() -> bool { true }

/// Fields to overwrite on an existing camp. `None` leaves a field as is.
///
/// `groups` replaces the whole collection when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampPatch {
  pub name:       Option<String>,
  pub level:      Option<Level>,
  pub location:   Option<String>,
  pub start_date: Option<NaiveDate>,
  pub end_date:   Option<NaiveDate>,
  pub groups:     Option<Vec<Group>>,
  pub active:     Option<bool>,
}

impl Entity for Camp {
  type Draft = NewCamp;
  type Patch = CampPatch;

  const ID_PREFIX: &'static str = "camp";

  fn id(&self) -> &str { &self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

  fn create(id: String, draft: NewCamp, now: DateTime<Utc>) -> Self {
    let groups = draft
      .groups
      .into_iter()
      .map(|g| Group {
        id:      format!("group-{}", Uuid::new_v4().simple()),
        camp_id: id.clone(),
        name:    g.name,
        color:   g.color,
      })
      .collect();

    Self {
      id,
      name: draft.name,
      level: draft.level,
      location: draft.location,
      start_date: draft.start_date,
      end_date: draft.end_date,
      groups,
      created_at: now,
      updated_at: now,
      active: draft.active,
    }
  }

  fn merge(&mut self, patch: CampPatch, now: DateTime<Utc>) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(level) = patch.level {
      self.level = level;
    }
    if let Some(location) = patch.location {
      self.location = location;
    }
    if let Some(start_date) = patch.start_date {
      self.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
      self.end_date = end_date;
    }
    if let Some(groups) = patch.groups {
      self.groups = groups;
    }
    if let Some(active) = patch.active {
      self.active = active;
    }
    self.updated_at = now;
  }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Camp fields addressable by equality filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CampAttribute {
  Name,
  Level,
  Location,
  Active,
}

impl Filterable for Camp {
  type Attribute = CampAttribute;

  fn attribute(&self, attr: CampAttribute) -> Option<Cow<'_, str>> {
    Some(match attr {
      CampAttribute::Name => Cow::Borrowed(self.name.as_str()),
      CampAttribute::Level => Cow::Borrowed(self.level.as_ref()),
      CampAttribute::Location => Cow::Borrowed(self.location.as_str()),
      CampAttribute::Active => Cow::Owned(self.active.to_string()),
    })
  }
}

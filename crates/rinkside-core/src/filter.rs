//! Read-only views over a sequence: distinct values, equality filters and
//! ownership scoping.
//!
//! None of these functions mutate their input. Record counts are small, so
//! every view is a linear scan.

use std::{
  borrow::Cow,
  collections::{BTreeMap, BTreeSet},
  str::FromStr,
};

use crate::{Error, Result, entity::Owned, player::Player};

// ─── Attribute access ────────────────────────────────────────────────────────

/// A record whose fields can be addressed by an attribute enum and compared
/// as strings.
pub trait Filterable {
  type Attribute: Copy + Ord;

  /// The comparable value of `attr`, or `None` when the record has no value
  /// for it (e.g. an optional field left unset).
  fn attribute(&self, attr: Self::Attribute) -> Option<Cow<'_, str>>;
}

/// Parse an attribute name as it appears in a URL path or query string.
pub fn parse_attribute<A: FromStr>(name: &str) -> Result<A> {
  name
    .parse()
    .map_err(|_| Error::UnknownAttribute(name.to_owned()))
}

// ─── Predicates ──────────────────────────────────────────────────────────────

/// A set of equality constraints, combined with logical AND.
///
/// Setting an attribute to an empty value removes its constraint, so a form
/// field left blank means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicates<A: Ord> {
  constraints: BTreeMap<A, String>,
}

impl<A: Ord> Default for Predicates<A> {
  fn default() -> Self { Self { constraints: BTreeMap::new() } }
}

impl<A: Copy + Ord> Predicates<A> {
  pub fn new() -> Self { Self::default() }

  pub fn with(mut self, attr: A, value: impl Into<String>) -> Self {
    self.set(attr, value);
    self
  }

  /// Like [`with`](Self::with) but `None` leaves the attribute unconstrained.
  pub fn with_optional(self, attr: A, value: Option<impl Into<String>>) -> Self {
    match value {
      Some(v) => self.with(attr, v),
      None => self,
    }
  }

  pub fn set(&mut self, attr: A, value: impl Into<String>) {
    let value = value.into();
    if value.is_empty() {
      self.constraints.remove(&attr);
    } else {
      self.constraints.insert(attr, value);
    }
  }

  pub fn is_unconstrained(&self) -> bool { self.constraints.is_empty() }

  pub fn matches<E>(&self, record: &E) -> bool
  where
    E: Filterable<Attribute = A>,
  {
    self.constraints.iter().all(|(attr, expected)| {
      record
        .attribute(*attr)
        .is_some_and(|actual| actual == expected.as_str())
    })
  }
}

// ─── Views ───────────────────────────────────────────────────────────────────

/// Every distinct value of `attr` across `records`. Records without a value
/// for `attr` contribute nothing.
pub fn distinct_values<E: Filterable>(
  records: &[E],
  attr: E::Attribute,
) -> BTreeSet<String> {
  records
    .iter()
    .filter_map(|r| r.attribute(attr).map(Cow::into_owned))
    .collect()
}

/// The records satisfying every constraint in `predicates`, in their
/// original relative order.
pub fn filter_by_equality<E>(records: &[E], predicates: &Predicates<E::Attribute>) -> Vec<E>
where
  E: Filterable + Clone,
{
  records
    .iter()
    .filter(|r| predicates.matches(*r))
    .cloned()
    .collect()
}

/// The records whose owner identifier equals `owner_id`.
pub fn filter_by_ownership<E: Owned + Clone>(records: &[E], owner_id: &str) -> Vec<E> {
  records
    .iter()
    .filter(|r| r.owner_id() == owner_id)
    .cloned()
    .collect()
}

/// The players who are members of `group_id`.
pub fn filter_by_group(players: &[Player], group_id: &str) -> Vec<Player> {
  players
    .iter()
    .filter(|p| p.in_group(group_id))
    .cloned()
    .collect()
}

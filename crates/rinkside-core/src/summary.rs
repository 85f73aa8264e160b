//! Roster aggregation for the coach and player report views.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator as _;

use crate::{
  filter::filter_by_ownership,
  player::{Player, PlayerStatus, Position},
};

/// Head counts for one camp's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
  pub camp_id:     String,
  pub total:       usize,
  /// Every status is present, including those with a zero count.
  pub by_status:   BTreeMap<PlayerStatus, usize>,
  /// Every position is present, including those with a zero count.
  pub by_position: BTreeMap<Position, usize>,
  /// Only group ids that at least one player references.
  pub by_group:    BTreeMap<String, usize>,
}

/// Count the players of `camp_id` by status, position and group.
pub fn roster_summary(players: &[Player], camp_id: &str) -> RosterSummary {
  let roster = filter_by_ownership(players, camp_id);

  let mut by_status: BTreeMap<_, _> =
    PlayerStatus::iter().map(|s| (s, 0)).collect();
  let mut by_position: BTreeMap<_, _> =
    Position::iter().map(|p| (p, 0)).collect();
  let mut by_group = BTreeMap::new();

  for player in &roster {
    *by_status.entry(player.status).or_insert(0) += 1;
    *by_position.entry(player.position).or_insert(0) += 1;
    for group_id in &player.group_ids {
      *by_group.entry(group_id.clone()).or_insert(0) += 1;
    }
  }

  RosterSummary {
    camp_id: camp_id.to_owned(),
    total: roster.len(),
    by_status,
    by_position,
    by_group,
  }
}

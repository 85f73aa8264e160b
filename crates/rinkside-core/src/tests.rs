//! Store behaviour against the seed collections.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
  camp::{Camp, CampPatch, GroupColor, Level, NewCamp, NewGroup},
  entity::Entity,
  filter::{filter_by_group, filter_by_ownership},
  player::{NewPlayer, Player, PlayerPatch, PlayerStatus, Position},
  seed,
  store::EntityStore,
};

fn camps() -> EntityStore<Camp> { EntityStore::seed(seed::camps()) }

fn players() -> EntityStore<Player> { EntityStore::seed(seed::players()) }

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn camp_x() -> NewCamp {
  NewCamp {
    name:       "Camp X".into(),
    level:      Level::M13,
    location:   "Aréna Maurice-Richard".into(),
    start_date: ymd(2025, 12, 27),
    end_date:   ymd(2025, 12, 30),
    groups:     vec![
      NewGroup { name: "Red".into(), color: GroupColor::Red },
      NewGroup { name: "Blue".into(), color: GroupColor::Blue },
    ],
    active:     true,
  }
}

fn new_player(first: &str, camp_id: &str) -> NewPlayer {
  NewPlayer {
    first_name:    first.into(),
    last_name:     "Lavoie".into(),
    date_of_birth: ymd(2012, 3, 3),
    position:      Position::Center,
    jersey_number: 9,
    status:        PlayerStatus::Invited,
    group_ids:     BTreeSet::new(),
    camp_id:       camp_id.into(),
    photo_url:     None,
  }
}

fn ids<E: Entity>(store: &EntityStore<E>) -> Vec<String> {
  store.records().iter().map(|r| r.id().to_owned()).collect()
}

// ─── seed ────────────────────────────────────────────────────────────────────

#[test]
fn seed_keeps_records_as_given() {
  let store = camps();
  assert_eq!(store.records(), seed::camps().as_slice());
  assert_eq!(ids(&store), ["camp-1", "camp-2"]);
}

// ─── add ─────────────────────────────────────────────────────────────────────

#[test]
fn add_appends_camp_x() {
  let (store, created) = camps().add(camp_x());

  assert_eq!(store.len(), 3);
  let last = store.records().last().unwrap();
  assert_eq!(last.name, "Camp X");
  assert_eq!(last, &created);
  assert_ne!(created.id, "camp-1");
  assert_ne!(created.id, "camp-2");
  assert_eq!(created.created_at, created.updated_at);
}

#[test]
fn add_assigns_groups_to_the_new_camp() {
  let (_, created) = camps().add(camp_x());
  assert_eq!(created.groups.len(), 2);
  assert!(created.groups.iter().all(|g| g.camp_id == created.id));
  assert_ne!(created.groups[0].id, created.groups[1].id);
}

#[test]
fn add_never_reuses_an_identifier() {
  let mut store = players();
  for i in 0..25 {
    let before: BTreeSet<String> = ids(&store).into_iter().collect();
    let (next, created) = store.add(new_player(&format!("P{i}"), "camp-1"));
    assert!(!before.contains(&created.id));
    assert_eq!(next.len(), before.len() + 1);
    store = next;
  }
}

#[test]
fn add_to_empty_store() {
  let (store, created) = EntityStore::<Player>::default().add(new_player("Zoé", "camp-1"));
  assert_eq!(store.records(), &[created]);
}

// ─── update ──────────────────────────────────────────────────────────────────

#[test]
fn update_missing_id_is_a_noop() {
  let before = camps();
  let after = before.clone().update(
    "camp-404",
    CampPatch { name: Some("Ghost".into()), ..Default::default() },
  );
  assert_eq!(after, before);
}

#[test]
fn update_merges_only_listed_fields() {
  let before = camps();
  let after = before.clone().update(
    "camp-2",
    CampPatch { location: Some("Bell Sports Complex".into()), ..Default::default() },
  );

  assert_eq!(ids(&after), ids(&before));
  assert_eq!(after.records()[0], before.records()[0]);

  let old = &before.records()[1];
  let new = &after.records()[1];
  assert_eq!(new.location, "Bell Sports Complex");
  assert_eq!(new.name, old.name);
  assert_eq!(new.level, old.level);
  assert_eq!(new.groups, old.groups);
  assert_eq!(new.created_at, old.created_at);
  assert!(new.updated_at > old.updated_at);
}

#[test]
fn update_replaces_collections_wholesale() {
  let store = players().update(
    "player-4",
    PlayerPatch {
      group_ids: Some(BTreeSet::from(["group-3".to_string()])),
      ..Default::default()
    },
  );
  let p = store.get("player-4").unwrap();
  assert_eq!(p.group_ids, BTreeSet::from(["group-3".to_string()]));
}

#[test]
fn repeated_updates_strictly_increase_updated_at() {
  let (mut store, created) = players().add(new_player("Félix", "camp-2"));
  let mut last = created.updated_at;
  for n in 0..10 {
    store = store.update(
      &created.id,
      PlayerPatch { jersey_number: Some(n), ..Default::default() },
    );
    let current = store.get(&created.id).unwrap().updated_at;
    assert!(current > last);
    last = current;
  }
  let p = store.get(&created.id).unwrap();
  assert_eq!(p.jersey_number, 9);
  assert!(p.updated_at >= p.created_at);
}

#[test]
fn empty_patch_still_touches_updated_at() {
  let before = players();
  let after = before.clone().update("player-1", PlayerPatch::default());
  let old = before.get("player-1").unwrap();
  let new = after.get("player-1").unwrap();
  assert_eq!(new.first_name, old.first_name);
  assert!(new.updated_at > old.updated_at);
}

#[test]
fn patch_can_set_and_clear_photo() {
  let set = players().update(
    "player-1",
    PlayerPatch { photo_url: Some(Some("/p.jpg".into())), ..Default::default() },
  );
  assert_eq!(set.get("player-1").unwrap().photo_url.as_deref(), Some("/p.jpg"));

  let untouched = set.clone().update(
    "player-1",
    PlayerPatch { jersey_number: Some(20), ..Default::default() },
  );
  assert_eq!(untouched.get("player-1").unwrap().photo_url.as_deref(), Some("/p.jpg"));

  let cleared = untouched.update(
    "player-1",
    PlayerPatch { photo_url: Some(None), ..Default::default() },
  );
  assert_eq!(cleared.get("player-1").unwrap().photo_url, None);
}

#[test]
fn player_patch_tells_null_from_absent() {
  let absent: PlayerPatch = serde_json::from_str(r#"{"status":"active"}"#).unwrap();
  assert_eq!(absent.photo_url, None);

  let null: PlayerPatch = serde_json::from_str(r#"{"photo_url":null}"#).unwrap();
  assert_eq!(null.photo_url, Some(None));

  let set: PlayerPatch = serde_json::from_str(r#"{"photo_url":"/p.jpg"}"#).unwrap();
  assert_eq!(set.photo_url, Some(Some("/p.jpg".to_string())));
}

// ─── remove ──────────────────────────────────────────────────────────────────

#[test]
fn remove_present_id_shrinks_by_one() {
  let before = players();
  let after = before.clone().remove("player-3");
  assert_eq!(after.len(), before.len() - 1);
  assert!(!after.contains("player-3"));
}

#[test]
fn remove_missing_id_is_a_noop() {
  let before = players();
  let after = before.clone().remove("player-404");
  assert_eq!(after, before);
}

#[test]
fn removing_a_camp_leaves_its_players() {
  let camps = camps().remove("camp-1");
  assert!(!camps.contains("camp-1"));
  let orphans = filter_by_ownership(players().records(), "camp-1");
  assert!(!orphans.is_empty());
}

// ─── import_many ─────────────────────────────────────────────────────────────

#[test]
fn import_many_preserves_input_order() {
  let drafts = vec![
    new_player("Alexis", "camp-2"),
    new_player("Béatrice", "camp-2"),
    new_player("Charles", "camp-1"),
  ];
  let before = players();
  let (after, created) = before.clone().import_many(drafts);

  assert_eq!(after.len(), before.len() + 3);
  let names: Vec<_> = created.iter().map(|p| p.first_name.as_str()).collect();
  assert_eq!(names, ["Alexis", "Béatrice", "Charles"]);
  assert_eq!(&after.records()[before.len()..], created.as_slice());

  let unique: BTreeSet<_> = ids(&after).into_iter().collect();
  assert_eq!(unique.len(), after.len());
}

#[test]
fn import_many_with_no_drafts_changes_nothing() {
  let before = camps();
  let (after, created) = before.clone().import_many(Vec::new());
  assert!(created.is_empty());
  assert_eq!(after, before);
}

// ─── scoping ─────────────────────────────────────────────────────────────────

#[test]
fn filter_by_ownership_scopes_players_to_camp() {
  let seeded = EntityStore::seed(
    players()
      .into_records()
      .into_iter()
      .filter(|p| p.id == "player-1" || p.id == "player-2")
      .collect(),
  );
  let scoped = filter_by_ownership(seeded.records(), "camp-1");
  let scoped_ids: Vec<_> = scoped.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(scoped_ids, ["player-1"]);
}

#[test]
fn filter_by_group_uses_membership() {
  let members = filter_by_group(players().records(), "group-2");
  let member_ids: Vec<_> = members.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(member_ids, ["player-4", "player-6"]);
}

#[test]
fn camp_groups_are_owned_by_the_camp() {
  let store = camps();
  let camp = store.get("camp-1").unwrap();
  let owned = filter_by_ownership(&camp.groups, "camp-1");
  assert_eq!(owned.len(), camp.groups.len());
  assert_eq!(camp.group("group-3").map(|g| g.name.as_str()), Some("Goalies"));
}

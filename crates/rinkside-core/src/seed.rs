//! Mock collections the dashboard and catalog start from.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
  camp::{Camp, Group, GroupColor, Level},
  player::{Player, PlayerStatus, Position},
  sample::Sample,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn stamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
  date(y, m, d)
    .and_hms_opt(9, 0, 0)
    .expect("seed times are valid")
    .and_utc()
}

fn group(id: &str, camp_id: &str, name: &str, color: GroupColor) -> Group {
  Group {
    id: id.into(),
    camp_id: camp_id.into(),
    name: name.into(),
    color,
  }
}

// ─── Camps ───────────────────────────────────────────────────────────────────

pub fn camps() -> Vec<Camp> {
  vec![
    Camp {
      id:         "camp-1".into(),
      name:       "Summer Development Camp".into(),
      level:      Level::M13,
      location:   "Centre Bell Arena".into(),
      start_date: date(2025, 7, 7),
      end_date:   date(2025, 7, 18),
      groups:     vec![
        group("group-1", "camp-1", "Group A", GroupColor::Blue),
        group("group-2", "camp-1", "Group B", GroupColor::Red),
        group("group-3", "camp-1", "Goalies", GroupColor::Green),
      ],
      created_at: stamp(2025, 3, 1),
      updated_at: stamp(2025, 3, 10),
      active:     true,
    },
    Camp {
      id:         "camp-2".into(),
      name:       "Elite Selection Camp".into(),
      level:      Level::M15,
      location:   "Complexe Sportif Laval".into(),
      start_date: date(2025, 8, 4),
      end_date:   date(2025, 8, 8),
      groups:     vec![
        group("group-4", "camp-2", "White", GroupColor::Gray),
        group("group-5", "camp-2", "Black", GroupColor::Purple),
      ],
      created_at: stamp(2025, 4, 2),
      updated_at: stamp(2025, 4, 2),
      active:     true,
    },
  ]
}

// ─── Players ─────────────────────────────────────────────────────────────────

struct Row {
  id:       &'static str,
  first:    &'static str,
  last:     &'static str,
  born:     (i32, u32, u32),
  position: Position,
  jersey:   u32,
  status:   PlayerStatus,
  groups:   &'static [&'static str],
  camp_id:  &'static str,
}

const PLAYERS: &[Row] = &[
  Row {
    id:       "player-1",
    first:    "Liam",
    last:     "Tremblay",
    born:     (2012, 2, 14),
    position: Position::Center,
    jersey:   19,
    status:   PlayerStatus::Active,
    groups:   &["group-1"],
    camp_id:  "camp-1",
  },
  Row {
    id:       "player-2",
    first:    "Noah",
    last:     "Gagnon",
    born:     (2010, 11, 3),
    position: Position::Defense,
    jersey:   4,
    status:   PlayerStatus::ToBeEvaluated,
    groups:   &["group-4"],
    camp_id:  "camp-2",
  },
  Row {
    id:       "player-3",
    first:    "Emma",
    last:     "Roy",
    born:     (2012, 6, 21),
    position: Position::Goalie,
    jersey:   31,
    status:   PlayerStatus::Invited,
    groups:   &["group-3"],
    camp_id:  "camp-1",
  },
  Row {
    id:       "player-4",
    first:    "Olivia",
    last:     "Côté",
    born:     (2012, 9, 9),
    position: Position::LeftWing,
    jersey:   11,
    status:   PlayerStatus::Injured,
    groups:   &["group-1", "group-2"],
    camp_id:  "camp-1",
  },
  Row {
    id:       "player-5",
    first:    "William",
    last:     "Bouchard",
    born:     (2010, 1, 30),
    position: Position::RightWing,
    jersey:   27,
    status:   PlayerStatus::Locked,
    groups:   &["group-5"],
    camp_id:  "camp-2",
  },
  Row {
    id:       "player-6",
    first:    "Thomas",
    last:     "Pelletier",
    born:     (2012, 4, 17),
    position: Position::Defense,
    jersey:   4,
    status:   PlayerStatus::Active,
    groups:   &["group-2"],
    camp_id:  "camp-1",
  },
];

pub fn players() -> Vec<Player> {
  PLAYERS
    .iter()
    .map(|row| {
      let (y, m, d) = row.born;
      Player {
        id:            row.id.into(),
        first_name:    row.first.into(),
        last_name:     row.last.into(),
        date_of_birth: date(y, m, d),
        position:      row.position,
        jersey_number: row.jersey,
        status:        row.status,
        group_ids:     row.groups.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
        camp_id:       row.camp_id.into(),
        photo_url:     None,
        created_at:    stamp(2025, 5, 1),
        updated_at:    stamp(2025, 5, 1),
      }
    })
    .collect()
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

const SAMPLES: &[(&str, &str, &str, &str, &str)] = &[
  ("Calacatta Gold", "/images/samples/calacatta-gold.jpg", "white", "quartz", "polished"),
  ("Absolute Black", "/images/samples/absolute-black.jpg", "black", "granite", "honed"),
  ("Carrara Mist", "/images/samples/carrara-mist.jpg", "white", "marble", "honed"),
  ("Steel Grey", "/images/samples/steel-grey.jpg", "grey", "granite", "polished"),
  ("Pure White", "/images/samples/pure-white.jpg", "white", "quartz", "matte"),
  ("Natural Oak", "/images/samples/natural-oak.jpg", "beige", "wood", "matte"),
  ("Smoked Walnut", "/images/samples/smoked-walnut.jpg", "brown", "wood", "satin"),
  ("Concrete Loft", "/images/samples/concrete-loft.jpg", "grey", "porcelain", "matte"),
];

pub fn samples() -> Vec<Sample> {
  SAMPLES
    .iter()
    .map(|(name, image, color, material, finish)| Sample {
      name:     (*name).into(),
      image:    (*image).into(),
      color:    (*color).into(),
      material: (*material).into(),
      finish:   (*finish).into(),
    })
    .collect()
}

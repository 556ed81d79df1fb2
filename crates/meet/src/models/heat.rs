use serde::{Deserialize, Serialize};

use super::{Entrant, Gender};

/// A seeded heat. `lanes[0]` is lane 1; every heat of a pool has the same
/// number of slots whether or not they are filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heat {
    pub event: String,
    pub gender: Gender,
    pub category: String,
    pub number: u32,
    pub lanes: Vec<Option<Entrant>>,
}

impl Heat {
    pub fn event_label(&self) -> String {
        self.gender.event_label(&self.event)
    }

    pub fn lane_count(&self) -> u32 {
        self.lanes.len() as u32
    }

    pub fn entrant_in_lane(&self, lane: u32) -> Option<&Entrant> {
        let index = lane.checked_sub(1)? as usize;
        self.lanes.get(index).and_then(Option::as_ref)
    }

    /// Filled lanes in lane order, with 1-based lane numbers.
    pub fn occupied_lanes(&self) -> impl Iterator<Item = (u32, &Entrant)> {
        self.lanes
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|entrant| (idx as u32 + 1, entrant)))
    }

    pub fn filled(&self) -> usize {
        self.lanes.iter().filter(|slot| slot.is_some()).count()
    }
}

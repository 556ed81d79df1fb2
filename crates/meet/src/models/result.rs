use serde::{Deserialize, Serialize};

use super::{Gender, TimeValue};

/// A finish as read back from a judging sheet or a flat results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub event_label: String,
    pub category: String,
    pub name: String,
    pub team: String,
    pub age: Option<u16>,
    pub finish_time: TimeValue,
    pub heat_number: Option<u32>,
    pub lane_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub row: ResultRow,
    pub place: u32,
    pub points: u32,
}

impl RankedResult {
    pub fn gender(&self) -> Option<Gender> {
        Gender::from_event_label(&self.row.event_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualStanding {
    pub name: String,
    pub team: String,
    pub category: String,
    pub gender: Option<Gender>,
    pub total_points: u64,
    pub overall_place: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub total_points: u64,
    pub overall_place: u32,
}

/// Everything the scoring engine produces for one set of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub ranked: Vec<RankedResult>,
    pub individuals: Vec<IndividualStanding>,
    pub teams: Vec<TeamStanding>,
}

impl ScoreSheet {
    pub fn team(&self, team: &str) -> Option<&TeamStanding> {
        self.teams.iter().find(|standing| standing.team == team)
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeetError, Result};

pub const DEFAULT_LANES: u32 = 8;

const DEFAULT_POINTS: [(u32, u32); 8] = [
    (1, 9),
    (2, 7),
    (3, 6),
    (4, 5),
    (5, 4),
    (6, 3),
    (7, 2),
    (8, 1),
];

/// Points awarded per place. Places missing from the table score zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, u32>", into = "BTreeMap<u32, u32>")]
pub struct PointsTable {
    points: BTreeMap<u32, u32>,
}

impl PointsTable {
    pub fn new(points: BTreeMap<u32, u32>) -> Result<Self> {
        if points.is_empty() {
            return Err(MeetError::Configuration(
                "points table must define at least one place".to_string(),
            ));
        }
        if points.contains_key(&0) {
            return Err(MeetError::Configuration(
                "points table places start at 1".to_string(),
            ));
        }
        Ok(Self { points })
    }

    pub fn points_for(&self, place: u32) -> u32 {
        self.points.get(&place).copied().unwrap_or(0)
    }

    pub fn places(&self) -> usize {
        self.points.len()
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<u32, u32>> for PointsTable {
    type Error = MeetError;

    fn try_from(points: BTreeMap<u32, u32>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<PointsTable> for BTreeMap<u32, u32> {
    fn from(table: PointsTable) -> Self {
        table.points
    }
}

/// Parses `place:points` pairs separated by commas, e.g. `1:9,2:7,3:6`.
impl FromStr for PointsTable {
    type Err = MeetError;

    fn from_str(s: &str) -> Result<Self> {
        let mut points = BTreeMap::new();

        for pair in s.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (place, value) = pair.split_once(':').ok_or_else(|| {
                MeetError::Configuration(format!("points entry '{}' is not place:points", pair))
            })?;
            let place: u32 = place.trim().parse().map_err(|_| {
                MeetError::Configuration(format!("invalid place '{}' in points table", place))
            })?;
            let value: u32 = value.trim().parse().map_err(|_| {
                MeetError::Configuration(format!("invalid points '{}' in points table", value))
            })?;

            if points.insert(place, value).is_some() {
                return Err(MeetError::Configuration(format!(
                    "place {} appears twice in points table",
                    place
                )));
            }
        }

        Self::new(points)
    }
}

impl fmt::Display for PointsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .points
            .iter()
            .map(|(place, points)| format!("{}:{}", place, points))
            .collect();
        write!(f, "{}", pairs.join(","))
    }
}

/// Settings shared by seeding and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetConfig {
    pub lanes: u32,
    pub points: PointsTable,
}

impl MeetConfig {
    pub fn new(lanes: u32, points: PointsTable) -> Result<Self> {
        Ok(Self {
            lanes: validate_lanes(lanes)?,
            points,
        })
    }
}

impl Default for MeetConfig {
    fn default() -> Self {
        Self {
            lanes: DEFAULT_LANES,
            points: PointsTable::default(),
        }
    }
}

pub fn validate_lanes(lanes: u32) -> Result<u32> {
    if lanes < 1 {
        return Err(MeetError::Configuration(format!(
            "pool lane count must be >= 1, got {}",
            lanes
        )));
    }
    Ok(lanes)
}

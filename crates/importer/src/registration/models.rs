use std::collections::BTreeMap;

use chrono::NaiveDate;
use meet::models::{Entrant, Gender, TimeValue};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ImporterError, Result};

pub const FORMAT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationFile {
    pub format_version: String,
    pub meet: MeetData,
    pub events: Vec<String>,
    pub swimmers: Vec<SwimmerData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// One row of the registration sheet. `entry_times` maps event name to the
/// time text typed on the form; a missing or blank entry means "not entered".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwimmerData {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub team: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u16,

    #[validate(length(min = 1, max = 255, message = "Category is required"))]
    pub category: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(default)]
    pub entry_times: BTreeMap<String, String>,
}

fn validate_gender(gender: &str) -> std::result::Result<(), validator::ValidationError> {
    match Gender::parse(gender) {
        Some(_) => Ok(()),
        None => Err(validator::ValidationError::new("invalid_gender")),
    }
}

impl SwimmerData {
    /// Events this swimmer actually entered, in event-name order.
    pub fn entered_events(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entry_times
            .iter()
            .map(|(event, time)| (event.as_str(), time.trim()))
            .filter(|(_, time)| !time.is_empty())
    }

    pub fn entrants(&self) -> Result<Vec<Entrant>> {
        let gender = Gender::parse(&self.gender).ok_or_else(|| {
            ImporterError::ValidationError(format!(
                "Swimmer '{}' has unknown gender '{}'",
                self.name, self.gender
            ))
        })?;

        Ok(self
            .entered_events()
            .map(|(event, time)| Entrant {
                name: self.name.trim().to_string(),
                team: self.team.trim().to_string(),
                age: self.age,
                category: self.category.trim().to_string(),
                gender,
                event: event.to_string(),
                entry_time: TimeValue::from_text(time),
            })
            .collect())
    }
}

impl RegistrationFile {
    /// Flattens the registration into seeding input, keeping file order.
    pub fn entrants(&self) -> Result<Vec<Entrant>> {
        let mut entrants = Vec::new();
        for swimmer in &self.swimmers {
            entrants.extend(swimmer.entrants()?);
        }
        Ok(entrants)
    }
}

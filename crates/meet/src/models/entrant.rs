use serde::{Deserialize, Serialize};

use super::{Gender, TimeValue};

/// One swimmer entered in one event, as handed to seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub team: String,
    pub age: u16,
    pub category: String,
    pub gender: Gender,
    pub event: String,
    #[serde(default)]
    pub entry_time: TimeValue,
}

impl Entrant {
    pub fn event_label(&self) -> String {
        self.gender.event_label(&self.event)
    }
}

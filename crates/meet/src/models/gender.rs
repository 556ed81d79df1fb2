use serde::{Deserialize, Serialize};

const EVENT_LABEL_SEPARATOR: &str = " - ";

/// Gender partition of an event. Heats and standings never mix the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    /// Marker appended to event names on every sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Women",
            Self::Male => "Men",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "m" | "male" | "man" | "men" | "boy" | "boys" | "masculino" | "varon" | "varones"
            | "hombre" | "hombres" => Some(Self::Male),
            "f" | "female" | "woman" | "women" | "girl" | "girls" | "femenino" | "mujer"
            | "mujeres" | "dama" | "damas" => Some(Self::Female),
            _ => None,
        }
    }

    /// Builds the label an event carries on sheets, e.g. `50 Free - Women`.
    pub fn event_label(&self, event: &str) -> String {
        format!("{}{}{}", event, EVENT_LABEL_SEPARATOR, self.label())
    }

    /// Recovers the gender from an event label built by [`Gender::event_label`].
    ///
    /// This is the only place results learn their gender from, so standings
    /// and their grouping keys cannot disagree.
    pub fn from_event_label(label: &str) -> Option<Self> {
        label
            .rsplit_once(EVENT_LABEL_SEPARATOR)
            .and_then(|(_, marker)| Self::parse(marker))
    }
}

use chrono::{DateTime, Utc};
use meet::models::ScoreSheet;
use serde::{Deserialize, Serialize};

/// The JSON written by `meetctl score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub skipped_rows: usize,
    #[serde(flatten)]
    pub sheet: ScoreSheet,
}

impl ResultsDocument {
    pub fn new(source: impl Into<String>, skipped_rows: usize, sheet: ScoreSheet) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            skipped_rows,
            sheet,
        }
    }
}

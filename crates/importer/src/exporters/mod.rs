mod judging_sheet;
mod preview;
mod results_document;
mod seeding_sheet;

pub use judging_sheet::{JudgingSheetExporter, JudgingSlip};
pub use preview::PreviewExporter;
pub use results_document::ResultsDocument;
pub use seeding_sheet::SeedingSheetExporter;

use crate::sheet::SheetRow;
use meet::models::{Entrant, TimeValue};

fn entrant_row(lane: u32, entrant: &Entrant) -> SheetRow {
    lane_row(
        lane,
        &entrant.name,
        &entrant.team,
        entrant.age,
        &entrant.category,
        &entrant.entry_time,
    )
}

/// Data row in `HEAT_COLUMNS` order, finish time left for the judges.
fn lane_row(
    lane: u32,
    name: &str,
    team: &str,
    age: u16,
    category: &str,
    entry_time: &TimeValue,
) -> SheetRow {
    vec![
        lane.to_string(),
        name.to_string(),
        team.to_string(),
        age.to_string(),
        category.to_string(),
        entry_time.as_sheet_text(),
        String::new(),
    ]
}

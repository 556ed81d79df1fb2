use super::entrant_row;
use crate::sheet::{
    CATEGORY_MARKER, EVENT_MARKER, HEAT_MARKER, SheetRow, header_row, marker_row,
};
use crate::traits::HeatRenderer;
use meet::models::Heat;

/// The full seeding sheet: every lane of every heat, grouped under event and
/// category markers. Judges write finish times into the last column and the
/// sheet goes back through `SeededSheetIngestor`.
pub struct SeedingSheetExporter;

impl HeatRenderer for SeedingSheetExporter {
    type Output = Vec<SheetRow>;

    fn render(&self, heats: &[Heat]) -> Vec<SheetRow> {
        let mut rows = Vec::new();
        let mut previous: Option<(String, &str)> = None;

        for heat in heats {
            let label = heat.event_label();
            let new_event = previous.as_ref().is_none_or(|(event, _)| *event != label);
            let new_category = new_event
                || previous
                    .as_ref()
                    .is_some_and(|(_, category)| *category != heat.category);

            if new_event {
                rows.push(marker_row(EVENT_MARKER, &label));
            }
            if new_category {
                rows.push(marker_row(CATEGORY_MARKER, &heat.category));
            }
            rows.push(marker_row(HEAT_MARKER, heat.number.to_string()));
            rows.push(header_row());

            for lane in 1..=heat.lane_count() {
                rows.push(match heat.entrant_in_lane(lane) {
                    Some(entrant) => entrant_row(lane, entrant),
                    None => vec![lane.to_string()],
                });
            }
            rows.push(Vec::new());

            previous = Some((label, heat.category.as_str()));
        }

        rows
    }
}

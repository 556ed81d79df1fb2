use super::lane_row;
use crate::sheet::{
    CATEGORY_MARKER, EVENT_MARKER, HEAT_MARKER, SheetRow, header_row, marker_row,
};
use crate::traits::HeatRenderer;
use meet::models::{Heat, TimeValue};
use serde::Serialize;

/// One judging slip: a single swimmer in a single lane of a heat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgingSlip {
    pub event_label: String,
    pub category: String,
    pub heat: u32,
    pub lane: u32,
    pub name: String,
    pub team: String,
    pub age: u16,
    pub entry_time: TimeValue,
}

/// Lane-by-lane judging slips. Empty lanes get no slip.
pub struct JudgingSheetExporter;

impl JudgingSheetExporter {
    /// Lays the slips out one block each. Every block carries its own markers,
    /// so a cut-up and re-ordered stack still reads back correctly.
    pub fn to_rows(slips: &[JudgingSlip]) -> Vec<SheetRow> {
        let mut rows = Vec::with_capacity(slips.len() * 6);

        for slip in slips {
            rows.push(marker_row(EVENT_MARKER, &slip.event_label));
            rows.push(marker_row(CATEGORY_MARKER, &slip.category));
            rows.push(marker_row(HEAT_MARKER, slip.heat.to_string()));
            rows.push(header_row());
            rows.push(lane_row(
                slip.lane,
                &slip.name,
                &slip.team,
                slip.age,
                &slip.category,
                &slip.entry_time,
            ));
            rows.push(Vec::new());
        }

        rows
    }
}

impl HeatRenderer for JudgingSheetExporter {
    type Output = Vec<JudgingSlip>;

    fn render(&self, heats: &[Heat]) -> Vec<JudgingSlip> {
        heats
            .iter()
            .flat_map(|heat| {
                let event_label = heat.event_label();
                heat.occupied_lanes()
                    .map(move |(lane, entrant)| JudgingSlip {
                        event_label: event_label.clone(),
                        category: heat.category.clone(),
                        heat: heat.number,
                        lane,
                        name: entrant.name.clone(),
                        team: entrant.team.clone(),
                        age: entrant.age,
                        entry_time: entrant.entry_time.clone(),
                    })
            })
            .collect()
    }
}

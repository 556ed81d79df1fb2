use crate::Result;
use crate::sheet::{
    CATEGORY_MARKER, EVENT_MARKER, HEAT_COLUMNS, HEAT_MARKER, SheetRow, cell, is_blank,
};
use crate::traits::{IngestOutcome, ResultSource};
use meet::models::{ResultRow, TimeValue};
use tracing::{debug, warn};

const LANE: usize = 0;
const NAME: usize = 1;
const TEAM: usize = 2;
const AGE: usize = 3;
const CATEGORY: usize = 4;
const FINISH_TIME: usize = 6;

/// Markers seen so far, attached to every data row that follows them.
#[derive(Debug, Default, Clone)]
struct SheetState {
    event: Option<String>,
    category: Option<String>,
    heat: Option<u32>,
}

enum SheetLine<'a> {
    Event(&'a str),
    Category(&'a str),
    Heat(&'a str),
    Header,
    Blank,
    Data(&'a [String]),
}

impl<'a> SheetLine<'a> {
    fn classify(row: &'a [String]) -> Self {
        if is_blank(row) {
            return Self::Blank;
        }

        let first = cell(row, 0);
        if first.eq_ignore_ascii_case(EVENT_MARKER) {
            Self::Event(cell(row, 1))
        } else if first.eq_ignore_ascii_case(CATEGORY_MARKER) {
            Self::Category(cell(row, 1))
        } else if first.eq_ignore_ascii_case(HEAT_MARKER) {
            Self::Heat(cell(row, 1))
        } else if first.eq_ignore_ascii_case(HEAT_COLUMNS[0]) {
            Self::Header
        } else {
            Self::Data(row)
        }
    }
}

impl SheetState {
    fn apply(self, line: &SheetLine<'_>) -> Self {
        match line {
            SheetLine::Event(event) => Self {
                event: non_blank(event),
                category: None,
                heat: None,
            },
            SheetLine::Category(category) => Self {
                category: non_blank(category),
                heat: None,
                ..self
            },
            SheetLine::Heat(heat) => Self {
                heat: heat.parse().ok(),
                ..self
            },
            SheetLine::Header | SheetLine::Blank | SheetLine::Data(_) => self,
        }
    }

    /// A finish for a filled lane, or `None` for anything that is not one.
    fn result_for(&self, row: &[String]) -> Option<ResultRow> {
        let lane = cell(row, LANE).parse::<u32>().ok().filter(|lane| *lane >= 1)?;
        let name = cell(row, NAME);
        let finish = cell(row, FINISH_TIME);
        if name.is_empty() || finish.is_empty() {
            return None;
        }

        let event_label = self.event.clone()?;
        let category = self
            .category
            .clone()
            .or_else(|| non_blank(cell(row, CATEGORY)))
            .unwrap_or_default();

        Some(ResultRow {
            event_label,
            category,
            name: name.to_string(),
            team: cell(row, TEAM).to_string(),
            age: cell(row, AGE).parse().ok(),
            finish_time: TimeValue::from_text(finish),
            heat_number: self.heat,
            lane_number: Some(lane),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Reads finish times back out of a seeding or judging sheet.
///
/// Rows that are neither markers nor a filled lane with a finish time (empty
/// lanes, lanes nobody timed, stray notes) are counted and passed over.
pub struct SeededSheetIngestor;

impl SeededSheetIngestor {
    pub fn ingest(rows: &[SheetRow]) -> IngestOutcome {
        let (_, outcome) = rows.iter().fold(
            (SheetState::default(), IngestOutcome::default()),
            |(state, mut outcome), row| {
                let line = SheetLine::classify(row);
                if let SheetLine::Data(cells) = &line {
                    match state.result_for(cells) {
                        Some(result) => outcome.results.push(result),
                        None => outcome.skipped += 1,
                    }
                }
                (state.apply(&line), outcome)
            },
        );

        if outcome.skipped > 0 {
            warn!(
                "Skipped {} sheet row(s) without a lane, name and finish time",
                outcome.skipped
            );
        }
        debug!("Ingested {} result(s)", outcome.results.len());

        outcome
    }
}

impl ResultSource for SeededSheetIngestor {
    fn read_results(&self, rows: &[SheetRow]) -> Result<IngestOutcome> {
        Ok(Self::ingest(rows))
    }

    fn name(&self) -> &'static str {
        "seeded-sheet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::{JudgingSheetExporter, SeedingSheetExporter};
    use crate::traits::HeatRenderer;
    use meet::models::{Entrant, Gender};
    use meet::services::seed;
    use rust_decimal::Decimal;

    fn row(cells: &[&str]) -> SheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn entrant(name: &str, team: &str, category: &str, gender: Gender, time: &str) -> Entrant {
        Entrant {
            name: name.to_string(),
            team: team.to_string(),
            age: 12,
            category: category.to_string(),
            gender,
            event: "50 Free".to_string(),
            entry_time: TimeValue::from_text(time),
        }
    }

    fn field() -> Vec<Entrant> {
        let mut entrants: Vec<Entrant> = (0..11)
            .map(|n| {
                entrant(
                    &format!("girl{}", n),
                    if n % 2 == 0 { "Sharks" } else { "Orcas" },
                    "11-12",
                    Gender::Female,
                    &format!("{}.50", 32 + n),
                )
            })
            .collect();
        entrants.push(entrant("boy", "Orcas", "13-14", Gender::Male, ""));
        entrants
    }

    // Writes a finish time into every filled lane, as the judges would.
    fn annotate(rows: &mut [SheetRow], finish: &str) {
        let mut in_block = false;
        for row in rows.iter_mut() {
            let filled_lane = match SheetLine::classify(row) {
                SheetLine::Header => {
                    in_block = true;
                    false
                }
                SheetLine::Blank => {
                    in_block = false;
                    false
                }
                SheetLine::Data(cells) => in_block && !cell(cells, NAME).is_empty(),
                _ => false,
            };
            if filled_lane {
                row[FINISH_TIME] = finish.to_string();
            }
        }
    }

    fn tuples(heats: &[meet::models::Heat]) -> Vec<(String, String, String, u32, u32)> {
        heats
            .iter()
            .flat_map(|heat| {
                heat.occupied_lanes().map(move |(lane, e)| {
                    (e.name.clone(), e.team.clone(), e.category.clone(), lane, heat.number)
                })
            })
            .collect()
    }

    fn ingested(outcome: &IngestOutcome) -> Vec<(String, String, String, u32, u32)> {
        outcome
            .results
            .iter()
            .map(|r| {
                (
                    r.name.clone(),
                    r.team.clone(),
                    r.category.clone(),
                    r.lane_number.unwrap(),
                    r.heat_number.unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_seeding_sheet_round_trip() {
        let heats = seed(&field(), 8).unwrap();

        for finish in ["31.07", "1:02,5", "DQ"] {
            let mut rows = SeedingSheetExporter.render(&heats);
            annotate(&mut rows, finish);

            let outcome = SeededSheetIngestor::ingest(&rows);
            assert_eq!(ingested(&outcome), tuples(&heats));
            assert!(
                outcome
                    .results
                    .iter()
                    .all(|r| r.finish_time == TimeValue::from_text(finish))
            );
            // Empty lanes: 5 in heat 1 of the girls, 7 in the boys' heat.
            assert_eq!(outcome.skipped, 12);
        }
    }

    #[test]
    fn test_judging_sheet_round_trip() {
        let heats = seed(&field(), 8).unwrap();
        let mut rows = JudgingSheetExporter::to_rows(&JudgingSheetExporter.render(&heats));
        annotate(&mut rows, "40.00");

        let outcome = SeededSheetIngestor::ingest(&rows);
        assert_eq!(ingested(&outcome), tuples(&heats));
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.results[0].event_label, "50 Free - Women");
        assert_eq!(outcome.results.last().unwrap().event_label, "50 Free - Men");
    }

    #[test]
    fn test_markers_are_threaded_through_rows() {
        let rows = vec![
            row(&["Event", "100 Back - Men"]),
            row(&["Category", "Open"]),
            row(&["Heat", "2"]),
            row(&["Lane", "Name", "Team", "Age", "Category", "Entry Time", "Finish Time"]),
            row(&["4", "Luis", "Orcas", "15", "Open", "1:10.00", "1:08.31"]),
            row(&["5", "Marc", "Sharks", "x", "Open", "", "1:09,00"]),
            row(&[]),
            row(&["heat", "3"]),
            row(&["LANE"]),
            row(&["1", "Nico", "Orcas", "16", "Open", "", "1:12.00"]),
        ];

        let outcome = SeededSheetIngestor::ingest(&rows);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.results.len(), 3);

        let luis = &outcome.results[0];
        assert_eq!(luis.event_label, "100 Back - Men");
        assert_eq!(luis.category, "Open");
        assert_eq!(luis.heat_number, Some(2));
        assert_eq!(luis.lane_number, Some(4));
        assert_eq!(luis.age, Some(15));
        assert_eq!(luis.finish_time, TimeValue::Seconds(Decimal::new(6831, 2)));

        assert_eq!(outcome.results[1].age, None);
        assert_eq!(outcome.results[2].heat_number, Some(3));
        assert_eq!(outcome.results[2].category, "Open");
    }

    #[test]
    fn test_structural_rows_are_skipped() {
        let rows = vec![
            row(&["4", "Early", "Orcas", "12", "11-12", "", "30.00"]),
            row(&["Event", "50 Free - Women"]),
            row(&["Heat", "1"]),
            row(&["Lane"]),
            row(&["four", "Ana", "Sharks", "12", "11-12", "", "30.00"]),
            row(&["0", "Bea", "Sharks", "12", "11-12", "", "31.00"]),
            row(&["3", "Cla", "Sharks", "12", "11-12", "", ""]),
            row(&["2", "", "", "", "", "", "33.00"]),
            row(&["Notes: pool temperature 27C"]),
            row(&["6", "Dia", "Sharks", "12", "11-12", "", "34.00"]),
        ];

        let outcome = SeededSheetIngestor::ingest(&rows);
        assert_eq!(outcome.skipped, 6);
        assert_eq!(outcome.results.len(), 1);

        // No category marker: the row's own category column is used.
        let dia = &outcome.results[0];
        assert_eq!(dia.name, "Dia");
        assert_eq!(dia.category, "11-12");
    }

    #[test]
    fn test_event_marker_resets_category_and_heat() {
        let rows = vec![
            row(&["Event", "50 Free - Women"]),
            row(&["Category", "11-12"]),
            row(&["Heat", "4"]),
            row(&["Event", "50 Back - Women"]),
            row(&["1", "Ana", "Sharks", "12", "9-10", "", "41.00"]),
        ];

        let outcome = SeededSheetIngestor::ingest(&rows);
        let ana = &outcome.results[0];
        assert_eq!(ana.event_label, "50 Back - Women");
        assert_eq!(ana.category, "9-10");
        assert_eq!(ana.heat_number, None);
    }

    #[test]
    fn test_unparsed_finish_time_is_kept() {
        let rows = vec![
            row(&["Event", "50 Free - Women"]),
            row(&["1", "Ana", "Sharks", "12", "11-12", "", "DNF"]),
        ];

        let outcome = SeededSheetIngestor.read_results(&rows).unwrap();
        assert_eq!(
            outcome.results[0].finish_time,
            TimeValue::Invalid("DNF".to_string())
        );
    }
}

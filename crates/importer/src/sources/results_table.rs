use std::collections::HashMap;

use crate::sheet::{SheetRow, cell, is_blank};
use crate::traits::{IngestOutcome, ResultSource};
use crate::{ImporterError, Result};
use meet::models::{ResultRow, TimeValue};
use tracing::warn;

const REQUIRED_COLUMNS: [&str; 4] = ["event", "category", "name", "time"];

/// A flat results table: one header row, then one finisher per row.
///
/// Columns are found by header name (case-insensitive): `event`, `category`,
/// `name` and `time` are required; `team`, `age`, `heat` and `lane` are read
/// when present. The event column must carry the gender marker, e.g.
/// `50 Free - Women`.
pub struct ResultsTableReader;

struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &[String]) -> Result<Self> {
        let columns: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_lowercase(), idx))
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !columns.contains_key(*column))
            .collect();
        if !missing.is_empty() {
            return Err(ImporterError::SheetError(format!(
                "Results table is missing column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self(columns))
    }

    fn get<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.0
            .get(column)
            .map(|idx| cell(row, *idx))
            .unwrap_or("")
    }
}

impl ResultSource for ResultsTableReader {
    fn read_results(&self, rows: &[SheetRow]) -> Result<IngestOutcome> {
        let mut rows = rows.iter().skip_while(|row| is_blank(row));
        let header = rows.next().ok_or_else(|| {
            ImporterError::SheetError("Results table has no header row".to_string())
        })?;
        let columns = Columns::from_header(header)?;

        let mut outcome = IngestOutcome::default();
        for row in rows.filter(|row| !is_blank(row)) {
            let name = columns.get(row, "name");
            let event_label = columns.get(row, "event");
            let finish = columns.get(row, "time");

            if name.is_empty() || event_label.is_empty() || finish.is_empty() {
                outcome.skipped += 1;
                continue;
            }

            outcome.results.push(ResultRow {
                event_label: event_label.to_string(),
                category: columns.get(row, "category").to_string(),
                name: name.to_string(),
                team: columns.get(row, "team").to_string(),
                age: columns.get(row, "age").parse().ok(),
                finish_time: TimeValue::from_text(finish),
                heat_number: columns.get(row, "heat").parse().ok(),
                lane_number: columns.get(row, "lane").parse().ok(),
            });
        }

        if outcome.skipped > 0 {
            warn!(
                "Skipped {} results table row(s) without name, event or time",
                outcome.skipped
            );
        }

        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "results-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> SheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_reads_by_header_name() {
        let rows = vec![
            row(&[]),
            row(&["Name", "Team", "Event", "Category", "Time", "Lane"]),
            row(&["Ana", "Sharks", "50 Free - Women", "11-12", "33.10", "4"]),
            row(&["Bea", "", "50 Free - Women", "11-12", "", "5"]),
            row(&["Cla", "Orcas", "50 Free - Women", "11-12", "DQ", "x"]),
        ];

        let outcome = ResultsTableReader.read_results(&rows).unwrap();
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.results.len(), 2);

        let ana = &outcome.results[0];
        assert_eq!(ana.team, "Sharks");
        assert_eq!(ana.lane_number, Some(4));
        assert_eq!(ana.heat_number, None);
        assert_eq!(ana.age, None);

        let cla = &outcome.results[1];
        assert_eq!(cla.finish_time, TimeValue::Invalid("DQ".to_string()));
        assert_eq!(cla.lane_number, None);
    }

    #[test]
    fn test_missing_columns_fail() {
        let rows = vec![row(&["Name", "Event"])];
        let err = ResultsTableReader.read_results(&rows).unwrap_err();
        assert!(err.to_string().contains("category, time"));

        assert!(ResultsTableReader.read_results(&[]).is_err());
    }
}

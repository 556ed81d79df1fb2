pub mod error;
pub mod exporters;
pub mod registration;
pub mod sheet;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use registration::{RegistrationFile, RegistrationValidator};
pub use sources::{ResultsTableReader, SeededSheetIngestor};
pub use traits::{HeatRenderer, IngestOutcome, ResultSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::SeedingSheetExporter;
    use crate::sheet::{HEAT_COLUMNS, SheetRow, cell};
    use meet::{PointsTable, services};
    use std::path::Path;

    const ENTRY_TIME: usize = 5;
    const FINISH_TIME: usize = 6;

    // Every swimmer swims exactly their entry time.
    fn swim_entry_times(rows: &mut [SheetRow]) {
        for row in rows.iter_mut() {
            let is_lane = cell(row, 0).parse::<u32>().is_ok() && !cell(row, 1).is_empty();
            if is_lane && row.len() == HEAT_COLUMNS.len() {
                row[FINISH_TIME] = row[ENTRY_TIME].clone();
            }
        }
    }

    #[tokio::test]
    async fn test_registration_to_standings() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/registration.json");
        let registration = registration::load(&path).await.unwrap();
        let report = RegistrationValidator::validate(&registration).unwrap();
        assert!(report.warnings.is_empty());

        let entrants = registration.entrants().unwrap();
        assert_eq!(entrants.len(), 10);

        let heats = services::seed(&entrants, 8).unwrap();
        assert_eq!(heats.len(), 4);

        let mut rows = SeedingSheetExporter.render(&heats);
        swim_entry_times(&mut rows);

        let outcome = SeededSheetIngestor.read_results(&rows).unwrap();
        assert_eq!(outcome.results.len(), 10);

        let sheet = services::score(&outcome.results, &PointsTable::default());

        assert_eq!(sheet.teams[0].team, "Sharks");
        assert_eq!(sheet.teams[0].total_points, 42);
        assert_eq!(sheet.teams[1].team, "Orcas");
        assert_eq!(sheet.teams[1].total_points, 33);

        let women: Vec<(&str, u64, u32)> = sheet
            .individuals
            .iter()
            .filter(|s| s.category == "11-12")
            .map(|s| (s.name.as_str(), s.total_points, s.overall_place))
            .collect();
        assert_eq!(
            women,
            vec![
                ("Clara Vidal", 15, 1),
                ("Ana Ruiz", 14, 2),
                ("Bea Soto", 9, 3),
                ("Diana Mora", 6, 4),
            ]
        );
    }
}

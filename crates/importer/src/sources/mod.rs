mod results_table;
mod seeded_sheet;

pub use results_table::ResultsTableReader;
pub use seeded_sheet::SeededSheetIngestor;

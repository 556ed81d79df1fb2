use crate::Result;
use crate::sheet::SheetRow;
use meet::models::{Heat, ResultRow};

/// Rows recovered from a results sheet, plus how many rows were passed over.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngestOutcome {
    pub results: Vec<ResultRow>,
    pub skipped: usize,
}

/// A sheet layout that finish times can be read from.
pub trait ResultSource {
    fn read_results(&self, rows: &[SheetRow]) -> Result<IngestOutcome>;

    fn name(&self) -> &'static str;
}

/// Presentation of seeded heats. Each renderer owns layout only; heats always
/// come from `meet::services::seed`.
pub trait HeatRenderer {
    type Output;

    fn render(&self, heats: &[Heat]) -> Self::Output;
}

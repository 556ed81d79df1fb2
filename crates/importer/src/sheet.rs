//! Plain tab-separated sheets shared by the renderers and the ingestors.

use std::path::Path;

use crate::Result;

pub type SheetRow = Vec<String>;

pub const EVENT_MARKER: &str = "Event";
pub const CATEGORY_MARKER: &str = "Category";
pub const HEAT_MARKER: &str = "Heat";

/// Column header of every heat block. The first cell doubles as its marker.
pub const HEAT_COLUMNS: [&str; 7] = [
    "Lane",
    "Name",
    "Team",
    "Age",
    "Category",
    "Entry Time",
    "Finish Time",
];

pub fn marker_row(marker: &str, value: impl Into<String>) -> SheetRow {
    vec![marker.to_string(), value.into()]
}

pub fn header_row() -> SheetRow {
    HEAT_COLUMNS.iter().map(|column| column.to_string()).collect()
}

/// Trimmed cell at `idx`, empty when the row is shorter.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|value| value.trim()).unwrap_or("")
}

pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

pub fn parse_tsv(text: &str) -> Vec<SheetRow> {
    text.lines()
        .map(|line| {
            line.trim_end_matches('\r')
                .split('\t')
                .map(str::to_string)
                .collect()
        })
        .collect()
}

pub fn to_tsv(rows: &[SheetRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|value| value.replace(['\t', '\n', '\r'], " "))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

pub async fn read_sheet(path: &Path) -> Result<Vec<SheetRow>> {
    let content = tokio::fs::read_to_string(path).await?;
    let rows = parse_tsv(&content);
    tracing::debug!("Read sheet {} ({} rows)", path.display(), rows.len());
    Ok(rows)
}

pub async fn write_sheet(path: &Path, rows: &[SheetRow]) -> Result<()> {
    tokio::fs::write(path, to_tsv(rows)).await?;
    tracing::debug!("Wrote sheet {} ({} rows)", path.display(), rows.len());
    Ok(())
}

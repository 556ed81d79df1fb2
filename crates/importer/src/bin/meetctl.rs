use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use importer::{
    HeatRenderer, RegistrationValidator, ResultSource, ResultsTableReader, SeededSheetIngestor,
    exporters::{JudgingSheetExporter, PreviewExporter, ResultsDocument, SeedingSheetExporter},
    registration,
    sheet::{read_sheet, write_sheet},
};
use meet::{DEFAULT_LANES, MeetConfig, PointsTable, services};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meetctl")]
#[command(about = "Swim meet heat seeding and results scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "MEET_LANES", default_value_t = DEFAULT_LANES)]
    lanes: u32,

    /// Points per place, e.g. "1:9,2:7,3:6"
    #[arg(long, env = "MEET_POINTS")]
    points: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a registration file without seeding it
    Validate { file: PathBuf },
    /// Seed heats and write the seeding and judging sheets
    Seed {
        file: PathBuf,

        #[arg(long, default_value = "./seeding")]
        output: PathBuf,
    },
    /// Score a sheet with finish times filled in
    Score {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = SheetFormat::Seeded)]
        format: SheetFormat,

        #[arg(long, default_value = "./results.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetFormat {
    /// Seeding or judging sheet written by `meetctl seed`
    Seeded,
    /// Flat table with a header row
    Table,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("meet={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let points = match cli.points.as_deref() {
        Some(raw) => raw.parse::<PointsTable>().context("Invalid points table")?,
        None => PointsTable::default(),
    };
    let config = MeetConfig::new(cli.lanes, points).context("Invalid meet configuration")?;
    tracing::debug!("Lanes: {}, points: {}", config.lanes, config.points);

    match cli.command {
        Commands::Validate { file } => {
            load_registration(&file).await?;
        }
        Commands::Seed { file, output } => {
            handle_seed(&file, &output, &config).await?;
        }
        Commands::Score {
            file,
            format,
            output,
        } => {
            handle_score(&file, format, &output, &config).await?;
        }
    }

    Ok(())
}

async fn load_registration(file: &Path) -> anyhow::Result<importer::RegistrationFile> {
    tracing::info!("Loading registration from: {}", file.display());

    let registration = registration::load(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    tracing::info!(
        "Loaded meet: {} ({} events, {} swimmers)",
        registration.meet.name,
        registration.events.len(),
        registration.swimmers.len()
    );

    let validation_report = RegistrationValidator::validate(&registration)?;
    validation_report.log_warnings();
    tracing::info!("✓ Validation successful!");

    Ok(registration)
}

async fn handle_seed(file: &Path, output: &Path, config: &MeetConfig) -> anyhow::Result<()> {
    let registration = load_registration(file).await?;
    let entrants = registration.entrants()?;

    let heats = services::seed(&entrants, config.lanes)?;
    tracing::info!(
        "Seeded {} entries into {} heat(s) over {} lanes",
        entrants.len(),
        heats.len(),
        config.lanes
    );

    for line in PreviewExporter.render(&heats).lines() {
        tracing::info!("  {}", line);
    }

    tokio::fs::create_dir_all(output)
        .await
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let seeding_path = output.join("seeding.tsv");
    write_sheet(&seeding_path, &SeedingSheetExporter.render(&heats)).await?;

    let judging_path = output.join("judging.tsv");
    let slips = JudgingSheetExporter.render(&heats);
    write_sheet(&judging_path, &JudgingSheetExporter::to_rows(&slips)).await?;

    let heats_path = output.join("heats.json");
    tokio::fs::write(&heats_path, serde_json::to_string_pretty(&heats)?).await?;

    tracing::info!("Seeding sheet: {}", seeding_path.display());
    tracing::info!("Judging slips: {} ({} slips)", judging_path.display(), slips.len());
    tracing::info!("Fill in finish times, then score with:");
    tracing::info!("   meetctl score {}", seeding_path.display());

    Ok(())
}

async fn handle_score(
    file: &Path,
    format: SheetFormat,
    output: &Path,
    config: &MeetConfig,
) -> anyhow::Result<()> {
    let source: &dyn ResultSource = match format {
        SheetFormat::Seeded => &SeededSheetIngestor,
        SheetFormat::Table => &ResultsTableReader,
    };

    tracing::info!("Reading {} from: {}", source.name(), file.display());
    let rows = read_sheet(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let outcome = source.read_results(&rows)?;

    if outcome.results.is_empty() {
        tracing::warn!("No finish times found in {}", file.display());
    }

    let sheet = services::score(&outcome.results, &config.points);
    tracing::info!(
        "Scored {} result(s) for {} swimmer(s) and {} team(s)",
        sheet.ranked.len(),
        sheet.individuals.len(),
        sheet.teams.len()
    );

    tracing::info!("Team standings:");
    for team in &sheet.teams {
        tracing::info!(
            "  {:>2}. {} ({} pts)",
            team.overall_place,
            team.team,
            team.total_points
        );
    }

    let document = ResultsDocument::new(file.display().to_string(), outcome.skipped, sheet);
    tokio::fs::write(output, serde_json::to_string_pretty(&document)?)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Results written to: {}", output.display());

    Ok(())
}

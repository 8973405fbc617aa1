//! The import run: read every range, join choices, write the documents.
//!
//! Ranges are fetched one after another. The title range is the only
//! optional input; every other failure aborts the run.

use std::future::Future;
use std::path::{Path, PathBuf};

use sheetplay_core::merge::merge_choices;
use sheetplay_core::ports::{
    RowSource, CHARACTERS_RANGE, CHOICES_RANGE, SCENARIOS_RANGE, TITLE_RANGE,
};
use sheetplay_core::readers::{read_characters, read_choices, read_scenarios, read_title};
use sheetplay_sheets::SheetsApiError;

use crate::config::ImportConfig;
use crate::error::ImportResult;
use crate::output;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub characters: usize,
    pub scenarios: usize,
    /// Choice scenes that received at least one choice.
    pub choice_scenes: usize,
    /// Title text, when the title range yielded a usable row.
    pub title: Option<String>,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Load configuration, open the row-source, and run the import.
///
/// `connect` is only called once configuration is valid, so a missing
/// `SPREADSHEET_ID` fails before any network traffic.
pub async fn import<L, F, Fut, S>(lookup: L, connect: F) -> ImportResult<ImportSummary>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(ImportConfig) -> Fut,
    Fut: Future<Output = Result<S, SheetsApiError>>,
    S: RowSource,
{
    let config = ImportConfig::from_lookup(lookup)?;
    let output_dir = config.output_dir.clone();

    tracing::info!(
        spreadsheet_id = %config.spreadsheet_id,
        credentials = %config.credentials_path.display(),
        output_dir = %output_dir.display(),
        "Starting import",
    );

    let source = connect(config).await?;
    run(&source, &output_dir).await
}

/// Run the import against an already-open row-source.
pub async fn run<S>(source: &S, output_dir: &Path) -> ImportResult<ImportSummary>
where
    S: RowSource + ?Sized,
{
    let characters = read_characters(&source.fetch(CHARACTERS_RANGE).await?);
    tracing::debug!(count = characters.len(), "Characters read");

    let mut scenarios = read_scenarios(&source.fetch(SCENARIOS_RANGE).await?);
    tracing::debug!(count = scenarios.len(), "Scenarios read");

    let choices = read_choices(&source.fetch(CHOICES_RANGE).await?);
    tracing::debug!(scenes = choices.len(), "Choices read");

    let choice_scenes = merge_choices(&mut scenarios, &choices);

    let title = match source.fetch(TITLE_RANGE).await.and_then(|t| read_title(&t)) {
        Ok(title) => Some(title),
        Err(e) => {
            tracing::warn!(error = %e, "Title sheet unavailable, skipping title.json");
            None
        }
    };

    let mut written = vec![
        output::save_characters(output_dir, &characters).await?,
        output::save_scenarios(output_dir, &scenarios).await?,
    ];

    if let Some(title) = &title {
        match output::save_title(output_dir, title).await {
            Ok(path) => written.push(path),
            Err(e) => tracing::warn!(error = %e, "Failed to save title.json"),
        }
    }

    let summary = ImportSummary {
        characters: characters.len(),
        scenarios: scenarios.len(),
        choice_scenes,
        title: title.map(|t| t.title),
        written,
    };

    tracing::info!(
        characters = summary.characters,
        scenarios = summary.scenarios,
        choice_scenes = summary.choice_scenes,
        title = summary.title.as_deref().unwrap_or("-"),
        "Import complete",
    );

    Ok(summary)
}

//! Writers for the generated JSON documents.
//!
//! Each document is written on its own. There is no multi-file commit, so
//! a failure on a later file leaves earlier ones already replaced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sheetplay_core::models::{Character, Scenario, Title};
use sheetplay_core::render::{
    render_characters, render_scenarios, render_title, CHARACTERS_FILE, SCENARIO_FILE, TITLE_FILE,
};

use crate::error::{ImportError, ImportResult};

pub async fn save_characters(
    dir: &Path,
    characters: &BTreeMap<String, Character>,
) -> ImportResult<PathBuf> {
    write_document(dir.join(CHARACTERS_FILE), render_characters(characters)?).await
}

pub async fn save_scenarios(dir: &Path, scenarios: &[Scenario]) -> ImportResult<PathBuf> {
    write_document(dir.join(SCENARIO_FILE), render_scenarios(scenarios)?).await
}

pub async fn save_title(dir: &Path, title: &Title) -> ImportResult<PathBuf> {
    write_document(dir.join(TITLE_FILE), render_title(title)?).await
}

async fn write_document(path: PathBuf, json: String) -> ImportResult<PathBuf> {
    match tokio::fs::write(&path, json).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Saved");
            Ok(path)
        }
        Err(source) => Err(ImportError::Write { path, source }),
    }
}

use std::path::PathBuf;

use sheetplay_sheets::api::DEFAULT_BASE_URL;

/// Default service-account key location, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

/// Default directory the JSON documents are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "../data";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

/// Importer configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Spreadsheet to read from.
    pub spreadsheet_id: String,
    /// Path to the service-account JSON key.
    pub credentials_path: PathBuf,
    /// Directory that receives `characters.json`, `scenario.json` and
    /// `title.json`.
    pub output_dir: PathBuf,
    /// Sheets API host (overridable for testing).
    pub api_base_url: String,
}

impl ImportConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Required | Default                         |
    /// |---------------------------|----------|---------------------------------|
    /// | `SPREADSHEET_ID`          | **yes**  | --                              |
    /// | `GOOGLE_CREDENTIALS_PATH` | no       | `credentials.json`              |
    /// | `OUTPUT_DIR`              | no       | `../data`                       |
    /// | `SHEETS_API_BASE_URL`     | no       | `https://sheets.googleapis.com` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let spreadsheet_id = var("SPREADSHEET_ID").ok_or(ConfigError::MissingVar("SPREADSHEET_ID"))?;

        let credentials_path = var("GOOGLE_CREDENTIALS_PATH")
            .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.into())
            .into();

        let output_dir = var("OUTPUT_DIR")
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into())
            .into();

        let api_base_url = var("SHEETS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Ok(Self {
            spreadsheet_id,
            credentials_path,
            output_dir,
            api_base_url,
        })
    }
}

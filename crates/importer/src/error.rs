use std::path::PathBuf;

use sheetplay_core::error::CoreError;
use sheetplay_sheets::SheetsApiError;

use crate::config::ConfigError;

/// Fatal errors of an import run. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The row-source could not be created (credentials, token exchange).
    #[error("Failed to create Sheets API client: {0}")]
    Client(#[from] SheetsApiError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for pipeline return values.
pub type ImportResult<T> = Result<T, ImportError>;

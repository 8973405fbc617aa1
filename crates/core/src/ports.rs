//! The row-source seam between the pipeline and the spreadsheet backend.

use async_trait::async_trait;

use crate::cell::Table;
use crate::error::CoreError;

/// Named range for the characters sheet (header row excluded).
pub const CHARACTERS_RANGE: &str = "characters!A2:D";

/// Named range for the scenarios sheet.
pub const SCENARIOS_RANGE: &str = "scenarios!A2:H";

/// Named range for the choices sheet.
pub const CHOICES_RANGE: &str = "choices!A2:C";

/// Named range for the optional title sheet.
pub const TITLE_RANGE: &str = "title!A2:B";

/// Anything that can return the cells of a named range.
///
/// Implementations report failures as [`CoreError::Fetch`] with the range
/// name and the underlying cause.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch(&self, range: &str) -> Result<Table, CoreError>;
}

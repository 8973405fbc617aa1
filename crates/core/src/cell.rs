//! Spreadsheet cell values as returned by a row-source.
//!
//! The Sheets API hands back JSON scalars. [`Cell`] keeps the variants
//! apart only until a reader asks for the text: every consumer works
//! with [`Cell::as_text`] and never sees the JSON scalar type.

use serde::Deserialize;

/// A single cell of a fetched range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// `null` in the payload.
    Absent,
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// One row of cells. Trailing empty cells are usually trimmed by the API,
/// so rows in the same table can have different lengths.
pub type Row = Vec<Cell>;

/// A rectangular (possibly ragged) block of rows for one named range.
pub type Table = Vec<Row>;

impl Cell {
    /// Collapse the cell to its string form. Absent cells become `""`.
    pub fn as_text(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Text of the cell at `index`, or `""` when the row is shorter.
pub fn text_at(row: &[Cell], index: usize) -> String {
    row.get(index).map(Cell::as_text).unwrap_or_default()
}

/// Build a table from string literals. Mostly useful in tests.
pub fn table_from<R, C>(rows: R) -> Table
where
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: Into<Cell>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_deserialize_into_variants() {
        let row: Row = serde_json::from_str(r#"["a", 3, 1.5, true, null]"#).unwrap();
        assert_eq!(row[0], Cell::Text("a".into()));
        assert!(matches!(row[1], Cell::Number(_)));
        assert_eq!(row[3], Cell::Bool(true));
        assert_eq!(row[4], Cell::Absent);
    }

    #[test]
    fn test_as_text_stringifies_everything() {
        let row: Row = serde_json::from_str(r#"["a", 3, 1.5, false, null]"#).unwrap();
        let texts: Vec<String> = row.iter().map(Cell::as_text).collect();
        assert_eq!(texts, vec!["a", "3", "1.5", "false", ""]);
    }

    #[test]
    fn test_text_at_out_of_range_is_empty() {
        let row = vec![Cell::from("x")];
        assert_eq!(text_at(&row, 0), "x");
        assert_eq!(text_at(&row, 5), "");
    }
}

//! Table readers: turn one fetched range into typed records.
//!
//! Mapping is positional. The column order of each range is a contract
//! with the spreadsheet layout:
//!
//! | Range        | Columns                                                                 |
//! |--------------|-------------------------------------------------------------------------|
//! | `characters` | id, name, image_path, [default_position]                                |
//! | `scenarios`  | scene_id, type, character_id, text, position, effect, background, next_scene |
//! | `choices`    | scene_id, text, next_scene                                              |
//! | `title`      | title, background                                                       |
//!
//! Malformed rows are not errors. Short character and choice rows are
//! dropped, scenario rows are padded with [`PLACEHOLDER`].

use std::collections::{BTreeMap, HashMap};

use crate::cell::{text_at, Row, Table};
use crate::error::CoreError;
use crate::models::{Character, Choice, Scenario, Title};

// ── Constants ────────────────────────────────────────────────────────

/// Minimum cells for a character row.
pub const CHARACTER_MIN_CELLS: usize = 3;

/// Number of columns a scenario row is normalized to.
pub const SCENARIO_WIDTH: usize = 8;

/// Index of the scenario `type` column; rows with it empty are skipped.
pub const SCENARIO_TYPE_COLUMN: usize = 1;

/// Minimum cells for a choice row.
pub const CHOICE_MIN_CELLS: usize = 3;

/// Minimum cells for the title row.
pub const TITLE_MIN_CELLS: usize = 2;

/// Written in place of any scenario cell that is missing or empty.
pub const PLACEHOLDER: &str = "-";

// ── Readers ──────────────────────────────────────────────────────────

/// Read the characters range into a map keyed by id.
///
/// Later rows with a repeated id replace earlier ones.
pub fn read_characters(table: &Table) -> BTreeMap<String, Character> {
    let mut characters = BTreeMap::new();

    for row in table.iter().filter(|row| row.len() >= CHARACTER_MIN_CELLS) {
        let id = text_at(row, 0);
        let character = Character {
            id: id.clone(),
            name: text_at(row, 1),
            image_path: text_at(row, 2),
            default_position: row.get(3).map(|cell| cell.as_text()),
        };
        characters.insert(id, character);
    }

    characters
}

/// Read the scenarios range, preserving row order.
pub fn read_scenarios(table: &Table) -> Vec<Scenario> {
    table
        .iter()
        .filter(|row| !text_at(row, SCENARIO_TYPE_COLUMN).is_empty())
        .map(|row| {
            let [scene_id, scene_type, character_id, text, position, effect, background, next_scene] =
                normalize_scenario_row(row);
            Scenario {
                scene_id,
                scene_type,
                character_id,
                text,
                position,
                effect,
                background,
                next_scene,
                choices: Vec::new(),
            }
        })
        .collect()
}

/// Read the choices range, grouped by scene id in row order.
pub fn read_choices(table: &Table) -> HashMap<String, Vec<Choice>> {
    let mut choices: HashMap<String, Vec<Choice>> = HashMap::new();

    for row in table.iter().filter(|row| row.len() >= CHOICE_MIN_CELLS) {
        choices.entry(text_at(row, 0)).or_default().push(Choice {
            text: text_at(row, 1),
            next_scene: text_at(row, 2),
        });
    }

    choices
}

/// Read the title range. Only the first row is used.
pub fn read_title(table: &Table) -> Result<Title, CoreError> {
    let row = table
        .first()
        .ok_or_else(|| CoreError::MissingTitle("range is empty".to_string()))?;

    if row.len() < TITLE_MIN_CELLS {
        return Err(CoreError::MissingTitle(format!(
            "expected {TITLE_MIN_CELLS} cells, found {}",
            row.len()
        )));
    }

    Ok(Title {
        title: text_at(row, 0),
        background: text_at(row, 1),
    })
}

// ── Private helpers ──────────────────────────────────────────────────

/// Pad or truncate a scenario row to [`SCENARIO_WIDTH`] columns.
///
/// Missing trailing cells and empty cells both become [`PLACEHOLDER`].
fn normalize_scenario_row(row: &Row) -> [String; SCENARIO_WIDTH] {
    std::array::from_fn(|index| {
        let text = text_at(row, index);
        if text.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            text
        }
    })
}

// ── Tests ────────────────────────────────────────────────────────────

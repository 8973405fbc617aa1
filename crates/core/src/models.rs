//! Records produced by the importer and serialized for the game engine.
//!
//! Field names are the JSON keys the engine reads, so they must not be
//! renamed.

use serde::{Deserialize, Serialize};

/// Scenario `type` value that makes a scene receive choices.
pub const SCENE_TYPE_CHOICE: &str = "choice";

/// A speaking character, keyed by `id` in `characters.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub image_path: String,
    /// Legacy fourth column; only written when the sheet still has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<String>,
}

/// One line of the story, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub scene_id: String,
    #[serde(rename = "type")]
    pub scene_type: String,
    pub character_id: String,
    pub text: String,
    pub position: String,
    pub effect: String,
    pub background: String,
    pub next_scene: String,
    /// Empty means "no choices" and the key is left out of the output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl Scenario {
    pub fn is_choice(&self) -> bool {
        self.scene_type == SCENE_TYPE_CHOICE
    }
}

/// A branch offered by a `choice` scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub next_scene: String,
}

/// Title screen content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub title: String,
    pub background: String,
}

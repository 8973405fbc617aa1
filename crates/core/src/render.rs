//! JSON rendering for the output documents.
//!
//! All documents use `serde_json`'s pretty printer (two-space indent, no
//! trailing newline). Characters come from a `BTreeMap`, so object keys
//! are sorted and re-rendering a parsed document gives the same bytes.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::models::{Character, Scenario, Title};

/// Output file name for the character map.
pub const CHARACTERS_FILE: &str = "characters.json";

/// Output file name for the scenario list.
pub const SCENARIO_FILE: &str = "scenario.json";

/// Output file name for the title record.
pub const TITLE_FILE: &str = "title.json";

pub fn render_characters(characters: &BTreeMap<String, Character>) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(characters)?)
}

pub fn render_scenarios(scenarios: &[Scenario]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(scenarios)?)
}

pub fn render_title(title: &Title) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(title)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    fn scenario(scene_id: &str, scene_type: &str) -> Scenario {
        Scenario {
            scene_id: scene_id.into(),
            scene_type: scene_type.into(),
            character_id: "-".into(),
            text: "t".into(),
            position: "-".into(),
            effect: "-".into(),
            background: "-".into(),
            next_scene: "-".into(),
            choices: Vec::new(),
        }
    }

    #[test]
    fn test_scenario_keys_and_indent() {
        let json = render_scenarios(&[scenario("s1", "line")]).unwrap();
        let expected = r#"[
  {
    "scene_id": "s1",
    "type": "line",
    "character_id": "-",
    "text": "t",
    "position": "-",
    "effect": "-",
    "background": "-",
    "next_scene": "-"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_choices_key_omitted() {
        let json = render_scenarios(&[scenario("s1", "choice")]).unwrap();
        assert!(!json.contains("choices"));
    }

    #[test]
    fn test_non_empty_choices_rendered() {
        let mut s = scenario("s2", "choice");
        s.choices.push(Choice {
            text: "Go".into(),
            next_scene: "s3".into(),
        });
        let parsed: serde_json::Value =
            serde_json::from_str(&render_scenarios(&[s]).unwrap()).unwrap();

        assert_eq!(parsed[0]["choices"][0]["text"], "Go");
        assert_eq!(parsed[0]["choices"][0]["next_scene"], "s3");
    }

    #[test]
    fn test_characters_sorted_by_id() {
        let mut characters = BTreeMap::new();
        for id in ["zed", "amy"] {
            characters.insert(
                id.to_string(),
                Character {
                    id: id.into(),
                    name: id.into(),
                    image_path: format!("{id}.png"),
                    default_position: None,
                },
            );
        }
        let json = render_characters(&characters).unwrap();

        assert!(json.find("\"amy\"").unwrap() < json.find("\"zed\"").unwrap());
        assert!(!json.contains("default_position"));
    }

    #[test]
    fn test_title_rendered() {
        let title = Title {
            title: "My Story".into(),
            background: "bg.png".into(),
        };
        assert_eq!(
            render_title(&title).unwrap(),
            "{\n  \"title\": \"My Story\",\n  \"background\": \"bg.png\"\n}"
        );
    }
}

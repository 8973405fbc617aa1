use std::collections::HashMap;

use crate::models::{Choice, Scenario};

/// Attach choices to every `choice` scene, in place.
///
/// A left outer join on `scene_id`: scenes without matching rows keep an
/// empty list, and scenes of any other type are left untouched even when
/// choice rows exist for their id. Returns the number of scenes that
/// received choices.
pub fn merge_choices(scenarios: &mut [Scenario], choices: &HashMap<String, Vec<Choice>>) -> usize {
    let mut merged = 0;

    for scenario in scenarios.iter_mut().filter(|s| s.is_choice()) {
        if let Some(found) = choices.get(&scenario.scene_id) {
            scenario.choices = found.clone();
            merged += 1;
        }
    }

    merged
}

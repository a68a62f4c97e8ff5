//! Suggested questions shown under the chat.
//!
//! Loaded from `config/suggested-questions.json` (embedded at compile time,
//! validated by `build.rs`).

use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SuggestionEntry {
    label: String,
}

fn load_suggestions() -> Vec<String> {
    let json = include_str!("../../config/suggested-questions.json");
    let entries: Vec<SuggestionEntry> =
        serde_json::from_str(json).expect("suggested-questions.json must be valid");
    entries.into_iter().map(|e| e.label).collect()
}

static SUGGESTIONS: OnceLock<Vec<String>> = OnceLock::new();

/// All suggested questions, in display order.
pub fn suggested_questions() -> &'static [String] {
    SUGGESTIONS.get_or_init(load_suggestions)
}

#[cfg(test)]
mod tests {
    use super::suggested_questions;

    #[test]
    fn suggestions_load_and_are_non_empty() {
        let all = suggested_questions();
        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|s| !s.trim().is_empty()));
        assert!(all[0].contains("overall attendance"));
    }
}

//! Build script: validates suggested-questions.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "suggested-questions.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. suggested-questions.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    struct SuggestionEntry {
        label: String,
    }
    let entries: Vec<SuggestionEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "suggested-questions.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    if entries.iter().any(|e| e.label.trim().is_empty()) {
        panic!("suggested-questions.json contains an empty label");
    }
    if entries.len() > 9 {
        panic!("suggested-questions.json holds more than 9 entries (Alt+1..9 shortcuts)");
    }
}

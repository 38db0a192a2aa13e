// Shared test helpers for colornote.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Per-fixture settings from `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FixtureMeta {
    pub title: Option<String>,
    pub checklist: bool,
    /// The HTML was not produced by `render` (e.g. edited in the app), so
    /// only the strip direction is checked.
    pub strip_only: bool,
}

pub struct Fixture {
    pub text: String,
    pub html: String,
    pub meta: FixtureMeta,
}

/// Load a test fixture's plain text, rendered HTML, and settings.
///
/// Fixture directories contain `index.txt`, `index.html`, and optionally `index.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let text = fs::read_to_string(base.join("index.txt"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.txt", name));
    let html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name));

    let meta = match fs::read_to_string(base.join("index.json")) {
        Ok(json) => serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Bad fixture: {}/index.json: {}", name, e)),
        Err(_) => FixtureMeta::default(),
    };

    Fixture { text, html, meta }
}

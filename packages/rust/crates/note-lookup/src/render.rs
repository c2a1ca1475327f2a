//! Output rendering: JSON for tools, a markdown report for people.

use std::fmt::Write as _;

use crate::filter::keys;
use crate::frontmatter::{FieldValue, NoteMetadata};
use crate::search::NoteMatch;

/// Shown instead of an empty report.
pub const NO_RESULTS_MESSAGE: &str = "No notes found matching criteria.";

const UNTITLED: &str = "Untitled";
const NOT_AVAILABLE: &str = "N/A";

/// Serialize results as a pretty-printed JSON array.
///
/// An empty result set renders as `[]`.
///
/// # Errors
///
/// Returns an error if a metadata value cannot be represented in JSON.
pub fn render_json(results: &[NoteMatch]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Render results as a numbered markdown report.
#[must_use]
pub fn render_report(results: &[NoteMatch]) -> String {
    if results.is_empty() {
        return format!("{NO_RESULTS_MESSAGE}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Found {} note(s):\n", results.len());
    for (index, note) in results.iter().enumerate() {
        write_entry(&mut out, index + 1, note);
    }
    out
}

fn write_entry(out: &mut String, number: usize, note: &NoteMatch) {
    let meta = &note.frontmatter;
    let _ = writeln!(out, "### {number}. {}", text_or(meta, keys::TITLE, UNTITLED));
    let _ = writeln!(out, "**Path**: {}", note.path);
    let _ = writeln!(out, "**ID**: {}", text_or(meta, keys::ID, NOT_AVAILABLE));
    let _ = writeln!(out, "**Type**: {}", text_or(meta, keys::TYPE, NOT_AVAILABLE));
    let _ = writeln!(out, "**Domain**: {}", meta.field(keys::DOMAIN).values().join(", "));

    let tags = meta.field(keys::TAGS);
    if !tags.values().is_empty() {
        let _ = writeln!(out, "**Tags**: {}", tags.values().join(", "));
    }

    let _ = writeln!(
        out,
        "**Stability**: {}",
        text_or(meta, keys::STABILITY, NOT_AVAILABLE)
    );

    if !note.excerpt.is_empty() {
        let _ = writeln!(out, "\n> {}", note.excerpt);
    }
    out.push('\n');
}

fn text_or(meta: &NoteMetadata, key: &str, default: &str) -> String {
    match meta.field(key) {
        FieldValue::Absent => default.to_string(),
        FieldValue::Text(text) => text,
        FieldValue::List(items) => items.join(", "),
    }
}

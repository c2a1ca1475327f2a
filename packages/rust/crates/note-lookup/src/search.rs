//! One query run: load, filter, excerpt.

use serde::Serialize;
use std::path::Path;

use crate::config::SearchConfig;
use crate::error::LookupResult;
use crate::excerpt::extract_excerpt;
use crate::filter::NoteFilter;
use crate::frontmatter::NoteMetadata;
use crate::loader::{LoaderOptions, Note, NoteWalker};

/// A note that passed the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteMatch {
    /// Path as found under the search root.
    pub path: String,
    /// Every frontmatter field, unchanged.
    pub frontmatter: NoteMetadata,
    /// Plain-text preview of the body.
    pub excerpt: String,
}

impl NoteMatch {
    /// Build a result record from a loaded note.
    #[must_use]
    pub fn from_note(note: Note, excerpt_chars: usize) -> Self {
        let excerpt = extract_excerpt(&note.content, excerpt_chars);
        Self {
            path: note.path.to_string_lossy().into_owned(),
            frontmatter: note.metadata,
            excerpt,
        }
    }
}

/// Search `root` for notes matching `filter`, in traversal order.
///
/// # Errors
///
/// Returns [`crate::LookupError::RootNotFound`] when `root` is not a
/// directory and [`crate::LookupError::Read`] when a note cannot be read.
/// Notes with missing or malformed frontmatter are skipped, not reported.
pub fn search_notes(
    root: &Path,
    filter: &NoteFilter,
    config: &SearchConfig,
) -> LookupResult<Vec<NoteMatch>> {
    let options = LoaderOptions {
        follow_links: config.follow_links,
    };
    let mut scanned = 0usize;
    let mut matches = Vec::new();
    for note in NoteWalker::new(root, &options)? {
        let note = note?;
        scanned += 1;
        if filter.matches(&note.metadata) {
            matches.push(NoteMatch::from_note(note, config.excerpt_chars));
        }
    }

    tracing::info!(
        root = %root.display(),
        scanned,
        matched = matches.len(),
        "note search finished"
    );
    Ok(matches)
}

//! Note Loader - Walks a notes directory and yields parsed notes.
//!
//! # Architecture
//!
//! Notes are plain markdown files:
//! - `*.md` files anywhere under the root (extension is case-sensitive)
//! - a YAML frontmatter block at the very start of the file
//!
//! Files without a usable frontmatter block are skipped silently; only I/O
//! failures while reading a note end the walk.
//!
//! # Example
//!
//! ```ignore
//! use note_lookup::loader::{LoaderOptions, NoteWalker};
//!
//! for note in NoteWalker::new("notes".as_ref(), &LoaderOptions::default())? {
//!     let note = note?;
//!     println!("{}", note.path.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{LookupError, LookupResult};
use crate::frontmatter::{NoteMetadata, read_note_metadata};

const NOTE_EXTENSION: &str = "md";

/// One markdown note with parsed frontmatter.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path as found under the walk root.
    pub path: PathBuf,
    /// Parsed frontmatter.
    pub metadata: NoteMetadata,
    /// Full text, line endings normalised to `\n`.
    pub content: String,
}

impl Note {
    /// Parse a note from its text. Returns `None` when the frontmatter is
    /// missing or malformed.
    #[must_use]
    pub fn parse(path: PathBuf, content: &str) -> Option<Self> {
        let content = normalize_newlines(content);
        match read_note_metadata(&content) {
            Ok(metadata) => Some(Self {
                path,
                metadata,
                content,
            }),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping note");
                None
            }
        }
    }
}

/// Walk settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    /// Follow symbolic links.
    pub follow_links: bool,
}

/// Lazy iterator over the notes under a root directory.
///
/// Entries are visited in file-name order within each directory.
pub struct NoteWalker {
    entries: walkdir::IntoIter,
}

impl NoteWalker {
    /// Start walking `root`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::RootNotFound`] if `root` is not an existing
    /// directory.
    pub fn new(root: &Path, options: &LoaderOptions) -> LookupResult<Self> {
        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "notes directory not found");
            return Err(LookupError::RootNotFound(root.to_path_buf()));
        }
        let entries = WalkDir::new(root)
            .follow_links(options.follow_links)
            .sort_by_file_name()
            .into_iter();
        Ok(Self { entries })
    }

    fn load(path: PathBuf) -> LookupResult<Option<Note>> {
        let bytes = std::fs::read(&path).map_err(|source| LookupError::Read {
            path: path.clone(),
            source,
        })?;
        let Ok(content) = String::from_utf8(bytes) else {
            tracing::debug!(path = %path.display(), "skipping note: not valid UTF-8");
            return Ok(None);
        };
        Ok(Note::parse(path, &content))
    }
}

impl Iterator for NoteWalker {
    type Item = LookupResult<Note>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::warn!(%error, "skipping unreadable directory entry");
                    continue;
                }
            };
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file || !is_note_path(entry.path()) {
                continue;
            }
            match Self::load(entry.into_path()) {
                Ok(Some(note)) => return Some(Ok(note)),
                Ok(None) => {}
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Whether `path` has the note extension (`.md`, case-sensitive).
#[must_use]
pub fn is_note_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == NOTE_EXTENSION)
}

fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}

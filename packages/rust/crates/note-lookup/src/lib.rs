//! Note-Lookup - Find markdown notes by their frontmatter metadata.
//!
//! Walks a notes directory, parses the YAML frontmatter of every `*.md`
//! file, and keeps the notes matching a set of filters (type, domain, tags,
//! stability, confidence, scope, intent, id pattern, title keyword).
//!
//! # Architecture
//!
//! ```text
//! note-lookup/src/
//! ├── lib.rs              # Module declarations and exports
//! ├── error.rs            # LookupError, FrontmatterError
//! ├── frontmatter.rs      # `---` block extraction, NoteMetadata, FieldValue
//! ├── loader.rs           # NoteWalker (lazy walkdir traversal)
//! ├── filter.rs           # NoteFilter, NoteFilterBuilder, IdPattern
//! ├── excerpt.rs          # Body preview
//! ├── search.rs           # search_notes, NoteMatch
//! ├── render.rs           # JSON and markdown report output
//! ├── config.rs           # SearchConfig (YAML settings)
//! └── bin/search_notes.rs # `search-notes` CLI
//! ```
//!
//! # Note format
//!
//! ```yaml
//! ---
//! id: auth-oauth2
//! title: Configuring OAuth flows
//! type: procedure
//! domain: [security]
//! tags: [oauth, web]
//! stability: high
//! ---
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod excerpt;
pub mod filter;
pub mod frontmatter;
pub mod loader;
pub mod render;
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SearchConfig;
pub use error::{FrontmatterError, LookupError, LookupResult};
pub use excerpt::{DEFAULT_EXCERPT_CHARS, extract_excerpt};
pub use filter::{IdPattern, NoteFilter, NoteFilterBuilder};
pub use frontmatter::{FieldValue, NoteMetadata, extract_frontmatter, parse_frontmatter};
pub use loader::{LoaderOptions, Note, NoteWalker};
pub use render::{render_json, render_report};
pub use search::{NoteMatch, search_notes};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

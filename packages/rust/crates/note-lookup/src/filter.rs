//! Frontmatter filters.
//!
//! A [`NoteFilter`] is a set of independent criteria. A note passes when it
//! satisfies every supplied criterion; repeatable criteria (`domain`, `tag`)
//! pass when any one of their values is present on the note.
//!
//! ```
//! use note_lookup::{NoteFilter, parse_frontmatter};
//!
//! let meta = parse_frontmatter("id: auth-oauth2\ntype: procedure\ndomain: [security]").unwrap();
//! let filter = NoteFilter::builder()
//!     .note_type("procedure")
//!     .domain("security")
//!     .domain("ml")
//!     .id_pattern("auth-*")
//!     .build()
//!     .unwrap();
//! assert!(filter.matches(&meta));
//! ```

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{LookupError, LookupResult};
use crate::frontmatter::NoteMetadata;

/// Frontmatter keys consulted by the filters and the report.
pub mod keys {
    /// Note identifier.
    pub const ID: &str = "id";
    /// Human title.
    pub const TITLE: &str = "title";
    /// Note type (procedure, reference, ...).
    pub const TYPE: &str = "type";
    /// Domain, a string or a list of strings.
    pub const DOMAIN: &str = "domain";
    /// Tag list.
    pub const TAGS: &str = "tags";
    /// Stability level.
    pub const STABILITY: &str = "stability";
    /// Confidence level.
    pub const CONFIDENCE: &str = "confidence";
    /// Scope.
    pub const SCOPE: &str = "scope";
    /// Intent.
    pub const INTENT: &str = "intent";
}

/// Compiled shell-style pattern for note ids.
///
/// `*` matches any run of characters (including `/`), `?` one character,
/// `[...]` or `[!...]` a class. Everything else is literal: braces, `\`, and
/// a `[` with no closing `]`. Matching is case-sensitive and covers the
/// whole id.
#[derive(Debug, Clone)]
pub struct IdPattern {
    pattern: String,
    matcher: GlobMatcher,
}

impl IdPattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidIdPattern`] if `globset` rejects it.
    pub fn new(pattern: &str) -> LookupResult<Self> {
        let glob = GlobBuilder::new(&shell_glob(pattern))
            .literal_separator(false)
            .case_insensitive(false)
            .backslash_escape(false)
            .build()
            .map_err(|source| LookupError::InvalidIdPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether `id` matches the whole pattern.
    #[must_use]
    pub fn is_match(&self, id: &str) -> bool {
        self.matcher.is_match(id)
    }
}

/// Rewrite a shell pattern into globset syntax: braces become one-character
/// classes and an unterminated `[` becomes `[[]`.
fn shell_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut glob = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '[' => {
                if let Some(end) = class_end(&chars, i) {
                    glob.extend(&chars[i..=end]);
                    i = end + 1;
                    continue;
                }
                glob.push_str("[[]");
            }
            '{' => glob.push_str("[{]"),
            '}' => glob.push_str("[}]"),
            c => glob.push(c),
        }
        i += 1;
    }
    glob
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// `[` or `[!` is a member, not the end.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j..].iter().position(|&c| c == ']').map(|offset| j + offset)
}

/// Active criteria for one search.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    note_type: Option<String>,
    domains: Vec<String>,
    tags: Vec<String>,
    stability: Option<String>,
    confidence: Option<String>,
    scope: Option<String>,
    intent: Option<String>,
    id_pattern: Option<IdPattern>,
    title_keyword: Option<String>,
}

impl NoteFilter {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> NoteFilterBuilder {
        NoteFilterBuilder::default()
    }

    /// A filter with no criteria; it matches every parseable note.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.note_type.is_none()
            && self.domains.is_empty()
            && self.tags.is_empty()
            && self.stability.is_none()
            && self.confidence.is_none()
            && self.scope.is_none()
            && self.intent.is_none()
            && self.id_pattern.is_none()
            && self.title_keyword.is_none()
    }

    /// Check a note's metadata against every criterion, stopping at the
    /// first one that fails.
    #[must_use]
    pub fn matches(&self, meta: &NoteMetadata) -> bool {
        exact(meta, keys::TYPE, self.note_type.as_deref())
            && any_of(meta, keys::DOMAIN, &self.domains)
            && any_of(meta, keys::TAGS, &self.tags)
            && exact(meta, keys::STABILITY, self.stability.as_deref())
            && exact(meta, keys::CONFIDENCE, self.confidence.as_deref())
            && exact(meta, keys::SCOPE, self.scope.as_deref())
            && exact(meta, keys::INTENT, self.intent.as_deref())
            && self.id_matches(meta)
            && self.title_matches(meta)
    }

    fn id_matches(&self, meta: &NoteMetadata) -> bool {
        let Some(pattern) = &self.id_pattern else {
            return true;
        };
        meta.field(keys::ID)
            .as_text()
            .is_some_and(|id| pattern.is_match(id))
    }

    fn title_matches(&self, meta: &NoteMetadata) -> bool {
        let Some(keyword) = &self.title_keyword else {
            return true;
        };
        meta.field(keys::TITLE)
            .as_text()
            .is_some_and(|title| title.to_lowercase().contains(keyword.as_str()))
    }
}

fn exact(meta: &NoteMetadata, key: &str, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    meta.field(key).as_text() == Some(expected)
}

fn any_of(meta: &NoteMetadata, key: &str, accepted: &[String]) -> bool {
    if accepted.is_empty() {
        return true;
    }
    let field = meta.field(key);
    field
        .values()
        .iter()
        .any(|value| accepted.iter().any(|a| a == value))
}

/// Folds command-line style criteria into a [`NoteFilter`].
///
/// Empty values are dropped, so an unset option and an empty one behave the
/// same.
#[derive(Debug, Clone, Default)]
pub struct NoteFilterBuilder {
    note_type: Option<String>,
    domains: Vec<String>,
    tags: Vec<String>,
    stability: Option<String>,
    confidence: Option<String>,
    scope: Option<String>,
    intent: Option<String>,
    id_pattern: Option<String>,
    title_keyword: Option<String>,
}

impl NoteFilterBuilder {
    /// Require `type` to equal `value`.
    #[must_use]
    pub fn note_type(mut self, value: impl Into<String>) -> Self {
        self.note_type = non_empty(value);
        self
    }

    /// Accept notes whose `domain` contains `value`. Repeatable.
    #[must_use]
    pub fn domain(mut self, value: impl Into<String>) -> Self {
        self.domains.extend(non_empty(value));
        self
    }

    /// Accept notes whose `domain` contains any of `values`.
    #[must_use]
    pub fn domains(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        values
            .into_iter()
            .fold(self, |builder, value| builder.domain(value))
    }

    /// Accept notes whose `tags` contain `value`. Repeatable.
    #[must_use]
    pub fn tag(mut self, value: impl Into<String>) -> Self {
        self.tags.extend(non_empty(value));
        self
    }

    /// Accept notes whose `tags` contain any of `values`.
    #[must_use]
    pub fn tags(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        values
            .into_iter()
            .fold(self, |builder, value| builder.tag(value))
    }

    /// Require `stability` to equal `value`.
    #[must_use]
    pub fn stability(mut self, value: impl Into<String>) -> Self {
        self.stability = non_empty(value);
        self
    }

    /// Require `confidence` to equal `value`.
    #[must_use]
    pub fn confidence(mut self, value: impl Into<String>) -> Self {
        self.confidence = non_empty(value);
        self
    }

    /// Require `scope` to equal `value`.
    #[must_use]
    pub fn scope(mut self, value: impl Into<String>) -> Self {
        self.scope = non_empty(value);
        self
    }

    /// Require `intent` to equal `value`.
    #[must_use]
    pub fn intent(mut self, value: impl Into<String>) -> Self {
        self.intent = non_empty(value);
        self
    }

    /// Require `id` to match a shell-style pattern.
    #[must_use]
    pub fn id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_pattern = non_empty(pattern);
        self
    }

    /// Require `title` to contain `keyword`, ignoring case.
    #[must_use]
    pub fn title_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.title_keyword = non_empty(keyword);
        self
    }

    /// Finish the filter.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidIdPattern`] if the id pattern does not
    /// compile.
    pub fn build(self) -> LookupResult<NoteFilter> {
        let id_pattern = self.id_pattern.as_deref().map(IdPattern::new).transpose()?;
        Ok(NoteFilter {
            note_type: self.note_type,
            domains: self.domains,
            tags: self.tags,
            stability: self.stability,
            confidence: self.confidence,
            scope: self.scope,
            intent: self.intent,
            id_pattern,
            title_keyword: self.title_keyword.map(|k| k.to_lowercase()),
        })
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.is_empty())
}

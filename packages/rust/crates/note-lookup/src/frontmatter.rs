//! YAML Frontmatter Parsing
//!
//! Extracts the leading `---` block from a note and exposes its fields
//! through a variant-typed view, since notes are not schema-validated.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::FrontmatterError;

const OPENING_MARKER: &str = "---\n";
const CLOSING_MARKER: &str = "\n---";

/// Extract the raw YAML block from markdown content.
///
/// The content must begin with a `---` line. The block ends at the first
/// following line that starts with `---`. Returns `None` when either
/// delimiter is missing.
///
/// # Examples
///
/// ```
/// use note_lookup::extract_frontmatter;
///
/// let content = "---\ntitle: OAuth\n---\n# Body\n";
/// assert_eq!(extract_frontmatter(content), Some("title: OAuth"));
/// assert_eq!(extract_frontmatter("# No header\n"), None);
/// ```
#[must_use]
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(OPENING_MARKER)?;
    let end = rest.find(CLOSING_MARKER)?;
    Some(&rest[..end])
}

/// Parse a YAML block into note metadata.
///
/// Scalar top-level keys (`2024:`, `true:`, `~:`) are kept under their plain
/// string form so every field stays addressable by name.
///
/// # Errors
///
/// Returns an error if the YAML is invalid, is not a mapping, is empty, or
/// has a sequence or mapping as a top-level key.
pub fn parse_frontmatter(yaml_content: &str) -> Result<NoteMetadata, FrontmatterError> {
    match serde_yaml::from_str::<Value>(yaml_content)? {
        Value::Null => Err(FrontmatterError::Empty),
        Value::Mapping(mapping) if mapping.is_empty() => Err(FrontmatterError::Empty),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| Ok((Value::String(key_text(&key)?), value)))
            .collect::<Result<Mapping, FrontmatterError>>()
            .map(NoteMetadata),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

fn key_text(key: &Value) -> Result<String, FrontmatterError> {
    match key {
        Value::Null => Ok("null".to_string()),
        other => scalar_text(other).ok_or(FrontmatterError::NonScalarKey),
    }
}

/// Extract and parse the frontmatter of a note in one step.
///
/// # Errors
///
/// Returns [`FrontmatterError::MissingDelimiter`] when the note has no
/// delimited block, otherwise the errors of [`parse_frontmatter`].
pub fn read_note_metadata(content: &str) -> Result<NoteMetadata, FrontmatterError> {
    let block = extract_frontmatter(content).ok_or(FrontmatterError::MissingDelimiter)?;
    parse_frontmatter(block)
}

/// Parsed frontmatter of one note.
///
/// Keeps the whole mapping in source order so serialized output carries
/// every field, including ones the filters ignore.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoteMetadata(Mapping);

impl NoteMetadata {
    /// Raw YAML value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Variant-typed view of `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> FieldValue {
        self.get(key).map_or(FieldValue::Absent, FieldValue::from_yaml)
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no fields. Parsed metadata is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying YAML mapping.
    #[must_use]
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }
}

/// A metadata value as seen by filters and the report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Missing key, null, or a nested mapping.
    #[default]
    Absent,
    /// A scalar. Numbers and booleans use their plain string form.
    Text(String),
    /// A sequence of scalars. Non-scalar items are dropped.
    List(Vec<String>),
}

impl FieldValue {
    /// Build the view of a YAML value.
    #[must_use]
    pub fn from_yaml(value: &Value) -> Self {
        match value {
            Value::Sequence(items) => Self::List(items.iter().filter_map(scalar_text).collect()),
            Value::Tagged(tagged) => Self::from_yaml(&tagged.value),
            other => scalar_text(other).map_or(Self::Absent, Self::Text),
        }
    }

    /// The value when it is a single scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Normalise to a list: a scalar becomes a singleton, absent becomes empty.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Text(text) => vec![text.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Whether the field is missing.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

//! Plain-text excerpts for the report.
//!
//! Display only; filters never look at the excerpt.

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Appended when an excerpt is cut.
pub const ELLIPSIS: &str = "...";

const DELIMITER: &str = "---";

/// Build a short preview of a note body.
///
/// The frontmatter is dropped by splitting on the first two `---`
/// occurrences anywhere in the text, not on whole lines, so a frontmatter
/// value containing `---` moves the split point. Heading lines are skipped
/// and the remaining non-blank lines are joined with single spaces until the
/// text passes `max_chars`.
/// A cut excerpt is at most `max_chars` characters plus [`ELLIPSIS`].
#[must_use]
pub fn extract_excerpt(content: &str, max_chars: usize) -> String {
    let body = content
        .splitn(3, DELIMITER)
        .nth(2)
        .map_or(content, str::trim);

    let mut lines: Vec<&str> = Vec::new();
    let mut joined_len = 0usize;
    for line in body.split('\n') {
        if line.starts_with('#') {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            joined_len += 1;
        }
        joined_len += trimmed.chars().count();
        lines.push(trimmed);
        if joined_len > max_chars {
            break;
        }
    }

    let excerpt = lines.join(" ");
    if joined_len > max_chars {
        let mut cut: String = excerpt.chars().take(max_chars).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        excerpt
    }
}

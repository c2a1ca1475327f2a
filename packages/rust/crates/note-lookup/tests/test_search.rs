//! Tests for `search_notes` over temporary note directories.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use note_lookup::{LookupError, NoteFilter, NoteMatch, SearchConfig, search_notes};

fn write_file(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// `a.md` (procedure, security, oauth/web), `b.md` (reference, ml), `c.md`
/// (no frontmatter).
fn scenario() -> Result<TempDir, Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    write_file(
        &tmp.path().join("a.md"),
        "---\nid: auth-oauth2\ntitle: Configuring oauth flows\ntype: procedure\ndomain: [security]\ntags: [oauth, web]\nstability: high\n---\n\n# OAuth\n\nRegister the client first.\n",
    )?;
    write_file(
        &tmp.path().join("b.md"),
        "---\nid: ml-basics\ntitle: Gradient notes\ntype: reference\ndomain: [ml]\n---\nSome ML notes.\n",
    )?;
    write_file(&tmp.path().join("c.md"), "# No frontmatter\n\nJust text.\n")?;
    Ok(tmp)
}

fn file_names(results: &[NoteMatch]) -> Vec<String> {
    results
        .iter()
        .filter_map(|m| {
            Path::new(&m.path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .collect()
}

fn run(root: &Path, filter: &NoteFilter) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let results = search_notes(root, filter, &SearchConfig::default())?;
    Ok(file_names(&results))
}

#[test]
fn test_type_filter() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filter = NoteFilter::builder().note_type("procedure").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["a.md"]);
    Ok(())
}

#[test]
fn test_repeated_domain_is_or() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filter = NoteFilter::builder()
        .domain("security")
        .domain("ml")
        .build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["a.md", "b.md"]);
    Ok(())
}

#[test]
fn test_domain_and_type_are_and() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filter = NoteFilter::builder()
        .domain("security")
        .domain("ml")
        .note_type("reference")
        .build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["b.md"]);
    Ok(())
}

#[test]
fn test_no_filters_returns_every_parseable_note() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    assert_eq!(run(tmp.path(), &NoteFilter::all())?, vec!["a.md", "b.md"]);
    Ok(())
}

#[test]
fn test_note_without_frontmatter_never_matches() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filters = [
        NoteFilter::all(),
        NoteFilter::builder().title_keyword("frontmatter").build()?,
        NoteFilter::builder().id_pattern("*").build()?,
    ];
    for filter in &filters {
        assert!(!run(tmp.path(), filter)?.contains(&"c.md".to_string()));
    }
    Ok(())
}

#[test]
fn test_id_pattern_and_title_keyword() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let by_id = NoteFilter::builder().id_pattern("auth-*").build()?;
    assert_eq!(run(tmp.path(), &by_id)?, vec!["a.md"]);

    let by_title = NoteFilter::builder().title_keyword("OAuth").build()?;
    assert_eq!(run(tmp.path(), &by_title)?, vec!["a.md"]);
    Ok(())
}

#[test]
fn test_tag_filter_excludes_untagged_notes() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filter = NoteFilter::builder().tag("web").tag("ml").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["a.md"]);
    Ok(())
}

#[test]
fn test_nested_directories_are_searched() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    write_file(
        &tmp.path().join("deep/er/d.md"),
        "---\ntype: procedure\n---\nNested.\n",
    )?;
    let filter = NoteFilter::builder().note_type("procedure").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["a.md", "d.md"]);
    Ok(())
}

#[test]
fn test_result_record_contents() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let filter = NoteFilter::builder().note_type("procedure").build()?;
    let results = search_notes(tmp.path(), &filter, &SearchConfig::default())?;
    let record = results.first().ok_or("missing result")?;

    assert!(record.path.ends_with("a.md"));
    assert_eq!(record.excerpt, "Register the client first.");
    assert_eq!(
        record.frontmatter.field("stability").as_text(),
        Some("high")
    );
    Ok(())
}

#[test]
fn test_excerpt_cap_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = scenario()?;
    let config = SearchConfig::default().with_excerpt_chars(Some(8));
    let filter = NoteFilter::builder().note_type("procedure").build()?;
    let results = search_notes(tmp.path(), &filter, &config)?;
    assert_eq!(results[0].excerpt, "Register...");
    Ok(())
}

#[test]
fn test_missing_root_is_reported() {
    let tmp = TempDir::new().expect("tempdir");
    let err = search_notes(
        &tmp.path().join("missing"),
        &NoteFilter::all(),
        &SearchConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LookupError::RootNotFound(_)));
}

#[test]
fn test_empty_directory_yields_no_results() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    assert!(run(tmp.path(), &NoteFilter::all())?.is_empty());
    Ok(())
}

#[test]
fn test_numeric_keys_keep_the_note() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    write_file(
        &tmp.path().join("review.md"),
        "---\ntype: procedure\n2024: reviewed\n---\nChecked last year.\n",
    )?;

    let results = search_notes(tmp.path(), &NoteFilter::all(), &SearchConfig::default())?;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].frontmatter.field("2024").as_text(),
        Some("reviewed")
    );

    let filter = NoteFilter::builder().note_type("procedure").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["review.md"]);

    let json = serde_json::to_value(&results)?;
    assert_eq!(json[0]["frontmatter"]["2024"], "reviewed");
    Ok(())
}

#[test]
fn test_id_pattern_treats_braces_and_open_bracket_literally()
-> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    write_file(&tmp.path().join("brace.md"), "---\nid: note{1}\n---\n")?;
    write_file(&tmp.path().join("bracket.md"), "---\nid: auth-[\n---\n")?;
    write_file(&tmp.path().join("plain.md"), "---\nid: note1\n---\n")?;

    let filter = NoteFilter::builder().id_pattern("note{1}").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["brace.md"]);

    let filter = NoteFilter::builder().id_pattern("auth-[").build()?;
    assert_eq!(run(tmp.path(), &filter)?, vec!["bracket.md"]);
    Ok(())
}

//! Changelog editing.
//!
//! New release sections are inserted immediately after the `# Changelog`
//! header block; the rest of the file is never parsed or rewritten. A file
//! without the recognized header is left byte-identical and reported.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use regex::Regex;
use semver::Version;

use crate::error::Result;

/// Header written when the changelog file does not exist yet.
pub const DEFAULT_HEADER: &str =
    "# Changelog\n\nAll notable changes to this project will be documented in this file.\n\n";

/// Renders the templated section for a new release.
///
/// The section carries empty Added/Changed/Fixed lists for the operator to
/// fill in during the manual-edit pause.
pub fn render_section(version: &Version, date: NaiveDate) -> String {
    format!(
        "## [{}] - {}\n\n### Added\n- \n\n### Changed\n- \n\n### Fixed\n- \n\n",
        version,
        date.format("%Y-%m-%d")
    )
}

/// Inserts a release section directly after the changelog header anchor.
///
/// The anchor is the first match of `# Changelog ... \n\n` (dot matches
/// newline, non-greedy), i.e. the header block up to and including its
/// trailing blank line.
///
/// # Returns
/// * `Some(String)` - Content with the section inserted
/// * `None` - If no header anchor was found (content must not be rewritten)
pub fn insert_section(content: &str, section: &str) -> Option<String> {
    let anchor = Regex::new(r"(?s)# Changelog.*?\n\n").ok()?;
    let header = anchor.find(content)?;

    let mut updated = String::with_capacity(content.len() + section.len());
    updated.push_str(&content[..header.end()]);
    updated.push_str(section);
    updated.push_str(&content[header.end()..]);
    Some(updated)
}

/// Updates the changelog file with a section for `version`, dated today.
///
/// Creates the file with [DEFAULT_HEADER] if it does not exist.
///
/// # Returns
/// * `Ok(true)` - Section inserted
/// * `Ok(false)` - Header anchor not found; file left unmodified
/// * `Err` - On I/O failure
pub fn update(path: &Path, version: &Version) -> Result<bool> {
    if !path.exists() {
        fs::write(path, DEFAULT_HEADER)?;
    }

    let content = fs::read_to_string(path)?;
    let section = render_section(version, Local::now().date_naive());

    match insert_section(&content, &section) {
        Some(updated) => {
            fs::write(path, updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_section_contains_version_and_date() {
        let section = render_section(&Version::new(1, 4, 0), date(2026, 8, 30));
        assert!(section.starts_with("## [1.4.0] - 2026-08-30\n"));
        assert!(section.contains("### Added"));
        assert!(section.contains("### Changed"));
        assert!(section.contains("### Fixed"));
    }

    #[test]
    fn test_insert_after_header() {
        let content = format!("{}## [1.0.0] - 2026-01-01\n\n### Fixed\n- a bug\n", DEFAULT_HEADER);
        let section = render_section(&Version::new(1, 0, 1), date(2026, 8, 30));

        let updated = insert_section(&content, &section).expect("header should match");
        let new_pos = updated.find("## [1.0.1]").unwrap();
        let old_pos = updated.find("## [1.0.0]").unwrap();
        assert!(new_pos < old_pos, "new section must come before older sections");
        assert!(updated.ends_with("### Fixed\n- a bug\n"));
    }

    #[test]
    fn test_insert_into_fresh_header() {
        let section = render_section(&Version::new(0, 1, 0), date(2026, 8, 30));
        let updated = insert_section(DEFAULT_HEADER, &section).expect("header should match");
        // The anchor is non-greedy: it ends at the first blank line after
        // "# Changelog", so the section lands directly after it.
        assert!(updated.starts_with("# Changelog\n\n## [0.1.0] - 2026-08-30"));
        assert!(updated.contains("All notable changes"));
    }

    #[test]
    fn test_missing_header_leaves_content_alone() {
        let content = "Release notes\n\n1.0.0: initial release\n";
        let section = render_section(&Version::new(1, 0, 1), date(2026, 8, 30));
        assert_eq!(insert_section(content, &section), None);
    }
}

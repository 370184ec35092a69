//! Package manifest access.
//!
//! The version lives in `Cargo.toml` and is edited losslessly with
//! `toml_edit`, so comments and formatting elsewhere in the manifest survive
//! a release untouched.

use std::fs;
use std::path::Path;

use semver::Version;
use toml_edit::DocumentMut;

use crate::error::{Result, ShipitError};

/// Verifies that `dir` looks like the root of the project being released.
///
/// Requires both a `Cargo.toml` and a `src/` directory. Run-from-anywhere is
/// deliberately not supported: the changelog and manifest paths are resolved
/// relative to the working directory.
pub fn check_project_root(dir: &Path) -> Result<()> {
    if !dir.join("Cargo.toml").exists() || !dir.join("src").is_dir() {
        return Err(ShipitError::manifest(
            "not a project root (expected Cargo.toml and src/); \
             run shipit from the project root directory",
        ));
    }
    Ok(())
}

fn parse_document(path: &Path) -> Result<DocumentMut> {
    let text = fs::read_to_string(path)?;
    text.parse::<DocumentMut>()
        .map_err(|e| ShipitError::manifest(format!("cannot parse {}: {}", path.display(), e)))
}

/// Reads the package name from the manifest.
pub fn package_name(path: &Path) -> Result<String> {
    let doc = parse_document(path)?;
    doc.get("package")
        .and_then(|pkg| pkg.get("name"))
        .and_then(|name| name.as_str())
        .map(|name| name.to_string())
        .ok_or_else(|| {
            ShipitError::manifest(format!("no [package] name in {}", path.display()))
        })
}

/// Reads the current package version from the manifest.
///
/// # Returns
/// * `Ok(Version)` - Parsed semantic version
/// * `Err` - If the manifest is unreadable, has no `[package] version`
///   string, or the version is not valid semver
pub fn read_version(path: &Path) -> Result<Version> {
    let doc = parse_document(path)?;
    let raw = doc
        .get("package")
        .and_then(|pkg| pkg.get("version"))
        .and_then(|version| version.as_str())
        .ok_or_else(|| {
            ShipitError::manifest(format!("no [package] version in {}", path.display()))
        })?;

    Version::parse(raw).map_err(|e| {
        ShipitError::manifest(format!("invalid version '{}' in {}: {}", raw, path.display(), e))
    })
}

/// Writes a new package version to the manifest, preserving formatting.
pub fn write_version(path: &Path, version: &Version) -> Result<()> {
    let mut doc = parse_document(path)?;

    let package = doc
        .get_mut("package")
        .and_then(|pkg| pkg.as_table_like_mut())
        .ok_or_else(|| {
            ShipitError::manifest(format!("no [package] table in {}", path.display()))
        })?;

    if package.get("version").and_then(|v| v.as_str()).is_none() {
        return Err(ShipitError::manifest(format!(
            "no [package] version in {}",
            path.display()
        )));
    }

    package.insert("version", toml_edit::value(version.to_string()));
    fs::write(path, doc.to_string())?;
    Ok(())
}

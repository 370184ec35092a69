use std::fmt;

/// Warnings for boundary conditions in the release workflow.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Changelog file has no recognized `# Changelog` header; left unmodified
    ChangelogAnchorMissing { path: String },
    /// The `gh` CLI is not installed or not on PATH
    GhCliUnavailable,
    /// The user declined pushing the tag and commit
    PushSkipped { tag: String, remote: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ChangelogAnchorMissing { path } => {
                write!(
                    f,
                    "Could not find the '# Changelog' header in {}; file left unmodified",
                    path
                )
            }
            ReleaseWarning::GhCliUnavailable => {
                write!(f, "GitHub CLI (gh) not found, skipping release creation")
            }
            ReleaseWarning::PushSkipped { tag, remote } => {
                write!(f, "Tag '{}' was not pushed to remote '{}'", tag, remote)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let warning = ReleaseWarning::ChangelogAnchorMissing {
            path: "CHANGELOG.md".to_string(),
        };
        assert!(warning.to_string().contains("CHANGELOG.md"));
        assert!(warning.to_string().contains("left unmodified"));

        let warning = ReleaseWarning::PushSkipped {
            tag: "v1.2.3".to_string(),
            remote: "origin".to_string(),
        };
        assert!(warning.to_string().contains("v1.2.3"));
        assert!(warning.to_string().contains("origin"));
    }
}

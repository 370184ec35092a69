use std::path::Path;

use git2::Repository;

use crate::error::{Result, ShipitError};

/// Wrapper around git2 Repository for the release workflow.
///
/// Provides the handful of operations shipit needs: clean-tree checking,
/// staging and committing the release files, annotated tagging, and pushing
/// the branch and tag to a remote.
pub struct GitRepo {
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        Self::open(Path::new("."))
    }

    /// Creates a GitRepo by discovering a repository from `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| ShipitError::config(format!("not in a git repository: {}", e)))?;
        Ok(GitRepo { repo })
    }

    /// Checks whether the working tree is clean.
    ///
    /// Any status entry counts as dirty, including untracked files, matching
    /// `git status --porcelain` producing output.
    ///
    /// # Returns
    /// * `Ok(true)` - No pending changes
    /// * `Ok(false)` - Modified, staged, or untracked files present
    /// * `Err` - If the status scan fails
    pub fn is_worktree_clean(&self) -> Result<bool> {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        Ok(statuses.is_empty())
    }

    /// Stages the given paths and creates a commit on HEAD.
    ///
    /// Paths must be relative to the repository work tree. Only the listed
    /// paths are staged; nothing else in the index is touched.
    ///
    /// # Arguments
    /// * `paths` - Files to stage (e.g., the manifest and the changelog)
    /// * `message` - Commit message
    ///
    /// # Returns
    /// * `Ok(Oid)` - The new commit's object ID
    /// * `Err` - If staging or committing fails
    pub fn commit_paths(&self, paths: &[&Path], message: &str) -> Result<git2::Oid> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(path)?;
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None, // unborn branch
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        Ok(oid)
    }

    /// Creates an annotated tag on the current HEAD commit.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag to create (e.g., "v1.2.3")
    /// * `message` - Tag annotation message
    ///
    /// # Returns
    /// * `Ok(())` - Tag created successfully
    /// * `Err` - If the tag already exists or creation fails
    pub fn create_tag(&self, tag_name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;
        self.repo
            .tag(tag_name, head.as_object(), &signature, message, false)?;
        Ok(())
    }

    /// Gets the short name of the branch HEAD points to.
    pub fn head_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| ShipitError::config("HEAD is detached or invalid".to_string()))
    }

    /// Gets the configured URL of a remote, if any.
    pub fn remote_url(&self, remote_name: &str) -> Option<String> {
        self.repo
            .find_remote(remote_name)
            .ok()
            .and_then(|remote| remote.url().map(|url| url.to_string()))
    }

    /// Pushes the current branch to a remote.
    ///
    /// # Arguments
    /// * `remote_name` - Name of the remote to push to (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(())` - Branch pushed successfully
    /// * `Err` - If push fails (network, auth, or reference error)
    pub fn push_branch(&self, remote_name: &str) -> Result<()> {
        let branch = self.head_branch()?;
        let refspec = format!("refs/heads/{}", branch);
        self.push_refspec(remote_name, &refspec)
    }

    /// Pushes a tag to a remote.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag to push
    /// * `remote_name` - Name of the remote to push to (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(())` - Tag pushed successfully
    /// * `Err` - If push fails (network, auth, or reference error)
    pub fn push_tag(&self, tag_name: &str, remote_name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}", tag_name);
        self.push_refspec(remote_name, &refspec)
    }

    fn push_refspec(&self, remote_name: &str, refspec: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| ShipitError::config(format!("no remote named '{}' found", remote_name)))?;

        let mut push_options = git2::PushOptions::new();
        let mut callbacks = Self::credential_callbacks();

        // Surface per-reference rejections as push failures
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!("Warning: Could not update reference {}: {}", refname, status);
                Err(git2::Error::from_str(&format!("Push failed for {}", refname)))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        match remote.push(&[refspec], Some(&mut push_options)) {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.class() == git2::ErrorClass::Net {
                    Err(ShipitError::command(format!("network error during push: {}", e)))
                } else if e.class() == git2::ErrorClass::Reference {
                    Err(ShipitError::command(format!("reference error during push: {}", e)))
                } else {
                    Err(ShipitError::command(format!(
                        "failed to push '{}': {}",
                        refspec, e
                    )))
                }
            }
        }
    }

    /// Credential callbacks trying SSH keys from ~/.ssh/, then the SSH agent,
    /// then default credentials.
    fn credential_callbacks() -> git2::RemoteCallbacks<'static> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });
        callbacks
    }
}

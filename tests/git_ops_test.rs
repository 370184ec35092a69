// tests/git_ops_test.rs
use git2::Repository;
use shipit::git_ops::GitRepo;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper to initialize a temporary git repo with a configured user
fn init_test_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

#[test]
fn test_open_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    // discover() walks parent directories, so use a path that cannot resolve
    let result = GitRepo::open(&temp_dir.path().join("missing"));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("not in a git repository"));
}

#[test]
fn test_worktree_clean_detection() {
    let (temp_dir, _repo) = init_test_repo();
    let git_repo = GitRepo::open(temp_dir.path()).unwrap();

    // Fresh repo with no files is clean
    assert!(git_repo.is_worktree_clean().unwrap());

    // An untracked file makes it dirty
    fs::write(temp_dir.path().join("notes.txt"), "scratch\n").unwrap();
    assert!(!git_repo.is_worktree_clean().unwrap());

    // Committing it makes the tree clean again
    git_repo
        .commit_paths(&[Path::new("notes.txt")], "add notes")
        .unwrap();
    assert!(git_repo.is_worktree_clean().unwrap());

    // Modifying a tracked file makes it dirty
    fs::write(temp_dir.path().join("notes.txt"), "changed\n").unwrap();
    assert!(!git_repo.is_worktree_clean().unwrap());
}

#[test]
fn test_commit_paths_creates_commit() {
    let (temp_dir, repo) = init_test_repo();
    let git_repo = GitRepo::open(temp_dir.path()).unwrap();

    fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n").unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), "# Changelog\n\n").unwrap();

    // First commit on an unborn branch
    let oid = git_repo
        .commit_paths(
            &[Path::new("Cargo.toml"), Path::new("CHANGELOG.md")],
            "Release version 0.2.0",
        )
        .unwrap();

    let commit = repo.find_commit(oid).unwrap();
    assert_eq!(commit.message(), Some("Release version 0.2.0"));
    assert_eq!(commit.parent_count(), 0);
    assert_eq!(repo.head().unwrap().peel_to_commit().unwrap().id(), oid);

    // Second commit gets the first as parent
    fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n# bumped\n").unwrap();
    let second = git_repo
        .commit_paths(&[Path::new("Cargo.toml")], "Release version 0.2.1")
        .unwrap();
    let commit = repo.find_commit(second).unwrap();
    assert_eq!(commit.parent_count(), 1);
    assert_eq!(commit.parent(0).unwrap().id(), oid);
}

#[test]
fn test_create_annotated_tag() {
    let (temp_dir, repo) = init_test_repo();
    let git_repo = GitRepo::open(temp_dir.path()).unwrap();

    fs::write(temp_dir.path().join("a.txt"), "a\n").unwrap();
    let oid = git_repo
        .commit_paths(&[Path::new("a.txt")], "initial commit")
        .unwrap();

    git_repo.create_tag("v0.2.0", "Version 0.2.0").unwrap();

    let tag_names = repo.tag_names(None).unwrap();
    let names: Vec<&str> = tag_names.iter().flatten().collect();
    assert_eq!(names, vec!["v0.2.0"]);

    // Annotated: the tag object carries the message and points at HEAD
    let tag_ref = repo.find_reference("refs/tags/v0.2.0").unwrap();
    let tag = tag_ref.peel_to_tag().expect("tag should be annotated");
    assert_eq!(tag.message(), Some("Version 0.2.0"));
    assert_eq!(tag.target_id(), oid);

    // Creating the same tag again is an error
    assert!(git_repo.create_tag("v0.2.0", "Version 0.2.0").is_err());
}

#[test]
fn test_remote_url_lookup() {
    let (temp_dir, repo) = init_test_repo();
    let git_repo = GitRepo::open(temp_dir.path()).unwrap();

    assert_eq!(git_repo.remote_url("origin"), None);

    repo.remote("origin", "git@github.com:owner/repo.git").unwrap();
    assert_eq!(
        git_repo.remote_url("origin").as_deref(),
        Some("git@github.com:owner/repo.git")
    );
}

#[test]
fn test_head_branch_after_commit() {
    let (temp_dir, _repo) = init_test_repo();
    let git_repo = GitRepo::open(temp_dir.path()).unwrap();

    fs::write(temp_dir.path().join("a.txt"), "a\n").unwrap();
    git_repo
        .commit_paths(&[Path::new("a.txt")], "initial commit")
        .unwrap();

    let branch = git_repo.head_branch().unwrap();
    assert!(!branch.is_empty());
}

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use shipit::warnings::ReleaseWarning;
use shipit::{changelog, config, git_ops, github, manifest, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "shipit",
    about = "Bump the version, update the changelog, and publish a tagged release"
)]
struct Args {
    #[arg(value_enum, help = "Version component to bump")]
    level: Option<version::BumpLevel>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Skip the clean working tree check")]
    skip_checks: bool,

    #[arg(short = 'y', long, help = "Skip confirmation prompts and push automatically")]
    yes: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("shipit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let level = match args.level {
        Some(level) => level,
        None => {
            ui::display_error("Missing bump level: expected one of 'patch', 'minor', 'major'");
            std::process::exit(2);
        }
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Verify we are at the project root before touching anything
    if let Err(e) = manifest::check_project_root(Path::new(".")) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    // Initialize git operations
    let git_repo = match git_ops::GitRepo::new() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Precondition: clean working tree (unless explicitly skipped)
    if args.skip_checks {
        ui::display_status("Skipping working tree check");
    } else {
        match git_repo.is_worktree_clean() {
            Ok(true) => ui::display_success("Git working tree is clean"),
            Ok(false) => {
                ui::display_error(
                    "Git working tree is not clean. Please commit or stash changes first.",
                );
                std::process::exit(1);
            }
            Err(e) => {
                ui::display_error(&format!("Failed to check working tree: {}", e));
                std::process::exit(1);
            }
        }
    }

    let manifest_path = Path::new("Cargo.toml");
    let package = match manifest::package_name(manifest_path) {
        Ok(name) => name,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let current_version = match manifest::read_version(manifest_path) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let new_version = version::bump(&current_version, level);
    let tag = config
        .release
        .tag_pattern
        .replace("{version}", &new_version.to_string());

    ui::display_version_change(
        &current_version.to_string(),
        &new_version.to_string(),
        &level.to_string(),
    );

    if args.dry_run {
        ui::display_dry_run_plan(&new_version.to_string(), &tag, &config.release.remote);
        return Ok(());
    }

    // Bump the manifest version
    if let Err(e) = manifest::write_version(manifest_path, &new_version) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Bumped version from {} to {} ({})",
        current_version, new_version, level
    ));

    // Insert the changelog section
    let changelog_path = Path::new(&config.changelog.path);
    match changelog::update(changelog_path, &new_version) {
        Ok(true) => {
            ui::display_success(&format!(
                "Updated {} with version {}",
                config.changelog.path, new_version
            ));
            ui::display_status("Please edit the changelog to add release notes");
        }
        Ok(false) => {
            let warning = ReleaseWarning::ChangelogAnchorMissing {
                path: config.changelog.path.clone(),
            };
            ui::display_release_warning(&warning);
        }
        Err(e) => {
            ui::display_error(&format!("Failed to update changelog: {}", e));
            std::process::exit(1);
        }
    }

    // Pause for the manual changelog edit
    if !args.yes {
        ui::pause(&format!(
            "Press Enter after updating {}...",
            config.changelog.path
        ))?;
    }

    // Create the release commit and annotated tag
    let commit_message = config
        .release
        .commit_message
        .replace("{version}", &new_version.to_string())
        .replace("{package}", &package);
    if let Err(e) = git_repo.commit_paths(&[manifest_path, changelog_path], &commit_message) {
        ui::display_error(&format!("Failed to create release commit: {}", e));
        std::process::exit(1);
    }

    let tag_message = config
        .release
        .tag_message
        .replace("{version}", &new_version.to_string())
        .replace("{package}", &package);
    if let Err(e) = git_repo.create_tag(&tag, &tag_message) {
        ui::display_error(&format!("Failed to create tag '{}': {}", tag, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Created git commit and tag {}", tag));

    // Push the commit and tag, gated on confirmation
    let remote = &config.release.remote;
    let should_push = if args.yes {
        true
    } else {
        ui::confirm_action(&format!("Do you want to push changes to '{}'?", remote))?
    };

    if should_push {
        ui::display_status(&format!("Pushing commit and tag {} to '{}'", tag, remote));
        if let Err(e) = git_repo.push_branch(remote) {
            ui::display_error(&format!("Failed to push branch: {}", e));
            std::process::exit(1);
        }
        if let Err(e) = git_repo.push_tag(&tag, remote) {
            ui::display_error(&format!("Failed to push tag '{}': {}", tag, e));
            std::process::exit(1);
        }
        ui::display_success(&format!("Pushed changes and tag {} to '{}'", tag, remote));
    } else {
        let warning = ReleaseWarning::PushSkipped {
            tag: tag.clone(),
            remote: remote.clone(),
        };
        ui::display_release_warning(&warning);
        ui::display_manual_push_instruction(&tag, remote);
    }

    // Create the GitHub release via the gh CLI, if available and confirmed
    let manual_url = git_repo
        .remote_url(remote)
        .and_then(|url| github::releases_url(&url, &tag));

    if !github::gh_available() {
        ui::display_release_warning(&ReleaseWarning::GhCliUnavailable);
        if let Some(url) = &manual_url {
            ui::display_manual_release_instruction(url);
        }
    } else {
        let should_release = if args.yes {
            true
        } else {
            ui::confirm_action("Do you want to create a GitHub release?")?
        };

        if should_release {
            let title = config
                .release
                .title
                .replace("{package}", &package)
                .replace("{version}", &new_version.to_string());

            ui::display_status("Creating GitHub release...");
            if let Err(e) = github::create_release(&tag, &title) {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
            ui::display_success(&format!("Created GitHub release '{}'", title));
        } else {
            println!("Skipping GitHub release creation");
            if let Some(url) = &manual_url {
                ui::display_manual_release_instruction(url);
            }
        }
    }

    println!(
        "\n{} Release {} completed!\n",
        console::style("✓").green(),
        new_version
    );

    Ok(())
}

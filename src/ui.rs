//! Console output and interactive prompts.
//!
//! Display helpers print styled one-liners; prompt helpers block on stdin.
//! Confirmation prompts default to "no" so an accidental Enter never pushes
//! anything.

use std::io::{self, Write};

use anyhow::Result;
use console::style;

use crate::warnings::ReleaseWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_release_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change a bump will produce.
pub fn display_version_change(current: &str, next: &str, level: &str) {
    println!("\n{}", style("Proposed version change:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {} ({})", style(next).green(), level);
}

/// Display the steps a dry run would perform, without performing them.
pub fn display_dry_run_plan(version: &str, tag: &str, remote: &str) {
    display_status("Dry run, no changes will be made:");
    display_success(&format!("  Step 1: would bump manifest version to {}", version));
    display_success("  Step 2: would insert a changelog section and pause for editing");
    display_success(&format!("  Step 3: would commit and create tag {}", tag));
    display_success(&format!(
        "  Step 4: would ask to push {} to '{}' and to create a GitHub release",
        tag, remote
    ));
}

/// Display the git command needed to push the release manually.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To push this release later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {0} HEAD && git push {0} {1}", remote, tag)).cyan()
    );
}

/// Display the URL for creating the release by hand in a browser.
pub fn display_manual_release_instruction(url: &str) {
    println!("  To create the release manually, go to:\n  {}", style(url).cyan());
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation. Default is "no"
/// if user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Blocks until the user presses Enter.
///
/// Used for the manual changelog edit between inserting the templated
/// section and committing it.
pub fn pause(prompt: &str) -> Result<()> {
    print!("\n{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}

//! The resequence command: plan or renumber a single directory.

use anyhow::{Context, Result};
use colored::Colorize;
use resequence_core::{NamePattern, RenamePass, Resequencer};
use std::path::PathBuf;

pub fn execute(directory: Option<PathBuf>, ext: &str, dry_run: bool) -> Result<()> {
    let directory = match directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let pattern =
        NamePattern::new(ext).with_context(|| format!("Invalid extension filter: {ext}"))?;
    let resequencer = Resequencer::new(&directory).with_pattern(pattern);

    if dry_run {
        return show_plan(&resequencer);
    }

    let report = resequencer
        .run()
        .with_context(|| format!("Failed to resequence {}", directory.display()))?;

    if report.renamed.is_empty() && report.is_clean() {
        println!("Nothing to renumber in {}", directory.display());
        return Ok(());
    }

    for rename in &report.renamed {
        println!(
            "{} {} -> {}",
            "Renamed".green(),
            rename.from,
            rename.to.cyan()
        );
    }
    for failure in &report.failures {
        let pass = match failure.pass {
            RenamePass::Staging => "staging",
            RenamePass::Final => "final",
        };
        eprintln!(
            "{}: failed to rename {} -> {} ({pass} pass): {}",
            "Error".red(),
            failure.name,
            failure.target,
            failure.cause
        );
    }

    if report.is_clean() {
        println!(
            "\n{} Resequenced {} file(s) in {}",
            "✓".green(),
            report.renamed.len(),
            directory.display()
        );
    } else {
        println!(
            "\n{} Resequenced {} file(s) in {} ({} failure(s))",
            "Warning".yellow(),
            report.renamed.len(),
            directory.display(),
            report.failures.len()
        );
    }

    Ok(())
}

fn show_plan(resequencer: &Resequencer) -> Result<()> {
    let plan = resequencer.plan().with_context(|| {
        format!(
            "Failed to plan resequencing of {}",
            resequencer.directory().display()
        )
    })?;

    if plan.is_empty() {
        println!(
            "Nothing to renumber in {}",
            resequencer.directory().display()
        );
        return Ok(());
    }

    println!(
        "Planned renames for {}:",
        resequencer.directory().display()
    );
    for rename in &plan {
        println!("  {} -> {}", rename.from, rename.to.cyan());
    }
    println!(
        "\n{} {} file(s) would be renamed (dry run)",
        "OK".green(),
        plan.len()
    );

    Ok(())
}

//! Two-pass rename engine.
//!
//! Renumbering within a single flat namespace under a rename-only API
//! means a target name may still be occupied by another file waiting to
//! move, so every run goes through an intermediate disjoint namespace:
//! pass 1 moves each selected file to a [`TEMP_PREFIX`]-prefixed name,
//! pass 2 moves the staged files onto the final `1.<ext>, 2.<ext>, ...`
//! sequence. The staging name embeds the full original name, so two
//! distinct originals can never stage to the same name.

use crate::entry::{Entry, NamePattern, SortKey};
use crate::error::{ResequenceError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Prefix forming the staging namespace during a run.
pub const TEMP_PREFIX: &str = "_temp_";

/// Which pass a rename failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenamePass {
    Staging,
    Final,
}

/// A rename that completed, as an `original -> final` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: String,
    pub to: String,
}

/// A rename that failed; the file keeps its current name.
#[derive(Debug)]
pub struct RenameFailure {
    pub pass: RenamePass,
    pub name: String,
    pub target: String,
    pub cause: io::Error,
}

/// Outcome of a run. Per-file failures live here, not in `Err`.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Completed final renames, in sequence order.
    pub renamed: Vec<Renamed>,
    /// Failures from either pass, in the order they occurred.
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One entry of a computed `original -> final` mapping (dry runs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

/// Renumbers the files of one directory into a gap-free `1..N` sequence.
pub struct Resequencer {
    directory: PathBuf,
    pattern: NamePattern,
}

impl Resequencer {
    /// A resequencer for `.jpg` files in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: NamePattern::default(),
        }
    }

    /// Replace the extension filter.
    pub fn with_pattern(mut self, pattern: NamePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Snapshot the directory and classify the selected entries,
    /// sorted numeric-ascending with non-numeric names last.
    ///
    /// Fails before any mutation if the path is not a directory.
    fn snapshot(&self) -> Result<Vec<Entry>> {
        if !self.directory.is_dir() {
            return Err(ResequenceError::NotADirectory {
                path: self.directory.clone(),
            });
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.directory)? {
            let name = dir_entry?.file_name();
            let Some(name) = name.to_str() else {
                tracing::debug!(?name, "skipping non-UTF-8 file name");
                continue;
            };
            if let Some(entry) = self.pattern.classify(name) {
                entries.push(entry);
            }
        }
        // stable: ties (all sentinel entries) keep listing order
        entries.sort_by_key(|e| e.key);
        Ok(entries)
    }

    /// Compute the `original -> final` mapping without touching the
    /// filesystem.
    pub fn plan(&self) -> Result<Vec<PlannedRename>> {
        let entries = self.snapshot()?;
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| PlannedRename {
                from: entry.name,
                to: format!("{}.{}", i + 1, self.pattern.extension()),
            })
            .collect())
    }

    /// Renumber the directory.
    ///
    /// Individual rename failures are recorded in the report and the
    /// affected file is skipped; a failed final rename does not advance
    /// the sequence counter, so successful files stay gap-free. Only
    /// the directory precondition fails the whole run.
    pub fn run(&self) -> Result<RenameReport> {
        let entries = self.snapshot()?;
        let mut report = RenameReport::default();

        // Pass 1: move everything into the staging namespace.
        let mut staged = Vec::with_capacity(entries.len());
        for entry in entries {
            let temp_name = format!("{TEMP_PREFIX}{}", entry.name);
            match self.rename_guarded(&entry.name, &temp_name) {
                Ok(()) => staged.push(temp_name),
                Err(cause) => {
                    tracing::warn!(name = %entry.name, %cause, "staging rename failed");
                    report.failures.push(RenameFailure {
                        pass: RenamePass::Staging,
                        name: entry.name,
                        target: temp_name,
                        cause,
                    });
                }
            }
        }

        // Re-derive the ordering from the staged names themselves. For
        // numeric names this reproduces the snapshot order exactly;
        // ties keep their relative order.
        staged.sort_by_key(|temp| {
            temp.strip_prefix(TEMP_PREFIX)
                .map_or(SortKey::Unmatched, |original| {
                    self.pattern.sort_key(original)
                })
        });

        // Pass 2: number the staged files 1..N. A failure leaves the
        // counter alone so the next success reuses the number.
        let mut next = 1u64;
        for temp_name in staged {
            let final_name = format!("{next}.{}", self.pattern.extension());
            match self.rename_guarded(&temp_name, &final_name) {
                Ok(()) => {
                    next += 1;
                    let original = temp_name
                        .strip_prefix(TEMP_PREFIX)
                        .unwrap_or(&temp_name)
                        .to_string();
                    report.renamed.push(Renamed {
                        from: original,
                        to: final_name,
                    });
                }
                Err(cause) => {
                    tracing::warn!(name = %temp_name, target = %final_name, %cause, "final rename failed");
                    report.failures.push(RenameFailure {
                        pass: RenamePass::Final,
                        name: temp_name,
                        target: final_name,
                        cause,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Rename within the directory, refusing to overwrite.
    ///
    /// `fs::rename` silently replaces an existing destination on Unix,
    /// so occupancy is checked first and reported as a failure instead.
    fn rename_guarded(&self, from: &str, to: &str) -> io::Result<()> {
        let target = self.directory.join(to);
        if target.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target name already occupied: {to}"),
            ));
        }
        fs::rename(self.directory.join(from), &target)?;
        tracing::debug!(%from, %to, "renamed");
        Ok(())
    }
}

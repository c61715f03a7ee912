//! Recursive best-effort removal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::rules::{CleanRule, Target, CLEAN_RULES};

/// What a cleanup run removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Number of files removed.
    pub files_removed: usize,
    /// Number of directories removed (contents not counted).
    pub dirs_removed: usize,
    /// Every removed path, in removal order.
    pub removed: Vec<PathBuf>,
}

impl CleanReport {
    /// Total number of removed entries.
    pub fn total(&self) -> usize {
        self.files_removed + self.dirs_removed
    }

    /// Whether nothing was removed.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove build artifacts under `root`, rule by rule.
///
/// Never fails: a rule that matches nothing, an entry that vanished, or an
/// entry that cannot be removed is skipped and the next rule still runs.
pub fn clean(root: &Path) -> CleanReport {
    let mut report = CleanReport::default();

    for rule in CLEAN_RULES {
        let matches = find_matches(root, rule);
        tracing::debug!("{}: {} match(es)", rule.pattern(), matches.len());

        for path in matches {
            match remove(&path, rule.target) {
                Ok(()) => {
                    match rule.target {
                        Target::File => report.files_removed += 1,
                        Target::Dir => report.dirs_removed += 1,
                    }
                    report.removed.push(path);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => tracing::debug!("Could not remove {}: {}", path.display(), e),
            }
        }
    }

    report
}

/// List what [`clean`] would remove without touching anything.
///
/// Entries inside a directory that is already listed are omitted.
pub fn plan_clean(root: &Path) -> Vec<PathBuf> {
    let mut planned: Vec<PathBuf> = Vec::new();
    let mut planned_dirs: Vec<PathBuf> = Vec::new();

    for rule in CLEAN_RULES {
        for path in find_matches(root, rule) {
            if planned_dirs.iter().any(|dir| path.starts_with(dir)) {
                continue;
            }
            if rule.target == Target::Dir {
                planned_dirs.push(path.clone());
            }
            planned.push(path);
        }
    }

    planned
}

fn find_matches(root: &Path, rule: &CleanRule) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| rule.matches(entry))
        .map(|entry| entry.into_path())
        .collect()
}

fn remove(path: &Path, target: Target) -> io::Result<()> {
    match target {
        Target::File => fs::remove_file(path),
        Target::Dir => fs::remove_dir_all(path),
    }
}

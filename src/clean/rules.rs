//! Artifact matching rules.

use std::ffi::OsStr;

use walkdir::DirEntry;

/// Kind of filesystem entry a rule removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Regular files (and symlinks, which are never followed).
    File,
    /// Directories, removed with their contents.
    Dir,
}

/// How a rule matches an entry's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Name ends with the given suffix (`*.pyc`).
    Suffix(&'static str),
    /// Name equals the given string (`__pycache__`).
    Exact(&'static str),
}

impl NameMatch {
    /// Check a file name against this pattern.
    ///
    /// Compares raw bytes, so names that are not valid UTF-8 still match.
    pub fn matches(&self, name: &OsStr) -> bool {
        match self {
            Self::Suffix(suffix) => name.as_encoded_bytes().ends_with(suffix.as_bytes()),
            Self::Exact(exact) => name == OsStr::new(exact),
        }
    }
}

/// One best-effort deletion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanRule {
    pub target: Target,
    pub name: NameMatch,
}

impl CleanRule {
    /// Whether a walked entry is removed by this rule.
    pub fn matches(&self, entry: &DirEntry) -> bool {
        let is_dir = entry.file_type().is_dir();
        let kind_ok = match self.target {
            Target::File => !is_dir,
            Target::Dir => is_dir,
        };
        kind_ok && self.name.matches(entry.file_name())
    }

    /// Glob-style rendering, for logs.
    pub fn pattern(&self) -> String {
        match self.name {
            NameMatch::Suffix(suffix) => format!("*{}", suffix),
            NameMatch::Exact(exact) => exact.to_string(),
        }
    }
}

/// Cleanup steps, run in this order.
pub const CLEAN_RULES: &[CleanRule] = &[
    CleanRule {
        target: Target::File,
        name: NameMatch::Suffix(".pyc"),
    },
    CleanRule {
        target: Target::Dir,
        name: NameMatch::Exact("__pycache__"),
    },
    CleanRule {
        target: Target::File,
        name: NameMatch::Suffix(".pyo"),
    },
    CleanRule {
        target: Target::Dir,
        name: NameMatch::Suffix(".egg-info"),
    },
    CleanRule {
        target: Target::File,
        name: NameMatch::Exact(".coverage"),
    },
];

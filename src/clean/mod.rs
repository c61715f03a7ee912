//! Build artifact cleanup.
//!
//! Walks the working tree and removes Python bytecode, caches, egg-info
//! directories and coverage data. Every rule is best-effort.
//!
//! # Example
//!
//! ```
//! use devrun::clean::clean;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("a.pyc"), "").unwrap();
//!
//! let report = clean(temp.path());
//! assert_eq!(report.files_removed, 1);
//! assert!(!temp.path().join("a.pyc").exists());
//! ```

pub mod rules;
pub mod sweep;

pub use rules::{CleanRule, NameMatch, Target, CLEAN_RULES};
pub use sweep::{clean, plan_clean, CleanReport};

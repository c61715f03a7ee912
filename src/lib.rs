//! devrun - Task runner for Python project development.
//!
//! devrun maps short verbs to one action each: most hand off to the
//! project's `dev.py` helper, `install` runs the package installer, `clean`
//! removes build artifacts and `quick-start` runs `setup` then `test`.
//!
//! # Modules
//!
//! - [`clean`] - Recursive build artifact removal
//! - [`cli`] - Command-line interface and command implementations
//! - [`config`] - Settings resolution from `.devrun.yml`, env and flags
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The static command table and execution planning
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use devrun::registry::plan;
//!
//! let names: Vec<_> = plan("quick-start").unwrap().iter().map(|e| e.name).collect();
//! assert_eq!(names, vec!["setup", "test", "quick-start"]);
//! ```

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{DevrunError, Result};

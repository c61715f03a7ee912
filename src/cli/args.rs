//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use crate::ui::OutputMode;

/// devrun - Task runner for Python project development.
#[derive(Debug, Parser)]
#[command(name = "devrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run (lists available commands when omitted)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides default .devrun.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Preview what would run without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Interpreter that runs the helper script
    #[arg(long, env = "DEVRUN_PYTHON", value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Helper script receiving the command verb
    #[arg(long, env = "DEVRUN_SCRIPT", value_name = "FILE")]
    pub script: Option<String>,

    /// Package installer used by `install`
    #[arg(long, env = "DEVRUN_INSTALLER", value_name = "PROGRAM")]
    pub installer: Option<String>,

    /// Dependency manifest used by `install`
    #[arg(long, env = "DEVRUN_MANIFEST", value_name = "FILE")]
    pub manifest: Option<String>,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Settings overrides from flags and `DEVRUN_*` variables.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            interpreter: self.python.clone(),
            script: self.script.clone(),
            installer: self.installer.clone(),
            manifest: self.manifest.clone(),
        }
    }
}

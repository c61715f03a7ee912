//! Process invocation.

use crate::error::{DevrunError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Program to run (looked up on PATH when not a path).
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Working directory (inherits the parent's when None).
    pub cwd: Option<PathBuf>,
}

impl ProcessSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Render the invocation the way a user would type it.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(word: &str) -> String {
    if !word.is_empty() && !word.contains(char::is_whitespace) {
        word.to_string()
    } else {
        format!("'{}'", word)
    }
}

/// Exit status of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code. Signals map to 128 + signal number on Unix.
    pub code: i32,
}

impl ProcessExit {
    /// Create an exit status from a raw code.
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl From<std::process::ExitStatus> for ProcessExit {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::new(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::new(128 + signal);
            }
        }

        Self::new(1)
    }
}

/// Runs external programs on behalf of a command.
pub trait ProcessRunner {
    /// Run the process to completion and return its exit status.
    ///
    /// A non-zero exit is returned as `Ok`; only a failure to start the
    /// program is an error.
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessExit>;
}

/// Runner that spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &ProcessSpec) -> Result<ProcessExit> {
        let start = Instant::now();

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        tracing::debug!("Running: {}", spec.display());

        let status = cmd.status().map_err(|e| DevrunError::SpawnFailed {
            program: spec.program.clone(),
            message: e.to_string(),
        })?;

        let exit = ProcessExit::from(status);
        tracing::debug!(
            "'{}' exited with {} after {:?}",
            spec.program,
            exit.code,
            start.elapsed()
        );

        Ok(exit)
    }
}

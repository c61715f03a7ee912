//! Commands that hand off to an external program.
//!
//! Covers the helper-script verbs (`setup`, `test`, `lint`, `serve`,
//! `status`) and the package installer. Output is not captured and the
//! exit status is passed through unchanged.

use crate::error::Result;
use crate::shell::{ProcessRunner, ProcessSpec};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs one external invocation.
pub struct DelegateCommand<'a> {
    spec: ProcessSpec,
    runner: &'a dyn ProcessRunner,
    dry_run: bool,
}

impl<'a> DelegateCommand<'a> {
    /// Create a delegated command.
    pub fn new(spec: ProcessSpec, runner: &'a dyn ProcessRunner, dry_run: bool) -> Self {
        Self {
            spec,
            runner,
            dry_run,
        }
    }

    /// The invocation this command performs.
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }
}

impl Command for DelegateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.dry_run {
            ui.message(&format!("would run: {}", self.spec.display()));
            return Ok(CommandResult::success());
        }

        let exit = self.runner.run(&self.spec)?;
        Ok(CommandResult::from(exit))
    }
}

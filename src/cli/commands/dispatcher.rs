//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing a command name through the table

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::Result;
use crate::registry::{self, Action, CommandEntry, DEFAULT_COMMAND};
use crate::shell::{ProcessExit, ProcessRunner, ProcessSpec, SystemRunner};
use crate::ui::UserInterface;

use super::clean::CleanCommand;
use super::delegate::DelegateCommand;
use super::help::HelpCommand;

/// Trait for command implementations.
///
/// Each action in the command table implements this trait to provide its
/// execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<ProcessExit> for CommandResult {
    fn from(exit: ProcessExit) -> Self {
        if exit.success() {
            Self::success()
        } else {
            Self::failure(exit.code)
        }
    }
}

/// Dispatches command names to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    settings: Settings,
    runner: Box<dyn ProcessRunner>,
    dry_run: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, settings: Settings) -> Self {
        Self {
            project_root,
            settings,
            runner: Box::new(SystemRunner),
            dry_run: false,
        }
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: Box<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Preview actions instead of performing them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command by name.
    ///
    /// A missing or unregistered name shows the command listing. Otherwise
    /// the command's plan runs in order and stops at the first failure,
    /// whose exit code becomes the result. A step's confirmation is shown
    /// only after it succeeds.
    pub fn dispatch(&self, name: Option<&str>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = match name {
            Some(name) if registry::lookup(name).is_some() => name,
            Some(name) => {
                tracing::debug!("Unknown command '{}', showing help", name);
                DEFAULT_COMMAND
            }
            None => DEFAULT_COMMAND,
        };

        let plan = registry::plan(name)?;
        tracing::debug!(
            "Plan for '{}': {}",
            name,
            plan.iter().map(|e| e.name).collect::<Vec<_>>().join(", ")
        );

        for entry in plan {
            let result = self.command_for(entry).execute(ui)?;
            if !result.success {
                tracing::debug!("'{}' failed with exit code {}", entry.name, result.exit_code);
                return Ok(result);
            }
            if let Some(msg) = entry.on_success {
                ui.success(msg);
            }
        }

        Ok(CommandResult::success())
    }

    fn command_for(&self, entry: &CommandEntry) -> Box<dyn Command + '_> {
        match entry.action {
            Action::Help => Box::new(HelpCommand::new(registry::entries())),
            Action::Delegate { verb } => Box::new(DelegateCommand::new(
                self.delegate_spec(verb),
                self.runner.as_ref(),
                self.dry_run,
            )),
            Action::Install => Box::new(DelegateCommand::new(
                self.install_spec(),
                self.runner.as_ref(),
                self.dry_run,
            )),
            Action::Clean => Box::new(CleanCommand::new(&self.project_root, self.dry_run)),
            Action::Composite => Box::new(CompositeCommand),
        }
    }

    /// Invocation of the helper script for `verb`.
    pub fn delegate_spec(&self, verb: &str) -> ProcessSpec {
        ProcessSpec::new(&self.settings.interpreter)
            .arg(&self.settings.script)
            .arg(verb)
            .current_dir(&self.project_root)
    }

    /// Invocation of the package installer.
    pub fn install_spec(&self) -> ProcessSpec {
        ProcessSpec::new(&self.settings.installer)
            .arg("install")
            .arg("-r")
            .arg(&self.settings.manifest)
            .current_dir(&self.project_root)
    }
}

/// A command whose work is entirely in its dependencies.
struct CompositeCommand;

impl Command for CompositeCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevrunError;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    const BANNER: &str = "Quick start complete!";

    fn dispatcher(runner: &MockRunner) -> CommandDispatcher {
        CommandDispatcher::new(PathBuf::from("/project"), Settings::default())
            .with_runner(Box::new(runner.clone()))
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit() {
        assert_eq!(
            CommandResult::from(ProcessExit::new(0)),
            CommandResult::success()
        );
        assert_eq!(
            CommandResult::from(ProcessExit::new(4)),
            CommandResult::failure(4)
        );
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), Settings::default());
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
        assert_eq!(dispatcher.settings(), &Settings::default());
    }

    #[test]
    fn no_command_shows_help() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result = dispatcher(&runner).dispatch(None, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.listings().len(), 1);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn unknown_command_shows_help_and_succeeds() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result = dispatcher(&runner).dispatch(Some("deploy"), &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.listings().len(), 1);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn help_lists_every_command() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        dispatcher(&runner).dispatch(Some("help"), &mut ui).unwrap();

        let rows = &ui.listings()[0].1;
        assert_eq!(rows.len(), registry::COMMANDS.len());
        for entry in registry::COMMANDS {
            assert!(rows.iter().any(|(n, d)| n == entry.name && d == entry.description));
        }
    }

    #[test]
    fn delegated_commands_pass_verb_to_script() {
        for verb in ["setup", "test", "lint", "serve", "status"] {
            let runner = MockRunner::new();
            let mut ui = MockUI::new();

            let result = dispatcher(&runner).dispatch(Some(verb), &mut ui).unwrap();

            assert!(result.success);
            let calls = runner.calls();
            assert_eq!(calls.len(), 1, "{verb} should run exactly once");
            assert_eq!(calls[0].program, "python");
            assert_eq!(calls[0].args, vec!["dev.py", verb]);
            assert_eq!(calls[0].cwd, Some(PathBuf::from("/project")));
            assert!(ui.successes().is_empty());
        }
    }

    #[test]
    fn delegated_exit_code_passes_through() {
        let runner = MockRunner::new().with_exit("lint", 7);
        let mut ui = MockUI::new();

        let result = dispatcher(&runner).dispatch(Some("lint"), &mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(7));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn install_runs_installer_against_manifest() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result = dispatcher(&runner).dispatch(Some("install"), &mut ui).unwrap();

        assert!(result.success);
        let calls = runner.calls();
        assert_eq!(calls[0].program, "pip");
        assert_eq!(calls[0].args, vec!["install", "-r", "requirements.txt"]);
        assert!(ui.has_success("Dependencies installed"));
    }

    #[test]
    fn failed_install_has_no_confirmation() {
        let runner = MockRunner::new().with_exit("install", 2);
        let mut ui = MockUI::new();

        let result = dispatcher(&runner).dispatch(Some("install"), &mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn quick_start_runs_setup_then_test() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result = dispatcher(&runner)
            .dispatch(Some("quick-start"), &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.invoked_words(), vec!["setup", "test"]);
        assert!(ui.has_success(BANNER));
    }

    #[test]
    fn quick_start_stops_when_setup_fails() {
        let runner = MockRunner::new().with_exit("setup", 1);
        let mut ui = MockUI::new();

        let result = dispatcher(&runner)
            .dispatch(Some("quick-start"), &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(!runner.was_invoked("test"));
        assert!(!ui.has_success(BANNER));
    }

    #[test]
    fn quick_start_propagates_test_failure() {
        let runner = MockRunner::new().with_exit("test", 3);
        let mut ui = MockUI::new();

        let result = dispatcher(&runner)
            .dispatch(Some("quick-start"), &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 3);
        assert_eq!(runner.invoked_words(), vec!["setup", "test"]);
        assert!(!ui.has_success(BANNER));
    }

    #[test]
    fn spawn_failure_is_an_error_and_stops_plan() {
        let runner = MockRunner::new().with_spawn_failure("python");
        let mut ui = MockUI::new();

        let err = dispatcher(&runner)
            .dispatch(Some("quick-start"), &mut ui)
            .unwrap_err();

        assert!(matches!(err, DevrunError::SpawnFailed { .. }));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn custom_settings_shape_invocations() {
        let runner = MockRunner::new();
        let settings = Settings {
            interpreter: "python3".to_string(),
            script: "tools/dev.py".to_string(),
            installer: "uv".to_string(),
            manifest: "dev.txt".to_string(),
        };
        let dispatcher = CommandDispatcher::new(PathBuf::from("/p"), settings)
            .with_runner(Box::new(runner.clone()));

        assert_eq!(
            dispatcher.delegate_spec("serve").display(),
            "python3 tools/dev.py serve"
        );
        assert_eq!(dispatcher.install_spec().display(), "uv install -r dev.txt");
    }

    #[test]
    fn dry_run_spawns_nothing() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result = dispatcher(&runner)
            .with_dry_run(true)
            .dispatch(Some("quick-start"), &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(runner.calls().is_empty());
        assert!(ui.has_message("would run: python dev.py setup"));
        assert!(ui.has_message("would run: python dev.py test"));
        assert!(ui.has_success(BANNER));
    }

    #[test]
    fn clean_confirms_in_empty_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), Settings::default())
            .with_runner(Box::new(runner.clone()));

        let result = dispatcher.dispatch(Some("clean"), &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Cleanup complete"));
        assert!(runner.calls().is_empty());
    }
}

//! The `clean` command.

use std::path::Path;

use crate::clean::{clean, plan_clean};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Removes build artifacts under the project root. Always succeeds.
pub struct CleanCommand<'a> {
    root: &'a Path,
    dry_run: bool,
}

impl<'a> CleanCommand<'a> {
    /// Create a clean command for a project root.
    pub fn new(root: &'a Path, dry_run: bool) -> Self {
        Self { root, dry_run }
    }
}

impl Command for CleanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.dry_run {
            for path in plan_clean(self.root) {
                ui.message(&format!("would remove: {}", path.display()));
            }
            return Ok(CommandResult::success());
        }

        let report = clean(self.root);
        tracing::debug!(
            "Removed {} file(s) and {} director(ies)",
            report.files_removed,
            report.dirs_removed
        );

        if ui.output_mode().shows_detail() {
            for path in &report.removed {
                ui.message(&format!("removed {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn removes_artifacts_and_succeeds() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.pyc"), "").unwrap();
        let mut ui = MockUI::new();

        let command = CleanCommand::new(temp.path(), false);
        let result = command.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!temp.path().join("a.pyc").exists());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn verbose_lists_removed_paths() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".coverage"), "").unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let command = CleanCommand::new(temp.path(), false);
        command.execute(&mut ui).unwrap();

        assert!(ui.has_message("removed"));
        assert!(ui.has_message(".coverage"));
    }

    #[test]
    fn dry_run_keeps_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub/__pycache__")).unwrap();
        let mut ui = MockUI::new();

        let command = CleanCommand::new(temp.path(), true);
        let result = command.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(temp.path().join("sub/__pycache__").is_dir());
        assert!(ui.has_message("would remove:"));
        assert!(ui.has_message("__pycache__"));
    }
}

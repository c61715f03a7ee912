//! The `help` command.

use crate::error::Result;
use crate::registry::CommandEntry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Title line of the command listing.
pub const LISTING_TITLE: &str = "Available commands:";

/// Lists every registered command with its description.
pub struct HelpCommand<'a> {
    entries: &'a [CommandEntry],
}

impl<'a> HelpCommand<'a> {
    /// Create a help command over a command table.
    pub fn new(entries: &'a [CommandEntry]) -> Self {
        Self { entries }
    }

    /// Listing rows as (name, description).
    pub fn rows(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.name.to_string(), e.description.to_string()))
            .collect()
    }
}

impl Command for HelpCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_listing(LISTING_TITLE, &self.rows());
        Ok(CommandResult::success())
    }
}

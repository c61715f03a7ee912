//! The static command table.

/// What a command does when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the command listing.
    Help,
    /// Run the project helper script with a verb.
    Delegate {
        /// Verb passed to the script unchanged.
        verb: &'static str,
    },
    /// Run the package installer against the dependency manifest.
    Install,
    /// Remove build artifacts from the working tree.
    Clean,
    /// Run nothing beyond the command's dependencies.
    Composite,
}

/// A named, invokable unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Name typed on the command line.
    pub name: &'static str,
    /// One-line description shown in the listing.
    pub description: &'static str,
    /// The command's own action.
    pub action: Action,
    /// Commands that must run first and succeed, in order.
    pub dependencies: &'static [&'static str],
    /// Confirmation printed after the command succeeds.
    pub on_success: Option<&'static str>,
}

/// Command run when no name is given or the name is not registered.
pub const DEFAULT_COMMAND: &str = "help";

/// Every registered command, in listing order.
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        description: "Show available commands",
        action: Action::Help,
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "setup",
        description: "Set up the development environment",
        action: Action::Delegate { verb: "setup" },
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "install",
        description: "Install Python dependencies",
        action: Action::Install,
        dependencies: &[],
        on_success: Some("Dependencies installed"),
    },
    CommandEntry {
        name: "test",
        description: "Run the test suite",
        action: Action::Delegate { verb: "test" },
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "lint",
        description: "Run code linting",
        action: Action::Delegate { verb: "lint" },
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "serve",
        description: "Start the development server",
        action: Action::Delegate { verb: "serve" },
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "status",
        description: "Show project status",
        action: Action::Delegate { verb: "status" },
        dependencies: &[],
        on_success: None,
    },
    CommandEntry {
        name: "clean",
        description: "Remove build artifacts and caches",
        action: Action::Clean,
        dependencies: &[],
        on_success: Some("Cleanup complete"),
    },
    CommandEntry {
        name: "quick-start",
        description: "Set up the environment and run tests",
        action: Action::Composite,
        dependencies: &["setup", "test"],
        on_success: Some(
            "Quick start complete! Run 'devrun serve' to start the development server.",
        ),
    },
];

/// Find a registered command by name.
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    lookup_in(COMMANDS, name)
}

/// Find a command by name in an arbitrary table.
pub fn lookup_in<'a>(table: &'a [CommandEntry], name: &str) -> Option<&'a CommandEntry> {
    table.iter().find(|entry| entry.name == name)
}

/// All registered commands, in listing order.
pub fn entries() -> &'static [CommandEntry] {
    COMMANDS
}

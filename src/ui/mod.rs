//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled TTY output
//! - [`NonInteractiveUI`] for pipes and CI
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use devrun::ui::{NonInteractiveUI, OutputMode, UserInterface};
//!
//! let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
//! ui.success("Cleanup complete");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a titled two-column listing. Shown in every output mode.
    fn show_listing(&mut self, title: &str, rows: &[(String, String)]);
}

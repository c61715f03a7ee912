//! Plain-text UI for pipes, CI and other non-TTY output.

use super::output::name_width;
use super::{OutputMode, UserInterface};

/// UI implementation that writes unstyled text.
///
/// Success lines carry a `✓` prefix. Errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_listing(&mut self, title: &str, rows: &[(String, String)]) {
        let width = name_width(rows);
        println!("{}", title);
        for (name, description) in rows {
            println!("  {:<width$} {}", name, description, width = width);
        }
    }
}

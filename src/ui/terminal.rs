//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::output::name_width;
use super::{should_use_colors, NonInteractiveUI, OutputMode, Theme, UserInterface};

/// Terminal UI implementation, used when stdout is a TTY.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let mut err = Term::stderr();
        writeln!(err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_listing(&mut self, title: &str, rows: &[(String, String)]) {
        let width = name_width(rows);
        writeln!(self.term, "{}", self.theme.header.apply_to(title)).ok();
        for (name, description) in rows {
            writeln!(
                self.term,
                "{}",
                self.theme.format_listing_row(name, description, width)
            )
            .ok();
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including each path removed by `clean`.
    Verbose,
    /// Show confirmations and status messages.
    #[default]
    Normal,
    /// Show nothing except the command listing and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-item detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages and confirmations.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Width of the name column for a listing.
pub fn name_width(rows: &[(String, String)]) -> usize {
    rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_detail() {
        assert!(OutputMode::Verbose.shows_detail());
        assert!(!OutputMode::Normal.shows_detail());
        assert!(!OutputMode::Quiet.shows_detail());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn name_width_is_longest_name() {
        let rows = vec![
            ("test".to_string(), "Run tests".to_string()),
            ("quick-start".to_string(), "Both".to_string()),
        ];
        assert_eq!(name_width(&rows), 11);
        assert_eq!(name_width(&[]), 0);
    }
}

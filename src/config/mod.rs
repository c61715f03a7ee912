//! Configuration loading for devrun.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use devrun::config::{load_settings, SettingsOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".devrun.yml"), "interpreter: python3").unwrap();
//!
//! let settings = load_settings(temp.path(), None, SettingsOverrides::default()).unwrap();
//! assert_eq!(settings.interpreter, "python3");
//! assert_eq!(settings.script, "dev.py");
//! ```
//!
//! # Resolution Order
//!
//! 1. Built-in defaults (`python dev.py`, `pip`, `requirements.txt`)
//! 2. Project config (`.devrun.yml`) or the file given with `--config`
//! 3. `DEVRUN_*` environment variables and command-line flags

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config_file, load_settings, parse_config, validate,
    CONFIG_FILE_NAME,
};
pub use schema::{
    ConfigFile, Settings, SettingsOverrides, DEFAULT_INSTALLER, DEFAULT_INTERPRETER,
    DEFAULT_MANIFEST, DEFAULT_SCRIPT,
};

#[cfg(test)]
mod tests {
    #[test]
    fn serde_yaml_parses_basic_yaml() {
        let yaml = "interpreter: python3\nmanifest: requirements-dev.txt";
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["interpreter"], "python3");
        assert_eq!(parsed["manifest"], "requirements-dev.txt");
    }
}

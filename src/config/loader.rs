//! Configuration file discovery and loading.

use crate::config::schema::{ConfigFile, Settings, SettingsOverrides};
use crate::error::{DevrunError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional project config file.
pub const CONFIG_FILE_NAME: &str = ".devrun.yml";

/// Path of the project config file for a root, if it exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DevrunError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DevrunError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ConfigFile`].
///
/// An empty or comment-only file yields the default.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    let meaningful = content
        .lines()
        .any(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'));
    if !meaningful {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| DevrunError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve settings for a project.
///
/// Layers, later overriding earlier: built-in defaults, the config file
/// (`config_override` if given, else `.devrun.yml` when present), then
/// `overrides`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `config_override` points at a missing file.
/// Returns `ConfigValidationError` if any resolved value is empty.
pub fn load_settings(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<Settings> {
    let path = match config_override {
        Some(p) => Some(p.to_path_buf()),
        None => find_project_config(project_root),
    };

    let mut settings = Settings::default();
    if let Some(path) = path {
        tracing::debug!("Loading config from {}", path.display());
        settings = settings.merge_file(load_config_file(&path)?);
    }

    let settings = settings.apply_overrides(overrides);
    validate(&settings)?;
    Ok(settings)
}

/// Reject settings that cannot form a valid invocation.
pub fn validate(settings: &Settings) -> Result<()> {
    let fields = [
        ("interpreter", &settings.interpreter),
        ("script", &settings.script),
        ("installer", &settings.installer),
        ("manifest", &settings.manifest),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(DevrunError::ConfigValidationError {
                message: format!("{} must not be empty", name),
            });
        }
    }

    Ok(())
}

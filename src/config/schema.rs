//! Configuration schema definitions.
//!
//! [`ConfigFile`] maps to `.devrun.yml`; [`Settings`] is the resolved
//! result after defaults and overrides are applied.

use serde::Deserialize;

/// Default interpreter used to run the helper script.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Default helper script, relative to the project root.
pub const DEFAULT_SCRIPT: &str = "dev.py";

/// Default package installer.
pub const DEFAULT_INSTALLER: &str = "pip";

/// Default dependency manifest, relative to the project root.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Contents of a `.devrun.yml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Interpreter that runs the helper script
    pub interpreter: Option<String>,

    /// Helper script path
    pub script: Option<String>,

    /// Package installer program
    pub installer: Option<String>,

    /// Dependency manifest passed to the installer
    pub manifest: Option<String>,
}

/// Overrides from the command line or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub interpreter: Option<String>,
    pub script: Option<String>,
    pub installer: Option<String>,
    pub manifest: Option<String>,
}

/// Resolved settings used by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub interpreter: String,
    pub script: String,
    pub installer: String,
    pub manifest: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
            installer: DEFAULT_INSTALLER.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }
}

impl Settings {
    /// Layer a config file's values over these settings.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.interpreter {
            self.interpreter = v;
        }
        if let Some(v) = file.script {
            self.script = v;
        }
        if let Some(v) = file.installer {
            self.installer = v;
        }
        if let Some(v) = file.manifest {
            self.manifest = v;
        }
        self
    }

    /// Apply command-line or environment overrides.
    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(v) = overrides.interpreter {
            self.interpreter = v;
        }
        if let Some(v) = overrides.script {
            self.script = v;
        }
        if let Some(v) = overrides.installer {
            self.installer = v;
        }
        if let Some(v) = overrides.manifest {
            self.manifest = v;
        }
        self
    }
}

//! Generator configuration.
//!
//! Environment variables and the working directory are read once, here,
//! and handed to the rest of the crate as a plain value.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Enables the dirty check when its trimmed value is [`CLEAN_BUILD`].
pub const RELEASE_ENV: &str = "ECS_RELEASE";

/// Skips the hash lookup when set to any non-empty value.
pub const UNKNOWN_VERSION_ENV: &str = "ECS_UNKNOWN_VERSION";

/// Value of [`RELEASE_ENV`] that marks a clean release build.
pub const CLEAN_BUILD: &str = "cleanbuild";

/// Default location of the version file, relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "../../../VERSION";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "version.go";

/// Release mode selected through [`RELEASE_ENV`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Any build other than a clean release. Always marked dirty.
    #[default]
    Default,
    /// Clean release build; the working tree is actually inspected.
    CleanBuild,
}

impl ReleaseMode {
    /// Parse the raw value of [`RELEASE_ENV`].
    ///
    /// A value that is not valid UTF-8 can never equal [`CLEAN_BUILD`].
    #[must_use]
    pub fn from_env_value(value: Option<&OsStr>) -> Self {
        match value.and_then(OsStr::to_str).map(str::trim) {
            Some(CLEAN_BUILD) => Self::CleanBuild,
            _ => Self::Default,
        }
    }
}

/// Inputs for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory git runs in and relative paths resolve against.
    pub work_dir: PathBuf,

    /// Path of the `VERSION` file.
    pub version_file: PathBuf,

    /// Path of the generated source file.
    pub output_file: PathBuf,

    /// Whether to run the dirty check.
    pub release: ReleaseMode,

    /// Whether to skip the commit hash lookup.
    pub skip_hash: bool,
}

impl Config {
    /// Build a configuration from the process environment and current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        let work_dir = std::env::current_dir().map_err(Error::CurrentDir)?;
        Ok(Self::from_lookup(work_dir, |key| std::env::var_os(key)))
    }

    /// Build a configuration using `lookup` to resolve environment variables.
    ///
    /// Values are raw OS strings: a set variable counts as set even when it
    /// is not valid UTF-8.
    pub fn from_lookup<F>(work_dir: PathBuf, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let release = ReleaseMode::from_env_value(lookup(RELEASE_ENV).as_deref());
        let skip_hash = lookup(UNKNOWN_VERSION_ENV).is_some_and(|v| !v.is_empty());

        Self {
            work_dir,
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            release,
            skip_hash,
        }
    }

    /// Resolve a possibly relative path against the working directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        }
    }

    /// Absolute path of the version file.
    #[must_use]
    pub fn version_path(&self) -> PathBuf {
        self.resolve(&self.version_file)
    }

    /// Absolute path of the output file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_file)
    }
}

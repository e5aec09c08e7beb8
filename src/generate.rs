//! Version file generation: read the version, inspect the repository,
//! render the template and write the result.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::git::{CommandRunner, Inspector};
use crate::template;
use crate::version::{VersionInfo, read_version_file};

/// Result of a completed generator run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Values that were substituted.
    pub info: VersionInfo,
    /// Where the file was written.
    pub path: PathBuf,
    /// The rendered file contents.
    pub contents: String,
}

/// Read the version file and apply the repository checks enabled by `config`.
///
/// # Errors
///
/// Returns an error if the version file cannot be read.
pub fn resolve(config: &Config, runner: &dyn CommandRunner) -> Result<VersionInfo> {
    let version = read_version_file(&config.version_path())?;
    let mut info = VersionInfo::new(version);

    Inspector::new(runner).inspect(config, &mut info);

    tracing::debug!(
        version = %info.version,
        dirty = info.dirty,
        hash = %info.hash,
        "resolved version info"
    );

    Ok(info)
}

/// Resolve version info and render it without touching the output file.
///
/// # Errors
///
/// Returns an error if the version file cannot be read or the template
/// fails to render.
pub fn render_only(config: &Config, runner: &dyn CommandRunner) -> Result<(VersionInfo, String)> {
    let info = resolve(config, runner)?;
    let contents = template::render(&info)?;
    Ok((info, contents))
}

/// Generate the version file described by `config`.
///
/// The output is rendered completely before the file is created, so a
/// failure at any earlier step leaves an existing output file untouched.
///
/// # Errors
///
/// Returns an error if the version file cannot be read, the template fails
/// to render, or the output file cannot be written.
pub fn run(config: &Config, runner: &dyn CommandRunner) -> Result<Generated> {
    let (info, contents) = render_only(config, runner)?;
    let path = config.output_path();

    std::fs::write(&path, &contents).map_err(|source| Error::WriteOutput {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        version = %info.version,
        dirty = info.dirty,
        hash = %info.hash,
        "wrote version file"
    );

    Ok(Generated {
        info,
        path,
        contents,
    })
}

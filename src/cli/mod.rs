//! Command-line parsing and execution.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::generate;
use crate::git::CommandRunner;

/// Generate the ECS CLI version.go file.
///
/// With no arguments, reads `../../../VERSION`, queries git, and writes
/// `version.go` to the current directory.
#[derive(Parser)]
#[command(name = "version-gen")]
#[command(about = "Generate the ECS CLI version.go file")]
#[command(version)]
pub struct Cli {
    /// Path of the VERSION file.
    #[arg(long, value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Path of the generated file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the rendered file instead of writing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the resolved version info as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.version_file {
            config.version_file.clone_from(path);
        }
        if let Some(path) = &self.output {
            config.output_file.clone_from(path);
        }
    }

    /// Log filter matching the requested verbosity.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Generate (or with `--dry-run`, only render) the version file and
    /// print whatever was requested to `out`.
    ///
    /// Without `--dry-run` or `--json` nothing is printed.
    pub fn execute<W: Write>(
        &self,
        config: &Config,
        runner: &dyn CommandRunner,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let (info, contents) = if self.dry_run {
            generate::render_only(config, runner)?
        } else {
            let generated = generate::run(config, runner)?;
            (generated.info, generated.contents)
        };

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        } else if self.dry_run {
            write!(out, "{contents}")?;
        }

        Ok(())
    }
}

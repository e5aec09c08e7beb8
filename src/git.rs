//! Repository inspection through the `git` executable.
//!
//! Git failures are never fatal: a tree that cannot be inspected is
//! reported dirty and an unresolvable commit keeps [`UNKNOWN_HASH`].

use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::config::{Config, ReleaseMode};
use crate::version::{UNKNOWN_HASH, VersionInfo};

/// Name of the source control executable, resolved on `PATH`.
pub const GIT: &str = "git";

/// Exit status and captured stdout of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status 0.
    pub success: bool,
    /// Captured standard output.
    pub stdout: Vec<u8>,
}

/// Capability to run an external command to completion.
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes in a fixed directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    dir: PathBuf,
}

impl SystemRunner {
    /// Create a runner that starts commands in `dir`.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.dir)
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: output.stdout,
        })
    }
}

/// Queries the enclosing repository for commit and tree state.
pub struct Inspector<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> Inspector<'a, R> {
    #[must_use]
    pub const fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Whether the working tree has uncommitted changes.
    ///
    /// Clean only when `git status --porcelain` exits 0 with no output.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match self.runner.run(GIT, &["status", "--porcelain"]) {
            Ok(output) if output.success => {
                let dirty = !output.stdout.iter().all(u8::is_ascii_whitespace);
                tracing::debug!(dirty, "checked working tree");
                dirty
            }
            Ok(_) => {
                tracing::warn!("git status failed, assuming dirty tree");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not run git status, assuming dirty tree");
                true
            }
        }
    }

    /// Abbreviated hash of `HEAD`, or [`UNKNOWN_HASH`] if it cannot be resolved.
    #[must_use]
    pub fn short_hash(&self) -> String {
        let output = match self.runner.run(GIT, &["rev-parse", "--short", "HEAD"]) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(error = %e, "could not run git rev-parse");
                return UNKNOWN_HASH.to_string();
            }
        };

        if !output.success {
            tracing::warn!("git rev-parse failed, using {UNKNOWN_HASH}");
            return UNKNOWN_HASH.to_string();
        }

        match String::from_utf8(output.stdout) {
            Ok(s) if !s.trim().is_empty() => {
                let hash = s.trim().to_string();
                tracing::debug!(hash = %hash, "resolved commit hash");
                hash
            }
            _ => {
                tracing::warn!("git rev-parse returned no usable hash");
                UNKNOWN_HASH.to_string()
            }
        }
    }

    /// Apply the checks enabled by `config` to `info`.
    pub fn inspect(&self, config: &Config, info: &mut VersionInfo) {
        if config.release == ReleaseMode::CleanBuild {
            info.dirty = self.is_dirty();
        }
        if config.skip_hash {
            tracing::debug!("hash lookup disabled");
        } else {
            info.hash = self.short_hash();
        }
    }
}

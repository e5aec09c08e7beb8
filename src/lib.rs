//! Version file generator for the ECS CLI.
//!
//! Reads the release version from a `VERSION` file, asks git for the
//! short commit hash and working tree state, and renders a Go source file
//! declaring `Version`, `GitDirty` and `GitShortHash`.
//!
//! ```text
//! VERSION ──► read ──► inspect (git) ──► render ──► version.go
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod git;
pub mod template;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use generate::Generated;
pub use git::{CommandOutput, CommandRunner, SystemRunner};
pub use version::VersionInfo;

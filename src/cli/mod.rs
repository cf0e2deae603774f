//! Command-line interface for pomdep.
//!
//! pomdep edits Maven project descriptors from the command line. The only
//! command today is `add`, which appends one dependency to `pom.xml`.
//!
//! # Usage
//!
//! ```bash
//! # locator form
//! pomdep add --artifact org.slf4j:slf4j-api:2.0.13
//!
//! # discrete form
//! pomdep add -g org.slf4j --artifact-id slf4j-api --version 2.0.13
//!
//! # Maven-style properties
//! pomdep add -Dartifact=org.slf4j:slf4j-api:2.0.13
//!
//! # another project
//! pomdep --file ../other/pom.xml add -a g:a:1.0
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Disable logging
//! - `--config` - Path to a config file (also `POMDEP_CONFIG`)
//! - `--file` - Project descriptor or project directory
//!
//! Logging goes to stderr. `RUST_LOG` replaces the default filter unless
//! `--quiet` is given.

mod add;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging entirely
    pub log_level: Option<String>,

    /// Explicit config file
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// A subscriber that is already installed is kept.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("pomdep={level}"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Main CLI structure for pomdep.
#[derive(Parser, Debug)]
#[command(
    name = "pomdep",
    about = "Add dependencies to Maven project descriptors",
    version,
    long_about = "pomdep resolves an artifact coordinate and appends it as a dependency to a project's pom.xml, like `mvn dependency:add`."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "POMDEP_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Project descriptor, or a directory containing pom.xml
    #[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a dependency to the project's pom.xml
    Add(add::AddCommand),
}

impl Cli {
    /// Execute the parsed command with settings from the global options.
    ///
    /// # Errors
    ///
    /// Whatever the command reports; see [`crate::core::PomdepError`].
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build the runtime settings from the global options.
    ///
    /// `--verbose` selects `debug`, `--quiet` disables logging, otherwise
    /// only warnings are logged.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with explicit settings instead of the parsed global options.
    ///
    /// # Errors
    ///
    /// Whatever the command reports.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Add(cmd) => cmd.execute_with_manifest_path(self.file, config.config_path),
        }
    }
}

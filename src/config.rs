//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for docshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "docshell", version, about, long_about = None)]
pub struct Config {
    /// Directory containing markdown pages
    #[arg(default_value = "pages")]
    pub source: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Creates configuration for programmatic use, with browser opening off.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            no_open: true,
            verbose: false,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source path does not exist or is not a
    /// directory, or if output would overwrite the sources.
    pub fn validate(&self) -> Result<()> {
        let source = self
            .source
            .canonicalize()
            .with_context(|| format!("Source path does not exist: {}", self.source.display()))?;
        if !source.is_dir() {
            bail!("Source path is not a directory: {}", self.source.display());
        }

        let output = self
            .output
            .canonicalize()
            .unwrap_or_else(|_| self.output.clone());
        if source == output {
            bail!(
                "Output directory must differ from source directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Default tracing filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

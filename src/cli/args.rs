//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stepstats::AppError;
use stepstats::core::Biometrics;

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Csv,
    Table,
}

#[derive(Parser)]
#[command(name = "stepstats")]
#[command(
    about = "Distance, speed and calorie summaries from step-count records",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Body weight used in calorie formulas
    #[arg(short, long, global = true)]
    pub(crate) weight: Option<f64>,

    /// Body height used in the walking calorie formula
    #[arg(short = 'H', long, global = true)]
    pub(crate) height: Option<f64>,

    /// Read records from a file, one per line ("-" reads stdin)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true, conflicts_with_all = ["csv", "table"])]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true, conflicts_with = "table")]
    pub(crate) csv: bool,

    /// Output as a table with a totals row
    #[arg(short, long, global = true)]
    pub(crate) table: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.weight.is_none() {
            self.weight = config.weight;
        }
        if self.height.is_none() {
            self.height = config.height;
        }

        // Output format from config only applies when no format flag was given
        if !self.json && !self.csv && !self.table {
            self.json = config.json;
            self.table = !config.json && config.table;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        self
    }

    pub(crate) fn biometrics(&self) -> Result<Biometrics, AppError> {
        let weight = self
            .weight
            .ok_or(AppError::MissingBiometric { name: "weight" })?;
        let height = self
            .height
            .ok_or(AppError::MissingBiometric { name: "height" })?;
        Ok(Biometrics { weight, height })
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Text
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

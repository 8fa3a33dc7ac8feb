//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Summarize daily step records ("<steps>,<duration>", e.g. "5000,1h30m")
    Day {
        /// Records to process; use `--` before records starting with '-'
        records: Vec<String>,
    },
    /// Summarize training sessions ("<steps>,<activity>,<duration>", e.g. "5000,Бег,1h")
    Training {
        /// Records to process; use `--` before records starting with '-'
        records: Vec<String>,
    },
}

/// Record layout selected by the subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    Day,
    Training,
}

impl Commands {
    pub(crate) fn kind(&self) -> RecordKind {
        match self {
            Commands::Day { .. } => RecordKind::Day,
            Commands::Training { .. } => RecordKind::Training,
        }
    }

    pub(crate) fn records(&self) -> &[String] {
        match self {
            Commands::Day { records } | Commands::Training { records } => records,
        }
    }
}

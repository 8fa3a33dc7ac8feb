pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, OutputFormat};
pub(crate) use commands::RecordKind;

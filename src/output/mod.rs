mod csv;
mod format;
mod json;
mod table;
mod text;

pub(crate) use csv::output_csv;
pub(crate) use json::output_json;
pub(crate) use table::print_table;
pub(crate) use text::{print_diagnostics, print_text};

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};
use stepstats::TrainingOutcome;
use stepstats::consts::LABEL_WALKING;
use stepstats::core::Metrics;

use crate::batch::Summary;

/// Computed values of one record, flattened for tabular output
#[derive(Debug, Clone, Copy)]
pub(super) struct MetricRow<'a> {
    pub(super) activity: &'a str,
    pub(super) steps: u64,
    pub(super) duration_hours: f64,
    pub(super) metrics: Metrics,
}

/// `None` for unknown activities, which carry no metrics
pub(super) fn metric_row(summary: &Summary) -> Option<MetricRow<'_>> {
    match summary {
        Summary::Day(day) => Some(MetricRow {
            activity: LABEL_WALKING,
            steps: day.steps,
            duration_hours: day.duration_hours,
            metrics: day.metrics,
        }),
        Summary::Training(TrainingOutcome::Completed(training)) => Some(MetricRow {
            activity: training.activity.label(),
            steps: training.steps,
            duration_hours: training.duration_hours,
            metrics: training.metrics,
        }),
        Summary::Training(TrainingOutcome::UnknownActivity(_)) => None,
    }
}

/// Metric values are always shown with two decimals
pub(super) fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

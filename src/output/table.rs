use comfy_table::{Cell, Color, Table};
use stepstats::TrainingOutcome;

use crate::batch::{ProcessedRecord, Summary};
use crate::output::format::{
    create_styled_table, format_metric, header_cell, metric_row, right_cell, styled_cell,
};

const PLACEHOLDER: &str = "-";

#[derive(Debug, Default)]
struct Totals {
    steps: u128,
    duration_hours: f64,
    distance_km: f64,
    calories: f64,
    rows: usize,
}

fn build_header(use_color: bool) -> Vec<Cell> {
    [
        "Record",
        "Activity",
        "Steps",
        "Hours",
        "Distance, km",
        "Speed, km/h",
        "Calories",
    ]
    .into_iter()
    .map(|h| header_cell(h, use_color))
    .collect()
}

pub(super) fn build_table(records: &[ProcessedRecord], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(build_header(use_color));

    let green = if use_color { Some(Color::Green) } else { None };
    let yellow = if use_color { Some(Color::Yellow) } else { None };
    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let mut totals = Totals::default();

    for record in records {
        let Ok(summary) = &record.result else {
            continue;
        };
        match metric_row(summary) {
            Some(row) => {
                totals.steps += u128::from(row.steps);
                totals.duration_hours += row.duration_hours;
                totals.distance_km += row.metrics.distance_km;
                totals.calories += row.metrics.calories;
                totals.rows += 1;

                table.add_row(vec![
                    styled_cell(&record.input, None, false),
                    styled_cell(row.activity, None, false),
                    right_cell(&row.steps.to_string(), None, false),
                    right_cell(&format_metric(row.duration_hours), None, false),
                    right_cell(&format_metric(row.metrics.distance_km), None, false),
                    right_cell(&format_metric(row.metrics.mean_speed_kmh), None, false),
                    right_cell(&format_metric(row.metrics.calories), green, false),
                ]);
            }
            None => {
                let label = match summary {
                    Summary::Training(TrainingOutcome::UnknownActivity(label)) => label.as_str(),
                    _ => "",
                };
                let mut row = vec![
                    styled_cell(&record.input, None, false),
                    styled_cell(label, yellow, false),
                ];
                row.extend((0..5).map(|_| right_cell(PLACEHOLDER, None, false)));
                table.add_row(row);
            }
        }
    }

    if totals.rows > 1 {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            styled_cell("", None, false),
            right_cell(&totals.steps.to_string(), cyan, true),
            right_cell(&format_metric(totals.duration_hours), cyan, true),
            right_cell(&format_metric(totals.distance_km), cyan, true),
            right_cell("", None, false),
            right_cell(&format_metric(totals.calories), green, true),
        ]);
    }

    table
}

pub(crate) fn print_table(records: &[ProcessedRecord], use_color: bool) {
    super::print_diagnostics(records);
    println!("\n  Activity Summary\n");
    println!("{}", build_table(records, use_color));
}

use crate::batch::{ProcessedRecord, Summary};

/// Summaries joined by blank lines; failed records are left out
pub(super) fn render_text(records: &[ProcessedRecord]) -> String {
    records
        .iter()
        .filter_map(|record| match &record.result {
            Ok(Summary::Day(summary)) => Some(summary.to_string()),
            Ok(Summary::Training(outcome)) => Some(outcome.to_string()),
            Err(_) => None,
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn print_text(records: &[ProcessedRecord]) {
    print_diagnostics(records);
    let text = render_text(records);
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Report every failed record on stderr
pub(crate) fn print_diagnostics(records: &[ProcessedRecord]) {
    for record in records {
        if let Err(err) = &record.result {
            eprintln!("{}", err.diagnostic());
        }
    }
}

#[cfg(test)]
mod tests {
    use stepstats::core::Biometrics;

    use super::*;
    use crate::batch::process_records;
    use crate::cli::RecordKind;

    const BODY: Biometrics = Biometrics {
        weight: 75.0,
        height: 175.0,
    };

    #[test]
    fn text_joins_summaries_and_skips_errors() {
        let records = vec![
            "5000,Бег,1h".to_string(),
            "oops".to_string(),
            "5000,Плавание,1h".to_string(),
        ];
        let processed = process_records(RecordKind::Training, &records, BODY);
        let text = render_text(&processed);
        assert_eq!(
            text,
            "Тип тренировки: Бег\nДлительность: 1.00 ч.\nДистанция: 3.25 км.\nСкорость: 3.25 км/ч\nСожгли калорий: 2887.50\n\nнеизвестный тип тренировки"
        );
    }

    #[test]
    fn text_empty_when_everything_fails() {
        let records = vec!["0,1h".to_string()];
        let processed = process_records(RecordKind::Day, &records, BODY);
        assert_eq!(render_text(&processed), "");
    }
}

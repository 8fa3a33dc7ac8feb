use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "stepstats-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

struct Run {
    ok: bool,
    stdout: String,
    stderr: String,
}

/// Run the binary with `home` as both HOME and the config root, so no
/// user config leaks into the test.
fn run_stepstats(args: &[&str], home: &Path) -> Run {
    let bin = std::env::var("CARGO_BIN_EXE_stepstats").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("stepstats.exe");
        } else {
            path.push("stepstats");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("run stepstats");
    Run {
        ok: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[test]
fn day_summary_text() {
    let home = unique_temp_dir("day-text");
    let run = run_stepstats(&["-w", "75", "-H", "175", "day", "5000,1h"], &home);
    assert!(run.ok, "stderr: {}", run.stderr);
    assert_eq!(
        run.stdout,
        "Количество шагов: 5000.\nДистанция составила 3.25 км.\nВы сожгли 157.61 ккал.\n"
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn training_summary_walking_example() {
    let home = unique_temp_dir("training-walking");
    let run = run_stepstats(
        &["--weight", "75", "--height", "175", "training", "3456,Ходьба,3h00m"],
        &home,
    );
    assert!(run.ok, "stderr: {}", run.stderr);
    assert_eq!(
        run.stdout,
        "Тип тренировки: Ходьба\nДлительность: 3.00 ч.\nДистанция: 2.25 км.\nСкорость: 0.75 км/ч\nСожгли калорий: 472.52\n"
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn unknown_activity_is_not_a_failure() {
    let home = unique_temp_dir("training-unknown");
    let run = run_stepstats(
        &["-w", "75", "-H", "175", "training", "5000,Плавание,1h"],
        &home,
    );
    assert!(run.ok, "stderr: {}", run.stderr);
    assert_eq!(run.stdout, "неизвестный тип тренировки\n");
    assert!(run.stderr.is_empty());

    let _ = fs::remove_dir_all(home);
}

#[test]
fn invalid_record_reports_diagnostic_and_fails() {
    let home = unique_temp_dir("day-invalid");
    let run = run_stepstats(&["-w", "75", "-H", "175", "day", "5000"], &home);
    assert!(!run.ok);
    assert!(run.stdout.is_empty());
    assert_eq!(
        run.stderr,
        "Ошибка обработки данных: invalid data format: expected 2 values, got 1, data: \"5000\"\n"
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn negative_steps_after_separator() {
    let home = unique_temp_dir("day-negative");
    let run = run_stepstats(&["-w", "75", "-H", "175", "day", "--", "-5,1h"], &home);
    assert!(!run.ok);
    assert!(
        run.stderr
            .contains("step count must be greater than zero"),
        "stderr: {}",
        run.stderr
    );

    let _ = fs::remove_dir_all(home);
}

#[test]
fn missing_biometrics_is_an_error() {
    let home = unique_temp_dir("no-biometrics");
    let run = run_stepstats(&["-w", "75", "day", "5000,1h"], &home);
    assert!(!run.ok);
    assert!(run.stderr.contains("Missing height"), "stderr: {}", run.stderr);

    let _ = fs::remove_dir_all(home);
}

#[test]
fn biometrics_from_config_file() {
    let home = unique_temp_dir("config");
    write_file(
        &home.join(".config").join("stepstats").join("config.toml"),
        "weight = 75\nheight = 175\n",
    );
    let run = run_stepstats(&["training", "5000,Бег,1h"], &home);
    assert!(run.ok, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Сожгли калорий: 2887.50"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn cli_weight_overrides_config() {
    let home = unique_temp_dir("config-override");
    write_file(&home.join(".stepstats.toml"), "weight = 50\nheight = 175\n");
    let run = run_stepstats(&["-w", "75", "training", "5000,Бег,1h"], &home);
    assert!(run.ok, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Сожгли калорий: 2887.50"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn json_output_from_record_file() {
    let home = unique_temp_dir("json-file");
    let records = home.join("records.txt");
    write_file(
        &records,
        "# session log\n5000,Бег,1h\n\n5000,Плавание,1h\n0,Бег,1h\n",
    );
    let run = run_stepstats(
        &[
            "-w",
            "75",
            "-H",
            "175",
            "training",
            "-j",
            "-f",
            records.to_str().expect("utf-8 path"),
        ],
        &home,
    );
    // One record failed validation
    assert!(!run.ok);
    assert!(run.stderr.contains("step count must be greater than zero"));

    let json: Value = serde_json::from_str(&run.stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["status"].as_str(), Some("ok"));
    assert_eq!(arr[0]["activity"].as_str(), Some("running"));
    assert_eq!(arr[0]["steps"].as_u64(), Some(5000));
    assert_eq!(arr[0]["calories"].as_f64(), Some(2887.5));
    assert_eq!(arr[1]["status"].as_str(), Some("unknown_activity"));
    assert_eq!(arr[1]["label"].as_str(), Some("Плавание"));
    assert_eq!(arr[2]["status"].as_str(), Some("error"));
    assert_eq!(arr[2]["kind"].as_str(), Some("validation"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn csv_output() {
    let home = unique_temp_dir("csv");
    let run = run_stepstats(
        &["-w", "75", "-H", "175", "--csv", "day", "5000,1h", "800,20m"],
        &home,
    );
    assert!(run.ok, "stderr: {}", run.stderr);
    let lines: Vec<&str> = run.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("record,status,activity,steps"));
    assert!(lines[1].starts_with("\"5000,1h\",ok,Ходьба,5000,1.00,3.25,3.25,157.61,"));
    assert!(lines[2].starts_with("\"800,20m\",ok,Ходьба,800,0.33,0.52,"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn table_output_has_totals() {
    let home = unique_temp_dir("table");
    let run = run_stepstats(
        &[
            "-w",
            "75",
            "-H",
            "175",
            "--table",
            "--no-color",
            "training",
            "5000,Бег,1h",
            "5000,Ходьба,1h",
        ],
        &home,
    );
    assert!(run.ok, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Activity Summary"));
    assert!(run.stdout.contains("TOTAL"));
    assert!(run.stdout.contains("2887.50"));
    assert!(!run.stdout.contains("\x1b["));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn no_records() {
    let home = unique_temp_dir("empty");
    let run = run_stepstats(&["-w", "75", "-H", "175", "day"], &home);
    assert!(run.ok, "stderr: {}", run.stderr);
    assert_eq!(run.stdout, "No records to process.\n");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn debug_writes_details_to_stderr() {
    let home = unique_temp_dir("debug");
    let run = run_stepstats(
        &["-w", "75", "-H", "175", "--debug", "training", "5000,Бег,1h"],
        &home,
    );
    assert!(run.ok, "stderr: {}", run.stderr);
    assert!(run.stderr.contains("Parsed training record"));
    assert!(run.stderr.contains("Processed 1 records, 0 failed"));
    assert!(run.stdout.starts_with("Тип тренировки: Бег"));

    let _ = fs::remove_dir_all(home);
}

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn clock_cmd() -> Command {
    let mut cmd = Command::cargo_bin("clock-interval").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect()
}

#[test]
fn formats_arguments_with_default_units() {
    clock_cmd()
        .args(["format", "37489.632", "65"])
        .assert()
        .success()
        .stdout("10:24:49\n0:01:05\n");
}

#[test]
fn formats_negative_values_with_selected_units() {
    clock_cmd()
        .args(["format", "--units", "min-sec", "-65", "3723"])
        .assert()
        .success()
        .stdout("-01:05\n62:03\n");
}

#[test]
fn formats_milliseconds() {
    clock_cmd()
        .args(["format", "-u", "hour-min-sec-ms", "37489.632"])
        .assert()
        .success()
        .stdout("10:24:49.632\n");
}

#[test]
fn parses_arguments() {
    clock_cmd()
        .args(["parse", "--", "10:24:49.632", "-01:05", "1:02:03.4567"])
        .assert()
        .success()
        .stdout("37489.632\n-65\n3723.456\n");
}

#[test]
fn parse_humanize_appends_readable_duration() {
    clock_cmd()
        .args(["parse", "--humanize", "1:02:03"])
        .assert()
        .success()
        .stdout("3723\t1h 2m 3s\n");
}

#[test]
fn reads_stdin_when_no_values_given() {
    clock_cmd()
        .args(["parse"])
        .write_stdin("01:05\n\n0:75:00\n")
        .assert()
        .success()
        .stdout("65\n\n4500\n");
}

#[test]
fn failures_exit_non_zero_but_convert_the_rest() {
    clock_cmd()
        .args(["parse", "1:2:3:4:5", "01:05"])
        .assert()
        .code(1)
        .stdout("65\n")
        .stderr(predicate::str::contains("\"1:2:3:4:5\""))
        .stderr(predicate::str::contains("too many fields"));
}

#[test]
fn strict_mode_rejects_overflowing_minutes() {
    clock_cmd()
        .args(["parse", "--strict", "2:75:00"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));

    clock_cmd()
        .args(["parse", "2:75:00"])
        .assert()
        .success()
        .stdout("11700\n");
}

#[test]
fn flags_after_values_take_effect() {
    clock_cmd()
        .args(["parse", "2:75:00", "--strict"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("\"--strict\"").not());

    let output = clock_cmd()
        .args(["parse", "1:02:03", "--humanize", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json_lines(&output.stdout),
        vec![json!({"status": "parsed", "input": "1:02:03", "seconds": 3723.0, "human": "1h 2m 3s"})]
    );
}

#[test]
fn negative_clock_strings_need_the_separator() {
    clock_cmd()
        .args(["parse", "-01:05"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn json_output_has_one_record_per_input() {
    let output = clock_cmd()
        .args(["--json", "parse", "--", "-01:05", "nope", ""])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let records = json_lines(&output.stdout);
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        json!({"status": "parsed", "input": "-01:05", "seconds": -65.0})
    );
    assert_eq!(records[1]["status"], "error");
    assert_eq!(records[1]["input"], "nope");
    assert_eq!(records[2], json!({"status": "absent", "input": ""}));
}

#[test]
fn json_format_records_carry_text() {
    let output = clock_cmd()
        .args(["format", "--json", "--units", "min-sec-ms", "3723.25"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json_lines(&output.stdout),
        vec![json!({"status": "formatted", "input": "3723.25", "seconds": 3723.25, "text": "62:03.250"})]
    );
}

#[test]
fn rejects_unknown_units() {
    clock_cmd()
        .args(["format", "--units", "fortnights", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    clock_cmd()
        .env_remove("RUST_LOG")
        .args(["--verbose", "format", "1"])
        .assert()
        .success()
        .stdout("0:00:01\n")
        .stderr(predicate::str::contains("Configuration loaded"));
}

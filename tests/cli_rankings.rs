use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const COMMUNES: &str = "\
Commune,Region,Irradiation annuelle (kWh/m²)
A,R1,1500
B,R1,1600
C,R2,1400
";

fn run_rankings(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_irradiation_rankings"))
        .current_dir(workdir)
        .env("RUST_LOG", "info")
        .args(args)
        .output()
        .expect("binary should start")
}

fn workspace_with_input(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("communes.csv"), contents).expect("write input");
    dir
}

#[test]
fn end_to_end_writes_both_rankings() {
    let dir = workspace_with_input(COMMUNES);
    let output = run_rankings(
        dir.path(),
        &["--input", "communes.csv", "--output-dir", "out", "--top-n", "2"],
    );
    assert!(output.status.success(), "{output:?}");

    let top = fs::read_to_string(dir.path().join("out/top_2_communes_irradiation.csv"))
        .expect("top ranking written");
    let mut reader = csv::Reader::from_reader(top.as_bytes());
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| {
            record
                .expect("valid record")
                .iter()
                .map(ToOwned::to_owned)
                .collect()
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["1", "B", "R1", "1600"],
            vec!["2", "A", "R1", "1500"],
        ]
    );

    let regional = fs::read_to_string(dir.path().join("out/classement_regional_irradiation.csv"))
        .expect("regional ranking written");
    assert_eq!(
        regional,
        "Region,Moyenne,Médiane,Écart-type,Nb_communes\n\
         R1,1550.0,1550.0,70.71,2\n\
         R2,1400.0,1400.0,,1\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loaded irradiation data"));
    assert!(stdout.contains("ranking generation complete"));
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = workspace_with_input(COMMUNES);
    for target in ["first", "second"] {
        let output = run_rankings(dir.path(), &["--input", "communes.csv", "--output-dir", target]);
        assert!(output.status.success(), "{output:?}");
    }

    for file in [
        "top_50_communes_irradiation.csv",
        "classement_regional_irradiation.csv",
    ] {
        let first = fs::read(dir.path().join("first").join(file)).expect("first run output");
        let second = fs::read(dir.path().join("second").join(file)).expect("second run output");
        assert_eq!(first, second, "{file} differs between runs");
    }
}

#[test]
fn missing_irradiation_column_skips_top_ranking_and_exits_zero() {
    let dir = workspace_with_input("Commune,Region\nA,R1\nB,R2\n");
    let output = run_rankings(dir.path(), &["--input", "communes.csv", "--output-dir", "out"]);

    assert!(output.status.success(), "{output:?}");
    let written: Vec<_> = fs::read_dir(dir.path().join("out"))
        .expect("output dir created")
        .collect();
    assert!(written.is_empty());
}

#[test]
fn missing_input_exits_non_zero_and_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_rankings(
        dir.path(),
        &["--input", "does-not-exist.csv", "--output-dir", "out"],
    );

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("does-not-exist.csv"), "{stdout}");

    let out_dir = dir.path().join("out");
    let report_count = fs::read_dir(&out_dir).map(|entries| entries.count()).unwrap_or(0);
    assert_eq!(report_count, 0);
}

#[test]
fn malformed_input_exits_non_zero() {
    let dir = workspace_with_input("Commune,Region\nA,R1,1500,extra\n");
    let output = run_rankings(dir.path(), &["--input", "communes.csv", "--output-dir", "out"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("expected 2 fields"), "{stdout}");
}

#[test]
fn negative_top_n_writes_empty_ranking_and_keeps_regional() {
    let dir = workspace_with_input(COMMUNES);
    let output = run_rankings(
        dir.path(),
        &["--input", "communes.csv", "--output-dir", "out", "--top-n", "-3"],
    );
    assert!(output.status.success(), "{output:?}");

    let top = fs::read_to_string(dir.path().join("out/top_-3_communes_irradiation.csv"))
        .expect("top ranking written");
    let mut reader = csv::Reader::from_reader(top.as_bytes());
    assert_eq!(reader.records().count(), 0);
    assert!(dir.path().join("out/classement_regional_irradiation.csv").is_file());
}

#[test]
fn failed_report_write_does_not_stop_remaining_reports() {
    let dir = workspace_with_input(COMMUNES);
    fs::create_dir_all(dir.path().join("out/top_50_communes_irradiation.csv"))
        .expect("blocking directory");

    let output = run_rankings(dir.path(), &["--input", "communes.csv", "--output-dir", "out"]);
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("out/classement_regional_irradiation.csv").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed to save ranking"), "{stdout}");
    assert!(stdout.contains("ranking generation complete"), "{stdout}");
}

#[test]
fn argument_errors_are_reported_on_stdout() {
    let dir = workspace_with_input(COMMUNES);
    let output = run_rankings(dir.path(), &["--input", "communes.csv", "--top-n", "many"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid command-line arguments"), "{stdout}");
}

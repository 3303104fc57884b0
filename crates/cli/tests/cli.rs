use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fasta(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn bactalign() -> Command {
    Command::cargo_bin("bactalign").unwrap()
}

#[test]
fn test_run_writes_reports() {
    let temp = tempdir().unwrap();
    let input = write_fasta(
        temp.path(),
        "input.fasta",
        ">seq1\nMKVLATGG\n>seq2\nMKATG\n>seq3\nMVLATG\n",
    );
    let out = temp.path().join("results");

    bactalign()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--runs")
        .arg("3")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 runs complete!"));

    for run in 1..=3 {
        let alignment = fs::read_to_string(out.join(format!("alignment_run_{run}.fasta"))).unwrap();
        assert!(alignment.starts_with(">seq1\n"));
        assert_eq!(alignment.matches('>').count(), 3);
    }

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("run,best_index,fitness,substitution_score"));

    let statistics = fs::read_to_string(out.join("statistics.csv")).unwrap();
    assert!(statistics.starts_with("metric,count,mean,std,min,max"));
    assert!(statistics.contains("fitness,3,"));

    let config = fs::read_to_string(out.join("config.json")).unwrap();
    assert!(config.contains("\"seed\": 7"));
}

#[test]
fn test_run_overrides_config_file() {
    let temp = tempdir().unwrap();
    let input = write_fasta(temp.path(), "input.fasta", ">a\nMKV\n>b\nMV\n");
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"population_size": 6, "iterations": 5}"#).unwrap();
    let out = temp.path().join("out");

    bactalign()
        .arg("run")
        .arg("-i")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("--iterations")
        .arg("2")
        .arg("--no-profile")
        .arg("--runs")
        .arg("1")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 6"))
        .stdout(predicate::str::contains("Iterations: 2"))
        .stdout(predicate::str::contains("Conservation Profile: Disabled"));

    // 6 candidates scored in each of 2 iterations
    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let row: Vec<&str> = summary.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(row[5], "12");
}

#[test]
fn test_run_rejects_zero_population() {
    let temp = tempdir().unwrap();
    let input = write_fasta(temp.path(), "input.fasta", ">a\nMKV\n");

    bactalign()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--population-size")
        .arg("0")
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid optimizer configuration"));
}

#[test]
fn test_run_missing_input() {
    let temp = tempdir().unwrap();

    bactalign()
        .arg("run")
        .arg("--input")
        .arg(temp.path().join("missing.fasta"))
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read sequences"));
}

#[test]
fn test_score_alignment() {
    let temp = tempdir().unwrap();
    let input = write_fasta(temp.path(), "aligned.fasta", ">x\nAAAA\n>y\nAAAT\n");

    bactalign()
        .arg("score")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns: 4"))
        .stdout(predicate::str::contains("Substitution score: 12"));
}

#[test]
fn test_score_gap_penalty() {
    let temp = tempdir().unwrap();
    let input = write_fasta(temp.path(), "aligned.fasta", ">x\nAA-\n>y\nAAA\n");

    // 2 * score(A,A) + penalty for (-,A)
    bactalign()
        .arg("score")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Substitution score: 0"));
}

#[test]
fn test_config_default_json() {
    bactalign()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"population_size\": 4"))
        .stdout(predicate::str::contains("\"tumble_count\": 2"));
}

#[test]
fn test_config_to_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("defaults.json");

    bactalign()
        .arg("config")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"iterations\": 3"));
    assert!(!json.contains("seed"));
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

const FASTA: &str = ">heavy first chain\nEVQLVESGGG\n>light\nDIQMTQ\nSPSS\n";

fn sforge() -> Command {
    Command::cargo_bin("sforge").unwrap()
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.fasta"), FASTA).unwrap();
    dir
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn json_writes_one_file_per_combination() {
    let dir = workspace();

    sforge()
        .current_dir(dir.path())
        .args(["json", "input.fasta", "2A1B", "-d", "jobs"])
        .assert()
        .success();

    let out = dir.path().join("jobs");
    assert_eq!(
        file_names(&out),
        ["1heavy_1light.json", "2heavy_1light.json"]
    );

    let text = fs::read_to_string(out.join("2heavy_1light.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["heavy"]["chain_names"], serde_json::json!(["A", "B"]));
    assert_eq!(value["light"]["chain_names"], serde_json::json!(["C"]));
    assert_eq!(value["light"]["sequence"], "DIQMTQSPSS");
    assert_eq!(value["light"]["start_res"], 1);
    assert!(text.ends_with('}'));
}

#[test]
fn json_uniform_copies_only() {
    let dir = workspace();

    sforge()
        .current_dir(dir.path())
        .args(["json", "input.fasta", "2A2B", "-u", "-d", "jobs"])
        .assert()
        .success();

    assert_eq!(
        file_names(&dir.path().join("jobs")),
        ["1heavy_1light.json", "2heavy_2light.json"]
    );
}

#[test]
fn json_reports_summary_when_not_interactive() {
    let dir = workspace();

    let output = sforge()
        .current_dir(dir.path())
        .args(["json", "input.fasta", "1A1B"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Generated 1 JSON files in json_output"));
    assert!(dir.path().join("json_output/1heavy_1light.json").is_file());
}

#[test]
fn json_rejects_malformed_stoichiometry() {
    let dir = workspace();

    sforge()
        .current_dir(dir.path())
        .args(["json", "input.fasta", "1A0B"])
        .assert()
        .failure();

    assert!(!dir.path().join("json_output").exists());
}

#[test]
fn json_rejects_too_many_records() {
    let dir = tempfile::tempdir().unwrap();
    let fasta: String = (0..27).map(|i| format!(">s{i}\nM\n")).collect();
    fs::write(dir.path().join("many.fasta"), fasta).unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["json", "many.fasta", "1A"])
        .assert()
        .failure();
}

#[test]
fn multisets_without_templates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.fasta"), ">X\nMKV\n>Y\nGSS\n").unwrap();

    sforge()
        .current_dir(dir.path())
        .args([
            "multisets",
            "input.fasta",
            "--min-size",
            "2",
            "--max-size",
            "2",
            "-d",
            "out",
        ])
        .assert()
        .success();

    let job_dir = dir.path().join("out/no_template");
    assert_eq!(
        file_names(&job_dir),
        [
            "1X_1Y_no_template.fasta",
            "2X_no_template.fasta",
            "2Y_no_template.fasta",
            "unique_combinations_no_template.tsv",
        ]
    );

    let fasta = fs::read_to_string(job_dir.join("2X_no_template.fasta")).unwrap();
    assert_eq!(
        fasta,
        ">2X_no_template_X_1\nMKV\n>2X_no_template_X_2\nMKV\n"
    );

    let table = fs::read_to_string(job_dir.join("unique_combinations_no_template.tsv")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "job_name\ttype\tid\tsequence");
    assert_eq!(lines.len(), 7);
    assert!(lines.contains(&"1X_1Y_no_template\tprotein\t1X_1Y_no_template_Y\tGSS"));
}

#[test]
fn multisets_one_directory_per_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.fasta"), ">X\nMKV\n").unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("model-1.pdb"), "END\n").unwrap();
    fs::write(templates.join("notes.txt"), "").unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["multisets", "input.fasta", "--max-size", "3", "-o", "table.tsv"])
        .assert()
        .success();

    assert_eq!(
        file_names(&dir.path().join("model_1")),
        [
            "2X_model_1.fasta",
            "3X_model_1.fasta",
            "table_model_1.tsv"
        ]
    );
    assert!(!dir.path().join("no_template").exists());
}

#[test]
fn multisets_rejects_empty_size_range() {
    let dir = workspace();

    sforge()
        .current_dir(dir.path())
        .args(["multisets", "input.fasta", "--min-size", "4", "--max-size", "3"])
        .assert()
        .failure();
}

#[test]
fn multisets_help_mentions_size_range_error() {
    let output = sforge()
        .args(["multisets", "--help"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let help = String::from_utf8(output).unwrap();
    assert!(help.contains("above --max-size is an error"));
}

#[test]
fn multisets_keeps_non_ascii_sequences_intact() {
    let dir = tempfile::tempdir().unwrap();
    let sequence = "é".repeat(70);
    fs::write(dir.path().join("input.fasta"), format!(">X\n{sequence}\n")).unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["multisets", "input.fasta", "--max-size", "2", "-d", "out"])
        .assert()
        .success();

    let fasta = fs::read_to_string(dir.path().join("out/no_template/2X_no_template.fasta")).unwrap();
    let wrapped: String = fasta
        .lines()
        .filter(|line| !line.starts_with('>'))
        .collect();
    assert_eq!(wrapped, sequence.repeat(2));
}

#[test]
fn chains_prints_disjoint_mapping() {
    sforge()
        .args(["chains", "1A1B2C"])
        .assert()
        .success()
        .stdout("A B C C - a b c d\n");
}

#[test]
fn chains_prints_sequential_mapping() {
    sforge()
        .args(["chains", "1A1B2C", "--policy", "sequential"])
        .assert()
        .success()
        .stdout("A B C C - A B C D\n");
}

#[test]
fn chains_rejects_basename_without_tokens() {
    sforge().args(["chains", "model"]).assert().failure();
}

#[test]
fn setup_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("workflow.toml"),
        "output_dir = \"results/final\"\ntmp_dir = \"scratch\"\n",
    )
    .unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["setup", "workflow.toml"])
        .assert()
        .success();

    assert!(dir.path().join("results/final").is_dir());
    assert!(dir.path().join("scratch").is_dir());
}

#[test]
fn setup_reads_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.yaml"),
        "output_dir: results/final\ntmp_dir: scratch\nthreads: 8\n",
    )
    .unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["setup", "config.yaml"])
        .assert()
        .success();

    assert!(dir.path().join("results/final").is_dir());
    assert!(dir.path().join("scratch").is_dir());
}

#[test]
fn setup_requires_both_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("workflow.toml"), "output_dir = \"results\"\n").unwrap();

    sforge()
        .current_dir(dir.path())
        .args(["setup", "workflow.toml"])
        .assert()
        .failure();

    assert!(!dir.path().join("results").exists());
}

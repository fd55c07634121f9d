use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("MicroarrayExpression.csv"),
        "P1,25.0,10.0\nP2,3.0,4.0\n",
    )
    .unwrap();
    fs::write(
        dir.join("Probes.csv"),
        "probe_id,probe_name,gene_id,gene_symbol,gene_name,entrez_id,chromosome\n\
P1,p_1,G100,GENE_A,GENE_A,101,1\n\
P2,p_2,G100,GENE_A,GENE_A,101,1\n",
    )
    .unwrap();
    fs::write(
        dir.join("SampleAnnot.csv"),
        "structure_id,slab_num,well_id,slab_type,structure_acronym,structure_name\n\
4077,1,w1,cx,STRA,Structure Alpha\n\
4183,1,w2,cx,STRB,Structure Beta\n",
    )
    .unwrap();
}

fn microcmp() -> Command {
    Command::cargo_bin("microcmp").unwrap()
}

#[test]
fn run_prints_the_comparison_report() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    let assert = microcmp()
        .args(["STRA", "STRB", "--cutoff", "15", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Cutoff: 15"), "stdout: {}", stdout);
    assert!(stdout.contains("STRA (Structure Alpha, structure 4077)"));
    assert!(stdout.contains("Shared probes (0): none"));
    assert!(stdout.contains("Probes unique in Structure Alpha (1): P1"));
    assert!(stdout.contains("Probes unique in Structure Beta (0): none"));
    // PACall.csv is absent, so the run warns and proceeds uncorrected
    assert!(stdout.contains("warnings:"));
}

#[test]
fn run_writes_a_json_report() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());
    let json_path = tmp.path().join("report.json");

    microcmp()
        .args(["STRA", "STRB", "--cutoff", "15", "--data-dir"])
        .arg(tmp.path())
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(report["tool"], "microcmp");
    assert_eq!(report["schema_version"], "v1");
    assert_eq!(report["cutoff"], 15.0);
    assert_eq!(report["input_meta"]["n_probes"], 2);
    assert_eq!(report["input_meta"]["n_candidates"], 1);
    assert_eq!(report["input_meta"]["background_corrected"], false);
    assert_eq!(report["structures"][0]["acronym"], "STRA");
    assert_eq!(report["structures"][0]["n_samples"], 1);
    assert_eq!(report["shared"]["count"], 0);
    assert_eq!(report["unique"][0]["count"], 1);
    assert_eq!(report["unique"][0]["probes"][0], "P1");
    assert_eq!(report["unique"][1]["count"], 0);
}

#[test]
fn run_respects_config_file_paths() {
    let data = TempDir::new().unwrap();
    write_fixture(data.path());
    let config_path = data.path().join("config.yaml");
    fs::write(
        &config_path,
        format!("data_dir: {}\ncutoff: 15\n", data.path().display()),
    )
    .unwrap();

    let assert = microcmp()
        .args(["STRA", "STRB", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Cutoff: 15"), "stdout: {}", stdout);
    assert!(stdout.contains("Probes unique in Structure Alpha (1): P1"));
}

#[test]
fn unknown_structure_fails_cleanly() {
    let tmp = TempDir::new().unwrap();
    write_fixture(tmp.path());

    let assert = microcmp()
        .args(["STRA", "NOPE", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("'NOPE'"), "stderr: {}", stderr);
    // failure produces no partial report
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains("Shared probes"));
}

use assert_cmd::Command;

fn microcmp() -> Command {
    Command::cargo_bin("microcmp").unwrap()
}

#[test]
fn one_acronym_is_rejected() {
    microcmp().arg("LHM").assert().failure();
}

#[test]
fn three_acronyms_are_rejected() {
    microcmp().args(["LHM", "PHA", "XYZ"]).assert().failure();
}

#[test]
fn overlong_acronym_is_rejected_with_guidance() {
    let assert = microcmp().args(["NOTANACRONYM", "PHA"]).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("structure acronyms"), "stderr: {}", stderr);
}

#[test]
fn non_integer_cutoff_is_rejected() {
    microcmp()
        .args(["LHM", "PHA", "--cutoff", "high"])
        .assert()
        .failure();
}

#[test]
fn missing_inputs_fail_with_the_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let assert = microcmp()
        .args(["LHM", "PHA", "--data-dir"])
        .arg(tmp.path())
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("MicroarrayExpression.csv"),
        "stderr: {}",
        stderr
    );
}

use std::fs;

use microcmp::io::expression::read_expression;
use microcmp::io::presence::read_presence;
use microcmp::structure::filter::qualifying_probes;
use tempfile::TempDir;

fn matrix_from(content: &str) -> microcmp::io::expression::ExpressionMatrix {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("expr.csv");
    fs::write(&path, content).unwrap();
    read_expression(&path).unwrap().0
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cutoff_is_inclusive() {
    let matrix = matrix_from("P1,15.0\nP2,14.999\n");
    let qualifying =
        qualifying_probes(&ids(&["P1", "P2"]), &matrix, &[1], 15.0, None).unwrap();
    assert_eq!(qualifying, vec!["P1".to_string()]);
}

#[test]
fn one_sample_at_cutoff_is_enough() {
    let matrix = matrix_from("P1,0.0,20.0,3.0\n");
    let qualifying = qualifying_probes(&ids(&["P1"]), &matrix, &[1, 2, 3], 15.0, None).unwrap();
    assert_eq!(qualifying, vec!["P1".to_string()]);
}

#[test]
fn only_the_structures_columns_are_considered() {
    let matrix = matrix_from("P1,20.0,1.0\n");
    let qualifying = qualifying_probes(&ids(&["P1"]), &matrix, &[2], 15.0, None).unwrap();
    assert!(qualifying.is_empty());
}

#[test]
fn all_zero_probe_is_excluded_even_at_cutoff_zero() {
    let matrix = matrix_from("P1,0.0,0.0\nP2,0.0,1.0\n");
    let qualifying =
        qualifying_probes(&ids(&["P1", "P2"]), &matrix, &[1, 2], 0.0, None).unwrap();
    assert_eq!(qualifying, vec!["P2".to_string()]);
}

#[test]
fn mask_zeroes_values_for_the_decision() {
    let tmp = TempDir::new().unwrap();
    let pacall = tmp.path().join("pacall.csv");
    fs::write(&pacall, "P1,0,1\n").unwrap();
    let mask = read_presence(&pacall).unwrap();

    let matrix = matrix_from("P1,20.0,2.0\n");
    // column 1 is masked out, so the 20.0 never reaches the cutoff test
    let qualifying =
        qualifying_probes(&ids(&["P1"]), &matrix, &[1], 15.0, Some(&mask)).unwrap();
    assert!(qualifying.is_empty());

    // the stored matrix is untouched: filtering the other column still
    // sees its real value
    let qualifying =
        qualifying_probes(&ids(&["P1"]), &matrix, &[2], 2.0, Some(&mask)).unwrap();
    assert_eq!(qualifying, vec!["P1".to_string()]);
}

#[test]
fn fully_masked_probe_is_excluded_regardless_of_cutoff() {
    let tmp = TempDir::new().unwrap();
    let pacall = tmp.path().join("pacall.csv");
    fs::write(&pacall, "P1,0,0\n").unwrap();
    let mask = read_presence(&pacall).unwrap();

    let matrix = matrix_from("P1,20.0,30.0\n");
    let qualifying =
        qualifying_probes(&ids(&["P1"]), &matrix, &[1, 2], 0.0, Some(&mask)).unwrap();
    assert!(qualifying.is_empty());
}

#[test]
fn probe_absent_from_mask_is_treated_as_present() {
    let tmp = TempDir::new().unwrap();
    let pacall = tmp.path().join("pacall.csv");
    fs::write(&pacall, "P9,0,0\n").unwrap();
    let mask = read_presence(&pacall).unwrap();

    let matrix = matrix_from("P1,20.0,2.0\n");
    let qualifying =
        qualifying_probes(&ids(&["P1"]), &matrix, &[1], 15.0, Some(&mask)).unwrap();
    assert_eq!(qualifying, vec!["P1".to_string()]);
}

#[test]
fn unknown_candidate_is_an_error() {
    let matrix = matrix_from("P1,1.0\n");
    let err = qualifying_probes(&ids(&["P9"]), &matrix, &[1], 1.0, None).unwrap_err();
    assert!(err.to_string().contains("'P9'"));
}

#[test]
fn out_of_range_column_is_an_error() {
    let matrix = matrix_from("P1,1.0\n");
    let err = qualifying_probes(&ids(&["P1"]), &matrix, &[5], 1.0, None).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

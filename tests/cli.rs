use assert_cmd::prelude::*;
use predicates::str::{contains, is_empty, starts_with};
use std::process::Command;

fn nucmotif() -> Command {
    Command::cargo_bin("nucmotif").unwrap()
}

#[test]
fn cli_no_args() {
    nucmotif().assert().failure();
}

#[test]
fn cli_count_missing_corpus() {
    let dir = tempfile::tempdir().unwrap();
    nucmotif()
        .current_dir(dir.path())
        .arg("count")
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("nucleotide_database.txt"));
}

#[test]
fn cli_count_prints_best_motif() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("db.txt");
    std::fs::write(&corpus, "ACGTCGTAGT\nCGTAAACGTT\n").unwrap();

    nucmotif()
        .args(["count", "-s", "3"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout("The best motif is: CGT\n");
}

#[test]
fn cli_count_top_lists_ranked_motifs() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("db.txt");
    std::fs::write(&corpus, "AAAA\nAAC\n").unwrap();

    nucmotif()
        .args(["count", "-s", "2", "--top", "2"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout("The best motif is: AA\nAA\t4\nAC\t1\n");
}

#[test]
fn cli_generate_then_count() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("db.txt");

    nucmotif()
        .args(["generate", "-n", "200", "-m", "30", "--seed", "11", "-o"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout(contains("sequences drawn: 200"));

    let text = std::fs::read_to_string(&corpus).unwrap();
    assert!(text.lines().count() > 150);
    assert!(text.lines().all(|l| l.len() == 30));

    nucmotif()
        .args(["count", "-s", "2"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout(starts_with("The best motif is: "));
}

#[test]
fn cli_generate_degenerate_distribution_writes_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("db.txt");

    nucmotif()
        .args(["generate", "-n", "10", "-m", "4", "-p", "1,0,0,0", "-o"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout(contains("sequences written: 0"));

    assert!(std::fs::read(&corpus).unwrap().is_empty());
}

#[test]
fn cli_generate_rejects_wrong_number_of_weights() {
    let dir = tempfile::tempdir().unwrap();
    nucmotif()
        .args(["generate", "-n", "1", "-p", "0.5,0.5", "-o"])
        .arg(dir.path().join("db.txt"))
        .assert()
        .failure()
        .stderr(contains("4 comma-separated weights"));
}

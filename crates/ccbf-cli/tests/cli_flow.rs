use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn ccbf() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ccbf"))
}

#[test]
fn build_then_check() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("dict.txt");
    let filter = tmp.path().join("words.bf");
    std::fs::write(&dict, "Apple\nbanana\n\ncherry\n").unwrap();

    ccbf()
        .arg("build")
        .arg(&dict)
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words inserted: 3"))
        .stdout(predicate::str::contains("Hash functions: 7"));

    ccbf()
        .arg("check")
        .arg("--filter")
        .arg(&filter)
        .args(["APPLE", " banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"APPLE\": probably correct"))
        .stdout(predicate::str::contains("All words are probably correct."));
}

#[test]
fn build_writes_header_and_bits() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("dict.txt");
    let filter = tmp.path().join("out.bf");
    let words: String = (0..1000).map(|i| format!("word{}\n", i)).collect();
    std::fs::write(&dict, words).unwrap();

    ccbf()
        .arg("build")
        .arg(&dict)
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bit array size: 9586 bits (1199 bytes)"))
        .stdout(predicate::str::contains("Output file size: 1211 bytes"));

    let bytes = std::fs::read(&filter).unwrap();
    assert_eq!(&bytes[..4], b"CCBF");
    assert_eq!(bytes.len(), 1211);
}

#[test]
fn build_json_statistics() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("dict.txt");
    let filter = tmp.path().join("words.bf");
    std::fs::write(&dict, "one\ntwo\nthree\n").unwrap();

    let output = ccbf()
        .arg("build")
        .arg(&dict)
        .arg(&filter)
        .args(["--fpr", "0.1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"words_inserted\": 3"));
    assert!(stdout.contains("\"bit_count\": 15"));
}

#[test]
fn build_rejects_empty_dictionary() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("empty.txt");
    std::fs::write(&dict, "\n\n").unwrap();

    ccbf()
        .arg("build")
        .arg(&dict)
        .arg(tmp.path().join("words.bf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary contains no words"));
}

#[test]
fn check_rejects_foreign_file() {
    let tmp = tempdir().expect("tempdir");
    let bogus = tmp.path().join("bogus.bf");
    std::fs::write(&bogus, "not a bloom filter").unwrap();

    ccbf()
        .args(["check", "--filter"])
        .arg(&bogus)
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing CCBF signature"));
}

#[test]
fn check_reports_unsupported_version() {
    let tmp = tempdir().expect("tempdir");
    let future = tmp.path().join("future.bf");
    let mut bytes = b"CCBF".to_vec();
    bytes.extend_from_slice(&2u16.to_be_bytes());
    bytes.extend_from_slice(&3u16.to_be_bytes());
    bytes.extend_from_slice(&8u32.to_be_bytes());
    bytes.push(0);
    std::fs::write(&future, bytes).unwrap();

    ccbf()
        .args(["check", "--filter"])
        .arg(&future)
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported version: 2"));
}

#[test]
fn check_requires_words() {
    ccbf().arg("check").assert().failure();
}

#[test]
fn inspect_shows_header() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("dict.txt");
    let filter = tmp.path().join("words.bf");
    std::fs::write(&dict, "alpha\nbeta\n").unwrap();

    ccbf().arg("build").arg(&dict).arg(&filter).assert().success();

    ccbf()
        .arg("inspect")
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("Format version: 1"))
        .stdout(predicate::str::contains("Bit array size: 20 bits"));
}

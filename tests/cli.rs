use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn no_flags_prints_usage_and_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    cargo_bin_cmd!("wpjson-scrape")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Debes proporcionar una URL (-u) o un archivo (-f) como entrada.\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_target_file_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    cargo_bin_cmd!("wpjson-scrape")
        .current_dir(dir.path())
        .args(["-f", "missing.txt"])
        .assert()
        .success()
        .stdout(contains("Error al abrir el archivo:"));
}

#[test]
fn unreachable_target_succeeds_without_files() {
    let dir = TempDir::new().expect("temp dir");
    cargo_bin_cmd!("wpjson-scrape")
        .current_dir(dir.path())
        .args(["-u", "ftp://example.com", "-o", "none"])
        .assert()
        .success()
        .stdout(contains("Error al raspar los datos:"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn help_lists_flags() {
    cargo_bin_cmd!("wpjson-scrape")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("-u"))
        .stdout(contains("-f"))
        .stdout(contains("--output-dir"));
}

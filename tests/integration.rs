use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::Command;

use expect_test::expect_file;
use walkdir::WalkDir;

fn find_flags_in_first_line(input_path: &Path) -> Vec<String> {
    let first_line = BufReader::new(File::open(input_path).unwrap())
        .lines()
        .next()
        .unwrap()
        .unwrap();
    if let Some(pos) = first_line.find("flags: ") {
        first_line[pos + 7..]
            .split_ascii_whitespace()
            .map(ToOwned::to_owned)
            .collect()
    } else {
        vec![]
    }
}

fn check_output(input_file: impl AsRef<Path>, expected_output_file: impl AsRef<Path>) {
    let input_path = input_file.as_ref();
    let binary_path = env!("CARGO_BIN_EXE_ivsolve");
    let mut command = Command::new(binary_path);
    command.env("RUST_BACKTRACE", "1").arg(input_path);
    command.args(find_flags_in_first_line(input_path));
    let output = command.output().unwrap();
    if !output.status.success() {
        panic!(
            "The command {:?} failed with the following output: {}",
            command,
            String::from_utf8(output.stderr).unwrap()
        )
    }
    let output = String::from_utf8(output.stdout).unwrap();
    let expected_output = expect_file![expected_output_file.as_ref()];
    expected_output.assert_eq(&output);
}

fn check_dir(dir: &str) {
    let mut count = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        // Every ".sys" file needs a sibling ".expect" file
        if path.extension() == Some("sys".as_ref()) {
            println!("Testing {} ...", path.display());
            let expect_path = path.with_extension("expect");
            check_output(path, &expect_path);
            count += 1;
        }
    }
    assert!(count > 0, "No tests were run in {dir}!");
}

fn check_test_dir(dir: &str) {
    let test_dir = format!("{}/tests/systems/{dir}", env!("CARGO_MANIFEST_DIR"));
    check_dir(&test_dir);
}

/// Runs the binary on `contents` and returns its exit status and stderr.
fn run_failing(name: &str, contents: &str, flags: &[&str]) -> (bool, String) {
    let path = std::env::temp_dir().join(format!("ivsolve-{}-{name}.sys", std::process::id()));
    File::create(&path)
        .unwrap()
        .write_all(contents.as_bytes())
        .unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_ivsolve"))
        .arg(&path)
        .args(flags)
        .output()
        .unwrap();
    std::fs::remove_file(&path).unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn expect_tests_dense() {
    check_test_dir("dense");
}

#[test]
fn expect_tests_tridiagonal() {
    check_test_dir("tridiagonal");
}

#[test]
fn degenerate_pivot_fails() {
    let system = "dense\n [-1, 1] 1 | 1\n [-0.5, 0.5] 2 | 1\n";
    let (success, stderr) = run_failing("degenerate", system, &[]);
    assert!(!success);
    assert!(stderr.contains("contains zero"), "{stderr}");
}

#[test]
fn legacy_division_reaches_back_substitution() {
    let system = "dense\n [-1, 1] 1 | 1\n [-0.5, 0.5] 2 | 1\n";
    let (success, stderr) = run_failing("legacy", system, &["--legacy-division"]);
    assert!(!success);
    assert!(stderr.contains("singular"), "{stderr}");
}

#[test]
fn sweep_rejects_dense_systems() {
    let (success, stderr) = run_failing("sweep", "dense\n 1 | 1\n", &["--method", "sweep"]);
    assert!(!success);
    assert!(stderr.contains("tridiagonal"), "{stderr}");
}

#[test]
fn nonstandard_requires_interval_sweep() {
    let system = "dense\n 2 1 | 1\n 1 2 | 1\n";
    let (success, stderr) = run_failing("nonstandard", system, &["--nonstandard"]);
    assert!(!success);
    assert!(stderr.contains("interval-sweep"), "{stderr}");
    let (success, _) = run_failing(
        "nonstandard-householder",
        system,
        &["--method", "householder", "--nonstandard"],
    );
    assert!(!success);
}

#[test]
fn non_finite_entries_are_syntax_errors() {
    let (success, stderr) = run_failing("nan", "dense\n nan | 1\n", &[]);
    assert!(!success);
    assert!(stderr.contains("parse error"), "{stderr}");
}

#[test]
fn syntax_errors_are_reported() {
    let (success, stderr) = run_failing("syntax", "dense\n 1 2 |\n", &[]);
    assert!(!success);
    assert!(stderr.contains("parse error"), "{stderr}");
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn depcat() -> Command {
    Command::cargo_bin("depcat").unwrap()
}

#[test]
fn test_order_and_cat_for_chain() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "require 'b.txt'\ncontent a");
    write_file(temp.path(), "b.txt", "require 'c.txt'\ncontent b");
    write_file(temp.path(), "c.txt", "content c");

    depcat()
        .arg("order")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("c.txt\nb.txt\na.txt\n");

    let expected = "content c\n\n\
                    require 'c.txt'\ncontent b\n\n\
                    require 'b.txt'\ncontent a\n\n";
    depcat()
        .arg("cat")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_typographic_quotes_are_recognized() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "main.txt", "require ‘lib/a.txt’\nmain body");
    write_file(temp.path(), "lib/a.txt", "lib body");

    depcat()
        .arg("order")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("lib/a.txt\nmain.txt\n");
}

#[test]
fn test_double_quotes_are_not_directives() {
    let temp = TempDir::new().unwrap();
    // If the double-quoted line were treated as a directive, resolution
    // would fail on the missing ghost.txt.
    write_file(temp.path(), "main.txt", "require \"ghost.txt\"\nbody");

    depcat()
        .arg("deps")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("main.txt\n");
}

#[test]
fn test_cycle_fails_with_named_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "require 'b.txt'");
    write_file(temp.path(), "b.txt", "require 'a.txt'");

    depcat()
        .arg("order")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency detected in file"));
}

#[test]
fn test_missing_dependency_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "require 'ghost.txt'");

    depcat()
        .arg("check")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "requires 'ghost.txt', which does not exist under the root",
        ));
}

#[test]
fn test_empty_root() {
    let temp = TempDir::new().unwrap();

    depcat()
        .arg("order")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("");

    depcat()
        .arg("cat")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();

    depcat()
        .arg("order")
        .arg(temp.path().join("no-such-dir"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found or not a directory"));
}

#[test]
fn test_check_reports_file_count() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "require 'b.txt'");
    write_file(temp.path(), "b.txt", "");

    depcat()
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 2 files, no cycles"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "require 'b.txt'");
    write_file(temp.path(), "b.txt", "");

    depcat()
        .arg("order")
        .arg(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"b.txt\""));

    depcat()
        .arg("deps")
        .arg(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order\""))
        .stdout(predicate::str::contains("\"dependencies\""));
}

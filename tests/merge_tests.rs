//! Integration tests for the merge command

#![allow(deprecated)]

use predicates::prelude::*;
use provtag::domain::Field;
use provtag::infrastructure::Manifest;
use std::fs;
use tempfile::TempDir;

mod common;
use common::provtag_cmd;

#[test]
fn test_merge_typed_sources() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    fs::write(
        &path,
        r#"
[[source]]
category = "TC"
file_name = "data/file1.mat"
description = "desc1"

[[source]]
category = "TC"
file_name = "file2.xls"
description = "desc2"
"#,
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .success()
        .stdout(" Type: TC\n File: file1 + file2\n Description: desc1 + desc2\n");
}

#[test]
fn test_merge_untyped_single_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    fs::write(
        &path,
        "[[source]]\nfile_name = \"file_name1.mat\"\ndescription = \"dummy file 1\"\n",
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .success()
        .stdout(" File: file_name1\n Description: dummy file 1\n");
}

#[test]
fn test_merge_skips_empty_sources() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    fs::write(
        &path,
        r#"
[[source]]
category = "EQ"

[[source]]
file_name = "quakes.csv"
description = "catalogue"

[[source]]
category = "EQ"
"#,
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .success()
        .stdout(" Type: EQ\n File: quakes\n Description: catalogue\n");
}

#[test]
fn test_merge_incompatible_categories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    fs::write(
        &path,
        r#"
[[source]]
category = "TC"
file_name = "file1.mat"
description = "desc1"

[[source]]
category = "EQ"
file_name = "file2.mat"
description = "desc2"
"#,
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "Entries of different type can't be appended: TC != EQ.",
        ));
}

#[test]
fn test_merge_writes_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    let output = temp.path().join("merged.toml");
    fs::write(
        &path,
        r#"
[[source]]
category = "TC"
file_name = "file1.mat"
description = "desc1"

[[source]]
file_name = ["file2.mat", "file3.mat"]
description = ["desc2", "desc3"]
"#,
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = Manifest::load_from_path(&output).unwrap();
    assert_eq!(written.sources.len(), 1);
    let merged = &written.sources[0];
    assert_eq!(merged.category(), "TC");
    assert_eq!(
        merged.file_name(),
        Field::Sequence(vec!["file1.mat", "file2.mat", "file3.mat"])
    );
    assert_eq!(
        merged.description(),
        Field::Sequence(vec!["desc1", "desc2", "desc3"])
    );
}

#[test]
fn test_merge_missing_manifest() {
    let temp = TempDir::new().unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_merge_rejects_misaligned_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("provenance.toml");
    fs::write(
        &path,
        "[[source]]\nfile_name = [\"a.mat\", \"b.mat\"]\ndescription = [\"a\"]\n",
    )
    .unwrap();

    provtag_cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Manifest error"));
}

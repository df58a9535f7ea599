//! # projtree CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Verifies top-level behavior of the `projtree` binary: standard flags and
//! argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let temp_dir = tempdir().unwrap();
    projtree_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list").and(predicate::str::contains("tree")));
}

#[test]
fn test_version_flag() {
    let temp_dir = tempdir().unwrap();
    projtree_cmd(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    let temp_dir = tempdir().unwrap();
    projtree_cmd(temp_dir.path())
        .arg("frobnicate")
        .assert()
        .failure();
}

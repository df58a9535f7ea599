//! # projtree CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`list.rs`, `tree.rs`,
//! `main_tests.rs`): building the `projtree` command with an isolated
//! configuration, and writing fixture solutions into temporary directories.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{fs, path::Path, path::PathBuf};

pub const CSHARP_TYPE: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";
pub const FOLDER_TYPE: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";

/// # Get projtree Command (`projtree_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `projtree` binary,
/// isolated from the developer's machine: the user configuration is the
/// (possibly empty) `config.toml` inside `workdir`, the working directory is
/// `workdir`, and no active document or log filter leaks in from the
/// environment.
///
/// ## Panics
/// Panics if the `projtree` binary cannot be found or the config file cannot be written.
pub fn projtree_cmd(workdir: &Path) -> Command {
    let config_path = workdir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write empty test config");
    }
    let mut cmd = Command::cargo_bin("projtree").expect("Failed to find projtree binary for testing");
    cmd.current_dir(workdir)
        .env("PROJTREE_CONFIG", &config_path)
        .env_remove("PROJTREE_ACTIVE_DOCUMENT")
        .env_remove("RUST_LOG");
    cmd
}

/// Formats one `Project(...)` block of a `.sln` file.
pub fn sln_project(type_guid: &str, name: &str, location: &str, guid: &str) -> String {
    format!(
        "Project(\"{{{}}}\") = \"{}\", \"{}\", \"{{{}}}\"\nEndProject\n",
        type_guid, name, location, guid
    )
}

/// # Write Sample Solution (`write_sample_sln`)
///
/// Writes `Shop.sln` into `dir`:
///
/// ```text
/// Sln Items/           (folder)
/// App                  App\App.csproj
/// └── Core             Core\Core.csproj
/// src/                 (folder)
/// └── Web              src\Web\Web.csproj
/// ```
pub fn write_sample_sln(dir: &Path) -> PathBuf {
    let mut sln = String::from(
        "Microsoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio Version 17\n",
    );
    sln.push_str(&sln_project(FOLDER_TYPE, "Sln Items", "Sln Items", "10000000-0000-0000-0000-000000000001"));
    sln.push_str(&sln_project(CSHARP_TYPE, "App", r"App\App.csproj", "10000000-0000-0000-0000-000000000002"));
    sln.push_str(&sln_project(CSHARP_TYPE, "Core", r"Core\Core.csproj", "10000000-0000-0000-0000-000000000003"));
    sln.push_str(&sln_project(FOLDER_TYPE, "src", "src", "10000000-0000-0000-0000-000000000004"));
    sln.push_str(&sln_project(CSHARP_TYPE, "Web", r"src\Web\Web.csproj", "10000000-0000-0000-0000-000000000005"));
    sln.push_str(
        "Global\n\
         \tGlobalSection(NestedProjects) = preSolution\n\
         \t\t{10000000-0000-0000-0000-000000000003} = {10000000-0000-0000-0000-000000000002}\n\
         \t\t{10000000-0000-0000-0000-000000000005} = {10000000-0000-0000-0000-000000000004}\n\
         \tEndGlobalSection\n\
         EndGlobal\n",
    );
    let path = dir.join("Shop.sln");
    fs::write(&path, sln).expect("Failed to write sample solution");
    path
}

/// Absolute path string of a project inside the fixture directory.
pub fn project_path(dir: &Path, relative: &str) -> String {
    dir.join(relative).to_string_lossy().into_owned()
}

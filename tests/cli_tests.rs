//! End-to-end tests for the update-op-deps CLI
//!
//! These tests verify:
//! - Pipeline selection and the go commands issued per module
//! - Modules with nothing to do are skipped entirely
//! - Exit codes, including propagation from a failing go invocation
//!
//! A fake `go` script on PATH records every invocation instead of running the
//! real toolchain.

#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MODULES: [&str; 5] = [
    "optimism",
    "simulators/optimism/l1ops",
    "simulators/optimism/p2p",
    "simulators/optimism/rpc",
    "simulators/optimism/daisy-chain",
];

const FAKE_GO: &str = r#"#!/bin/sh
echo "$(pwd -P)|$*" >> "$GO_LOG"
if [ "$1 $2" = "mod tidy" ] && [ -n "$FAKE_GO_TIDY_EXIT" ]; then
    exit "$FAKE_GO_TIDY_EXIT"
fi
exit 0
"#;

const REPLACED_GO_MOD: &str = r#"module github.com/ethereum/hive/optimism

go 1.21

require github.com/ethereum/go-ethereum v1.13.5

replace github.com/ethereum/go-ethereum v1.13.5 => github.com/ethereum-optimism/op-geth v1.101304.0
"#;

const FAMILY_GO_MOD: &str = r#"module github.com/ethereum/hive/simulators/optimism/rpc

go 1.21

require (
	github.com/ethereum-optimism/optimism v1.7.0
	github.com/stretchr/testify v1.8.4
)

require github.com/ethereum-optimism/optimism/op-node v0.0.0 // indirect
"#;

const PLAIN_GO_MOD: &str = r#"module github.com/ethereum/hive/simulators/optimism/p2p

go 1.21

require github.com/ethereum/go-ethereum v1.13.5
"#;

/// Temporary checkout with every registered module and a fake go on PATH
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a workspace where every module gets `PLAIN_GO_MOD` unless overridden
    fn new(overrides: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");

        for module in MODULES {
            let content = overrides
                .iter()
                .find(|(name, _)| *name == module)
                .map(|(_, content)| *content)
                .unwrap_or(PLAIN_GO_MOD);
            let module_dir = dir.path().join("repo").join(module);
            fs::create_dir_all(&module_dir).unwrap();
            fs::write(module_dir.join("go.mod"), content).unwrap();
        }

        let bin = dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let go = bin.join("go");
        fs::write(&go, FAKE_GO).unwrap();
        fs::set_permissions(&go, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir }
    }

    fn repo(&self) -> PathBuf {
        self.dir.path().join("repo")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("go.log")
    }

    /// Recorded invocations as (module, args) pairs
    fn invocations(&self) -> Vec<(String, String)> {
        let log = fs::read_to_string(self.log_path()).unwrap_or_default();
        let repo = fs::canonicalize(self.repo()).unwrap();
        log.lines()
            .map(|line| {
                let (dir, args) = line.split_once('|').unwrap();
                let dir = fs::canonicalize(dir).unwrap();
                let module = relative(&dir, &repo);
                (module, args.to_string())
            })
            .collect()
    }

    fn command(&self) -> assert_cmd::Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = cargo_bin_cmd!("update-op-deps");
        cmd.current_dir(self.repo())
            .env("PATH", format!("{}:{}", self.dir.path().join("bin").display(), path))
            .env("GO_LOG", self.log_path())
            .env("NO_COLOR", "1")
            .env_remove("FAKE_GO_TIDY_EXIT");
        cmd
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_missing_version_is_usage_error() {
    let workspace = Workspace::new(&[]);
    workspace
        .command()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--version"));
    assert!(workspace.invocations().is_empty());
}

#[test]
fn test_empty_version_rejected() {
    let workspace = Workspace::new(&[]);
    workspace
        .command()
        .args(["--version", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("target version must not be empty"));
    assert!(workspace.invocations().is_empty());
}

#[test]
fn test_geth_pipeline_updates_replace_directive() {
    let workspace = Workspace::new(&[("optimism", REPLACED_GO_MOD)]);
    workspace
        .command()
        .args(["--version", "v1.101308.0", "--geth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating optimism"))
        .stdout(predicate::str::contains(
            "go mod edit -replace github.com/ethereum/go-ethereum@v1.101308.0=github.com/ethereum-optimism/op-geth@v1.101308.0",
        ))
        .stdout(predicate::str::contains("1 module(s) updated, 4 skipped"));

    assert_eq!(
        workspace.invocations(),
        vec![
            (
                "optimism".to_string(),
                "mod edit -replace github.com/ethereum/go-ethereum@v1.101308.0=github.com/ethereum-optimism/op-geth@v1.101308.0".to_string()
            ),
            ("optimism".to_string(), "mod tidy".to_string()),
        ]
    );
}

#[test]
fn test_default_pipeline_upgrades_family_dependencies() {
    let workspace = Workspace::new(&[("simulators/optimism/rpc", FAMILY_GO_MOD)]);
    workspace
        .command()
        .args(["--version", "v1.7.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating simulators/optimism/rpc"))
        .stdout(predicate::str::contains(
            "go get github.com/ethereum-optimism/optimism@v1.7.2",
        ));

    assert_eq!(
        workspace.invocations(),
        vec![
            (
                "simulators/optimism/rpc".to_string(),
                "get github.com/ethereum-optimism/optimism@v1.7.2".to_string()
            ),
            ("simulators/optimism/rpc".to_string(), "mod tidy".to_string()),
        ]
    );
}

#[test]
fn test_no_geth_selects_family_pipeline() {
    let workspace = Workspace::new(&[
        ("optimism", REPLACED_GO_MOD),
        ("simulators/optimism/rpc", FAMILY_GO_MOD),
    ]);
    workspace
        .command()
        .args(["--version", "v1.7.2", "--no-geth"])
        .assert()
        .success();

    let invocations = workspace.invocations();
    assert!(invocations
        .iter()
        .all(|(module, _)| module == "simulators/optimism/rpc"));
    assert!(!invocations.iter().any(|(_, args)| args.contains("-replace")));
}

#[test]
fn test_nothing_to_do_issues_no_commands() {
    let workspace = Workspace::new(&[]);
    workspace
        .command()
        .args(["--version", "v1.7.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 module(s) updated, 5 skipped"));
    assert!(workspace.invocations().is_empty());
}

#[test]
fn test_failing_tidy_propagates_exit_code_and_stops() {
    let workspace = Workspace::new(&[
        ("optimism", REPLACED_GO_MOD),
        ("simulators/optimism/rpc", REPLACED_GO_MOD),
    ]);
    workspace
        .command()
        .args(["--version", "v1.101308.0", "--geth"])
        .env("FAKE_GO_TIDY_EXIT", "5")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("go mod tidy"));

    let invocations = workspace.invocations();
    assert_eq!(invocations.len(), 2);
    assert!(invocations.iter().all(|(module, _)| module == "optimism"));
}

#[test]
fn test_missing_manifest_aborts() {
    let workspace = Workspace::new(&[("simulators/optimism/rpc", FAMILY_GO_MOD)]);
    fs::remove_file(workspace.repo().join("optimism/go.mod")).unwrap();

    workspace
        .command()
        .args(["--version", "v1.7.2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read manifest file"));
    assert!(workspace.invocations().is_empty());
}

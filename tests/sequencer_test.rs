// tests/sequencer_test.rs
//
// Drives the sequencer against throwaway git repositories. Pushing is
// always skipped here (there is no remote); the push path itself is the
// plain `git push` the workspace wrapper already covers.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use git_bump::config::Config;
use git_bump::error::GitBumpError;
use git_bump::git_ops::GitWorkspace;
use git_bump::manifest::VersionManifest;
use git_bump::sequencer;
use git_bump::version::Applied;
use semver::Version;
use serial_test::serial;
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("git should run");
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("git should run");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A repository on branch `main` with a committed version.toml.
fn init_repo(version: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-b", "main"]);
    git(dir.path(), &["config", "user.name", "tester"]);
    git(dir.path(), &["config", "user.email", "tester@example.com"]);
    fs::write(
        dir.path().join("version.toml"),
        format!("version = \"{}\"\n", version),
    )
    .unwrap();
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-m", "initial"]);
    dir
}

fn local_config() -> Config {
    Config {
        git_ref: Some("refs/heads/main".to_string()),
        tag_prefix: "v".to_string(),
        skip_push: true,
        ..Config::default()
    }
}

fn applied(tag: &str) -> Applied {
    let bare = tag.trim_start_matches('v');
    Applied {
        version: Version::parse(bare).unwrap(),
        tag: tag.to_string(),
    }
}

#[test]
#[serial]
fn test_sequencer_commits_and_tags() {
    if !git_available() {
        return;
    }
    let dir = init_repo("v1.2.3");
    let ws = GitWorkspace::new(dir.path());
    let config = local_config();

    let output_file = dir.path().join("outputs.txt");
    env::set_var("GITHUB_OUTPUT", &output_file);

    let manifest_path = dir.path().join("version.toml");
    let mut manifest = VersionManifest::read(&manifest_path).unwrap();
    sequencer::run(&ws, &config, &mut manifest, &applied("v1.3.0")).unwrap();

    env::remove_var("GITHUB_OUTPUT");

    let rewritten = fs::read_to_string(&manifest_path).unwrap();
    assert!(rewritten.contains("version = \"v1.3.0\""));

    assert_eq!(
        git_stdout(dir.path(), &["log", "-1", "--format=%s"]),
        "ci: version bump to v1.3.0"
    );
    assert_eq!(git_stdout(dir.path(), &["tag", "--list", "v1.3.0"]), "v1.3.0");

    let outputs = fs::read_to_string(&output_file).unwrap();
    assert!(outputs.contains("new_tag=v1.3.0"));
}

#[test]
#[serial]
fn test_sequencer_skip_commit_still_tags() {
    if !git_available() {
        return;
    }
    let dir = init_repo("v1.2.3");
    let ws = GitWorkspace::new(dir.path());
    let config = Config {
        skip_commit: true,
        ..local_config()
    };
    env::remove_var("GITHUB_OUTPUT");

    let manifest_path = dir.path().join("version.toml");
    let mut manifest = VersionManifest::read(&manifest_path).unwrap();
    sequencer::run(&ws, &config, &mut manifest, &applied("v1.3.0")).unwrap();

    // file rewritten but no new commit
    let rewritten = fs::read_to_string(&manifest_path).unwrap();
    assert!(rewritten.contains("v1.3.0"));
    assert_eq!(git_stdout(dir.path(), &["log", "-1", "--format=%s"]), "initial");
    assert_eq!(git_stdout(dir.path(), &["tag", "--list", "v1.3.0"]), "v1.3.0");
}

#[test]
#[serial]
fn test_sequencer_skip_tag_creates_no_tag() {
    if !git_available() {
        return;
    }
    let dir = init_repo("v1.2.3");
    let ws = GitWorkspace::new(dir.path());
    let config = Config {
        skip_tag: true,
        ..local_config()
    };
    env::remove_var("GITHUB_OUTPUT");

    let manifest_path = dir.path().join("version.toml");
    let mut manifest = VersionManifest::read(&manifest_path).unwrap();
    sequencer::run(&ws, &config, &mut manifest, &applied("v1.3.0")).unwrap();

    assert_eq!(git_stdout(dir.path(), &["tag", "--list"]), "");
    assert_eq!(
        git_stdout(dir.path(), &["log", "-1", "--format=%s"]),
        "ci: version bump to v1.3.0"
    );
}

#[test]
#[serial]
fn test_sequencer_failure_aborts_without_rollback() {
    if !git_available() {
        return;
    }
    let dir = init_repo("v1.2.3");
    let ws = GitWorkspace::new(dir.path());
    // Point at a branch that does not exist: the checkout fails after the
    // commit already happened.
    let config = Config {
        git_ref: Some("refs/heads/missing".to_string()),
        ..local_config()
    };
    env::remove_var("GITHUB_OUTPUT");

    let manifest_path = dir.path().join("version.toml");
    let mut manifest = VersionManifest::read(&manifest_path).unwrap();
    let err = sequencer::run(&ws, &config, &mut manifest, &applied("v1.3.0")).unwrap_err();
    assert!(matches!(err, GitBumpError::Command { .. }));

    // The local commit stays; nothing after the failure ran.
    assert_eq!(
        git_stdout(dir.path(), &["log", "-1", "--format=%s"]),
        "ci: version bump to v1.3.0"
    );
    assert_eq!(git_stdout(dir.path(), &["tag", "--list"]), "");
}

#[test]
#[serial]
fn test_sequencer_unresolvable_branch_has_no_side_effects() {
    if !git_available() {
        return;
    }
    let dir = init_repo("v1.2.3");
    let ws = GitWorkspace::new(dir.path());
    let config = Config {
        git_ref: None,
        ..local_config()
    };
    env::remove_var("GITHUB_OUTPUT");

    let manifest_path = dir.path().join("version.toml");
    let mut manifest = VersionManifest::read(&manifest_path).unwrap();
    let err = sequencer::run(&ws, &config, &mut manifest, &applied("v1.3.0")).unwrap_err();
    assert!(matches!(err, GitBumpError::Branch(_)));

    // Branch resolution comes first, so the manifest was never touched.
    let content = fs::read_to_string(&manifest_path).unwrap();
    assert!(content.contains("v1.2.3"));
    assert_eq!(git_stdout(dir.path(), &["log", "-1", "--format=%s"]), "initial");
}

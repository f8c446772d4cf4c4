use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitBumpError, Result};

/// The git working directory this run owns.
///
/// Every operation shells out to the `git` binary with the workspace as
/// its working directory and blocks until the child exits. There is no
/// retry and no timeout here: a non-zero exit aborts the run with the
/// captured stderr, and the surrounding CI job owns the clock.
#[derive(Debug, Clone)]
pub struct GitWorkspace {
    root: PathBuf,
}

impl GitWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        GitWorkspace { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Set the committer identity for subsequent commits.
    pub fn config_user(&self, name: &str, email: &str) -> Result<()> {
        self.run(&["config", "user.name", name])?;
        self.run(&["config", "user.email", email])?;
        Ok(())
    }

    /// Commit all tracked changes with the given message.
    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-a", "-m", message])?;
        Ok(())
    }

    pub fn fetch(&self) -> Result<()> {
        self.run(&["fetch"])?;
        Ok(())
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch])?;
        Ok(())
    }

    /// Create a lightweight tag on the current HEAD.
    pub fn tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name])?;
        Ok(())
    }

    pub fn push(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote])?;
        Ok(())
    }

    pub fn push_follow_tags(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote, "--follow-tags"])?;
        Ok(())
    }

    pub fn push_tags(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote, "--tags"])?;
        Ok(())
    }

    /// Run one git command in the workspace and return its stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(GitBumpError::command(
                args.first().copied().unwrap_or_default(),
                stderr,
            ))
        }
    }
}

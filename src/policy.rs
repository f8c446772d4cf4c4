use regex::{Regex, RegexBuilder};

use crate::config::VERSION_PLACEHOLDER;
use crate::error::{GitBumpError, Result};
use crate::ui;

/// Rule for detecting that a bump commit is already present in the event,
/// so the run can stop instead of bumping again. This is what keeps the
/// action idempotent when its own bump commit re-triggers the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpPolicy {
    /// Skip when any commit in the event matches the bump-commit pattern.
    All,
    /// Skip only when the last commit matches.
    LastCommit,
    /// Never skip; bump commits in the history are deliberately ignored.
    Ignore,
    /// Unrecognized configuration value; behaves like a disabled policy.
    Unknown(String),
}

impl BumpPolicy {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => BumpPolicy::All,
            "last-commit" => BumpPolicy::LastCommit,
            "ignore" => BumpPolicy::Ignore,
            other => BumpPolicy::Unknown(other.to_string()),
        }
    }
}

/// Build the regex that recognizes a previously created bump commit.
///
/// The commit-message template is taken literally (regex-escaped) and its
/// version placeholder replaced with a numeric semantic-version matcher,
/// prefixed with the configured tag prefix. Matching is case-insensitive.
pub fn bump_commit_pattern(template: &str, tag_prefix: &str) -> Result<Regex> {
    let version = format!(r"{}\d+\.\d+\.\d+", regex::escape(tag_prefix));
    let pattern = regex::escape(template).replace(&regex::escape(VERSION_PLACEHOLDER), &version);

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| GitBumpError::config(format!("invalid commit-message template: {}", e)))
}

/// Decide whether this run should be skipped because the bump already
/// happened.
pub fn should_skip(messages: &[String], pattern: &Regex, policy: &BumpPolicy) -> bool {
    match policy {
        BumpPolicy::All => messages.iter().any(|m| pattern.is_match(m)),
        BumpPolicy::LastCommit => messages
            .last()
            .map(|m| pattern.is_match(m))
            .unwrap_or(false),
        BumpPolicy::Ignore => {
            ui::display_status("Ignoring any version bumps in commits...");
            false
        }
        BumpPolicy::Unknown(raw) => {
            ui::display_warning(&format!("Unknown bump policy: {}", raw));
            false
        }
    }
}

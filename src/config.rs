use std::env;

use crate::policy::BumpPolicy;

/// Placeholder token substituted with the new version in the commit template.
pub const VERSION_PLACEHOLDER: &str = "{{version}}";

/// Default commit message template used to create and detect bump commits.
pub const DEFAULT_COMMIT_MESSAGE: &str = "ci: version bump to {{version}}";

/// Complete run configuration for git-bump.
///
/// Built once at process entry from the action-input environment
/// (`INPUT_*`) and the ambient CI variables (`GITHUB_*`), then passed
/// immutably into the decision engine and the sequencer. Nothing below
/// this struct reads the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit version-type override (validated by the resolver).
    pub version_type: Option<String>,

    /// Trigger words for a major bump.
    pub major_words: Vec<String>,

    /// Trigger words for a minor bump.
    pub minor_words: Vec<String>,

    /// Trigger words for a patch bump; `None` disables patch matching.
    pub patch_words: Option<Vec<String>>,

    /// Trigger words for a pre-release bump; `None` disables it.
    pub rc_words: Option<Vec<String>>,

    /// Fallback bump kind when no wording matches.
    pub default_bump: Option<String>,

    /// Default pre-release identifier (e.g. "beta" in `1.2.0-beta.0`).
    pub preid: Option<String>,

    /// Prefix applied to emitted tags and the persisted version string.
    pub tag_prefix: String,

    /// Commit message template containing [VERSION_PLACEHOLDER].
    pub commit_message: String,

    /// Rule for detecting an already-performed bump.
    pub bump_policy: BumpPolicy,

    /// Master switch: `false` ends the run before any git side effect.
    pub push: bool,

    pub skip_commit: bool,
    pub skip_tag: bool,
    pub skip_push: bool,

    /// Overrides the branch inferred from the CI refs.
    pub target_branch: Option<String>,

    /// Path of the persisted version manifest, relative to the workspace.
    pub version_file: String,

    /// Committer identity.
    pub git_user: String,
    pub git_email: String,

    /// Remote authentication and addressing.
    pub actor: Option<String>,
    pub token: Option<String>,
    pub repository: Option<String>,

    /// Pull-request head ref (`GITHUB_HEAD_REF`), present only for PR runs.
    pub head_ref: Option<String>,

    /// Full ref name of the push (`GITHUB_REF`, e.g. `refs/heads/main`).
    pub git_ref: Option<String>,
}

impl Config {
    /// Construct the configuration from the process environment.
    ///
    /// Action inputs follow the `INPUT_<NAME>` convention; empty values are
    /// treated the same as unset ones. Boolean-like inputs mirror the
    /// action contract: `push` is on unless literally `"false"`, the
    /// `skip-*` switches are off unless literally `"true"`.
    pub fn from_env() -> Self {
        Config {
            version_type: input("version-type"),
            major_words: word_list(input("major-wording")).unwrap_or_default(),
            minor_words: word_list(input("minor-wording")).unwrap_or_default(),
            patch_words: word_list(input("patch-wording")),
            rc_words: word_list(input("rc-wording")),
            default_bump: input("default"),
            preid: input("preid"),
            tag_prefix: input("tag-prefix").unwrap_or_default(),
            commit_message: input("commit-message")
                .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()),
            bump_policy: BumpPolicy::parse(input("bump-policy").as_deref().unwrap_or("all")),
            push: input("push").as_deref() != Some("false"),
            skip_commit: input("skip-commit").as_deref() == Some("true"),
            skip_tag: input("skip-tag").as_deref() == Some("true"),
            skip_push: input("skip-push").as_deref() == Some("true"),
            target_branch: input("target-branch"),
            version_file: input("version-file").unwrap_or_else(|| "version.toml".to_string()),
            git_user: var("GITHUB_USER").unwrap_or_else(|| "Automated Version Bump".to_string()),
            git_email: var("GITHUB_EMAIL")
                .unwrap_or_else(|| "git-bump@users.noreply.github.com".to_string()),
            actor: var("GITHUB_ACTOR"),
            token: var("GITHUB_TOKEN"),
            repository: var("GITHUB_REPOSITORY"),
            head_ref: var("GITHUB_HEAD_REF"),
            git_ref: var("GITHUB_REF"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_type: None,
            major_words: Vec::new(),
            minor_words: Vec::new(),
            patch_words: None,
            rc_words: None,
            default_bump: None,
            preid: None,
            tag_prefix: String::new(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            bump_policy: BumpPolicy::All,
            push: true,
            skip_commit: false,
            skip_tag: false,
            skip_push: false,
            target_branch: None,
            version_file: "version.toml".to_string(),
            git_user: "Automated Version Bump".to_string(),
            git_email: "git-bump@users.noreply.github.com".to_string(),
            actor: None,
            token: None,
            repository: None,
            head_ref: None,
            git_ref: None,
        }
    }
}

/// Read an action input, treating empty values as unset.
fn input(name: &str) -> Option<String> {
    var(&format!("INPUT_{}", name.to_uppercase()))
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Split a comma-separated wording input into trigger words.
///
/// The words are kept verbatim (no trimming) so that multi-word triggers
/// like "Adds new" keep working as substring matches.
fn word_list(value: Option<String>) -> Option<Vec<String>> {
    value.map(|v| v.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.commit_message, "ci: version bump to {{version}}");
        assert_eq!(config.bump_policy, BumpPolicy::All);
        assert!(config.push);
        assert!(!config.skip_commit);
        assert!(config.patch_words.is_none());
        assert_eq!(config.version_file, "version.toml");
    }

    #[test]
    fn test_word_list_splits_on_commas() {
        let words = word_list(Some("feat,cut-minor, adds".to_string())).unwrap();
        assert_eq!(words, vec!["feat", "cut-minor", " adds"]);
    }

    #[test]
    fn test_word_list_absent() {
        assert_eq!(word_list(None), None);
    }
}

use crate::config::Config;
use crate::error::{GitBumpError, Result};
use crate::matcher::{self, WordMatcher};
use crate::policy;

/// Category of semantic-version increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Prerelease,
}

impl BumpKind {
    /// Parse an explicit `version-type` override. Only the documented set
    /// is accepted; `rc` is the override spelling of a pre-release bump.
    pub fn from_override(raw: &str) -> Option<Self> {
        match raw {
            "major" => Some(BumpKind::Major),
            "minor" => Some(BumpKind::Minor),
            "patch" => Some(BumpKind::Patch),
            "rc" => Some(BumpKind::Prerelease),
            _ => None,
        }
    }

    /// Parse the `default` fallback kind. More lenient than the override:
    /// `prerelease` is accepted alongside the override spellings, and an
    /// unrecognized value simply means "no default".
    pub fn from_default(raw: &str) -> Option<Self> {
        match raw {
            "prerelease" => Some(BumpKind::Prerelease),
            other => Self::from_override(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Prerelease => "prerelease",
        }
    }
}

impl std::fmt::Display for BumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single decided outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpDirective {
    /// A bump commit is already present; do nothing.
    Skip,
    /// Nothing matched and no default applies; do nothing.
    NoBump,
    /// Perform exactly one increment of the given kind.
    Apply {
        kind: BumpKind,
        /// Pre-release identifier, present only for pre-release bumps.
        preid: Option<String>,
    },
}

impl BumpDirective {
    fn apply(kind: BumpKind, preid: Option<String>) -> Self {
        let preid = match kind {
            BumpKind::Prerelease => preid,
            _ => None,
        };
        BumpDirective::Apply { kind, preid }
    }
}

/// Resolve the commit messages and configuration into one directive.
///
/// The decision order is fixed:
/// 1. a valid explicit `version-type` override wins outright (an invalid
///    one is a fatal configuration error),
/// 2. the bump policy may turn the run into a skip,
/// 3. the word sets are evaluated in strict priority
///    major > minor > patch > prerelease; the first kind to match wins,
/// 4. with no match, the configured default kind applies,
/// 5. a pre-release default is withdrawn when pre-release wording is
///    configured but absent from every message.
pub fn resolve(messages: &[String], config: &Config) -> Result<BumpDirective> {
    if let Some(raw) = &config.version_type {
        let kind = BumpKind::from_override(raw)
            .ok_or_else(|| GitBumpError::config(format!("invalid version type: '{}'", raw)))?;
        return Ok(BumpDirective::apply(kind, config.preid.clone()));
    }

    let pattern = policy::bump_commit_pattern(&config.commit_message, &config.tag_prefix)?;
    if policy::should_skip(messages, &pattern, &config.bump_policy) {
        return Ok(BumpDirective::Skip);
    }

    let mut preid = config.preid.clone();
    let rc_matcher = config.rc_words.as_deref().map(WordMatcher::new);

    let matched = waterfall(messages, config, rc_matcher.as_ref(), &mut preid);
    let resolved = matched.or_else(|| {
        config
            .default_bump
            .as_deref()
            .and_then(BumpKind::from_default)
    });

    let Some(kind) = resolved else {
        return Ok(BumpDirective::NoBump);
    };

    // A pre-release reached only through the default, while pre-release
    // wording is configured and matched nothing, is withdrawn. A
    // pre-release reached through an actual word match never satisfies
    // this condition.
    if kind == BumpKind::Prerelease {
        if let Some(rc) = &rc_matcher {
            if !rc.any_match(messages) {
                return Ok(BumpDirective::NoBump);
            }
        }
    }

    Ok(BumpDirective::apply(kind, preid))
}

/// The priority waterfall over the configured word sets. Returns the first
/// matching kind; patch and prerelease participate only when configured.
/// A matched pre-release trigger containing a hyphen overrides the preid
/// with its post-hyphen remainder.
fn waterfall(
    messages: &[String],
    config: &Config,
    rc_matcher: Option<&WordMatcher>,
    preid: &mut Option<String>,
) -> Option<BumpKind> {
    let major = WordMatcher::new(&config.major_words);
    if messages.iter().any(|m| matcher::is_breaking_change(m)) || major.any_match(messages) {
        return Some(BumpKind::Major);
    }

    let minor = WordMatcher::new(&config.minor_words);
    if minor.any_match(messages) {
        return Some(BumpKind::Minor);
    }

    if let Some(words) = &config.patch_words {
        if WordMatcher::new(words).any_match(messages) {
            return Some(BumpKind::Patch);
        }
    }

    if let Some(rc) = rc_matcher {
        if let Some(word) = rc.first_match_in(messages) {
            if let Some((_, rest)) = word.split_once('-') {
                *preid = Some(rest.to_string());
            }
            return Some(BumpKind::Prerelease);
        }
    }

    None
}

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{GitBumpError, Result};
use crate::resolver::{BumpDirective, BumpKind};

/// Result of applying a directive: the bare semantic version and the
/// prefixed string that is persisted, committed, and tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub version: Version,
    pub tag: String,
}

/// Parse a persisted version string, tolerating the configured tag prefix
/// and a bare `v`/`V` in front of the numbers.
pub fn parse_lenient(raw: &str, tag_prefix: &str) -> Result<Version> {
    let stripped = if !tag_prefix.is_empty() {
        raw.strip_prefix(tag_prefix).unwrap_or(raw)
    } else {
        raw
    };
    let stripped = stripped
        .strip_prefix('v')
        .or_else(|| stripped.strip_prefix('V'))
        .unwrap_or(stripped);

    Version::parse(stripped)
        .map_err(|e| GitBumpError::version(format!("invalid version '{}': {}", raw, e)))
}

/// Apply a directive to the current version.
///
/// `Skip` and `NoBump` are no-ops; `Apply` computes the incremented
/// version and forms the published tag string by prepending the prefix
/// exactly once. The input version is never modified.
pub fn apply(
    current: &Version,
    directive: &BumpDirective,
    tag_prefix: &str,
) -> Result<Option<Applied>> {
    let BumpDirective::Apply { kind, preid } = directive else {
        return Ok(None);
    };

    let version = bump(current, *kind, preid.as_deref())?;
    let tag = format!("{}{}", tag_prefix, version);
    Ok(Some(Applied { version, tag }))
}

/// Increment a version by one bump kind, following the standard
/// semantic-versioning increment rules:
///
/// - a pre-major/minor/patch version finalizes to its release instead of
///   advancing past it (`1.0.0-rc.1` + major = `1.0.0`),
/// - a pre-release bump on a release version moves to the next patch's
///   first pre-release,
/// - a pre-release bump on a pre-release increments its rightmost numeric
///   identifier, switching series when a different preid is requested.
pub fn bump(current: &Version, kind: BumpKind, preid: Option<&str>) -> Result<Version> {
    let mut next = current.clone();
    next.build = BuildMetadata::EMPTY;

    match kind {
        BumpKind::Major => {
            if next.pre.is_empty() || next.minor != 0 || next.patch != 0 {
                next.major += 1;
            }
            next.minor = 0;
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        BumpKind::Minor => {
            if next.pre.is_empty() || next.patch != 0 {
                next.minor += 1;
            }
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        BumpKind::Patch => {
            if next.pre.is_empty() {
                next.patch += 1;
            }
            next.pre = Prerelease::EMPTY;
        }
        BumpKind::Prerelease => {
            if next.pre.is_empty() {
                next.patch += 1;
                next.pre = first_prerelease(preid)?;
            } else {
                next.pre = next_prerelease(&next.pre, preid)?;
            }
        }
    }

    Ok(next)
}

/// The first pre-release of a new patch level: `preid.0`, or a bare `0`
/// when no identifier is in play.
fn first_prerelease(preid: Option<&str>) -> Result<Prerelease> {
    let raw = match preid {
        Some(p) => format!("{}.0", p),
        None => "0".to_string(),
    };
    new_prerelease(&raw)
}

/// Advance an existing pre-release sequence.
///
/// The rightmost numeric identifier is incremented (a `0` is appended if
/// none exists). A requested preid that does not head a `preid.N`
/// sequence restarts the series at `preid.0`.
fn next_prerelease(pre: &Prerelease, preid: Option<&str>) -> Result<Prerelease> {
    let mut ids: Vec<String> = pre.as_str().split('.').map(str::to_string).collect();

    let mut incremented = false;
    for id in ids.iter_mut().rev() {
        if let Ok(n) = id.parse::<u64>() {
            *id = (n + 1).to_string();
            incremented = true;
            break;
        }
    }
    if !incremented {
        ids.push("0".to_string());
    }

    if let Some(p) = preid {
        let continues_series = ids.first().map(String::as_str) == Some(p)
            && ids.get(1).is_some_and(|id| id.parse::<u64>().is_ok());
        if !continues_series {
            return new_prerelease(&format!("{}.0", p));
        }
    }

    new_prerelease(&ids.join("."))
}

fn new_prerelease(raw: &str) -> Result<Prerelease> {
    Prerelease::new(raw)
        .map_err(|e| GitBumpError::version(format!("invalid pre-release '{}': {}", raw, e)))
}

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Push/PR event payload, reduced to the part this tool consumes.
///
/// Unknown fields in the payload are ignored; a payload without a
/// `commits` array (tag pushes, manual dispatches) behaves like an empty
/// push.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    #[serde(default)]
    pub commits: Vec<CommitEntry>,
}

/// A single commit object from the event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitEntry {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub body: String,
}

impl PushEvent {
    /// Load the event payload from a JSON file.
    ///
    /// A missing path (no `GITHUB_EVENT_PATH` in the environment, or the
    /// file was never materialized) yields an empty event rather than an
    /// error; a present but malformed payload is fatal.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(PushEvent::default());
        };
        if !path.exists() {
            return Ok(PushEvent::default());
        }

        let raw = fs::read_to_string(path)?;
        let event: PushEvent = serde_json::from_str(&raw)?;
        Ok(event)
    }

    /// Flatten the commits into one message string each, subject and body
    /// concatenated. Order is preserved; only the `last-commit` bump
    /// policy depends on it.
    pub fn messages(&self) -> Vec<String> {
        self.commits
            .iter()
            .map(|c| format!("{}\n{}", c.message, c.body))
            .collect()
    }

    /// Whether the payload carried any commits at all.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

use std::fs;
use std::path::Path;

use semver::Version;
use toml::Table;

use crate::error::{GitBumpError, Result};
use crate::version;

/// The persisted version document: a TOML file with a top-level
/// `version` key. Every other key is carried through a rewrite
/// untouched, so the file can hold whatever else the repository keeps
/// next to its version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionManifest {
    table: Table,
}

impl VersionManifest {
    /// Read the manifest at startup. A missing file is fatal; there is
    /// nothing sensible to bump without it.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GitBumpError::version_file(format!(
                "'{}' could not be found in your project",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path)?;
        let table: Table = raw.parse()?;

        if !table.get("version").is_some_and(toml::Value::is_str) {
            return Err(GitBumpError::version_file(format!(
                "'{}' has no string 'version' field",
                path.display()
            )));
        }

        Ok(VersionManifest { table })
    }

    /// The stored version string, exactly as persisted (prefix included).
    pub fn version(&self) -> &str {
        self.table
            .get("version")
            .and_then(toml::Value::as_str)
            .unwrap_or_default()
    }

    /// Parse the stored string into a semantic version, stripping the
    /// configured tag prefix first.
    pub fn current_version(&self, tag_prefix: &str) -> Result<Version> {
        version::parse_lenient(self.version(), tag_prefix)
    }

    /// Replace the version field. The stored value is the published tag
    /// string, prefix and all, matching what gets tagged.
    pub fn set_version(&mut self, tag: &str) {
        self.table
            .insert("version".to_string(), toml::Value::String(tag.to_string()));
    }

    /// Rewrite the manifest in place.
    pub fn write(&self, path: &Path) -> Result<()> {
        let rendered = toml::to_string(&self.table)?;
        fs::write(path, rendered)?;
        Ok(())
    }
}

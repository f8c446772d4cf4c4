use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum GitBumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version file error: {0}")]
    VersionFile(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event payload error: {0}")]
    Event(#[from] serde_json::Error),

    #[error("Manifest parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Manifest write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, GitBumpError>;

impl GitBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitBumpError::Config(msg.into())
    }

    /// Create a version file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        GitBumpError::VersionFile(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitBumpError::Version(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitBumpError::Branch(msg.into())
    }

    /// Create an external command error from a failed git invocation
    pub fn command(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        GitBumpError::Command {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}

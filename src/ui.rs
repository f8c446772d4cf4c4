use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::Result;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31m✖ ERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", message);
}

/// Show the commit messages the decision will be based on.
pub fn display_commit_messages(messages: &[String]) {
    println!("\x1b[1mCommits in this event: {}\x1b[0m", messages.len());

    for (i, message) in messages.iter().take(10).enumerate() {
        let subject = message.lines().next().unwrap_or("");
        let short = if subject.len() > 60 {
            &subject[..60]
        } else {
            subject
        };
        println!("  {}. {}", i + 1, short);
    }

    if messages.len() > 10 {
        println!("  ... and {} more commits", messages.len() - 10);
    }
}

/// Emit a named output value for the surrounding workflow.
///
/// Appends to the file named by `GITHUB_OUTPUT` when the runner provides
/// one; otherwise falls back to the legacy workflow-command line on
/// stdout.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", name, value)?;
        }
        _ => {
            println!("::set-output name={}::{}", name, value);
        }
    }
    Ok(())
}

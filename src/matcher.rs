use std::sync::OnceLock;

use regex::Regex;

/// Tests commit messages against one bump kind's trigger words.
///
/// Built once per configured word list and reused across all messages of
/// a run. Matching is plain substring containment, like the wording
/// inputs promise; an empty trigger (the artifact of splitting an empty
/// configured string) never matches anything.
#[derive(Debug, Clone, PartialEq)]
pub struct WordMatcher {
    words: Vec<String>,
}

impl WordMatcher {
    pub fn new(words: &[String]) -> Self {
        WordMatcher {
            words: words.to_vec(),
        }
    }

    /// Whether the message contains any of the trigger words.
    pub fn matches(&self, message: &str) -> bool {
        self.first_match(message).is_some()
    }

    /// The first trigger word contained in the message, in configured order.
    pub fn first_match(&self, message: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|word| !word.is_empty() && message.contains(word.as_str()))
            .map(String::as_str)
    }

    /// Whether any message in the set matches.
    pub fn any_match(&self, messages: &[String]) -> bool {
        messages.iter().any(|m| self.matches(m))
    }

    /// The first trigger word matched across the message set, scanning
    /// messages in order.
    pub fn first_match_in(&self, messages: &[String]) -> Option<&str> {
        messages.iter().find_map(|m| self.first_match(m))
    }
}

/// Conventional breaking-change shape: a type token, optional scope, and
/// a `!` immediately before the colon (`feat!:`, `fix(api)!:`).
///
/// Anchored to the start of the message, so only the subject line can
/// carry the marker.
pub fn is_breaking_change(message: &str) -> bool {
    static BREAKING: OnceLock<Regex> = OnceLock::new();
    let re = BREAKING.get_or_init(|| {
        Regex::new(r"^[a-zA-Z]+(\(.+\))?!:").expect("breaking-change pattern is valid")
    });
    re.is_match(message)
}

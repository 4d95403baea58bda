//! Connection strength - how often two linked entities mention each other.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

/// Whole-word, case-insensitive mention counter.
///
/// Compiles one pattern per distinct name (names differing only in case
/// share a pattern) and reuses it for every later count. A builder keeps
/// one counter for the whole build.
#[derive(Debug, Default)]
pub struct MentionCounter {
    patterns: HashMap<String, Option<Regex>>,
}

impl MentionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count occurrences of `name` in `text`.
    ///
    /// Word boundaries only sit next to word characters, so a name that
    /// starts or ends with punctuation may count zero even when present.
    pub fn count(&mut self, name: &str, text: &str) -> u32 {
        if name.trim().is_empty() || text.is_empty() {
            return 0;
        }

        let pattern = self
            .patterns
            .entry(name.to_lowercase())
            .or_insert_with(|| mention_pattern(name));

        match pattern {
            Some(re) => re.find_iter(text).count() as u32,
            None => 0,
        }
    }

    /// Strength of the connection between two entities.
    ///
    /// Mentions of the target in the source's text plus mentions of the
    /// source in the target's text, never below 1.
    pub fn strength(
        &mut self,
        source_name: &str,
        source_text: &str,
        target_name: &str,
        target_text: &str,
    ) -> u32 {
        let forward = self.count(target_name, source_text);
        let backward = self.count(source_name, target_text);
        (forward + backward).max(1)
    }

    /// Number of distinct names compiled so far.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

fn mention_pattern(name: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(name, %err, "name not usable as a mention pattern");
            None
        }
    }
}

/// One-off [`MentionCounter::count`].
pub fn count_occurrences(name: &str, text: &str) -> u32 {
    MentionCounter::new().count(name, text)
}

/// One-off [`MentionCounter::strength`].
pub fn connection_strength(
    source_name: &str,
    source_text: &str,
    target_name: &str,
    target_text: &str,
) -> u32 {
    MentionCounter::new().strength(source_name, source_text, target_name, target_text)
}

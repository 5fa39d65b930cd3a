//! Recognized-text normalization - fixes common speech recognition mis-hearings
//!
//! Runs before the command parser. Only whole words are replaced, matched
//! case-insensitively, so "often" or "lengthen" survive untouched.

use regex::Regex;
use tracing::warn;

use crate::config::VoiceConfig;

/// Built-in corrections: misheard word -> intended word
const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("then", "ten"),   // "eight then" -> 08:10
    ("won", "one"),    // "alarm won thirty" -> 01:30
    ("ate", "eight"),  // "alarm ate thirty" -> 08:30
    ("said", "set"),   // "said alarm" -> "set alarm"
];

struct Correction {
    pattern: Regex,
    replacement: String,
}

/// Normalizer with the built-in rules plus any configured corrections
pub struct Normalizer {
    corrections: Vec<Correction>,
}

impl Normalizer {
    /// Normalizer with only the built-in corrections
    pub fn new() -> Self {
        let corrections = BUILTIN_CORRECTIONS
            .iter()
            .filter_map(|(from, to)| whole_word(from, to))
            .collect();
        Self { corrections }
    }

    /// Built-in corrections followed by the ones from `[voice.corrections]`
    pub fn from_config(config: &VoiceConfig) -> Self {
        let mut normalizer = Self::new();

        // BTreeMap keeps application order stable across runs
        for (from, to) in &config.corrections {
            match whole_word(from, to) {
                Some(correction) => normalizer.corrections.push(correction),
                None => warn!("Ignoring invalid correction '{}' -> '{}'", from, to),
            }
        }

        normalizer
    }

    /// Apply every correction in order
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for correction in &self.corrections {
            normalized = correction
                .pattern
                .replace_all(&normalized, correction.replacement.as_str())
                .into_owned();
        }
        normalized
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn whole_word(from: &str, to: &str) -> Option<Correction> {
    let from = from.trim();
    if from.is_empty() {
        return None;
    }
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))).ok()?;
    Some(Correction {
        pattern,
        // `$` in a replacement would be read as a capture group reference
        replacement: to.replace('$', "$$"),
    })
}

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation that separates tokens. Replaced with spaces before matching so
/// "know:get back to me" still contains the phrase "get back to me".
static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[,!?;:()"]"#).expect("invalid punct class"));

/// A prepared case-insensitive whole-token matcher for one word or phrase.
///
/// Phrases, words containing an apostrophe, and words longer than five
/// characters use relaxed boundaries: the adjacent character must not be
/// ASCII alphanumeric. Short plain words additionally refuse an adjacent
/// apostrophe, so "maley" does not match inside "O'maley" and "don" does not
/// match inside "don't", while a trailing run of two or more quote marks or
/// underscores is tolerated ("'''Floor'''").
#[derive(Debug, Clone)]
pub struct WordPattern {
    needle: String,
    strict_boundaries: bool,
}

impl WordPattern {
    pub fn new(word: &str) -> Self {
        let needle = word
            .to_lowercase()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string();
        let strict_boundaries = !needle.contains(' ')
            && !needle.contains('\'')
            && needle.chars().count() <= 5;
        Self {
            needle,
            strict_boundaries,
        }
    }

    /// Counts non-overlapping whole-token occurrences. Never fails; empty
    /// text or an empty word count as zero.
    pub fn count(&self, text: &str) -> usize {
        if self.needle.is_empty() {
            return 0;
        }
        let lowered = text.to_lowercase();
        let haystack = PUNCT.replace_all(&lowered, " ");
        haystack
            .match_indices(&self.needle)
            .filter(|(start, matched)| self.boundary_ok(&haystack, *start, start + matched.len()))
            .count()
    }

    fn boundary_ok(&self, haystack: &str, start: usize, end: usize) -> bool {
        if let Some(before) = haystack[..start].chars().next_back() {
            if before.is_ascii_alphanumeric() {
                return false;
            }
            if self.strict_boundaries && before == '\'' {
                return false;
            }
        }

        let mut tail = haystack[end..].chars();
        match tail.next() {
            None => true,
            Some(c) if c.is_ascii_alphanumeric() => false,
            Some('\'') if self.strict_boundaries => {
                // A run of two or more quote marks ends the token
                // ("floor'''"); a single apostrophe glues it to the next one.
                let mut run = 1;
                let mut after = None;
                for c in tail {
                    if c == '\'' || c == '"' || c == '_' {
                        run += 1;
                    } else {
                        after = Some(c);
                        break;
                    }
                }
                run >= 2 && !matches!(after, Some(c) if c.is_ascii_alphanumeric() || c == '\'')
            }
            Some(_) => true,
        }
    }
}

/// One-shot convenience: build the pattern and count.
pub fn count_occurrences_in_text(word: &str, text: &str) -> usize {
    WordPattern::new(word).count(text)
}

/// Reusable word -> compiled pattern map for repeated counting runs.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<String, WordPattern>,
}

impl PatternCache {
    pub fn count(&mut self, word: &str, text: &str) -> usize {
        self.patterns
            .entry(word.to_lowercase())
            .or_insert_with(|| WordPattern::new(word))
            .count(text)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

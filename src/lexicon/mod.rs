//! Lexical expansion and seasonal keyword tables.
//!
//! Raw profile keywords are expanded into language-equivalent synonym tokens
//! before scoring, keeping the original token first so literal user intent
//! stays identifiable downstream. Expansion is keyed off normalized raw
//! tokens only, so re-expanding an already expanded list adds nothing new.

pub mod tables;


pub use tables::{
    concern_gloss, keyword_synonyms, season_keywords, season_priority_keywords, skin_type_gloss,
    tone_label,
};

use chrono::{Datelike, Local};

/// Calendar season, derived from the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Maps a calendar month (1-12) to a season: 3-5 spring, 6-8 summer,
    /// 9-11 fall, everything else winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Season for the current local date.
    pub fn current() -> Self {
        Self::from_month(Local::now().month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a keyword token for synonym lookup: lowercase with `_`, `-`
/// and spaces stripped.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect()
}

/// Expands raw keywords into original tokens followed by mapped synonyms.
///
/// Order preserves original-first; unknown tokens pass through unchanged.
/// No deduplication: scoring downstream is count-based, so duplicates are
/// harmless.
pub fn expand_keywords(keywords: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        expanded.push(keyword.clone());

        if let Some(synonyms) = keyword_synonyms(&normalize_token(keyword)) {
            expanded.extend(synonyms.iter().map(|s| s.to_string()));
        }
    }

    expanded
}

/// Renders recognized tags as `tag(gloss)`, passing unrecognized tags through.
pub fn with_gloss(tags: &[String], gloss: fn(&str) -> Option<&'static str>) -> Vec<String> {
    tags.iter()
        .map(|tag| match gloss(tag) {
            Some(kr) => format!("{tag}({kr})"),
            None => tag.clone(),
        })
        .collect()
}

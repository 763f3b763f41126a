//! Keyword extraction for perspective comparison
//!
//! Convergence and divergence between the individual- and collective-focused
//! perspectives are computed lexically: the most frequent content words of
//! each text are compared as sets.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-záéíóúñ]{4,}\b").expect("static pattern"));

const STOP_WORDS: [&str; 28] = [
    "the", "and", "that", "this", "these", "those", "with", "from", "into", "over", "been",
    "will", "would", "could", "should", "have", "has", "more", "most", "their", "there",
    "which", "about", "when", "while", "because", "between", "para",
];

/// Keywords retained per text
const TOP_KEYWORDS: usize = 30;

/// Entries kept per comparison list
const COMPARISON_CAP: usize = 10;

/// The most frequent content words of a text, lowercased.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in WORD.find_iter(&lower) {
        let word = word.as_str();
        if !STOP_WORDS.contains(&word) {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Deterministic ordering: frequency first, then alphabetical.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Shared and distinctive vocabulary of the two perspectives.
pub struct KeywordComparison {
    /// Words both perspectives emphasize
    pub convergence: Vec<String>,
    /// Words only the individual-focused perspective emphasizes
    pub individual_unique: Vec<String>,
    /// Words only the collective-focused perspective emphasizes
    pub collective_unique: Vec<String>,
}

pub fn compare_perspectives(individual: &str, collective: &str) -> KeywordComparison {
    let individual_keywords = extract_keywords(individual);
    let collective_keywords = extract_keywords(collective);

    let cap = |iter: Vec<String>| iter.into_iter().take(COMPARISON_CAP).collect::<Vec<_>>();

    KeywordComparison {
        convergence: cap(individual_keywords
            .intersection(&collective_keywords)
            .cloned()
            .collect()),
        individual_unique: cap(individual_keywords
            .difference(&collective_keywords)
            .cloned()
            .collect()),
        collective_unique: cap(collective_keywords
            .difference(&individual_keywords)
            .cloned()
            .collect()),
    }
}

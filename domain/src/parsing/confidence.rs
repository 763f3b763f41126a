//! Heuristic confidence estimation for free-text responses
//!
//! When a provider returns unstructured text there is no self-reported
//! confidence to read, so one is estimated from the parsed sections: detailed
//! insights raise it, long uncertainty sections and hedging language lower
//! it. Always clamped to [0, 1].

use super::sections::InsightSections;

const DEFINITIVE_WORDS: [&str; 9] = [
    "clear",
    "definitive",
    "precise",
    "certain",
    "obviously",
    "definitivo",
    "claro",
    "preciso",
    "sin ambig",
];

const HEDGING_WORDS: [&str; 12] = [
    "maybe",
    "perhaps",
    "possibly",
    "might",
    "could be",
    "not sure",
    "unclear",
    "difficult to determine",
    "tal vez",
    "posiblemente",
    "quiza",
    "podria",
];

const MORE_INFO_PHRASES: [&str; 5] = [
    "need more information",
    "require additional",
    "would help to know",
    "necesito mas",
    "requiero mas",
];

/// Estimate confidence from parsed sections, starting at a neutral 0.5.
pub fn estimate_confidence(sections: &InsightSections) -> f64 {
    let mut confidence: f64 = 0.5;

    // Length and detail of insights
    let insights_len = sections.insights.len();
    if insights_len > 200 {
        confidence += 0.25;
    } else if insights_len > 100 {
        confidence += 0.20;
    } else if insights_len > 50 {
        confidence += 0.10;
    } else if insights_len < 30 {
        confidence -= 0.10;
    }

    // Weight of the uncertainties section
    let uncertainties_len = sections.uncertainties.len();
    if uncertainties_len > 150 {
        confidence -= 0.20;
    } else if uncertainties_len > 50 {
        confidence -= 0.10;
    } else if uncertainties_len < 10 {
        confidence += 0.20;
    }

    let analysis = sections.analysis.to_lowercase();
    let definitive = DEFINITIVE_WORDS
        .iter()
        .filter(|word| analysis.contains(*word))
        .count();
    confidence += definitive as f64 * 0.05;

    let hedging = HEDGING_WORDS
        .iter()
        .filter(|word| analysis.contains(*word))
        .count();
    confidence -= hedging as f64 * 0.05;

    let uncertainties = sections.uncertainties.to_lowercase();
    if MORE_INFO_PHRASES
        .iter()
        .any(|phrase| uncertainties.contains(phrase))
    {
        confidence -= 0.10;
    }

    confidence.clamp(0.0, 1.0)
}

/// Whether the response asks the caller for more information
pub fn requests_more_info(sections: &InsightSections) -> bool {
    let uncertainties = sections.uncertainties.to_lowercase();
    MORE_INFO_PHRASES
        .iter()
        .any(|phrase| uncertainties.contains(phrase))
}

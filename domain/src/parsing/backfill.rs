//! Insight back-fill from an adjacent analysis field
//!
//! When header parsing leaves the insights field empty but the analysis
//! field carries text, insights are recovered from the analysis instead of
//! returning silence: sub-heading chunks that look like insights first, the
//! trailing portion of the analysis verbatim as the last resort. Recovered
//! text is tagged so consumers can tell it apart from genuine content.

use fancy_regex::Regex;
use std::sync::LazyLock;

/// Sub-headings inside an analysis that typically carry the insight content
static INSIGHT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ims)^#{2,3}\s*\*{0,2}(?:\d+[.)]\s*|[a-z][.)]\s*)?(?:[^\n]*\b(?:insights?|implications?|lessons|patterns|patrones|lecciones|implicaciones)\b)[^\n]*$(.*?)(?=^#{2,3}\s|\z)",
    )
    .expect("static pattern")
});

/// Fraction of the analysis tail used when no sub-heading matches
const TAIL_FRACTION: f64 = 0.30;

/// Minimum chunk length considered a real insight section
const MIN_CHUNK_LEN: usize = 50;

/// Analyses shorter than this are used whole instead of sliced
const SHORT_ANALYSIS_LEN: usize = 1000;

/// Recover insights from a non-empty analysis field.
///
/// Returns `None` only when the analysis itself is empty.
pub fn insights_from_analysis(analysis: &str) -> Option<String> {
    let analysis = analysis.trim();
    if analysis.is_empty() {
        return None;
    }

    let chunks: Vec<&str> = INSIGHT_HEADING
        .captures_iter(analysis)
        .filter_map(|capture| capture.ok()?.get(1))
        .map(|group| group.as_str().trim())
        .filter(|chunk| chunk.len() >= MIN_CHUNK_LEN)
        .collect();

    if !chunks.is_empty() {
        return Some(format!(
            "Extracted from analysis sub-sections:\n\n{}",
            chunks.join("\n\n")
        ));
    }

    if analysis.len() <= SHORT_ANALYSIS_LEN {
        return Some(format!("Extracted from analysis (short response):\n\n{analysis}"));
    }

    // Insight-like conclusions usually live at the end of the analysis.
    let cutoff = (analysis.len() as f64 * (1.0 - TAIL_FRACTION)) as usize;
    let boundary = analysis
        .char_indices()
        .map(|(index, _)| index)
        .find(|index| *index >= cutoff)
        .unwrap_or(0);
    Some(format!(
        "Extracted from final portion of analysis:\n\n{}",
        analysis[boundary..].trim()
    ))
}

//! Response parsing and the fallback chain
//!
//! LLM output is free text even when JSON is requested, so every stage maps
//! raw text into named fields through an ordered list of strategies, composed
//! per field with first-non-empty-wins semantics:
//!
//! 1. [`json`] - direct JSON decode with per-field defaults; malformed JSON
//!    is a hard error in this mode.
//! 2. [`sections`] - header-delimited section scan (English and Spanish
//!    headers, markdown prefixes tolerated).
//! 3. [`emergency`] - regex/keyword stakeholder extraction, then inferred
//!    defaults.
//! 4. [`backfill`] - insights recovered from an adjacent analysis field.
//!
//! The chain trades precision for availability: a required field never comes
//! back empty as long as any tier can produce something, and every heuristic
//! tier tags its output as such.

pub mod backfill;
pub mod confidence;
pub mod emergency;
pub mod json;
pub mod keywords;
pub mod sections;

use sections::{ContextSections, InsightSections};

/// Contextual-analysis parse with fallback bookkeeping
pub struct ContextParse {
    pub sections: ContextSections,
    /// True when the stakeholder field was filled by emergency extraction
    pub emergency_extraction_used: bool,
}

/// Parse a contextual-analysis response, guaranteeing a stakeholder field.
///
/// `input_text` is the scenario text; it joins the response in the emergency
/// scan because stakeholders are often named only in the question.
pub fn parse_contextual_analysis(response: &str, input_text: &str) -> ContextParse {
    let mut parsed = ContextSections::parse(response);
    let mut emergency_extraction_used = false;

    if parsed.stakeholders.trim().is_empty() {
        let combined = format!("{input_text}\n{response}");
        if let Some(extracted) = emergency::extract_stakeholders(&combined) {
            parsed.stakeholders = extracted;
            emergency_extraction_used = true;
        }
    }

    ContextParse {
        sections: parsed,
        emergency_extraction_used,
    }
}

/// Insight-text parse with fallback bookkeeping
pub struct InsightParse {
    pub sections: InsightSections,
    pub confidence: f64,
    /// True when the insights field was back-filled from the analysis
    pub insights_backfilled: bool,
    /// True when the response asks the caller for more information
    pub requests_more_info: bool,
}

/// Parse a free-text insight response, back-filling insights when header
/// parsing leaves them empty but an analysis section exists.
pub fn parse_insight_text(response: &str) -> InsightParse {
    let mut parsed = InsightSections::parse(response);
    let mut insights_backfilled = false;

    if parsed.insights.trim().is_empty() && !parsed.analysis.trim().is_empty() {
        if let Some(recovered) = backfill::insights_from_analysis(&parsed.analysis) {
            parsed.insights = recovered;
            insights_backfilled = true;
        }
    }

    let confidence = confidence::estimate_confidence(&parsed);
    let requests_more_info = confidence::requests_more_info(&parsed);

    InsightParse {
        sections: parsed,
        confidence,
        insights_backfilled,
        requests_more_info,
    }
}

//! Emergency stakeholder extraction
//!
//! Last-resort tier of the fallback chain: when section parsing leaves the
//! stakeholder field empty, regex heuristics scan the combined input and
//! output text for population counts, country names, demographic groups, and
//! power actors, synthesizing a best-effort bullet list. Output is always
//! tagged as emergency-extracted so downstream consumers can tell inferred
//! content from genuine content.

use regex::Regex;
use std::sync::LazyLock;

static POPULATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d[\d,.]*\s*(?:million|billion|thousand|millones?|miles?|mil|[MmKk])\s+(?:of\s+|de\s+)?(?:people|persons?|residents?|citizens?|inhabitants?|refugees?|migrants?|workers?|personas?|habitantes?|ciudadanos?|refugiados?|migrantes?))",
    )
    .expect("static pattern")
});

static COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(Venezuela|Colombia|Brazil|Brasil|Peru|Perú|Mexico|México|Argentina|Chile|Cuba|China|Russia|Rusia|India|Ukraine|United States|Estados Unidos|EEUU|Germany|France|Spain|España|Nigeria|Kenya|Egypt)\b",
    )
    .expect("static pattern")
});

static GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:indigenous|rural|urban|marginalized|coastal)\s+communit(?:y|ies)|refugees?|migrants?|displaced\s+(?:people|persons)|(?:healthcare|factory|agricultural|informal)\s+workers?|small\s+businesse?s?|children|women|elderly\s+(?:people|residents)|patients?|students?|NGOs?|humanitarian\s+organi[sz]ations?|comunidades?\s+(?:indígenas?|rurales?))",
    )
    .expect("static pattern")
});

static POWER_ACTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(government\s+of\s+\w+|national\s+government|city\s+council|regulators?|regulatory\s+agenc(?:y|ies)|opposition\s+part(?:y|ies)|(?:UN|EU|WHO|IMF|ONU|OEA)\b|central\s+banks?|military\s+leadership|law\s+enforcement|gobierno\s+de\s+\w+)",
    )
    .expect("static pattern")
});

/// Tag appended to every emergency-extracted list
const EXTRACTION_NOTE: &str = "[NOTE: stakeholders identified by emergency extraction]";

fn push_unique(entries: &mut Vec<String>, entry: String) {
    if !entries.iter().any(|existing| existing == &entry) {
        entries.push(entry);
    }
}

/// Scan the combined text for stakeholder-like phrases.
///
/// Returns a formatted bullet list, or `None` when even the inferred-default
/// tier finds nothing to say.
pub fn extract_stakeholders(combined_text: &str) -> Option<String> {
    let mut entries = Vec::new();

    for capture in POPULATION.find_iter(combined_text) {
        push_unique(
            &mut entries,
            format!("- Civilian population: {} [HIGH IMPACT]", capture.as_str().trim()),
        );
    }

    for capture in COUNTRY.find_iter(combined_text) {
        push_unique(
            &mut entries,
            format!("- Country: {} [MEDIUM IMPACT]", capture.as_str().trim()),
        );
    }

    for capture in GROUP.find_iter(combined_text) {
        push_unique(
            &mut entries,
            format!("- {} [MEDIUM/HIGH IMPACT]", capitalize(capture.as_str().trim())),
        );
    }

    for capture in POWER_ACTOR.find_iter(combined_text) {
        push_unique(
            &mut entries,
            format!("- Power actor: {} [INFLUENCE CAPACITY]", capture.as_str().trim()),
        );
    }

    // Nothing matched: fall through to keyword-triggered inferred defaults.
    if entries.is_empty() {
        entries = inferred_defaults(combined_text);
    }

    if entries.is_empty() {
        return None;
    }

    entries.sort();
    entries.dedup();
    Some(format!(
        "STAKEHOLDERS (emergency extraction):\n\n{}\n\n{}",
        entries.join("\n"),
        EXTRACTION_NOTE
    ))
}

/// Keyword-triggered defaults, emitted only when every regex tier came back
/// empty. Tagged INFERRED because they are guesses from topic keywords, not
/// extractions.
fn inferred_defaults(combined_text: &str) -> Vec<String> {
    let lower = combined_text.to_lowercase();
    let mut entries = Vec::new();

    if COUNTRY.is_match(combined_text) {
        entries.push("- Affected national population [HIGH IMPACT - INFERRED]".to_string());
    }
    if lower.contains("military") || lower.contains("war") || lower.contains("conflict") {
        entries.push("- Civilians in the conflict zone [HIGH IMPACT - INFERRED]".to_string());
        entries.push("- Armed forces involved [MEDIUM IMPACT - INFERRED]".to_string());
    }
    if lower.contains("econom") || lower.contains("sanction") || lower.contains("tax") {
        entries.push("- Population affected by economic measures [HIGH IMPACT - INFERRED]".to_string());
    }
    if lower.contains("health") || lower.contains("hospital") {
        entries.push("- Patients and healthcare providers [HIGH IMPACT - INFERRED]".to_string());
    }

    entries
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_phrase_is_extracted() {
        let text = "The reform affects 28 million people across the region.";
        let result = extract_stakeholders(text).unwrap();
        assert!(result.contains("Civilian population: 28 million people"));
        assert!(result.contains("emergency extraction"));
    }

    #[test]
    fn test_country_and_power_actor() {
        let text = "Sanctions against Venezuela coordinated with the government of Colombia.";
        let result = extract_stakeholders(text).unwrap();
        assert!(result.contains("Country: Venezuela"));
        assert!(result.contains("Power actor: government of Colombia"));
    }

    #[test]
    fn test_demographic_groups() {
        let text = "Indigenous communities and healthcare workers would bear the cost.";
        let result = extract_stakeholders(text).unwrap();
        assert!(result.contains("Indigenous communities"));
        assert!(result.contains("[MEDIUM/HIGH IMPACT]"));
    }

    #[test]
    fn test_inferred_defaults_from_keywords() {
        let text = "A proposal about sanction policy and trade measures.";
        let result = extract_stakeholders(text).unwrap();
        assert!(result.contains("INFERRED"));
        assert!(result.contains("economic measures"));
    }

    #[test]
    fn test_nothing_found_returns_none() {
        assert!(extract_stakeholders("Reorganize the filing cabinet.").is_none());
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let text = "Venezuela depends on Venezuela, and Venezuela again.";
        let result = extract_stakeholders(text).unwrap();
        assert_eq!(result.matches("Country: Venezuela").count(), 1);
    }
}

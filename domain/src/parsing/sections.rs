//! Header-delimited section parsing
//!
//! Models are asked for a fixed set of uppercase section headers but drift
//! between runs and providers: headers arrive in English or Spanish, wrapped
//! in markdown (`##`, `**`), with or without trailing colons. The scanner
//! matches each line against per-field keyword lists and assigns the content
//! between a recognized header and the next one (or end of text) to that
//! field.

/// Keyword list for one named section
pub struct SectionSpec {
    pub key: &'static str,
    /// Uppercase header variants (English and Spanish)
    pub keywords: &'static [&'static str],
}

/// Scan `response` line by line and split it into the given sections.
///
/// Returns one trimmed string per spec, in spec order. Text before the first
/// recognized header is assigned to the first section; when no header
/// matches at all, every slot comes back empty and the caller decides where
/// the raw text belongs.
pub fn split_sections(response: &str, specs: &[SectionSpec]) -> Vec<String> {
    let mut sections = vec![Vec::<String>::new(); specs.len()];
    let mut current: Option<usize> = None;
    let mut any_header = false;
    let mut leading = Vec::new();

    for line in response.lines() {
        let line_upper = line.trim().to_uppercase();

        let header = specs.iter().position(|spec| {
            spec.keywords
                .iter()
                .any(|keyword| line_upper.contains(keyword))
        });

        if let Some(index) = header {
            any_header = true;
            current = Some(index);
            // A repeated header restarts its section; the model corrected
            // itself and the later occurrence wins.
            sections[index].clear();
            // Content on the header line itself, after the colon
            if let Some((_, after)) = line.split_once(':') {
                if !after.trim().is_empty() {
                    sections[index].push(after.trim().to_string());
                }
            }
        } else if let Some(index) = current {
            if !line.trim().is_empty() {
                sections[index].push(line.trim().to_string());
            }
        } else if !line.trim().is_empty() {
            leading.push(line.trim().to_string());
        }
    }

    let mut result: Vec<String> = sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect();

    // Unheadered leading text belongs to the first section
    if any_header && !leading.is_empty() && result[0].is_empty() {
        result[0] = leading.join("\n");
    }

    result
}

/// Parsed sections of the contextual-analysis response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSections {
    pub historical_context: String,
    pub current_context: String,
    pub stakeholders: String,
    pub first_order_effects: String,
    pub second_order_effects: String,
    pub third_order_effects: String,
    pub systemic_risks: String,
    pub ethical_considerations: String,
    pub contextual_synthesis: String,
}

impl ContextSections {
    const SPECS: [SectionSpec; 9] = [
        SectionSpec {
            key: "historical_context",
            keywords: &["HISTORICAL CONTEXT", "CONTEXTO HISTORICO"],
        },
        SectionSpec {
            key: "current_context",
            keywords: &["CURRENT CONTEXT", "CONTEXTO ACTUAL"],
        },
        SectionSpec {
            key: "stakeholders",
            keywords: &["STAKEHOLDERS", "PARTES INTERESADAS"],
        },
        SectionSpec {
            key: "first_order_effects",
            keywords: &["FIRST ORDER EFFECTS", "EFECTOS DE PRIMER ORDEN"],
        },
        SectionSpec {
            key: "second_order_effects",
            keywords: &["SECOND ORDER EFFECTS", "EFECTOS DE SEGUNDO ORDEN"],
        },
        SectionSpec {
            key: "third_order_effects",
            keywords: &["THIRD ORDER EFFECTS", "EFECTOS DE TERCER ORDEN"],
        },
        SectionSpec {
            key: "systemic_risks",
            keywords: &["SYSTEMIC RISKS", "RIESGOS SISTEMICOS"],
        },
        SectionSpec {
            key: "ethical_considerations",
            keywords: &["ETHICAL CONSIDERATIONS", "CONSIDERACIONES ETICAS"],
        },
        SectionSpec {
            key: "contextual_synthesis",
            keywords: &["CONTEXTUAL SYNTHESIS", "SINTESIS CONTEXTUAL"],
        },
    ];

    pub fn parse(response: &str) -> Self {
        let mut parts = split_sections(response, &Self::SPECS);
        let mut sections = Self {
            contextual_synthesis: parts.pop().unwrap_or_default(),
            ethical_considerations: parts.pop().unwrap_or_default(),
            systemic_risks: parts.pop().unwrap_or_default(),
            third_order_effects: parts.pop().unwrap_or_default(),
            second_order_effects: parts.pop().unwrap_or_default(),
            first_order_effects: parts.pop().unwrap_or_default(),
            stakeholders: parts.pop().unwrap_or_default(),
            current_context: parts.pop().unwrap_or_default(),
            historical_context: parts.pop().unwrap_or_default(),
        };

        // No headers recognized: keep the whole response in the synthesis
        // slot rather than dropping it.
        if sections.is_empty() && !response.trim().is_empty() {
            sections.contextual_synthesis = response.trim().to_string();
        }
        sections
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.historical_context,
            &self.current_context,
            &self.stakeholders,
            &self.first_order_effects,
            &self.second_order_effects,
            &self.third_order_effects,
            &self.systemic_risks,
            &self.ethical_considerations,
            &self.contextual_synthesis,
        ]
        .iter()
        .all(|s| s.is_empty())
    }

    /// Whether the response analyzed downstream consequences
    pub fn has_second_order_analysis(&self) -> bool {
        !self.second_order_effects.is_empty() || !self.third_order_effects.is_empty()
    }
}

/// Parsed sections of a free-text insight response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightSections {
    pub understanding: String,
    pub analysis: String,
    pub insights: String,
    pub uncertainties: String,
    pub recommendation: String,
}

impl InsightSections {
    const SPECS: [SectionSpec; 5] = [
        SectionSpec {
            key: "understanding",
            keywords: &["UNDERSTANDING", "COMPRENSION", "COMPRENSIÓN"],
        },
        SectionSpec {
            key: "analysis",
            keywords: &["ANALYSIS", "ANALISIS", "ANÁLISIS"],
        },
        SectionSpec {
            key: "insights",
            keywords: &["INSIGHTS"],
        },
        SectionSpec {
            key: "uncertainties",
            keywords: &["UNCERTAINTIES", "INCERTIDUMBRES"],
        },
        SectionSpec {
            key: "recommendation",
            keywords: &["RECOMMENDATION", "RECOMENDACION", "RECOMENDACIÓN"],
        },
    ];

    pub fn parse(response: &str) -> Self {
        let mut parts = split_sections(response, &Self::SPECS);
        let mut sections = Self {
            recommendation: parts.pop().unwrap_or_default(),
            uncertainties: parts.pop().unwrap_or_default(),
            insights: parts.pop().unwrap_or_default(),
            analysis: parts.pop().unwrap_or_default(),
            understanding: parts.pop().unwrap_or_default(),
        };

        // Nothing matched: the whole response is at least an analysis.
        if sections.is_empty() && !response.trim().is_empty() {
            sections.analysis = response.trim().to_string();
        }
        sections
    }

    pub fn is_empty(&self) -> bool {
        self.understanding.is_empty()
            && self.analysis.is_empty()
            && self.insights.is_empty()
            && self.uncertainties.is_empty()
            && self.recommendation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = "\
## UNDERSTANDING\n\
The proposal restructures municipal transport funding.\n\
\n\
**ANALYSIS**\n\
Fare revenue covers 40% of operating cost today.\n\
Subsidy shifts would close the remainder.\n\
\n\
INSIGHTS:\n\
- Free transit increases off-peak ridership most.\n\
- Fare enforcement costs disappear entirely.\n\
\n\
UNCERTAINTIES:\n\
- Long-run maintenance burden is unknown.\n\
\n\
RECOMMENDATION: Pilot on two lines first.\n";

    #[test]
    fn test_full_response_fills_every_section() {
        let sections = InsightSections::parse(FULL_RESPONSE);
        assert!(sections.understanding.contains("municipal transport"));
        assert!(sections.analysis.contains("40%"));
        assert!(sections.insights.contains("off-peak"));
        assert!(sections.uncertainties.contains("maintenance"));
        assert_eq!(sections.recommendation, "Pilot on two lines first.");
    }

    #[test]
    fn test_markdown_prefixes_are_tolerated() {
        let response = "## INSIGHTS\nA\n**UNCERTAINTIES**\nB\n";
        let sections = InsightSections::parse(response);
        assert_eq!(sections.insights, "A");
        assert_eq!(sections.uncertainties, "B");
    }

    #[test]
    fn test_spanish_headers() {
        let response = "COMPRENSIÓN:\nEl panorama general.\nINCERTIDUMBRES:\nDatos faltantes.\n";
        let sections = InsightSections::parse(response);
        assert_eq!(sections.understanding, "El panorama general.");
        assert_eq!(sections.uncertainties, "Datos faltantes.");
    }

    #[test]
    fn test_leading_text_goes_to_first_section() {
        let response = "Some preamble the model added.\nANALYSIS:\nThe core argument.\n";
        let sections = InsightSections::parse(response);
        assert_eq!(sections.understanding, "Some preamble the model added.");
        assert_eq!(sections.analysis, "The core argument.");
    }

    #[test]
    fn test_repeated_header_replaces_earlier_content() {
        let response = "INSIGHTS:\nfirst draft\nINSIGHTS:\nsecond draft\n";
        let sections = InsightSections::parse(response);
        assert_eq!(sections.insights, "second draft");
    }

    #[test]
    fn test_no_headers_falls_back_to_analysis() {
        let response = "Plain prose with no structure whatsoever.";
        let sections = InsightSections::parse(response);
        assert_eq!(sections.analysis, response);
        assert!(sections.insights.is_empty());
    }

    #[test]
    fn test_context_sections_no_headers_fall_back_to_synthesis() {
        let sections = ContextSections::parse("unstructured blob");
        assert_eq!(sections.contextual_synthesis, "unstructured blob");
    }

    #[test]
    fn test_context_sections_stakeholders_and_effects() {
        let response = "\
STAKEHOLDERS:\n\
- Riders\n\
- City budget office\n\
SECOND ORDER EFFECTS:\n\
Parking demand drops downtown.\n";
        let sections = ContextSections::parse(response);
        assert!(sections.stakeholders.contains("Riders"));
        assert!(sections.has_second_order_analysis());
        assert!(sections.first_order_effects.is_empty());
    }

    #[test]
    fn test_content_on_header_line_is_kept() {
        let response = "CURRENT CONTEXT: inflation at 9%\nMore detail here.\n";
        let sections = ContextSections::parse(response);
        assert_eq!(sections.current_context, "inflation at 9%\nMore detail here.");
    }
}

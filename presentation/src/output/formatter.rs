//! Console output formatting for analysis results

use crate::cli::OutputFormat;
use ethica_domain::AnalysisResult;
use std::fmt::Write;

/// Renders an [`AnalysisResult`] for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(result: &AnalysisResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(result)
                .unwrap_or_else(|e| format!("serialization error: {e}")),
            OutputFormat::Summary => Self::summary(result),
            OutputFormat::Full => Self::full(result),
        }
    }

    fn summary(result: &AnalysisResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Analysis {}", result.scenario_id);
        let _ = writeln!(out, "{}", "=".repeat(60));
        Self::write_views(&mut out, result);
        Self::write_decision(&mut out, result);
        out
    }

    fn full(result: &AnalysisResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Analysis {} ({})", result.scenario_id, result.timestamp);
        let _ = writeln!(out, "{}", "=".repeat(60));
        Self::write_views(&mut out, result);

        let _ = writeln!(out, "\nImpact dimensions");
        let d = &result.impact_score.dimensions;
        let _ = writeln!(out, "  Harm reduction:   {:+}", d.harm_reduction);
        let _ = writeln!(out, "  Autonomy respect: {:+}", d.autonomy_respect);
        let _ = writeln!(out, "  Social harmony:   {:+}", d.social_harmony);
        let _ = writeln!(out, "  Justice balance:  {:+}", d.justice_balance);
        let _ = writeln!(out, "  Truthfulness:     {:+}", d.truthfulness);
        let _ = writeln!(
            out,
            "  Alignment: {:.1}%  Gate score: {:.1}%",
            result.impact_score.alignment * 100.0,
            result.impact_score.score * 100.0
        );
        for concern in &result.impact_score.concerns {
            let _ = writeln!(
                out,
                "  Concern [{:?}] {}: {}",
                concern.severity, concern.kind, concern.description
            );
        }

        if let Some(insight) = &result.insight_analysis {
            let _ = writeln!(out, "\nInsights ({:.0}% confidence)", insight.confidence * 100.0);
            for item in &insight.insights {
                let _ = writeln!(out, "  - {item}");
            }
            for item in &insight.uncertainties {
                let _ = writeln!(out, "  ? {item}");
            }
        }

        if let Some(perspectives) = &result.perspective_comparison {
            let _ = writeln!(out, "\nPerspective synthesis");
            let _ = writeln!(out, "  {}", perspectives.synthesis);
            if !perspectives.convergence_points.is_empty() {
                let _ = writeln!(
                    out,
                    "  Convergence: {}",
                    perspectives.convergence_points.join(", ")
                );
            }
        }

        if let Some(opportunities) = &result.opportunity_assessment {
            let _ = writeln!(out, "\nOpportunities");
            for item in &opportunities.opportunities {
                let _ = writeln!(out, "  + {item}");
            }
        }

        if let Some(risks) = &result.risk_assessment {
            let _ = writeln!(out, "\nRisks (severity {:.1}%)", risks.severity_score * 100.0);
            for entry in &risks.risks {
                let _ = writeln!(out, "  ! {}", entry.summary());
            }
            for warning in &risks.warnings {
                let _ = writeln!(out, "  WARNING: {warning}");
            }
        }

        if let Some(resolution) = &result.conflict_resolution {
            let _ = writeln!(out, "\nBalanced path");
            let _ = writeln!(out, "  {}", resolution.balanced_path);
        }

        if let Some(plan) = &result.implementation {
            if !plan.phases.is_empty() {
                let _ = writeln!(out, "\nImplementation phases");
                for phase in &plan.phases {
                    let _ = writeln!(out, "  {} ({})", phase.phase_name, phase.timeline);
                }
            }
        }

        Self::write_decision(&mut out, result);

        if result.metrics.used_fallbacks() {
            let _ = writeln!(
                out,
                "\nNote: {} emergency extraction(s), {} insight back-fill(s) were needed.",
                result.metrics.emergency_extractions, result.metrics.insight_backfills
            );
        }
        out
    }

    fn write_views(out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(
            out,
            "Strategic    impact {:>5.1}%  confidence {:>5.1}%  integration {:>5.1}%",
            result.strategic.impact_score * 100.0,
            result.strategic.confidence * 100.0,
            result.strategic.integration_score * 100.0
        );
        let _ = writeln!(
            out,
            "Operational  {} opportunities, {} risks, harmony {:.1}%",
            result.operational.opportunities,
            result.operational.risks,
            result.operational.harmony_score * 100.0
        );
        let _ = writeln!(
            out,
            "Tactical     sustainability {:.1}%  precision {:.1}%",
            result.tactical.sustainability * 100.0,
            result.tactical.precision * 100.0
        );
        let _ = writeln!(
            out,
            "Execution    readiness {:.1}%  approved: {}",
            result.execution.readiness * 100.0,
            if result.execution.approved { "yes" } else { "no" }
        );
    }

    fn write_decision(out: &mut String, result: &AnalysisResult) {
        let decision = &result.decision;
        let _ = writeln!(out, "\n{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "DECISION: {} (confidence {:.1}%)",
            decision.approval_type,
            decision.confidence * 100.0
        );
        let _ = writeln!(out, "{}", decision.reasoning);
        if !decision.conditions.is_empty() {
            let _ = writeln!(out, "Conditions:");
            for condition in &decision.conditions {
                let _ = writeln!(out, "  * {condition}");
            }
        }
        if !decision.actions.is_empty() {
            let _ = writeln!(out, "Actions:");
            for action in &decision.actions {
                let _ = writeln!(out, "  > {action}");
            }
        }
    }
}

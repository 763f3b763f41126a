//! Aggregate analysis result and the four roll-up views

use crate::decision::Decision;
use crate::metrics::AnalysisMetrics;
use crate::scenario::ScenarioId;
use crate::stage::results::{
    ConflictResolution, ImpactScore, ImplementationPlan, InsightAnalysis, IntegrationResult,
    OpportunityAssessment, PerspectiveComparison, RiskAssessment, SustainabilityEvaluation,
};
use serde::{Deserialize, Serialize};

/// Strategic roll-up: intent-level scalars
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategicView {
    pub impact_score: f64,
    pub confidence: f64,
    pub integration_score: f64,
}

/// Operational roll-up: the force balance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationalView {
    pub opportunities: usize,
    pub risks: usize,
    pub harmony_score: f64,
}

/// Tactical roll-up: endurance and precision
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TacticalView {
    pub sustainability: f64,
    pub precision: f64,
}

/// Execution roll-up: the terminal numbers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionView {
    pub readiness: f64,
    pub approved: bool,
}

/// Complete result of one pipeline run.
///
/// Invariant: when stage 1 fails validation, stages 2-9 are `None` and the
/// aggregate carries only the rejection decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scenario_id: ScenarioId,
    /// RFC 3339 UTC timestamp of the run
    pub timestamp: String,

    pub strategic: StrategicView,
    pub operational: OperationalView,
    pub tactical: TacticalView,
    pub execution: ExecutionView,

    pub impact_score: ImpactScore,
    pub insight_analysis: Option<InsightAnalysis>,
    pub perspective_comparison: Option<PerspectiveComparison>,
    pub opportunity_assessment: Option<OpportunityAssessment>,
    pub risk_assessment: Option<RiskAssessment>,
    pub conflict_resolution: Option<ConflictResolution>,
    pub sustainability: Option<SustainabilityEvaluation>,
    pub implementation: Option<ImplementationPlan>,
    pub integration: Option<IntegrationResult>,
    pub decision: Decision,

    #[serde(default)]
    pub metrics: AnalysisMetrics,
}

impl AnalysisResult {
    /// Build the aggregate for a run rejected at stage 1.
    pub fn early_rejection(
        scenario_id: ScenarioId,
        timestamp: String,
        impact_score: ImpactScore,
        metrics: AnalysisMetrics,
    ) -> Self {
        let decision = Decision::early_rejection(impact_score.score);
        Self {
            scenario_id,
            timestamp,
            strategic: StrategicView {
                impact_score: impact_score.score,
                ..Default::default()
            },
            operational: OperationalView::default(),
            tactical: TacticalView::default(),
            execution: ExecutionView::default(),
            impact_score,
            insight_analysis: None,
            perspective_comparison: None,
            opportunity_assessment: None,
            risk_assessment: None,
            conflict_resolution: None,
            sustainability: None,
            implementation: None,
            integration: None,
            decision,
            metrics,
        }
    }

    /// True when any stage after validation ran
    pub fn ran_full_pipeline(&self) -> bool {
        self.integration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ApprovalType;
    use crate::stage::results::{ImpactDimensions, PhasePlan, RiskEntry, RiskItem};

    fn low_impact() -> ImpactScore {
        ImpactScore {
            score: 0.35,
            alignment: 0.30,
            aligned: false,
            dimensions: ImpactDimensions::default(),
            concerns: vec![],
            manifestation_valid: false,
            reasoning: "net negative".to_string(),
        }
    }

    #[test]
    fn test_early_rejection_invariant() {
        let result = AnalysisResult::early_rejection(
            ScenarioId::generate(),
            "2025-06-01T12:00:00Z".to_string(),
            low_impact(),
            AnalysisMetrics::default(),
        );

        assert!(!result.ran_full_pipeline());
        assert!(result.insight_analysis.is_none());
        assert!(result.perspective_comparison.is_none());
        assert!(result.opportunity_assessment.is_none());
        assert!(result.risk_assessment.is_none());
        assert!(result.conflict_resolution.is_none());
        assert!(result.sustainability.is_none());
        assert!(result.implementation.is_none());
        assert!(result.integration.is_none());

        assert!(!result.decision.approved);
        assert_eq!(result.decision.confidence, 1.0);
        assert!(result.decision.actions.is_empty());
        assert!(result.decision.conditions.is_empty());

        assert_eq!(result.strategic.impact_score, 0.35);
        assert_eq!(result.strategic.confidence, 0.0);
        assert!(!result.execution.approved);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let result = AnalysisResult::early_rejection(
            ScenarioId::generate(),
            "2025-06-01T12:00:00Z".to_string(),
            low_impact(),
            AnalysisMetrics::default(),
        );

        let json = serde_json::to_string_pretty(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.scenario_id, result.scenario_id);
        assert_eq!(back.timestamp, result.timestamp);
        assert_eq!(back.impact_score.score, result.impact_score.score);
        assert_eq!(back.decision.reasoning, result.decision.reasoning);
        assert!(back.integration.is_none());
    }

    #[test]
    fn test_round_trip_of_full_pipeline_result_keeps_list_order() {
        let result = AnalysisResult {
            scenario_id: ScenarioId::generate(),
            timestamp: "2025-06-01T12:00:00Z".to_string(),
            strategic: StrategicView {
                impact_score: 0.80,
                confidence: 0.85,
                integration_score: 0.75,
            },
            operational: OperationalView {
                opportunities: 3,
                risks: 2,
                harmony_score: 0.7,
            },
            tactical: TacticalView {
                sustainability: 0.72,
                precision: 0.68,
            },
            execution: ExecutionView {
                readiness: 0.74,
                approved: true,
            },
            impact_score: ImpactScore {
                score: 0.80,
                alignment: 0.78,
                aligned: true,
                dimensions: ImpactDimensions {
                    harm_reduction: 8,
                    autonomy_respect: 4,
                    social_harmony: 6,
                    justice_balance: 5,
                    truthfulness: 7,
                },
                concerns: vec![],
                manifestation_valid: true,
                reasoning: "clear net benefit".to_string(),
            },
            insight_analysis: Some(InsightAnalysis {
                understanding: "fare-free transit proposal".to_string(),
                insights: vec![
                    "off-peak ridership grows most".to_string(),
                    "enforcement costs vanish".to_string(),
                    "budget pressure moves to maintenance".to_string(),
                ],
                uncertainties: vec!["long-run maintenance burden".to_string()],
                confidence: 0.85,
            }),
            perspective_comparison: Some(PerspectiveComparison {
                synthesis: "both readings favor a staged rollout".to_string(),
                convergence_points: vec![
                    "equity gains".to_string(),
                    "ridership growth".to_string(),
                ],
                divergence_points: vec!["funding source".to_string()],
                integration_score: 0.75,
                ..Default::default()
            }),
            opportunity_assessment: Some(OpportunityAssessment {
                opportunities: vec![
                    "expanded access".to_string(),
                    "downtown congestion relief".to_string(),
                    "simpler boarding".to_string(),
                ],
                beneficiaries: vec!["low-income riders".to_string()],
                ..Default::default()
            }),
            risk_assessment: Some(RiskAssessment {
                risks: vec![
                    RiskEntry::Detailed(RiskItem {
                        risk: "revenue shortfall".to_string(),
                        likelihood: "HIGH".to_string(),
                        impact: "MEDIUM".to_string(),
                        description: String::new(),
                    }),
                    RiskEntry::Simple("overcrowding at peak".to_string()),
                ],
                warnings: vec!["budget vote pending".to_string()],
                severity_score: 0.55,
                ..Default::default()
            }),
            conflict_resolution: Some(ConflictResolution {
                balanced_path: "pilot two lines before full rollout".to_string(),
                harmony_score: 0.7,
                ..Default::default()
            }),
            sustainability: Some(SustainabilityEvaluation {
                sustainability_score: 0.72,
                obstacles: vec!["council turnover".to_string()],
                ..Default::default()
            }),
            implementation: Some(ImplementationPlan {
                phases: vec![
                    PhasePlan {
                        phase_name: "Pilot".to_string(),
                        timeline: "Q3".to_string(),
                        ..Default::default()
                    },
                    PhasePlan {
                        phase_name: "Expansion".to_string(),
                        timeline: "Q4".to_string(),
                        ..Default::default()
                    },
                ],
                precision_score: 0.68,
                known_unknowns: vec![],
            }),
            integration: Some(IntegrationResult {
                readiness_score: 0.74,
                integration_complexity: 0.5,
                ready_to_manifest: true,
                synthesis: "ready with conditions".to_string(),
            }),
            decision: Decision {
                approved: true,
                approval_type: ApprovalType::Conditional,
                confidence: 0.85,
                actions: vec![
                    "select pilot lines".to_string(),
                    "publish ridership baseline".to_string(),
                ],
                conditions: vec!["quarterly budget review".to_string()],
                reasoning: "approved pending pilot results".to_string(),
            },
            metrics: AnalysisMetrics::default(),
        };

        let json = serde_json::to_string_pretty(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert!(back.ran_full_pipeline());
        assert_eq!(back.scenario_id, result.scenario_id);

        let insight = back.insight_analysis.as_ref().unwrap();
        assert_eq!(
            insight.insights,
            result.insight_analysis.as_ref().unwrap().insights
        );
        assert_eq!(insight.uncertainties.len(), 1);

        let perspectives = back.perspective_comparison.as_ref().unwrap();
        assert_eq!(
            perspectives.convergence_points,
            vec!["equity gains", "ridership growth"]
        );
        assert_eq!(perspectives.divergence_points, vec!["funding source"]);

        assert_eq!(
            back.opportunity_assessment.as_ref().unwrap().opportunities,
            result
                .opportunity_assessment
                .as_ref()
                .unwrap()
                .opportunities
        );

        let risks = &back.risk_assessment.as_ref().unwrap().risks;
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].summary(), "revenue shortfall");
        assert_eq!(risks[1].summary(), "overcrowding at peak");

        let phases = &back.implementation.as_ref().unwrap().phases;
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].phase_name, "Pilot");
        assert_eq!(phases[1].phase_name, "Expansion");

        assert!(back.impact_score.aligned);
        assert_eq!(back.decision.approval_type, ApprovalType::Conditional);
        assert_eq!(
            back.decision.actions,
            vec!["select pilot lines", "publish ridership baseline"]
        );
        assert_eq!(back.decision.conditions, vec!["quarterly budget review"]);
        assert_eq!(back.integration.as_ref().unwrap().readiness_score, 0.74);
    }
}

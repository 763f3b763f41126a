//! Run Analysis use case
//!
//! Orchestrates the full ten-stage pipeline for one scenario. Stages run
//! strictly in order because each consumes the typed output of earlier ones;
//! the only branch is the stage-1 gate, which short-circuits the run with a
//! rejection decision when validation fails.

use crate::config::AnalysisParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use chrono::Utc;
use ethica_domain::{
    AnalysisMetrics, AnalysisResult, Concern, ConflictResolution, Decision, DecisionResponse,
    DomainError, ExecutionView, ImpactResponse, ImpactScore, ImplementationPlan, InsightAnalysis,
    IntegrationResponse, IntegrationResult, Layer, OperationalView, OpportunityAssessment,
    PerspectiveComparison, PromptTemplate, RiskAssessment, Scenario, ScenarioId, Severity, Stage,
    StrategicView, SustainabilityEvaluation, SynthesisResponse, TacticalView, compare_perspectives,
    decision, decode_stage, parse_contextual_analysis, parse_insight_text, score_impact_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during pipeline execution
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error("Scenario has no action")]
    EmptyAction,

    #[error("{stage} failed: {source}")]
    Gateway {
        stage: Stage,
        #[source]
        source: GatewayError,
    },

    #[error("{stage} returned a malformed response: {source}")]
    Malformed {
        stage: Stage,
        #[source]
        source: DomainError,
    },
}

/// The three provider roles of one run.
///
/// The primary carries most stages. The arbiter generates insights so that
/// stage 2 is not graded by the same provider that scored stage 1. The
/// collective provider, when present, supplies the collective-focused
/// perspective; on failure the primary fills in.
pub struct GatewaySet {
    pub primary: Arc<dyn LlmGateway>,
    pub arbiter: Arc<dyn LlmGateway>,
    pub collective: Option<Arc<dyn LlmGateway>>,
}

/// Use case for running the full analysis pipeline
pub struct RunAnalysisUseCase {
    gateways: GatewaySet,
    params: AnalysisParams,
}

impl RunAnalysisUseCase {
    pub fn new(gateways: GatewaySet, params: AnalysisParams) -> Self {
        Self { gateways, params }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, scenario: Scenario) -> Result<AnalysisResult, RunAnalysisError> {
        self.execute_with_progress(scenario, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        scenario: Scenario,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnalysisResult, RunAnalysisError> {
        if scenario.action.trim().is_empty() {
            return Err(RunAnalysisError::EmptyAction);
        }

        let scenario_id = ScenarioId::generate();
        let timestamp = Utc::now().to_rfc3339();
        let mut metrics = AnalysisMetrics::default();

        info!(scenario_id = %scenario_id, "Starting analysis");

        // ==================== Strategic layer ====================
        progress.on_layer_start(&Layer::Strategic);

        let impact = self.stage_validation(&scenario, progress).await?;
        if !impact.manifestation_valid {
            warn!(
                score = impact.score,
                "Purpose validation failed; rejecting without further analysis"
            );
            progress.on_early_rejection(&impact);
            return Ok(AnalysisResult::early_rejection(
                scenario_id,
                timestamp,
                impact,
                metrics,
            ));
        }

        let insight = self
            .stage_insight(&scenario, &impact, &mut metrics, progress)
            .await?;
        let perspectives = self
            .stage_context(&scenario, &insight, &mut metrics, progress)
            .await?;

        // ==================== Operational layer ====================
        progress.on_layer_start(&Layer::Operational);

        let opportunities: OpportunityAssessment = self
            .json_stage(
                Stage::OpportunityIdentification,
                PromptTemplate::opportunity_identification(&scenario, &perspectives),
                progress,
            )
            .await?;
        let risks: RiskAssessment = self
            .json_stage(
                Stage::RiskAssessment,
                PromptTemplate::risk_assessment(&scenario, &perspectives),
                progress,
            )
            .await?;
        let resolution: ConflictResolution = self
            .json_stage(
                Stage::ConflictResolution,
                PromptTemplate::conflict_resolution(&opportunities, &risks),
                progress,
            )
            .await?;

        // ==================== Tactical layer ====================
        progress.on_layer_start(&Layer::Tactical);

        let sustainability: SustainabilityEvaluation = self
            .json_stage(
                Stage::SustainabilityEvaluation,
                PromptTemplate::sustainability_evaluation(&scenario, &resolution),
                progress,
            )
            .await?;
        let implementation: ImplementationPlan = self
            .json_stage(
                Stage::ImplementationPlanning,
                PromptTemplate::implementation_planning(&scenario, &resolution),
                progress,
            )
            .await?;

        // ==================== Execution layer ====================
        progress.on_layer_start(&Layer::Execution);

        let integration_response: IntegrationResponse = self
            .json_stage(
                Stage::Integration,
                PromptTemplate::integration(
                    &impact,
                    &insight,
                    &perspectives,
                    &opportunities,
                    &risks,
                    &resolution,
                    &sustainability,
                    &implementation,
                ),
                progress,
            )
            .await?;
        let integration = IntegrationResult::from_response(integration_response);

        let decision = self.stage_decision(&integration, progress).await?;

        info!(
            approval = %decision.approval_type,
            confidence = decision.confidence,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            scenario_id,
            timestamp,
            strategic: StrategicView {
                impact_score: impact.score,
                confidence: insight.confidence,
                integration_score: perspectives.integration_score,
            },
            operational: OperationalView {
                opportunities: opportunities.opportunities.len(),
                risks: risks.risks.len(),
                harmony_score: resolution.harmony_score,
            },
            tactical: TacticalView {
                sustainability: sustainability.sustainability_score,
                precision: implementation.precision_score,
            },
            execution: ExecutionView {
                readiness: integration.readiness_score,
                approved: decision.approved,
            },
            impact_score: impact,
            insight_analysis: Some(insight),
            perspective_comparison: Some(perspectives),
            opportunity_assessment: Some(opportunities),
            risk_assessment: Some(risks),
            conflict_resolution: Some(resolution),
            sustainability: Some(sustainability),
            implementation: Some(implementation),
            integration: Some(integration),
            decision,
            metrics,
        })
    }

    /// Stage 1: validate purpose and compute the gate score
    async fn stage_validation(
        &self,
        scenario: &Scenario,
        progress: &dyn ProgressNotifier,
    ) -> Result<ImpactScore, RunAnalysisError> {
        let stage = Stage::PurposeValidation;
        progress.on_stage_start(&stage);

        let response = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::json(
                    PromptTemplate::purpose_validation(scenario),
                    stage.temperature(),
                ),
            )
            .await?;
        let mut raw: ImpactResponse = decode(stage, &response)?;

        if scenario.has_incomplete_context() {
            debug!("Scenario carries no context; flagging as a concern");
            raw.concerns.push(Concern::new(
                "incomplete_context",
                Severity::Medium,
                "Scenario provides no supporting context; analysis rests on the action text alone",
            ));
        }

        let impact = score_impact_response(raw, &self.params.scoring);
        progress.on_stage_complete(&stage);
        Ok(impact)
    }

    /// Stage 2: insight generation by the arbiter provider.
    ///
    /// The arbiter is asked for JSON but routinely answers in prose; a
    /// non-JSON response drops to section parsing instead of failing.
    async fn stage_insight(
        &self,
        scenario: &Scenario,
        impact: &ImpactScore,
        metrics: &mut AnalysisMetrics,
        progress: &dyn ProgressNotifier,
    ) -> Result<InsightAnalysis, RunAnalysisError> {
        let stage = Stage::InsightGeneration;
        progress.on_stage_start(&stage);

        let response = self
            .complete(
                &self.gateways.arbiter,
                stage,
                CompletionRequest::json(
                    PromptTemplate::insight_generation(scenario, impact),
                    stage.temperature(),
                ),
            )
            .await?;

        let insight = match decode_stage::<InsightAnalysis>(&response) {
            Ok(parsed) => parsed,
            Err(error) => {
                debug!(%error, "Insight response was not JSON; parsing sections");
                let parse = parse_insight_text(&response);
                if parse.insights_backfilled {
                    metrics.record_insight_backfill();
                }
                if parse.requests_more_info {
                    warn!("Insight response asks for additional information about the scenario");
                }
                InsightAnalysis {
                    understanding: if parse.sections.understanding.is_empty() {
                        parse.sections.analysis.clone()
                    } else {
                        parse.sections.understanding.clone()
                    },
                    insights: list_items(&parse.sections.insights),
                    uncertainties: list_items(&parse.sections.uncertainties),
                    confidence: parse.confidence,
                }
            }
        };

        metrics.record_uncertainties(insight.uncertainties.len());
        progress.on_stage_complete(&stage);
        Ok(insight)
    }

    /// Stage 3: contextual analysis plus dual perspectives and synthesis.
    ///
    /// Four calls under one stage: baseline context, individual-focused
    /// reading, collective-focused reading, and a synthesis of the two.
    async fn stage_context(
        &self,
        scenario: &Scenario,
        insight: &InsightAnalysis,
        metrics: &mut AnalysisMetrics,
        progress: &dyn ProgressNotifier,
    ) -> Result<PerspectiveComparison, RunAnalysisError> {
        let stage = Stage::ContextAnalysis;
        progress.on_stage_start(&stage);

        let context_response = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::text(
                    PromptTemplate::contextual_analysis(scenario),
                    stage.temperature(),
                ),
            )
            .await?;

        let scenario_text = format!("{}\n{}", scenario.action, scenario.context);
        let context = parse_contextual_analysis(&context_response, &scenario_text);
        if context.emergency_extraction_used {
            warn!("Stakeholder section missing; used emergency extraction");
            metrics.record_emergency_extraction();
        }
        if context.sections.has_second_order_analysis() {
            metrics.record_second_order_analysis();
        }

        let individual = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::text(
                    PromptTemplate::individual_perspective(scenario, insight),
                    stage.temperature(),
                ),
            )
            .await?;

        let collective_prompt = PromptTemplate::collective_perspective(scenario, insight);
        let collective = match &self.gateways.collective {
            Some(gateway) => {
                let request =
                    CompletionRequest::text(collective_prompt.as_str(), stage.temperature());
                match gateway.complete(request).await {
                    Ok(text) => text,
                    Err(error) => {
                        warn!(%error, "Collective provider failed; primary fills in");
                        progress.on_collective_fallback();
                        self.complete(
                            &self.gateways.primary,
                            stage,
                            CompletionRequest::text(
                                collective_prompt.as_str(),
                                stage.temperature(),
                            ),
                        )
                        .await?
                    }
                }
            }
            None => {
                self.complete(
                    &self.gateways.primary,
                    stage,
                    CompletionRequest::text(collective_prompt.as_str(), stage.temperature()),
                )
                .await?
            }
        };

        let keywords = compare_perspectives(&individual, &collective);
        let synthesis_response = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::json(
                    PromptTemplate::perspective_synthesis(
                        &keywords.individual_unique,
                        &keywords.collective_unique,
                        &keywords.convergence,
                    ),
                    stage.temperature(),
                ),
            )
            .await?;
        let synthesis: SynthesisResponse = decode(stage, &synthesis_response)?;

        let mut divergence = keywords.individual_unique;
        divergence.extend(keywords.collective_unique);

        progress.on_stage_complete(&stage);
        Ok(PerspectiveComparison {
            contextual_analysis: context_response.trim().to_string(),
            stakeholders: context.sections.stakeholders,
            individual_perspective: individual,
            collective_perspective: collective,
            convergence_points: keywords.convergence,
            divergence_points: divergence,
            biases_detected: synthesis.biases_detected,
            synthesis: synthesis.synthesis,
            integration_score: synthesis.quality.clamp(0.0, 1.0),
        })
    }

    /// Stage 10: final decision, bounded by the approval policy
    async fn stage_decision(
        &self,
        integration: &IntegrationResult,
        progress: &dyn ProgressNotifier,
    ) -> Result<Decision, RunAnalysisError> {
        let stage = Stage::DecisionOrchestration;
        progress.on_stage_start(&stage);

        let response = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::json(
                    PromptTemplate::decision_orchestration(integration),
                    stage.temperature(),
                ),
            )
            .await?;
        let raw: DecisionResponse = decode(stage, &response)?;

        let decision = decision::policy::enforce(
            raw,
            integration.readiness_score,
            integration.integration_complexity,
        );
        progress.on_stage_complete(&stage);
        Ok(decision)
    }

    /// One JSON-shaped stage on the primary provider
    async fn json_stage<T: serde::de::DeserializeOwned>(
        &self,
        stage: Stage,
        prompt: String,
        progress: &dyn ProgressNotifier,
    ) -> Result<T, RunAnalysisError> {
        progress.on_stage_start(&stage);
        let response = self
            .complete(
                &self.gateways.primary,
                stage,
                CompletionRequest::json(prompt, stage.temperature()),
            )
            .await?;
        let parsed = decode(stage, &response)?;
        progress.on_stage_complete(&stage);
        Ok(parsed)
    }

    async fn complete(
        &self,
        gateway: &Arc<dyn LlmGateway>,
        stage: Stage,
        request: CompletionRequest,
    ) -> Result<String, RunAnalysisError> {
        debug!(stage = %stage, model = %gateway.model(), "Dispatching stage call");
        gateway
            .complete(request)
            .await
            .map_err(|source| RunAnalysisError::Gateway { stage, source })
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    stage: Stage,
    response: &str,
) -> Result<T, RunAnalysisError> {
    decode_stage(response).map_err(|source| RunAnalysisError::Malformed { stage, source })
}

/// Split a bulleted section into individual entries.
fn list_items(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ')')
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ethica_domain::{ApprovalType, Model};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedGateway {
        model: Model,
        responses: Mutex<VecDeque<String>>,
    }

    impl ScriptedGateway {
        fn new(model: Model, responses: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                model,
                responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            })
        }

        fn remaining(&self) -> usize {
            self.responses.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| GatewayError::Other("script exhausted".to_string()))
        }
    }

    struct FailingGateway(Model);

    #[async_trait]
    impl LlmGateway for FailingGateway {
        fn model(&self) -> &Model {
            &self.0
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
            Err(GatewayError::Timeout)
        }
    }

    const VALID_IMPACT: &str = r#"{"harm_reduction": 8, "autonomy_respect": 4,
        "social_harmony": 6, "justice_balance": 5, "truthfulness": 7,
        "reasoning": "strong net benefit", "concerns": []}"#;

    const CONTEXT_TEXT: &str = "HISTORICAL CONTEXT:\nPast attempts stalled.\n\
        STAKEHOLDERS:\n- Residents\n- City council\n\
        SECOND ORDER EFFECTS:\nBudget reallocation.\n\
        CONTEXTUAL SYNTHESIS:\nViable with funding.\n";

    const SYNTHESIS_JSON: &str =
        r#"{"biases_detected": [], "synthesis": "joint view", "quality": 0.8}"#;

    fn mid_pipeline_responses(decision_json: &str) -> Vec<String> {
        vec![
            r#"{"opportunities": ["expand access", "cut costs"], "beneficiaries": [],
                "expansion_potential": "regional rollout", "compassion_score": 0.7}"#
                .to_string(),
            r#"{"risks": ["funding shortfall"], "constraints": [], "warnings": [],
                "severity_score": 0.4}"#
                .to_string(),
            r#"{"conflicts_resolved": [], "balanced_path": "phased rollout",
                "harmony_score": 0.75}"#
                .to_string(),
            r#"{"sustainability_score": 0.7, "obstacles": [], "momentum_mechanisms": [],
                "long_term_viability": "stable"}"#
                .to_string(),
            r#"{"phases": [], "precision_score": 0.6, "known_unknowns": []}"#.to_string(),
            r#"{"readiness_score": 0.85, "integration_complexity": 0.5, "synthesis": "go"}"#
                .to_string(),
            decision_json.to_string(),
        ]
    }

    fn primary_script(decision_json: &str) -> Vec<String> {
        let mut responses = vec![
            VALID_IMPACT.to_string(),
            CONTEXT_TEXT.to_string(),
            "Individual liberty and consent dominate this reading.".to_string(),
            "Collective harmony and shared welfare dominate this reading.".to_string(),
            SYNTHESIS_JSON.to_string(),
        ];
        responses.extend(mid_pipeline_responses(decision_json));
        responses
    }

    fn scenario() -> Scenario {
        Scenario::new(
            "Make public transit free city-wide",
            "Pilot funding has been approved for two years.",
        )
    }

    fn use_case(primary: Arc<ScriptedGateway>, arbiter: Arc<ScriptedGateway>) -> RunAnalysisUseCase {
        RunAnalysisUseCase::new(
            GatewaySet {
                primary,
                arbiter,
                collective: None,
            },
            AnalysisParams::default(),
        )
    }

    #[tokio::test]
    async fn test_full_pipeline_run() {
        let decision = r#"{"approval_type": "UNCONDITIONAL", "confidence": 0.9,
            "actions": ["announce rollout"], "conditions": [], "reasoning": "solid"}"#;
        let script = primary_script(decision);
        let script_refs: Vec<&str> = script.iter().map(String::as_str).collect();
        let primary = ScriptedGateway::new(Model::GeminiFlash, &script_refs);
        let arbiter = ScriptedGateway::new(
            Model::MistralLarge,
            &[r#"{"understanding": "fare-free transit", "insights": ["ridership shifts"],
                "uncertainties": ["maintenance costs"], "confidence": 0.7}"#],
        );

        let result = use_case(Arc::clone(&primary), Arc::clone(&arbiter))
            .execute(scenario())
            .await
            .unwrap();

        assert!(result.ran_full_pipeline());
        assert!(result.decision.approved);
        assert_eq!(result.decision.approval_type, ApprovalType::Unconditional);
        assert_eq!(result.operational.opportunities, 2);
        assert_eq!(result.operational.risks, 1);
        assert_eq!(result.execution.readiness, 0.85);
        assert!(!result.metrics.used_fallbacks());
        assert_eq!(result.metrics.second_order_analyses, 1);
        assert_eq!(primary.remaining(), 0);
        assert_eq!(arbiter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_early_rejection_skips_later_stages() {
        let low_impact = r#"{"harm_reduction": -8, "autonomy_respect": -5,
            "social_harmony": -3, "justice_balance": -4, "truthfulness": -6,
            "reasoning": "net harm", "concerns": []}"#;
        let primary = ScriptedGateway::new(Model::GeminiFlash, &[low_impact]);
        let arbiter = ScriptedGateway::new(Model::MistralLarge, &["unused"]);

        let result = use_case(Arc::clone(&primary), Arc::clone(&arbiter))
            .execute(scenario())
            .await
            .unwrap();

        assert!(!result.ran_full_pipeline());
        assert!(!result.decision.approved);
        assert_eq!(result.decision.confidence, 1.0);
        assert!(result.insight_analysis.is_none());
        // The arbiter was never consulted.
        assert_eq!(arbiter.remaining(), 1);
        assert_eq!(primary.remaining(), 0);
    }

    #[tokio::test]
    async fn test_critical_concern_rejects_despite_high_score() {
        let flagged = r#"{"harm_reduction": 10, "autonomy_respect": 10,
            "social_harmony": 10, "justice_balance": 10, "truthfulness": 10,
            "reasoning": "", "concerns": [{"type": "deception", "severity": "CRITICAL",
            "description": "hidden surveillance component"}]}"#;
        let primary = ScriptedGateway::new(Model::GeminiFlash, &[flagged]);
        let arbiter = ScriptedGateway::new(Model::MistralLarge, &[]);

        let result = use_case(primary, arbiter).execute(scenario()).await.unwrap();
        assert!(!result.ran_full_pipeline());
        assert_eq!(result.impact_score.score, 1.0);
        assert!(!result.impact_score.manifestation_valid);
    }

    #[tokio::test]
    async fn test_collective_failure_falls_back_to_primary() {
        let decision = r#"{"approval_type": "CONDITIONAL", "confidence": 0.8,
            "actions": [], "conditions": ["secure funding"], "reasoning": "promising"}"#;
        // One extra primary response covers the fallback collective call.
        let script = primary_script(decision);
        let script_refs: Vec<&str> = script.iter().map(String::as_str).collect();
        let primary = ScriptedGateway::new(Model::GeminiFlash, &script_refs);
        let arbiter = ScriptedGateway::new(
            Model::MistralLarge,
            &[r#"{"understanding": "u", "insights": ["i"], "uncertainties": [], "confidence": 0.6}"#],
        );

        let use_case = RunAnalysisUseCase::new(
            GatewaySet {
                primary: Arc::clone(&primary) as Arc<dyn LlmGateway>,
                arbiter,
                collective: Some(Arc::new(FailingGateway(Model::DeepseekChat))),
            },
            AnalysisParams::default(),
        );

        let result = use_case.execute(scenario()).await.unwrap();
        assert!(result.ran_full_pipeline());
        let perspectives = result.perspective_comparison.unwrap();
        assert!(perspectives.collective_perspective.contains("Collective harmony"));
        assert_eq!(primary.remaining(), 0);
    }

    #[tokio::test]
    async fn test_policy_clamps_overreaching_decision() {
        // Readiness 0.65 only permits CONDITIONAL; the model says UNCONDITIONAL.
        let mut script = primary_script(
            r#"{"approval_type": "UNCONDITIONAL", "confidence": 0.9,
                "actions": [], "conditions": [], "reasoning": "overconfident"}"#,
        );
        let integration_index = script.len() - 2;
        script[integration_index] =
            r#"{"readiness_score": 0.65, "integration_complexity": 0.5, "synthesis": "s"}"#
                .to_string();
        let script_refs: Vec<&str> = script.iter().map(String::as_str).collect();
        let primary = ScriptedGateway::new(Model::GeminiFlash, &script_refs);
        let arbiter = ScriptedGateway::new(
            Model::MistralLarge,
            &[r#"{"understanding": "u", "insights": [], "uncertainties": [], "confidence": 0.6}"#],
        );

        let result = use_case(primary, arbiter).execute(scenario()).await.unwrap();
        assert_eq!(result.decision.approval_type, ApprovalType::Conditional);
        assert!(result.decision.approved);
    }

    #[tokio::test]
    async fn test_prose_insight_response_is_parsed() {
        let prose_insight = "UNDERSTANDING:\nFare-free transit as redistribution.\n\
            ANALYSIS:\nThe fiscal transfer is regressive-neutral overall.\n\
            INSIGHTS:\n- Off-peak ridership gains dominate.\n\
            UNCERTAINTIES:\n- Maintenance load growth.\n";
        let decision = r#"{"approval_type": "CONDITIONAL", "confidence": 0.7,
            "actions": [], "conditions": ["audit"], "reasoning": "ok"}"#;
        let script = primary_script(decision);
        let script_refs: Vec<&str> = script.iter().map(String::as_str).collect();
        let primary = ScriptedGateway::new(Model::GeminiFlash, &script_refs);
        let arbiter = ScriptedGateway::new(Model::MistralLarge, &[prose_insight]);

        let result = use_case(primary, arbiter).execute(scenario()).await.unwrap();
        let insight = result.insight_analysis.unwrap();
        assert_eq!(insight.insights, vec!["Off-peak ridership gains dominate."]);
        assert_eq!(insight.uncertainties.len(), 1);
        assert_eq!(result.metrics.uncertainty_acknowledgments, 1);
    }

    #[tokio::test]
    async fn test_empty_action_is_rejected_without_calls() {
        let primary = ScriptedGateway::new(Model::GeminiFlash, &["unused"]);
        let arbiter = ScriptedGateway::new(Model::MistralLarge, &[]);
        let result = use_case(Arc::clone(&primary), arbiter)
            .execute(Scenario::new("   ", "context"))
            .await;
        assert!(matches!(result, Err(RunAnalysisError::EmptyAction)));
        assert_eq!(primary.remaining(), 1);
    }
}

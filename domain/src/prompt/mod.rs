//! Prompt templates for the ten pipeline stages
//!
//! Prompt wording is content, not mechanism: each builder embeds the stage's
//! upstream inputs into a fixed template and asks for the JSON shape the
//! stage struct expects. Stages that parse free text ask for uppercase
//! section headers instead.

use crate::scenario::Scenario;
use crate::stage::results::{
    ConflictResolution, ImpactScore, ImplementationPlan, InsightAnalysis, IntegrationResult,
    OpportunityAssessment, PerspectiveComparison, RiskAssessment, SustainabilityEvaluation,
};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    fn scenario_block(scenario: &Scenario) -> String {
        let mut block = format!(
            "Scenario:\nACTION: {}\n\nCONTEXT: {}",
            scenario.action, scenario.context
        );
        if !scenario.stakeholders.is_empty() {
            block.push_str(&format!(
                "\n\nKNOWN STAKEHOLDERS: {}",
                scenario.stakeholders.join(", ")
            ));
        }
        block
    }

    /// Stage 1: purpose validation against the five impact dimensions
    pub fn purpose_validation(scenario: &Scenario) -> String {
        format!(
            r#"Evaluate this proposal's alignment with positive global impact.

Score each dimension from -10 to +10:

1. HARM_REDUCTION: does it reduce suffering, poverty, or injustice?
2. AUTONOMY_RESPECT: does it respect individual choice and agency?
3. SOCIAL_HARMONY: does it promote peace and cooperation?
4. JUSTICE_BALANCE: does it balance fairness with compassion?
5. TRUTHFULNESS: is it based on evidence and honesty?

Negative scores are valid and informative: a proposal can be negative in
some dimensions while being net positive overall.

Respond ONLY with JSON:
{{
    "harm_reduction": <-10 to +10>,
    "autonomy_respect": <-10 to +10>,
    "social_harmony": <-10 to +10>,
    "justice_balance": <-10 to +10>,
    "truthfulness": <-10 to +10>,
    "reasoning": "<brief explanation>",
    "concerns": [
        {{"type": "<concern type>", "severity": "LOW|MEDIUM|HIGH|CRITICAL", "description": "<what is concerning>"}}
    ]
}}

{}"#,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 2: deep insight generation over the validated scenario
    pub fn insight_generation(scenario: &Scenario, impact: &ImpactScore) -> String {
        format!(
            r#"You are an Insight Generator providing deep understanding.

The proposal has an impact score of {:.1}%.

1. UNDERSTANDING: what is the essence of this situation?
2. INSIGHTS (5-7): non-obvious implications, precedents, leverage points.
3. UNCERTAINTIES (5-7): honest unknowns and assumptions being made.
4. CONFIDENCE (0.0 to 1.0): how confident are you in this analysis?

Express epistemic humility. Wisdom knows its limits.

Respond ONLY with JSON:
{{
    "understanding": "<essence of situation>",
    "insights": ["<insight>", "..."],
    "uncertainties": ["<uncertainty>", "..."],
    "confidence": <0.0 to 1.0>
}}

{}

Impact assessment:
- Harm reduction: {}/10
- Autonomy respect: {}/10
- Social harmony: {}/10
- Justice balance: {}/10
- Truthfulness: {}/10

Reasoning: {}"#,
            impact.score * 100.0,
            Self::scenario_block(scenario),
            impact.dimensions.harm_reduction,
            impact.dimensions.autonomy_respect,
            impact.dimensions.social_harmony,
            impact.dimensions.justice_balance,
            impact.dimensions.truthfulness,
            impact.reasoning
        )
    }

    /// Stage 3a: baseline contextual analysis, answered as headed sections
    pub fn contextual_analysis(scenario: &Scenario) -> String {
        format!(
            r#"Provide a contextual analysis of this scenario.

Structure your answer under exactly these uppercase headers:

HISTORICAL CONTEXT:
CURRENT CONTEXT:
STAKEHOLDERS:
FIRST ORDER EFFECTS:
SECOND ORDER EFFECTS:
THIRD ORDER EFFECTS:
SYSTEMIC RISKS:
ETHICAL CONSIDERATIONS:
CONTEXTUAL SYNTHESIS:

List everyone affected, directly and indirectly, under STAKEHOLDERS.

{}"#,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 3b: individual-focused perspective
    pub fn individual_perspective(scenario: &Scenario, insight: &InsightAnalysis) -> String {
        format!(
            r#"Analyze this scenario from INDIVIDUAL-FOCUSED ethical frameworks:
rights-based ethics, utilitarian calculus for individuals, deontological
duties, social contract between individuals.

Emphasize individual autonomy, consent, procedural justice, and rights
protection.

Insights to consider:
{}

{}

Focus on how this affects individual rights, the cost-benefit for
individuals, and whether it treats persons as ends rather than means."#,
            insight.insights.join("\n- "),
            Self::scenario_block(scenario)
        )
    }

    /// Stage 3c: collective-focused perspective
    pub fn collective_perspective(scenario: &Scenario, insight: &InsightAnalysis) -> String {
        format!(
            r#"Analyze this scenario from COLLECTIVE-FOCUSED ethical frameworks:
harmony and social order, community welfare over individual preference,
contextual flexibility, relational interconnectedness.

Emphasize collective good, long-term societal impact, and relational
implications.

Insights to consider:
{}

{}

Focus on how this affects collective harmony, societal virtue, and the
relations between groups rather than isolated individuals."#,
            insight.insights.join("\n- "),
            Self::scenario_block(scenario)
        )
    }

    /// Stage 3d: meta-cognitive synthesis of the two perspectives
    pub fn perspective_synthesis(
        individual_unique: &[String],
        collective_unique: &[String],
        convergence: &[String],
    ) -> String {
        format!(
            r#"Meta-cognitive synthesis of two perspectives.

INDIVIDUAL-FOCUSED perspective emphasized: {}
COLLECTIVE-FOCUSED perspective emphasized: {}
CONVERGENCE (shared concerns): {}

Synthesize these into emergent wisdom that transcends both - not a
compromise, but a new insight from holding both simultaneously. Identify
the assumptions each perspective makes that the other does not.

Respond ONLY with JSON:
{{
    "biases_detected": [
        {{"perspective": "individual|collective", "bias": "<assumption>", "impact": "<effect on analysis>"}}
    ],
    "synthesis": "<emergent synthesis>",
    "quality": <0.0 to 1.0 integration quality>
}}"#,
            individual_unique.join(", "),
            collective_unique.join(", "),
            convergence.join(", ")
        )
    }

    /// Stage 4: opportunity identification
    pub fn opportunity_identification(
        scenario: &Scenario,
        perspectives: &PerspectiveComparison,
    ) -> String {
        format!(
            r#"You are an Opportunity Identifier focused on EXPANSION and COMPASSION.

Identify how this scenario can create value, not just avoid harm:
opportunities (5-7 concrete), beneficiaries and how each benefits,
expansion potential, and a compassion score. Be optimistic but realistic.

Synthesis from previous analysis:
{}

{}

Respond ONLY with JSON:
{{
    "opportunities": ["<opportunity>", "..."],
    "beneficiaries": ["<group>: <how they benefit>", "..."],
    "expansion_potential": "<how to maximize benefits>",
    "compassion_score": <0.0 to 1.0>
}}"#,
            perspectives.synthesis,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 5: risk assessment
    pub fn risk_assessment(scenario: &Scenario, perspectives: &PerspectiveComparison) -> String {
        format!(
            r#"You are a Risk Assessor focused on DISCIPLINE and BOUNDARIES.

Identify what could go wrong: technical, social, ethical, political and
economic risks with likelihood and impact estimates; hard constraints;
warnings that must be addressed; and an overall severity score
(0.0 negligible, 1.0 catastrophic). Be rigorous but not paranoid.

Synthesis from previous analysis:
{}

{}

Respond ONLY with JSON:
{{
    "risks": [
        {{"risk": "<specific risk>", "likelihood": "LOW|MEDIUM|HIGH", "impact": "LOW|MEDIUM|HIGH|CRITICAL", "description": "<details>"}}
    ],
    "constraints": ["<constraint>", "..."],
    "warnings": ["<warning>", "..."],
    "severity_score": <0.0 to 1.0>
}}"#,
            perspectives.synthesis,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 6: conflict resolution between opportunities and risks
    pub fn conflict_resolution(
        opportunities: &OpportunityAssessment,
        risks: &RiskAssessment,
    ) -> String {
        let risk_summaries: Vec<&str> = risks.risks.iter().map(|r| r.summary()).collect();
        format!(
            r#"You are a Conflict Resolver focused on BALANCE and HARMONY.

Two forces are in tension:

EXPANSION: {} opportunities identified, compassion score {:.1}%.
Expansion potential: {}

DISCIPLINE: {} risks identified, severity score {:.1}%, {} constraints,
{} warnings.

For each major conflict between an opportunity and a risk, resolve the
tension; then describe the balanced path - integration, not compromise -
and score the harmony achieved (0.0 irreconcilable, 1.0 elegant
integration).

Opportunities to balance:
{}

Risks to respect:
{}

Respond ONLY with JSON:
{{
    "conflicts_resolved": [
        {{"opportunity": "<opportunity>", "risk": "<risk>", "resolution": "<how to resolve>", "trade_off": "<what is balanced>"}}
    ],
    "balanced_path": "<integrated approach>",
    "harmony_score": <0.0 to 1.0>
}}"#,
            opportunities.opportunities.len(),
            opportunities.compassion_score * 100.0,
            opportunities.expansion_potential,
            risks.risks.len(),
            risks.severity_score * 100.0,
            risks.constraints.len(),
            risks.warnings.len(),
            opportunities.opportunities.join("\n- "),
            risk_summaries.join("\n- ")
        )
    }

    /// Stage 7: sustainability evaluation
    pub fn sustainability_evaluation(
        scenario: &Scenario,
        resolution: &ConflictResolution,
    ) -> String {
        format!(
            r#"You are a Sustainability Evaluator focused on ENDURANCE.

Assess whether this can last: financial, political, technical and social
sustainability (0.0 collapses quickly, 1.0 self-sustaining); obstacles to
persistence (5-7); momentum mechanisms (5-7); and the long-term
trajectory. Think in decades, not months.

Balanced path from conflict resolution:
{}

{}

Respond ONLY with JSON:
{{
    "sustainability_score": <0.0 to 1.0>,
    "obstacles": ["<obstacle>", "..."],
    "momentum_mechanisms": ["<mechanism>", "..."],
    "long_term_viability": "<trajectory and endgame>"
}}"#,
            resolution.balanced_path,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 8: implementation planning
    pub fn implementation_planning(
        scenario: &Scenario,
        resolution: &ConflictResolution,
    ) -> String {
        format!(
            r#"You are an Implementation Planner focused on PRECISION.

Create a concrete, phased implementation plan (4-6 phases, foundation
through scale), a precision score for how well-specified the plan is, and
the known unknowns. Be concrete: "reduce X by 20% measured by Y" is a
deliverable, "improve X" is not.

Balanced path to implement:
{}

{}

Respond ONLY with JSON:
{{
    "phases": [
        {{"phase_name": "<name>", "timeline": "<timeframe>", "objectives": ["..."], "deliverables": ["..."], "success_criteria": ["..."], "dependencies": "<prerequisites>"}}
    ],
    "precision_score": <0.0 to 1.0>,
    "known_unknowns": ["<unknown>", "..."]
}}"#,
            resolution.balanced_path,
            Self::scenario_block(scenario)
        )
    }

    /// Stage 9: integration of all upstream analyses
    #[allow(clippy::too_many_arguments)]
    pub fn integration(
        impact: &ImpactScore,
        insight: &InsightAnalysis,
        perspectives: &PerspectiveComparison,
        opportunities: &OpportunityAssessment,
        risks: &RiskAssessment,
        resolution: &ConflictResolution,
        sustainability: &SustainabilityEvaluation,
        implementation: &ImplementationPlan,
    ) -> String {
        format!(
            r#"You are an Integration Engine synthesizing all analyses into one
unified assessment.

STRATEGIC LAYER:
- Impact score: {:.1}%, insight confidence: {:.1}%, biases detected: {}
OPERATIONAL LAYER:
- Opportunities: {} (compassion {:.1}%), risks: {} (severity {:.1}%),
  harmony: {:.1}% across {} resolved conflicts
TACTICAL LAYER:
- Sustainability: {:.1}%, plan precision: {:.1}% over {} phases

Compute:
1. READINESS_SCORE (0.0-1.0): weighted integration - strategic alignment
   30%, operational feasibility 40%, tactical viability 30%.
2. INTEGRATION_COMPLEXITY (0.0-1.0): how complex is this to execute?
3. SYNTHESIS: one paragraph integrating everything.

Perspective synthesis:
{}

Respond ONLY with JSON:
{{
    "readiness_score": <0.0 to 1.0>,
    "integration_complexity": <0.0 to 1.0>,
    "synthesis": "<unified assessment paragraph>"
}}"#,
            impact.score * 100.0,
            insight.confidence * 100.0,
            perspectives.biases_detected.len(),
            opportunities.opportunities.len(),
            opportunities.compassion_score * 100.0,
            risks.risks.len(),
            risks.severity_score * 100.0,
            resolution.harmony_score * 100.0,
            resolution.conflicts_resolved.len(),
            sustainability.sustainability_score * 100.0,
            implementation.precision_score * 100.0,
            implementation.phases.len(),
            perspectives.synthesis
        )
    }

    /// Stage 10: final decision orchestration
    pub fn decision_orchestration(integration: &IntegrationResult) -> String {
        format!(
            r#"You are a Decision Orchestrator making the FINAL CALL.

Integration summary:
- Readiness: {:.1}%
- Complexity: {:.1}%
- Ready to manifest: {}

Synthesis:
{}

Decision framework:
- UNCONDITIONAL: readiness >= 80% and complexity <= 60%.
- CONDITIONAL: readiness 60-80% and complexity <= 80%, with concrete
  conditions that must be met first.
- REJECTED: readiness < 60% or complexity > 80%.

Include 5-10 concrete actions (alternatives, if rejecting), conditions
when conditional, a confidence level, and two or three paragraphs of
reasoning. Be decisive but not reckless.

Respond ONLY with JSON:
{{
    "approval_type": "UNCONDITIONAL|CONDITIONAL|REJECTED",
    "confidence": <0.0 to 1.0>,
    "actions": ["<action>", "..."],
    "conditions": ["<condition>", "..."],
    "reasoning": "<explanation of the decision>"
}}"#,
            integration.readiness_score * 100.0,
            integration.integration_complexity * 100.0,
            integration.ready_to_manifest,
            integration.synthesis
        )
    }

}

//! Stage identities and typed stage outputs
//!
//! A stage is one prompt-call-and-parse unit. The ten stages run in fixed
//! order; [`Stage`] is the identity used for progress reporting and
//! temperature selection, while [`results`] holds the typed output record of
//! each stage.

pub mod results;

use serde::{Deserialize, Serialize};

/// The four roll-up layers of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    Strategic,
    Operational,
    Tactical,
    Execution,
}

impl Layer {
    pub fn title(&self) -> &'static str {
        match self {
            Layer::Strategic => "STRATEGIC LAYER: Analyzing intent",
            Layer::Operational => "OPERATIONAL LAYER: Analyzing forces",
            Layer::Tactical => "TACTICAL LAYER: Analyzing structure",
            Layer::Execution => "EXECUTION LAYER: Synthesizing decision",
        }
    }
}

/// The ten pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    PurposeValidation,
    InsightGeneration,
    ContextAnalysis,
    OpportunityIdentification,
    RiskAssessment,
    ConflictResolution,
    SustainabilityEvaluation,
    ImplementationPlanning,
    Integration,
    DecisionOrchestration,
}

impl Stage {
    pub const COUNT: usize = 10;

    /// All stages in execution order
    pub fn all() -> [Stage; Self::COUNT] {
        [
            Stage::PurposeValidation,
            Stage::InsightGeneration,
            Stage::ContextAnalysis,
            Stage::OpportunityIdentification,
            Stage::RiskAssessment,
            Stage::ConflictResolution,
            Stage::SustainabilityEvaluation,
            Stage::ImplementationPlanning,
            Stage::Integration,
            Stage::DecisionOrchestration,
        ]
    }

    /// 1-indexed position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            Stage::PurposeValidation => 1,
            Stage::InsightGeneration => 2,
            Stage::ContextAnalysis => 3,
            Stage::OpportunityIdentification => 4,
            Stage::RiskAssessment => 5,
            Stage::ConflictResolution => 6,
            Stage::SustainabilityEvaluation => 7,
            Stage::ImplementationPlanning => 8,
            Stage::Integration => 9,
            Stage::DecisionOrchestration => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::PurposeValidation => "Purpose Validator",
            Stage::InsightGeneration => "Insight Generator",
            Stage::ContextAnalysis => "Context Analyzer",
            Stage::OpportunityIdentification => "Opportunity Identifier",
            Stage::RiskAssessment => "Risk Assessor",
            Stage::ConflictResolution => "Conflict Resolver",
            Stage::SustainabilityEvaluation => "Sustainability Evaluator",
            Stage::ImplementationPlanning => "Implementation Planner",
            Stage::Integration => "Integration Engine",
            Stage::DecisionOrchestration => "Decision Orchestrator",
        }
    }

    /// The roll-up layer this stage reports under
    pub fn layer(&self) -> Layer {
        match self {
            Stage::PurposeValidation | Stage::InsightGeneration | Stage::ContextAnalysis => {
                Layer::Strategic
            }
            Stage::OpportunityIdentification
            | Stage::RiskAssessment
            | Stage::ConflictResolution => Layer::Operational,
            Stage::SustainabilityEvaluation | Stage::ImplementationPlanning => Layer::Tactical,
            Stage::Integration | Stage::DecisionOrchestration => Layer::Execution,
        }
    }

    /// Sampling temperature for this stage's LLM call.
    ///
    /// Lower for stages that need consistency (decision-making), higher for
    /// stages that need creative breadth (insight generation).
    pub fn temperature(&self) -> f64 {
        match self {
            Stage::PurposeValidation => 0.3,
            Stage::InsightGeneration => 0.7,
            Stage::ContextAnalysis => 0.7,
            Stage::OpportunityIdentification => 0.7,
            Stage::RiskAssessment => 0.5,
            Stage::ConflictResolution => 0.6,
            Stage::SustainabilityEvaluation => 0.5,
            Stage::ImplementationPlanning => 0.4,
            Stage::Integration => 0.3,
            Stage::DecisionOrchestration => 0.2,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

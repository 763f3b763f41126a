//! Domain layer for ethica
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pipeline
//!
//! A decision scenario flows through ten fixed stages grouped into four
//! layers:
//!
//! - **Strategic**: purpose validation, insight generation, contextual
//!   analysis
//! - **Operational**: opportunity identification, risk assessment, conflict
//!   resolution
//! - **Tactical**: sustainability evaluation, implementation planning
//! - **Execution**: integration, final decision
//!
//! ## Gate
//!
//! Stage 1 computes an impact score from five scored dimensions; scenarios
//! below the threshold (or carrying a CRITICAL concern) are rejected without
//! running the remaining stages.

pub mod analysis;
pub mod core;
pub mod decision;
pub mod metrics;
pub mod parsing;
pub mod prompt;
pub mod scenario;
pub mod scoring;
pub mod stage;

// Re-export commonly used types
pub use analysis::{
    AnalysisResult, ExecutionView, OperationalView, StrategicView, TacticalView,
};
pub use core::{error::DomainError, model::Model};
pub use decision::{
    ApprovalType, Decision, DecisionResponse,
    policy::{enforce, permitted_approval},
};
pub use metrics::AnalysisMetrics;
pub use parsing::{
    ContextParse, InsightParse, parse_contextual_analysis, parse_insight_text,
};
pub use prompt::PromptTemplate;
pub use scenario::{Scenario, ScenarioId};
pub use scoring::{
    ScoringConfig,
    alignment::{AlignmentWeights, DEFAULT_ALIGNMENT_THRESHOLD},
    impact::DEFAULT_IMPACT_THRESHOLD,
    score_impact_response,
};
pub use stage::{
    Layer, Stage,
    results::{
        BiasDetection, Concern, ConflictResolution, ConflictTradeOff, ImpactDimensions,
        ImpactResponse, ImpactScore, ImplementationPlan, InsightAnalysis, IntegrationResponse,
        IntegrationResult, OpportunityAssessment, PerspectiveComparison, PhasePlan, RiskAssessment,
        RiskEntry, RiskItem, Severity, SustainabilityEvaluation, SynthesisResponse,
    },
};

// Re-export parsing helpers used by stage adapters
pub use parsing::json::{decode_stage, extract_json_object};
pub use parsing::keywords::{KeywordComparison, compare_perspectives};

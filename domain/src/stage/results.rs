//! Typed output records for the ten stages
//!
//! Each stage defines its own record shape; there is no shared base schema.
//! The structs double as deserialization targets for the stage's JSON
//! response: every field carries an explicit default so a missing key yields
//! the stage-specific default (0.5 for most scores, empty list for
//! collections, empty string for free text) instead of a decode error.

use serde::{Deserialize, Serialize};

fn default_score() -> f64 {
    0.5
}

/// Severity attached to a validation concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// A concern raised by the purpose validator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Concern {
    /// Concern category (e.g., "privacy", "coercion")
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
}

impl Concern {
    pub fn new(kind: impl Into<String>, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            severity,
            description: description.into(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// Five impact dimensions scored -10..=+10 by the purpose validator.
///
/// These are summed then renormalized as a block - never averaged directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ImpactDimensions {
    #[serde(default)]
    pub harm_reduction: i32,
    #[serde(default)]
    pub autonomy_respect: i32,
    #[serde(default)]
    pub social_harmony: i32,
    #[serde(default)]
    pub justice_balance: i32,
    #[serde(default)]
    pub truthfulness: i32,
}

impl ImpactDimensions {
    pub fn sum(&self) -> i32 {
        self.harm_reduction
            + self.autonomy_respect
            + self.social_harmony
            + self.justice_balance
            + self.truthfulness
    }
}

/// Raw JSON response shape of the purpose-validation stage
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImpactResponse {
    #[serde(flatten)]
    pub dimensions: ImpactDimensions,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub concerns: Vec<Concern>,
}

/// Stage 1 output: validation against positive-impact criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactScore {
    /// Unweighted five-sum renormalized to [0, 1] - the validation gate input
    pub score: f64,
    /// Weighted alignment percentage - hand-tuned criterion weights,
    /// computed by a different formula than `score` and thresholded
    /// independently
    pub alignment: f64,
    /// Whether `alignment` meets its own threshold - a secondary judgment,
    /// separate from the validation gate
    pub aligned: bool,
    pub dimensions: ImpactDimensions,
    #[serde(default)]
    pub concerns: Vec<Concern>,
    /// The stage-1 gate: whether the pipeline continues past validation
    pub manifestation_valid: bool,
    #[serde(default)]
    pub reasoning: String,
}

/// Stage 2 output: deep understanding and non-obvious insights
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InsightAnalysis {
    #[serde(default)]
    pub understanding: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub uncertainties: Vec<String>,
    #[serde(default = "default_score")]
    pub confidence: f64,
}

/// A bias detected during perspective synthesis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BiasDetection {
    /// Which perspective carries the bias ("individual" or "collective")
    #[serde(default)]
    pub perspective: String,
    #[serde(default)]
    pub bias: String,
    #[serde(default)]
    pub impact: String,
}

/// Stage 3 output: multi-perspective context analysis with synthesis
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PerspectiveComparison {
    #[serde(default)]
    pub contextual_analysis: String,
    /// Stakeholder section extracted from the contextual analysis; populated
    /// by emergency extraction when the model omits it
    #[serde(default)]
    pub stakeholders: String,
    /// Individual-focused reading (primary provider)
    #[serde(default)]
    pub individual_perspective: String,
    /// Collective-focused reading (secondary provider, with fallback)
    #[serde(default)]
    pub collective_perspective: String,
    #[serde(default)]
    pub convergence_points: Vec<String>,
    #[serde(default)]
    pub divergence_points: Vec<String>,
    #[serde(default)]
    pub biases_detected: Vec<BiasDetection>,
    #[serde(default)]
    pub synthesis: String,
    #[serde(default = "default_score")]
    pub integration_score: f64,
}

/// Raw JSON response shape of the perspective-synthesis call
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SynthesisResponse {
    #[serde(default)]
    pub biases_detected: Vec<BiasDetection>,
    #[serde(default)]
    pub synthesis: String,
    #[serde(default = "default_score")]
    pub quality: f64,
}

/// Stage 4 output: opportunities and beneficiaries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpportunityAssessment {
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub beneficiaries: Vec<String>,
    #[serde(default)]
    pub expansion_potential: String,
    #[serde(default = "default_score")]
    pub compassion_score: f64,
}

/// A fully described risk with likelihood/impact estimates
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RiskItem {
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub likelihood: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub description: String,
}

/// One risk entry - models return either structured items or bare strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskEntry {
    Detailed(RiskItem),
    Simple(String),
}

impl RiskEntry {
    /// One-line summary regardless of shape
    pub fn summary(&self) -> &str {
        match self {
            RiskEntry::Detailed(item) => &item.risk,
            RiskEntry::Simple(text) => text,
        }
    }
}

/// Stage 5 output: risks, constraints, and warnings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RiskAssessment {
    #[serde(default)]
    pub risks: Vec<RiskEntry>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default = "default_score")]
    pub severity_score: f64,
}

/// A resolved tension between one opportunity and one risk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConflictTradeOff {
    #[serde(default)]
    pub opportunity: String,
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub trade_off: String,
}

/// Stage 6 output: the balanced path between expansion and discipline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConflictResolution {
    #[serde(default)]
    pub conflicts_resolved: Vec<ConflictTradeOff>,
    #[serde(default)]
    pub balanced_path: String,
    #[serde(default = "default_score")]
    pub harmony_score: f64,
}

/// Stage 7 output: long-term viability assessment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SustainabilityEvaluation {
    #[serde(default = "default_score")]
    pub sustainability_score: f64,
    #[serde(default)]
    pub obstacles: Vec<String>,
    #[serde(default)]
    pub momentum_mechanisms: Vec<String>,
    #[serde(default)]
    pub long_term_viability: String,
}

/// One implementation phase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhasePlan {
    #[serde(default)]
    pub phase_name: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub dependencies: String,
}

/// Stage 8 output: phased implementation plan
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImplementationPlan {
    #[serde(default)]
    pub phases: Vec<PhasePlan>,
    #[serde(default = "default_score")]
    pub precision_score: f64,
    #[serde(default)]
    pub known_unknowns: Vec<String>,
}

/// Raw JSON response shape of the integration stage
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IntegrationResponse {
    #[serde(default = "default_score")]
    pub readiness_score: f64,
    #[serde(default = "default_score")]
    pub integration_complexity: f64,
    #[serde(default)]
    pub synthesis: String,
}

/// Stage 9 output: unified readiness assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationResult {
    pub readiness_score: f64,
    pub integration_complexity: f64,
    pub ready_to_manifest: bool,
    #[serde(default)]
    pub synthesis: String,
}

impl IntegrationResult {
    /// Readiness/complexity bounds for the manifestation flag
    const READY_MIN_READINESS: f64 = 0.70;
    const READY_MAX_COMPLEXITY: f64 = 0.80;

    pub fn from_response(response: IntegrationResponse) -> Self {
        let readiness = response.readiness_score.clamp(0.0, 1.0);
        let complexity = response.integration_complexity.clamp(0.0, 1.0);
        Self {
            ready_to_manifest: readiness >= Self::READY_MIN_READINESS
                && complexity <= Self::READY_MAX_COMPLEXITY,
            readiness_score: readiness,
            integration_complexity: complexity,
            synthesis: response.synthesis,
        }
    }
}

//! Terminal decision types and the approval policy

pub mod policy;

use serde::{Deserialize, Serialize};

fn default_score() -> f64 {
    0.5
}

/// The three terminal decision states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalType {
    Unconditional,
    Conditional,
    #[default]
    Rejected,
}

impl ApprovalType {
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalType::Unconditional | ApprovalType::Conditional)
    }

    /// Strictness ordering: Rejected < Conditional < Unconditional
    fn permissiveness(&self) -> u8 {
        match self {
            ApprovalType::Rejected => 0,
            ApprovalType::Conditional => 1,
            ApprovalType::Unconditional => 2,
        }
    }

    /// The stricter of two approval types
    pub fn min_with(self, other: ApprovalType) -> ApprovalType {
        if self.permissiveness() <= other.permissiveness() {
            self
        } else {
            other
        }
    }
}

impl std::fmt::Display for ApprovalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalType::Unconditional => write!(f, "UNCONDITIONAL"),
            ApprovalType::Conditional => write!(f, "CONDITIONAL"),
            ApprovalType::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Raw JSON response shape of the decision stage
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DecisionResponse {
    #[serde(default)]
    pub approval_type: ApprovalType,
    #[serde(default = "default_score")]
    pub confidence: f64,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// Stage 10 output - produced exactly once per pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub approved: bool,
    pub approval_type: ApprovalType,
    pub confidence: f64,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl Decision {
    /// The early-rejection decision built when stage 1 fails validation
    pub fn early_rejection(impact_score: f64) -> Self {
        Self {
            approved: false,
            approval_type: ApprovalType::Rejected,
            confidence: 1.0,
            actions: Vec::new(),
            conditions: Vec::new(),
            reasoning: format!(
                "Failed purpose validation. Impact score: {:.1}%",
                impact_score * 100.0
            ),
        }
    }
}

//! Scenario - the immutable input record for one pipeline run

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action length below which an empty context is considered insufficient
/// for a meaningful completeness check.
const MIN_SELF_DESCRIBING_ACTION_LEN: usize = 100;

/// A decision scenario: a proposed action plus supporting context.
///
/// Created once per run and never mutated; stage 1 consumes it first and
/// several later stages re-read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Free-text description of the proposed action
    pub action: String,
    /// Free-text supporting context
    #[serde(default)]
    pub context: String,
    /// Known stakeholders, in the order the caller listed them
    #[serde(default)]
    pub stakeholders: Vec<String>,
}

impl Scenario {
    pub fn new(action: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            context: context.into(),
            stakeholders: Vec::new(),
        }
    }

    pub fn with_stakeholders(mut self, stakeholders: Vec<String>) -> Self {
        self.stakeholders = stakeholders;
        self
    }

    /// Completeness heuristic: a scenario with no context and a short action
    /// does not carry enough information for a grounded analysis.
    pub fn has_incomplete_context(&self) -> bool {
        self.context.trim().is_empty()
            && self.action.trim().len() < MIN_SELF_DESCRIBING_ACTION_LEN
    }
}

/// Generated identifier for one pipeline run (e.g., "ETH-3fa85f64")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self(format!("ETH-{}", &token[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Configuration file schema
//!
//! Maps `ethica.toml` onto typed sections. Every field has a default so a
//! missing file or partial file still extracts; credential presence is
//! checked at gateway construction, not here.

use ethica_application::{AnalysisParams, ModelRoles};
use ethica_domain::Model;
use serde::{Deserialize, Serialize};

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub scoring: ScoringFileConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// API credentials per provider.
///
/// The Gemini and Mistral keys are required to run; DeepSeek is optional
/// and the primary provider covers its role when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub mistral_api_key: Option<String>,
    #[serde(default)]
    pub deepseek_api_key: Option<String>,
}

/// Model name per provider role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub primary: String,
    pub arbiter: String,
    #[serde(default)]
    pub collective: Option<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        let roles = ModelRoles::default();
        Self {
            primary: roles.primary.to_string(),
            arbiter: roles.arbiter.to_string(),
            collective: roles.collective.map(|m| m.to_string()),
        }
    }
}

impl ModelsConfig {
    pub fn roles(&self) -> ModelRoles {
        ModelRoles {
            primary: Model::from_name(&self.primary),
            arbiter: Model::from_name(&self.arbiter),
            collective: self.collective.as_deref().map(Model::from_name),
        }
    }
}

/// Threshold overrides for the two scoring formulas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringFileConfig {
    pub impact_threshold: f64,
    pub alignment_threshold: f64,
}

impl Default for ScoringFileConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            impact_threshold: params.scoring.impact_threshold,
            alignment_threshold: params.scoring.alignment_threshold,
        }
    }
}

impl ScoringFileConfig {
    pub fn params(&self) -> AnalysisParams {
        AnalysisParams::default()
            .with_impact_threshold(self.impact_threshold)
            .with_alignment_threshold(self.alignment_threshold)
    }
}

/// Where exported analyses are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.scoring.impact_threshold, 0.60);
        assert_eq!(config.scoring.alignment_threshold, 0.60);
        assert_eq!(config.models.primary, "gemini-2.0-flash-exp");
        assert!(config.providers.gemini_api_key.is_none());
    }

    #[test]
    fn test_partial_toml_extracts() {
        let config: FileConfig = toml::from_str(
            r#"
            [providers]
            gemini_api_key = "g-key"

            [scoring]
            impact_threshold = 0.5
            alignment_threshold = 0.65
            "#,
        )
        .unwrap();
        assert_eq!(config.providers.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.scoring.impact_threshold, 0.5);
        // Untouched sections keep their defaults.
        assert_eq!(config.models.arbiter, "mistral-large-latest");
    }

    #[test]
    fn test_roles_resolve_model_names() {
        let config = ModelsConfig {
            primary: "gemini-2.0-flash-exp".to_string(),
            arbiter: "local-llama".to_string(),
            collective: None,
        };
        let roles = config.roles();
        assert_eq!(roles.primary, Model::GeminiFlash);
        assert_eq!(roles.arbiter, Model::Custom("local-llama".to_string()));
        assert!(roles.collective.is_none());
    }
}

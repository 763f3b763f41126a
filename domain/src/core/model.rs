//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted LLM models the pipeline can address (Value Object)
///
/// Each stage names the model it wants; the gateway adapter for the
/// configured provider resolves it to a concrete API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Google Gemini flash tier - primary provider for most stages
    GeminiFlash,
    /// Mistral large - neutral arbiter for insight generation
    MistralLarge,
    /// DeepSeek chat - collective-perspective provider
    DeepseekChat,
    /// Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GeminiFlash => "gemini-2.0-flash-exp",
            Model::MistralLarge => "mistral-large-latest",
            Model::DeepseekChat => "deepseek-chat",
            Model::Custom(s) => s,
        }
    }

    /// Resolve a model name; unknown names become [`Model::Custom`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "gemini-2.0-flash-exp" => Model::GeminiFlash,
            "mistral-large-latest" => Model::MistralLarge,
            "deepseek-chat" => Model::DeepseekChat,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Default for Model {
    /// Returns the default model (Gemini flash)
    fn default() -> Self {
        Model::GeminiFlash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading and merging configuration sources
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ETHICA_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ethica.toml` or `./.ethica.toml`
    /// 4. Global: `~/.config/ethica/config.toml`
    /// 5. Default values
    ///
    /// Bare provider keys (`GEMINI_API_KEY`, `MISTRAL_API_KEY`,
    /// `DEEPSEEK_API_KEY`) overlay last so a plain `.env` works without any
    /// config file.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["ethica.toml", ".ethica.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // ETHICA_PROVIDERS__GEMINI_API_KEY style overrides
        figment = figment.merge(Env::prefixed("ETHICA_").split("__"));

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        Self::overlay_bare_env(&mut config);
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::overlay_bare_env(&mut config);
        config
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ethica").join("config.toml"))
    }

    fn overlay_bare_env(config: &mut FileConfig) {
        for (key, slot) in [
            ("GEMINI_API_KEY", &mut config.providers.gemini_api_key),
            ("MISTRAL_API_KEY", &mut config.providers.mistral_api_key),
            ("DEEPSEEK_API_KEY", &mut config.providers.deepseek_api_key),
        ] {
            if let Ok(value) = std::env::var(key) {
                if !value.trim().is_empty() {
                    *slot = Some(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_path_names_the_app_dir() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("ethica"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[scoring]\nimpact_threshold = 0.45\nalignment_threshold = 0.60\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.scoring.impact_threshold, 0.45);
    }
}

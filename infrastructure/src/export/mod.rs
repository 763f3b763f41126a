//! JSON export of finished analyses

use chrono::Utc;
use ethica_domain::AnalysisResult;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes one analysis result as pretty-printed JSON
pub struct JsonExporter {
    directory: PathBuf,
}

impl JsonExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Export to an auto-named file (`ethica_analysis_<id>_<timestamp>.json`)
    pub fn export(&self, result: &AnalysisResult) -> Result<PathBuf, ExportError> {
        let stamp = Utc::now().format("%Y%m%d_%H%M%S");
        let filename = format!("ethica_analysis_{}_{}.json", result.scenario_id, stamp);
        let path = self.directory.join(filename);
        self.export_to(result, &path)?;
        Ok(path)
    }

    /// Export to an explicit path
    pub fn export_to(&self, result: &AnalysisResult, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Exported analysis");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethica_domain::{
        AnalysisMetrics, ImpactDimensions, ImpactScore, ScenarioId,
    };

    fn sample_result() -> AnalysisResult {
        AnalysisResult::early_rejection(
            ScenarioId::generate(),
            "2025-06-01T12:00:00Z".to_string(),
            ImpactScore {
                score: 0.4,
                alignment: 0.35,
                aligned: false,
                dimensions: ImpactDimensions::default(),
                concerns: vec![],
                manifestation_valid: false,
                reasoning: "insufficient benefit".to_string(),
            },
            AnalysisMetrics::default(),
        )
    }

    #[test]
    fn test_export_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path());
        let result = sample_result();

        let path = exporter.export(&result).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("ethica_analysis_"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let back: AnalysisResult = serde_json::from_str(&contents).unwrap();
        assert_eq!(back.scenario_id, result.scenario_id);
        assert!(!back.decision.approved);
    }

    #[test]
    fn test_export_to_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("june");
        let exporter = JsonExporter::new(dir.path());
        let target = nested.join("analysis.json");

        exporter.export_to(&sample_result(), &target).unwrap();
        assert!(target.exists());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compatibility::DEFAULT_COMPATIBLE_LIMIT;
use crate::routine::TimeOfDayRules;
use crate::similarity::{
    ReviewSignalWeights, SimilarityWeights, DEFAULT_SIMILAR_LIMIT, MAX_SIMILARITY_SCORE,
};

/// Engine tuning: point tables, result limits, and routine rule lists.
/// `Default` reproduces the documented constants; a TOML file may override
/// any subset of sections.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub similarity: SimilarityConfig,
    pub compatibility: CompatibilityConfig,
    pub reviews: ReviewSignalWeights,
    pub routine: TimeOfDayRules,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub weights: SimilarityWeights,
    pub limit: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self { weights: SimilarityWeights::default(), limit: DEFAULT_SIMILAR_LIMIT }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityConfig {
    pub limit: usize,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_COMPATIBLE_LIMIT }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("engine config validation failed: {0}")]
    Validation(String),
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    /// Load from a path when one is configured, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate TOML config text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.similarity.limit == 0 {
            return Err(ConfigError::Validation(
                "similarity.limit must be at least 1".to_string(),
            ));
        }
        if self.compatibility.limit == 0 {
            return Err(ConfigError::Validation(
                "compatibility.limit must be at least 1".to_string(),
            ));
        }

        let review_weights = [
            ("reviews.skin_type", self.reviews.skin_type),
            ("reviews.concern", self.reviews.concern),
            ("reviews.complexion", self.reviews.complexion),
            ("reviews.sensitivity", self.reviews.sensitivity),
            ("reviews.lifestyle", self.reviews.lifestyle),
            ("reviews.age", self.reviews.age),
        ];
        for (name, weight) in review_weights {
            if weight > MAX_SIMILARITY_SCORE {
                return Err(ConfigError::Validation(format!(
                    "{name} exceeds the {MAX_SIMILARITY_SCORE}-point score ceiling"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::similarity::{DEFAULT_REVIEW_WEIGHTS, DEFAULT_SIMILARITY_WEIGHTS};

    use super::{ConfigError, EngineConfig};

    #[test]
    fn defaults_carry_the_documented_constants_and_validate() {
        let config = EngineConfig::default();
        assert_eq!(config.similarity.weights, DEFAULT_SIMILARITY_WEIGHTS);
        assert_eq!(config.similarity.limit, 4);
        assert_eq!(config.compatibility.limit, 8);
        assert_eq!(config.reviews, DEFAULT_REVIEW_WEIGHTS);
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn partial_toml_overrides_only_named_sections() {
        let config = EngineConfig::from_toml_str(
            r#"
            [similarity]
            limit = 6

            [reviews]
            skin_type = 50
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.similarity.limit, 6);
        assert_eq!(config.similarity.weights, DEFAULT_SIMILARITY_WEIGHTS);
        assert_eq!(config.reviews.skin_type, 50);
        assert_eq!(config.reviews.concern, DEFAULT_REVIEW_WEIGHTS.concern);
        assert_eq!(config.compatibility.limit, 8);
    }

    #[test]
    fn zero_limits_fail_validation() {
        let error = EngineConfig::from_toml_str("[similarity]\nlimit = 0\n")
            .expect_err("zero limit must be rejected");
        assert!(matches!(error, ConfigError::Validation(_)));
    }

    #[test]
    fn oversized_review_weights_fail_validation() {
        let error = EngineConfig::from_toml_str("[reviews]\nskin_type = 500\n")
            .expect_err("oversized weight must be rejected");
        assert!(matches!(error, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_toml_surfaces_a_parse_error() {
        let error =
            EngineConfig::from_toml_str("similarity = ").expect_err("garbage must not parse");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_a_file_and_reports_missing_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[compatibility]\nlimit = 12\n").expect("write config");

        let config = EngineConfig::load(file.path()).expect("file should load");
        assert_eq!(config.compatibility.limit, 12);

        let missing = EngineConfig::load(std::path::Path::new("/nonexistent/dewy.toml"))
            .expect_err("missing file must error");
        assert!(matches!(missing, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn load_or_default_without_a_path_uses_defaults() {
        let config = EngineConfig::load_or_default(None).expect("defaults");
        assert_eq!(config, EngineConfig::default());
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Crate configuration, loaded by the embedding service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Suggestions returned when the caller does not ask for a count
    #[serde(default = "default_suggestion_limit")]
    pub default_limit: usize,
    /// Hard cap on caller-requested limits
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// How many available records to pull from the store per run
    #[serde(default = "default_candidate_batch")]
    pub candidate_batch: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_suggestion_limit(),
            max_limit: default_max_limit(),
            candidate_batch: default_candidate_batch(),
        }
    }
}

fn default_suggestion_limit() -> usize { 10 }
fn default_max_limit() -> usize { 50 }
fn default_candidate_batch() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_overlap_weight")]
    pub age_overlap: u32,
    #[serde(default = "default_siblings_weight")]
    pub siblings: u32,
    #[serde(default = "default_support_per_tag_weight")]
    pub support_per_tag: u32,
    #[serde(default = "default_support_cap")]
    pub support_cap: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age_overlap: default_age_overlap_weight(),
            siblings: default_siblings_weight(),
            support_per_tag: default_support_per_tag_weight(),
            support_cap: default_support_cap(),
            availability: default_availability_weight(),
        }
    }
}

fn default_age_overlap_weight() -> u32 { 30 }
fn default_siblings_weight() -> u32 { 15 }
fn default_support_per_tag_weight() -> u32 { 10 }
fn default_support_cap() -> u32 { 30 }
fn default_availability_weight() -> u32 { 10 }

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            age_overlap: config.age_overlap,
            siblings: config.siblings,
            support_per_tag: config.support_per_tag,
            support_cap: config.support_cap,
            availability: config.availability,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Sources in order (later overrides earlier):
    /// 1. Defaults baked into the structs
    /// 2. config/default.toml
    /// 3. config/local.toml (development overrides)
    /// 4. Environment variables prefixed with SAFENEST
    ///    e.g. SAFENEST__MATCHING__DEFAULT_LIMIT -> matching.default_limit
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SAFENEST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SAFENEST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.age_overlap, 30);
        assert_eq!(weights.siblings, 15);
        assert_eq!(weights.support_per_tag, 10);
        assert_eq!(weights.support_cap, 30);
        assert_eq!(weights.availability, 10);

        let scoring: ScoringWeights = weights.into();
        assert_eq!(scoring.max_score(), 85);
    }

    #[test]
    fn test_default_matching_limits() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_limit, 10);
        assert_eq!(matching.max_limit, 50);
        assert_eq!(matching.candidate_batch, 50);
    }

    #[test]
    fn test_partial_toml_override() {
        let settings: Settings = toml::from_str(
            r#"
            [matching]
            default_limit = 5

            [scoring.weights]
            siblings = 20
            "#,
        )
        .unwrap();

        assert_eq!(settings.matching.default_limit, 5);
        assert_eq!(settings.matching.max_limit, 50);
        assert_eq!(settings.scoring.weights.siblings, 20);
        assert_eq!(settings.scoring.weights.age_overlap, 30);
        assert_eq!(settings.logging.level, "info");
    }
}

//! Configuration management for the ATS scorer

use crate::error::{AtsScorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: SkillVocabulary,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Skill lists matched by the soft and hard skills scorers.
///
/// Read once at startup and shared read-only by every scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillVocabulary {
    pub soft_skills: Vec<String>,
    pub hard_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Resume and job description text beyond this many characters is dropped
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            soft_skills: vec![
                "communication".to_string(),
                "teamwork".to_string(),
                "leadership".to_string(),
                "problem-solving".to_string(),
                "critical thinking".to_string(),
            ],
            hard_skills: vec![
                "python".to_string(),
                "machine learning".to_string(),
                "data analysis".to_string(),
                "predictive modeling".to_string(),
                "data visualization".to_string(),
            ],
        }
    }
}

impl SkillVocabulary {
    pub fn new(soft_skills: Vec<String>, hard_skills: Vec<String>) -> Self {
        Self {
            soft_skills,
            hard_skills,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: SkillVocabulary::default(),
            processing: ProcessingConfig {
                max_input_chars: 200_000,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load a config from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AtsScorerError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite the config file at `path` with the defaults
    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }
}

use crate::error::{PlantCareError, Result};
use crate::logic::WateringPolicy;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub policy: WateringPolicy,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// UTC offset such as "+02:00" used when no `--at` instant is given.
    /// Falls back to `PLANTCARE_TZ_OFFSET`, then to the system offset.
    pub utc_offset: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            utc_offset: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl Config {
    /// Load config from the override path or the standard locations.
    /// No config file anywhere means defaults; a missing override is an error.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(PlantCareError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config file found - using default watering policy");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PlantCareError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml_str(&config_str)?;
        tracing::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML after `${VAR}` substitution and validate the policy
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PlantCareError::Config(format!("Failed to parse config: {}", e)))?;

        config.policy.validate()?;
        if let Some(offset) = &config.output.utc_offset {
            parse_utc_offset(offset)?;
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("plantcare").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Offset to evaluate "now" in when the caller does not pin an instant
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        if let Some(offset) = &self.output.utc_offset {
            return parse_utc_offset(offset).map(Some);
        }

        match std::env::var("PLANTCARE_TZ_OFFSET") {
            Ok(value) if !value.trim().is_empty() => parse_utc_offset(&value).map(Some),
            _ => Ok(None),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

/// Parse "+HH:MM", "-HH:MM", "Z" or "UTC"
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    value
        .parse::<FixedOffset>()
        .map_err(|e| PlantCareError::InvalidTime(format!("invalid UTC offset '{}': {}", value, e)))
}

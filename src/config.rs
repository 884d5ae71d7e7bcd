use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;
use crate::services::apollo::APOLLO_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub apollo: ApolloSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApolloSettings {
    #[serde(default = "default_apollo_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ApolloSettings {
    fn default() -> Self {
        Self {
            base_url: default_apollo_base_url(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

fn default_apollo_base_url() -> String {
    APOLLO_BASE_URL.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSettings {
    pub company_limit: Option<u32>,
    pub contact_page_size: Option<u32>,
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_job_title_exact_weight")]
    pub job_title_exact: u32,
    #[serde(default = "default_job_title_partial_weight")]
    pub job_title_partial: u32,
    #[serde(default = "default_seniority_weight")]
    pub seniority: u32,
    #[serde(default = "default_industry_weight")]
    pub industry: u32,
    #[serde(default = "default_company_size_weight")]
    pub company_size: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_funding_stage_weight")]
    pub funding_stage: u32,
    #[serde(default = "default_technology_weight")]
    pub technology: u32,
}

impl WeightsConfig {
    /// Convert to the weights struct the scorer consumes.
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            job_title_exact: self.job_title_exact,
            job_title_partial: self.job_title_partial,
            seniority: self.seniority,
            industry: self.industry,
            company_size: self.company_size,
            location: self.location,
            funding_stage: self.funding_stage,
            technology: self.technology,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            job_title_exact: default_job_title_exact_weight(),
            job_title_partial: default_job_title_partial_weight(),
            seniority: default_seniority_weight(),
            industry: default_industry_weight(),
            company_size: default_company_size_weight(),
            location: default_location_weight(),
            funding_stage: default_funding_stage_weight(),
            technology: default_technology_weight(),
        }
    }
}

fn default_job_title_exact_weight() -> u32 { 30 }
fn default_job_title_partial_weight() -> u32 { 15 }
fn default_seniority_weight() -> u32 { 20 }
fn default_industry_weight() -> u32 { 15 }
fn default_company_size_weight() -> u32 { 10 }
fn default_location_weight() -> u32 { 10 }
fn default_funding_stage_weight() -> u32 { 10 }
fn default_technology_weight() -> u32 { 5 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MENTRA__)
    pub fn load() -> Result<Self, ConfigError> {
        // Pick up a .env file before reading the environment
        dotenv::dotenv().ok();

        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MENTRA__)
            // e.g., MENTRA__APOLLO__API_KEY -> apollo.api_key
            .add_source(
                Environment::with_prefix("MENTRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the bare provider variables (APOLLO_API_KEY et al.)
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MENTRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the bare provider environment variables. These take
/// precedence over both config files and the prefixed form.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("APOLLO_API_KEY")
        .or_else(|_| env::var("MENTRA__APOLLO__API_KEY"))
        .ok();
    let base_url = env::var("APOLLO_BASE_URL")
        .or_else(|_| env::var("MENTRA__APOLLO__BASE_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("apollo.api_key", api_key)?;
    }
    if let Some(base_url) = base_url {
        builder = builder.set_override("apollo.base_url", base_url)?;
    }

    builder.build()
}

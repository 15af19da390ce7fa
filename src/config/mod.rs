pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "pitch-forge"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate hackathon pitch content packs with heuristic scoring")
)]
pub struct CliConfig {
    /// Path to the problems dataset (JSON array)
    #[cfg_attr(feature = "cli", arg(long, default_value = "./data/problems.json"))]
    pub problems_file: String,

    /// Problem statement id or title to pitch
    #[cfg_attr(feature = "cli", arg(long))]
    pub problem: String,

    /// The team's solution idea
    #[cfg_attr(feature = "cli", arg(long, default_value = ""))]
    pub idea: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Enrichment endpoints, tried in order
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ','))]
    pub endpoints: Vec<String>,

    /// Bearer token for the enrichment endpoints
    #[cfg_attr(feature = "cli", arg(long))]
    pub api_token: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "8"))]
    pub timeout_seconds: u64,

    /// Skip enrichment even when endpoints are configured
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_enrich: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    /// Log process stats per phase
    #[cfg_attr(feature = "cli", arg(long))]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn enrichment_endpoints(&self) -> &[String] {
        if self.no_enrich {
            &[]
        } else {
            &self.endpoints
        }
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("problem", &self.problem)?;
        validate_path("problems_file", &self.problems_file)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 60)?;
        for endpoint in &self.endpoints {
            validate_url("endpoints", endpoint)?;
        }
        Ok(())
    }
}

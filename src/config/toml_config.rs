use crate::core::ConfigProvider;
use crate::utils::error::{PitchError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub problems: ProblemsConfig,
    pub enrichment: Option<EnrichmentConfig>,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemsConfig {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub enabled: Option<bool>,
    #[serde(default)]
    pub endpoints: Vec<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PitchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PitchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left in place so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("problems.file", &self.problems.file)?;
        validate_path("output.output_path", &self.output.output_path)?;

        let valid_formats = ["text", "json"];
        for format in &self.output.formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(PitchError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        if let Some(enrichment) = &self.enrichment {
            for endpoint in &enrichment.endpoints {
                validate_url("enrichment.endpoints", endpoint)?;
            }
            if let Some(timeout) = enrichment.timeout_seconds {
                validate_range("enrichment.timeout_seconds", timeout, 1, 60)?;
            }
        }

        Ok(())
    }

    pub fn enrichment_enabled(&self) -> bool {
        self.enrichment
            .as_ref()
            .map(|e| e.enabled.unwrap_or(true) && !e.endpoints.is_empty())
            .unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn enrichment_endpoints(&self) -> &[String] {
        match &self.enrichment {
            Some(e) if e.enabled.unwrap_or(true) => &e.endpoints,
            _ => &[],
        }
    }

    fn api_token(&self) -> Option<&str> {
        self.enrichment
            .as_ref()
            .and_then(|e| e.token.as_deref())
            // An unresolved ${VAR} placeholder means no usable token.
            .filter(|t| !t.starts_with("${"))
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.enrichment
            .as_ref()
            .and_then(|e| e.timeout_seconds)
            .unwrap_or(crate::adapters::enrichment::DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

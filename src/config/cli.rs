use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "job-board")]
#[command(about = "Renders a filterable job board from a static job listing")]
pub struct CliConfig {
    /// Endpoint serving the job listing as a JSON array
    #[arg(long, default_value = "http://localhost:8000/data.json")]
    pub data_url: String,

    /// Directory the rendered view regions are written to
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Filter tags to preselect, as if clicked in order
    #[arg(long, value_delimiter = ',')]
    pub filters: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("data_url", &self.data_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            data_url: "http://localhost:8000/data.json".to_string(),
            output_path: "./output".to_string(),
            filters: vec![],
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let mut config = base_config();
        config.data_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let mut config = base_config();
        config.output_path = String::new();
        assert!(config.validate().is_err());
    }
}

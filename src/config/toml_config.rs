use crate::core::text;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;

const DEFAULT_REPORT_FILENAME: &str = "conversion_report.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub pipeline: PipelineConfig,
    pub conversion: ConversionConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub input_file: String,
    pub types: Vec<String>,
    pub throws: Option<bool>,
    pub stop_on_failure: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub report_filename: Option<String>,
}

impl ChainConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !text::ends_with_suffix(path, ".toml") {
            tracing::warn!("Config file '{}' does not have a .toml extension", path);
        }

        let content = fs::read_to_string(path)?;
        let config: ChainConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for ChainConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("conversion.input_file", &self.conversion.input_file)?;
        validation::validate_chain("conversion.types", &self.conversion.types)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(filename) = &self.load.report_filename {
            validation::validate_non_empty_string("load.report_filename", filename)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ChainConfig {
    fn input_file(&self) -> &str {
        &self.conversion.input_file
    }

    fn chain(&self) -> &[String] {
        &self.conversion.types
    }

    fn throws(&self) -> bool {
        self.conversion.throws.unwrap_or(false)
    }

    fn stop_on_failure(&self) -> bool {
        self.conversion.stop_on_failure.unwrap_or(false)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn report_filename(&self) -> &str {
        self.load
            .report_filename
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_FILENAME)
    }
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-conv")]
#[command(about = "A small toolkit for converting response data between types")]
pub struct CliConfig {
    #[arg(long, default_value = "./input.json")]
    pub input_file: String,

    #[arg(long, value_delimiter = ',', default_value = "text,json")]
    pub types: Vec<String>,

    #[arg(long, help = "Propagate converter errors instead of containing them")]
    pub throws: bool,

    #[arg(long, help = "Stop the batch at the first failed slot")]
    pub stop_on_failure: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "conversion_report.json")]
    pub report_filename: String,

    #[arg(long, help = "Load the run configuration from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn chain(&self) -> &[String] {
        &self.types
    }

    fn throws(&self) -> bool {
        self.throws
    }

    fn stop_on_failure(&self) -> bool {
        self.stop_on_failure
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_filename(&self) -> &str {
        &self.report_filename
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_file", &self.input_file)?;
        validation::validate_chain("types", &self.types)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("report_filename", &self.report_filename)?;
        Ok(())
    }
}

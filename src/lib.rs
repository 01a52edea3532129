pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::ChainConfig};

pub use crate::core::convert::{convert, ConvFn, Converter, ConvertSettings, ConverterRegistry};
pub use crate::core::engine::ConvEngine;
pub use crate::core::pipeline::FileConvertPipeline;
pub use crate::core::seq::SparseSeq;
pub use domain::model::{BatchReport, ConversionFailure, ConvertOutcome, SlotOutcome};
pub use utils::error::{ConvError, Result};

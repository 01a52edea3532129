pub mod convert;
pub mod engine;
pub mod pipeline;
pub mod seq;
pub mod text;

pub use crate::domain::model::{BatchReport, ConversionFailure, ConvertOutcome, SlotOutcome};
pub use crate::domain::ports::{ConfigProvider, ConvertPipeline, Storage};
pub use crate::utils::error::Result;

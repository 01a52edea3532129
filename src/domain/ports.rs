use crate::core::seq::SparseSeq;
use crate::domain::model::BatchReport;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn chain(&self) -> &[String];
    fn throws(&self) -> bool;
    fn stop_on_failure(&self) -> bool;
    fn output_path(&self) -> &str;
    fn report_filename(&self) -> &str;
}

pub trait ConvertPipeline: Send + Sync {
    fn extract(&self) -> Result<SparseSeq<serde_json::Value>>;
    fn convert(&self, batch: SparseSeq<serde_json::Value>) -> Result<BatchReport>;
    fn load(&self, report: BatchReport) -> Result<String>;
}

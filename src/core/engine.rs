use crate::core::ConvertPipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ConvEngine<P: ConvertPipeline> {
    pipeline: P,
}

impl<P: ConvertPipeline> ConvEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting conversion process...");
        let started = Instant::now();

        // Extract
        println!("Extracting input...");
        let batch = self.pipeline.extract()?;
        println!("Extracted {} slots ({} present)", batch.len(), batch.present());

        // Convert
        println!("Converting...");
        let report = self.pipeline.convert(batch)?;
        println!(
            "Converted {} slots, {} failed, {} holes skipped",
            report.converted, report.failed, report.holes
        );

        // Load
        println!("Writing report...");
        let output_path = self.pipeline.load(report)?;
        println!("Report saved to: {}", output_path);

        tracing::debug!("Conversion finished in {:?}", started.elapsed());
        Ok(output_path)
    }
}

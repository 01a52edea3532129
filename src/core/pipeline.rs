use crate::core::convert::{convert, Converter, ConvertSettings, ConverterRegistry};
use crate::core::seq::SparseSeq;
use crate::core::text;
use crate::core::{BatchReport, ConfigProvider, ConvertOutcome, ConvertPipeline, SlotOutcome, Storage};
use crate::utils::error::{ConvError, Result};
use serde_json::Value;

struct ChainStep {
    prev: String,
    current: String,
    converter: Converter,
}

/// File-to-file conversion pipeline: reads a JSON batch through the
/// storage port, folds every present slot through the configured chain,
/// and writes a report.
pub struct FileConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    registry: ConverterRegistry,
}

impl<S: Storage, C: ConfigProvider> FileConvertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            registry: ConverterRegistry::with_defaults(),
        }
    }

    pub fn with_registry(storage: S, config: C, registry: ConverterRegistry) -> Self {
        Self {
            storage,
            config,
            registry,
        }
    }

    fn resolve_steps(&self) -> Vec<ChainStep> {
        self.config
            .chain()
            .windows(2)
            .map(|pair| ChainStep {
                prev: pair[0].clone(),
                current: pair[1].clone(),
                converter: self.registry.resolve(&pair[0], &pair[1]),
            })
            .collect()
    }

    /// Folds one response through the chain. Stops at the first failure
    /// record; converter errors propagate when the settings say so.
    fn run_chain(
        &self,
        steps: &[ChainStep],
        settings: &ConvertSettings,
        response: Value,
    ) -> Result<ConvertOutcome> {
        let mut value = response;
        for step in steps {
            match convert(&step.converter, settings, value, &step.prev, &step.current)? {
                ConvertOutcome::Converted { value: next } => value = next,
                failed => return Ok(failed),
            }
        }
        Ok(ConvertOutcome::converted(value))
    }
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline for FileConvertPipeline<S, C> {
    fn extract(&self) -> Result<SparseSeq<Value>> {
        tracing::debug!("Reading input from: {}", self.config.input_file());
        let raw = self.storage.read_file(self.config.input_file())?;
        let json: Value = serde_json::from_slice(&raw)?;

        // A top-level array is a batch with nulls marking holes; anything
        // else is wrapped as a single-slot batch.
        let batch: SparseSeq<Value> = match json {
            Value::Array(items) => items
                .into_iter()
                .map(|item| if item.is_null() { None } else { Some(item) })
                .collect(),
            single => SparseSeq::from(vec![single]),
        };

        tracing::debug!(
            "Extracted {} slots ({} present)",
            batch.len(),
            batch.present()
        );
        Ok(batch)
    }

    fn convert(&self, batch: SparseSeq<Value>) -> Result<BatchReport> {
        let chain = self.config.chain();
        let settings = ConvertSettings {
            throws: self.config.throws(),
        };
        let stop_on_failure = self.config.stop_on_failure();

        let chain_key = chain.join(" ");
        let chain_fingerprint = text::hash_code(&chain_key);
        tracing::debug!("Running chain '{}' (fingerprint {})", chain_key, chain_fingerprint);

        let steps = self.resolve_steps();

        let mut outcomes = Vec::new();
        let mut converted = 0usize;
        let mut failed = 0usize;
        let mut stopped_early = false;
        let mut run_error: Option<ConvError> = None;

        batch.each(|index, response, _| {
            match self.run_chain(&steps, &settings, response.clone()) {
                Ok(outcome) => {
                    let is_failed = outcome.is_failed();
                    if is_failed {
                        failed += 1;
                    } else {
                        converted += 1;
                    }
                    outcomes.push(SlotOutcome { index, outcome });

                    if is_failed && stop_on_failure {
                        tracing::debug!("Stopping batch at slot {} after failure", index);
                        stopped_early = true;
                        return false;
                    }
                    true
                }
                Err(error) => {
                    run_error = Some(error);
                    false
                }
            }
        });

        if let Some(error) = run_error {
            return Err(error);
        }

        let holes = batch.len() - batch.present();
        Ok(BatchReport {
            chain: chain.to_vec(),
            chain_fingerprint,
            outcomes,
            converted,
            failed,
            holes,
            stopped_early,
            completed_at: chrono::Utc::now(),
        })
    }

    fn load(&self, report: BatchReport) -> Result<String> {
        let report_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.report_filename()
        );

        tracing::debug!(
            "Writing report ({} outcomes) to {}",
            report.outcomes.len(),
            report_path
        );
        let json = serde_json::to_string_pretty(&report)?;
        self.storage.write_file(&report_path, json.as_bytes())?;

        Ok(report_path)
    }
}

use clap::Parser;
use small_conv::core::{text, ConfigProvider};
use small_conv::utils::{logger, validation::Validate};
use small_conv::{ChainConfig, CliConfig, ConvEngine, FileConvertPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting small-conv CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = if let Some(config_path) = cli.config.clone() {
        ChainConfig::from_file(&config_path).and_then(run)
    } else {
        run(cli)
    };

    match result {
        Ok(output_path) => {
            tracing::info!("Conversion completed successfully");
            println!("✅ Conversion completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run<C>(config: C) -> small_conv::Result<String>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    if !text::ends_with_suffix(config.input_file(), ".json") {
        tracing::warn!(
            "Input file '{}' does not have a .json extension",
            config.input_file()
        );
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = FileConvertPipeline::new(storage, config);
    let engine = ConvEngine::new(pipeline);
    engine.run()
}

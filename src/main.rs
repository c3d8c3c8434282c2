use blocklist_etl::utils::{logger, validation::Validate};
use blocklist_etl::{
    BlocklistPipeline, CliConfig, EtlEngine, HttpClient, LocalStorage, Registry, RetryPolicy,
};
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting blocklist-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let registry = match &config.registry {
        Some(path) => Registry::from_toml_file(Path::new(path))?,
        None => Registry::builtin(),
    };
    registry.validate()?;

    let storage = LocalStorage::new(config.output_path.clone());
    let http = HttpClient::new(RetryPolicy::default());
    let pipeline = BlocklistPipeline::new(storage, config, registry, http);

    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Blocked-domain report completed successfully");
            println!("✅ Blocked-domain report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("ETL process failed: {}", e);
            eprintln!("❌ {}", e);
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("   caused by: {}", source);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

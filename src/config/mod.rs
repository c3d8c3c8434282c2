pub mod cli;
pub mod registry;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

#[derive(Debug, Clone, Parser)]
#[command(name = "blocklist-etl")]
#[command(about = "Checks which domains on institutional block lists still resolve")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DOH_ENDPOINT)]
    pub doh_endpoint: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "TOML file overriding the built-in institution registry")]
    pub registry: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn doh_endpoint(&self) -> &str {
        &self.doh_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("doh_endpoint", &self.doh_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(registry) = &self.registry {
            validation::validate_path("registry", registry)?;
        }

        Ok(())
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");

        // Extract
        tracing::info!("Fetching block lists...");
        let raw_lists = self.pipeline.extract().await?;
        tracing::info!("Fetched {} block lists", raw_lists.len());

        // Transform
        tracing::info!("Parsing and resolving domains...");
        let transformed_result = self.pipeline.transform(raw_lists).await?;
        tracing::info!(
            "Built {} institution reports",
            transformed_result.reports.len()
        );

        // Load
        tracing::info!("Writing report files...");
        let output_path = self.pipeline.load(transformed_result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

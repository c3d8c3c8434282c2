use crate::config::registry::Registry;
use crate::core::http::HttpClient;
use crate::core::{fetch::ListFetcher, parse, report, resolve::DohResolver};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{InstitutionReport, RawBlockList, TransformResult};
use crate::utils::error::Result;

pub const PRETTY_JSON_FILE: &str = "isp-blocked-domains.json";
pub const COMPACT_JSON_FILE: &str = "isp-blocked-domains.min.json";
pub const CSV_FILE: &str = "isp-blocked-domains.csv";

pub struct BlocklistPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    registry: Registry,
    fetcher: ListFetcher,
    resolver: DohResolver,
}

impl<S: Storage, C: ConfigProvider> BlocklistPipeline<S, C> {
    pub fn new(storage: S, config: C, registry: Registry, http: HttpClient) -> Self {
        let fetcher = ListFetcher::new(http.clone());
        let resolver = DohResolver::new(http, config.doh_endpoint().to_string());

        Self {
            storage,
            config,
            registry,
            fetcher,
            resolver,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BlocklistPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawBlockList>> {
        let mut raw_lists = Vec::new();

        for institution in self.registry.institutions() {
            tracing::info!("Fetching block list for: {}", institution.name);
            let body = self.fetcher.fetch(institution).await?;

            raw_lists.push(RawBlockList {
                institution: institution.clone(),
                body,
            });
        }

        Ok(raw_lists)
    }

    async fn transform(&self, data: Vec<RawBlockList>) -> Result<TransformResult> {
        let mut reports = Vec::with_capacity(data.len());

        for raw in data {
            let domains = parse::parse(&raw.institution, &raw.body)?;
            tracing::info!(
                "Resolving {} domains for: {}",
                domains.len(),
                raw.institution.name
            );

            let resolved_domains = self.resolver.resolve_all(&domains).await?;

            reports.push(InstitutionReport {
                institution: raw.institution,
                resolved_domains,
            });
        }

        Ok(TransformResult { reports })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        // Each encoding is fully materialized before anything is written,
        // so a serialization failure leaves no file behind.
        let pretty = report::to_pretty_json(&result.reports)?;
        let compact = report::to_compact_json(&result.reports)?;
        let csv = report::to_csv(&result.reports)?;

        self.storage.write_file(PRETTY_JSON_FILE, &pretty).await?;
        self.storage.write_file(COMPACT_JSON_FILE, &compact).await?;
        self.storage.write_file(CSV_FILE, &csv).await?;

        Ok(self.config.output_path().to_string())
    }
}

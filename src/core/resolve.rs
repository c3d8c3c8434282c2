use crate::core::http::HttpClient;
use crate::domain::model::ResolvedDomain;
use crate::utils::error::{EtlError, Result};
use serde::Deserialize;

/// Subset of the Google-style JSON DNS answer this pipeline reads.
#[derive(Debug, Deserialize)]
struct DnsResponse {
    #[serde(rename = "Status")]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DnsAnswer>,
}

#[derive(Debug, Deserialize)]
struct DnsAnswer {
    data: String,
}

pub struct DohResolver {
    http: HttpClient,
    endpoint: String,
}

impl DohResolver {
    pub fn new(http: HttpClient, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Ask the DNS-over-HTTPS endpoint for A records of one domain.
    pub async fn resolve(&self, domain: &str) -> Result<ResolvedDomain> {
        let query = [("name", domain), ("type", "A")];

        let response = self
            .http
            .get(&self.endpoint, &query)
            .await
            .map_err(|e| resolve_error(domain, e))?;

        let dns: DnsResponse = response
            .json()
            .await
            .map_err(|e| resolve_error(domain, EtlError::ApiError(e)))?;

        Ok(ResolvedDomain {
            domain: domain.to_string(),
            status: dns.status,
            ips: dns.answer.into_iter().map(|answer| answer.data).collect(),
        })
    }

    /// Resolve a batch strictly sequentially, preserving input order.
    /// Results reflect live DNS state and can differ between runs.
    pub async fn resolve_all(&self, domains: &[String]) -> Result<Vec<ResolvedDomain>> {
        let mut resolved = Vec::with_capacity(domains.len());

        for domain in domains {
            tracing::debug!("Resolving domain: {}", domain);
            resolved.push(self.resolve(domain).await?);
        }

        Ok(resolved)
    }
}

fn resolve_error(domain: &str, source: EtlError) -> EtlError {
    EtlError::ResolveError {
        domain: domain.to_string(),
        source: Box::new(source),
    }
}

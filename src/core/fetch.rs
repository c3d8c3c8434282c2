use crate::core::http::HttpClient;
use crate::domain::model::Institution;
use crate::utils::error::{EtlError, Result};

pub struct ListFetcher {
    http: HttpClient,
}

impl ListFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Download one institution's published block list as raw text.
    pub async fn fetch(&self, institution: &Institution) -> Result<String> {
        tracing::debug!("Fetching block list from: {}", institution.source_url);

        let response = self
            .http
            .get(&institution.source_url, &[])
            .await
            .map_err(|e| fetch_error(institution, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(institution, EtlError::ApiError(e)))?;

        Ok(body)
    }
}

fn fetch_error(institution: &Institution, source: EtlError) -> EtlError {
    EtlError::FetchError {
        institution: institution.name.clone(),
        url: institution.source_url.clone(),
        source: Box::new(source),
    }
}

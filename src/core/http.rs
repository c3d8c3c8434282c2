use crate::utils::error::{EtlError, Result};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Bounded retry with exponential backoff for transient upstream errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub retry_statuses: Vec<StatusCode>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 7,
            base_delay: Duration::from_millis(100),
            retry_statuses: vec![
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::GATEWAY_TIMEOUT,
            ],
        }
    }
}

impl RetryPolicy {
    fn should_retry(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt - 1)
    }
}

/// One pooled reqwest client shared by the fetcher and the resolver.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    policy: RetryPolicy,
}

impl HttpClient {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            client: Client::new(),
            policy,
        }
    }

    /// GET with bounded retry on transient server errors.
    ///
    /// Transport errors and non-retryable statuses (4xx and friends)
    /// fail immediately.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = self.client.get(url).query(query).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            if self.policy.should_retry(status) && attempt < self.policy.max_attempts {
                let delay = self.policy.backoff(attempt);
                tracing::warn!(
                    "GET {} returned {}, retrying in {:?} (attempt {}/{})",
                    url,
                    status,
                    delay,
                    attempt,
                    self.policy.max_attempts
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            return Err(EtlError::StatusError {
                url: url.to_string(),
                status,
                attempts: attempt,
            });
        }
    }
}

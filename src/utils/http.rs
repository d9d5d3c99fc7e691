use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::config::ApiConfig;
use crate::error::SourceError;

pub fn create_client(api: &ApiConfig) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .user_agent(api.user_agent.clone())
        .timeout(Duration::from_secs(api.timeout_seconds))
        .pool_max_idle_per_host(6)
        .build()
}

pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    max_retries: u32,
) -> Result<Response, SourceError> {
    let max_attempts = max_retries.max(1);
    let mut attempts = 0;
    let mut last_error: Option<SourceError> = None;

    while attempts < max_attempts {
        match client.get(url).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    return Ok(response);
                }
                let status = response.status();
                warn!("HTTP error {}: {}", status, url);
                last_error = Some(SourceError::Status {
                    status,
                    url: url.to_string(),
                });
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                last_error = Some(e.into());
            }
        }

        attempts += 1;
        if attempts < max_attempts {
            let delay = Duration::from_secs(2u64.pow(attempts));
            warn!(
                "Retrying in {:?}... (attempt {}/{})",
                delay,
                attempts + 1,
                max_retries
            );
            sleep(delay).await;
        }
    }

    Err(last_error.unwrap_or(SourceError::Status {
        status: reqwest::StatusCode::REQUEST_TIMEOUT,
        url: url.to_string(),
    }))
}

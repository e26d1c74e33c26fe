use std::time::Duration;

use async_trait::async_trait;
use lexi_config::network::NetworkConfig;
use lexi_core::error::FetchError;
use lexi_core::lookup::PageFetcher;
use lexi_core::markup::Document;
use reqwest::StatusCode;

use crate::html::parse_document;

/// Fetches result pages over HTTP. One request per call; cheap to clone.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(network_error)?;

        Ok(Self { client })
    }
}

fn network_error(e: reqwest::Error) -> FetchError {
    FetchError::Network(e.to_string())
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        let response = self.client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        tracing::debug!("{} bytes from {url}", body.len());

        Ok(parse_document(&body))
    }
}

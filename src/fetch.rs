use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::HarvestError;

/// Blocking HTTP client for listing pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page body; any non-success status is an error.
    pub fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

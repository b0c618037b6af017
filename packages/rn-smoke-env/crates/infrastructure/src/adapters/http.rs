use async_trait::async_trait;
use domain::ports::{HttpClient, PortError};

/// [`HttpClient`] backed by reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str) -> Result<String, PortError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| PortError::Http(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| PortError::Http(e.to_string()))
    }
}

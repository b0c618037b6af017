use async_trait::async_trait;

use super::PortError;

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and return the body. Non-success statuses are errors.
    async fn get_text(&self, url: &str) -> Result<String, PortError>;
}

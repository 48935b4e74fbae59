use async_trait::async_trait;

/// A fetched page, ready for signal extraction.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub final_url: String,
    pub html: String,
}

/// Outbound document retrieval, abstracted so handlers and tests can
/// supply canned markup instead of a live HTTP client.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError>;
}

/// Document retrieval failure.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("response body from {url} was not readable text: {reason}")]
    Body { url: String, reason: String },
}

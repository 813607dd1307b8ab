use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::debug;

use crate::error::BoxError;

/// Performs the single GET a lookup needs and hands back the raw body.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<String, BoxError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<String, BoxError> {
        let res = self.http.get(url).query(query).send().await?;

        // The API reports failures through the JSON `status` field, so the
        // HTTP status is only logged.
        debug!(status = %res.status(), url = %res.url(), "received response");

        let body = res.text().await?;
        Ok(body)
    }
}

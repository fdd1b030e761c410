#![cfg(feature = "std")]

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tokio::time::Duration;

use crate::config::ClientConfig;
use crate::transport::{Method, Reply, Request, Transport};

/// [`Transport`] over HTTP using a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Transport with no request timeout.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::build(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        Self::build(base_url, Some(timeout))
    }

    pub fn with_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Self::build(&config.base_url, config.timeout)
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid server URL {}: {}", base_url, e))?;
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client, base })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> anyhow::Result<Reply> {
        let url = self.base.join(request.path)?;
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json"),
        };
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{:?} {} -> {}", request.method, request.path, status);
        Ok(Reply { status, body })
    }
}

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::{
    error::LoadError,
    table::{parse_tables, RawTable},
};

/// Something that can turn a page address into the tables it contains.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch_tables(&self, url: &Url) -> Result<Vec<RawTable>, LoadError>;
}

/// Fetches the page over HTTP. One attempt, no retries.
#[derive(Clone)]
pub struct HttpTableSource {
    client: reqwest::Client,
}

impl HttpTableSource {
    pub fn new() -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LoadError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TableSource for HttpTableSource {
    async fn fetch_tables(&self, url: &Url) -> Result<Vec<RawTable>, LoadError> {
        info!(%url, "fetching finals page");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Fetch {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "finals page downloaded");

        let tables = parse_tables(&body);
        debug!(tables = tables.len(), "tables extracted");
        Ok(tables)
    }
}

/// Serves tables from an HTML document already in memory; the url is ignored.
#[derive(Debug, Clone)]
pub struct HtmlTableSource {
    html: String,
}

impl HtmlTableSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl TableSource for HtmlTableSource {
    async fn fetch_tables(&self, _url: &Url) -> Result<Vec<RawTable>, LoadError> {
        Ok(parse_tables(&self.html))
    }
}

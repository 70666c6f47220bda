//! Meta-core metadata store client
//!
//! Plugins never hold metadata themselves; they write properties for a
//! content identifier (cid) back to meta-core.
//!
//! HTTP binding (relative to the request's `metaCoreUrl`):
//! - `POST /meta/{cid}/set`   `{"key": .., "value": ..}`
//! - `POST /meta/{cid}/add`   `{"key": .., "value": ..}` (set union)
//! - `POST /meta/{cid}/merge` `{"metadata": {..}}`

use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Write access to the mesh metadata store
///
/// Every failure is reported to the caller; implementations never swallow
/// errors.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Set a single-value property, replacing any previous value
    async fn set_property(&self, cid: &str, key: &str, value: &str) -> Result<()>;

    /// Add a value to a multi-value property (idempotent union)
    async fn add_to_set(&self, cid: &str, key: &str, value: &str) -> Result<()>;

    /// Set several single-value properties at once
    ///
    /// The default issues one `set_property` per entry, stopping at the first
    /// failure.
    async fn merge_metadata(&self, cid: &str, metadata: &BTreeMap<String, String>) -> Result<()> {
        for (key, value) in metadata {
            self.set_property(cid, key, value).await?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct PropertyBody<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MergeBody<'a> {
    metadata: &'a BTreeMap<String, String>,
}

/// Build the shared HTTP client used for meta-core and callback calls
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("metamesh-plugin/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

/// HTTP client for a single meta-core instance
#[derive(Debug, Clone)]
pub struct MetaCoreClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl MetaCoreClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::with_http_client(build_http_client(timeout)?, base_url)
    }

    /// Create a client sharing an existing HTTP connection pool
    pub fn with_http_client(http_client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::InvalidInput(format!("Invalid meta-core URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidInput(format!(
                "Invalid meta-core URL {}: not a base URL",
                base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// `{base}/meta/{cid}/{operation}` with the cid percent-encoded as one segment
    fn endpoint(&self, cid: &str, operation: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidInput(format!("Invalid meta-core URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["meta", cid, operation]);
        Ok(url)
    }

    async fn post<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<()> {
        tracing::debug!(url = %url, "Writing to meta-core");

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Store {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl MetadataStore for MetaCoreClient {
    async fn set_property(&self, cid: &str, key: &str, value: &str) -> Result<()> {
        let url = self.endpoint(cid, "set")?;
        self.post(url, &PropertyBody { key, value }).await
    }

    async fn add_to_set(&self, cid: &str, key: &str, value: &str) -> Result<()> {
        let url = self.endpoint(cid, "add")?;
        self.post(url, &PropertyBody { key, value }).await
    }

    async fn merge_metadata(&self, cid: &str, metadata: &BTreeMap<String, String>) -> Result<()> {
        let url = self.endpoint(cid, "merge")?;
        self.post(url, &MergeBody { metadata }).await
    }
}

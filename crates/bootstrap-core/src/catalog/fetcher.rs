//! Catalog fetching from the GitHub contents API
//!
//! A single best-effort GET. Every failure collapses into
//! [`ManifestFetchResult::Unavailable`] so the caller can fall back to manual input.

use super::manifest::{parse_entries, ContentEnvelope, ManifestFetchResult, RemoteManifestEntry};
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Anything that can produce the offering catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> ManifestFetchResult;
}

/// Fetcher for a catalog stored in a GitHub repository
pub struct ManifestFetcher {
    url: String,
    client: reqwest::Client,
}

impl ManifestFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(url: impl Into<String>, user_agent: &str) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self::new(config.manifest_url(), config.user_agent())
    }

    async fn try_fetch(&self) -> Result<Vec<RemoteManifestEntry>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch catalog from {}", self.url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch catalog from {}: HTTP {}",
                self.url,
                response.status()
            );
        }

        let envelope: ContentEnvelope = response
            .json()
            .await
            .context("Catalog response is not a contents envelope")?;

        parse_entries(&envelope.decode()?)
    }
}

#[async_trait]
impl CatalogSource for ManifestFetcher {
    async fn fetch(&self) -> ManifestFetchResult {
        match self.try_fetch().await {
            Ok(entries) => {
                debug!(url = %self.url, count = entries.len(), "catalog loaded");
                ManifestFetchResult::Available(entries)
            }
            Err(e) => {
                debug!(url = %self.url, error = %format!("{:#}", e), "catalog unavailable");
                ManifestFetchResult::Unavailable
            }
        }
    }
}

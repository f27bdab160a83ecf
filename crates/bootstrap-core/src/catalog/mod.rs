//! Remote offering catalog
//!
//! This module provides:
//! - Catalog manifest types (RemoteManifestEntry, ManifestFetchResult)
//! - Fetching the catalog from the GitHub contents API with graceful fallback

pub mod fetcher;
pub mod manifest;

pub use fetcher::{CatalogSource, ManifestFetcher};
pub use manifest::{ManifestFetchResult, RemoteManifestEntry};

//! Catalog manifest types and parsing

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

/// Base URL used to turn `owner/name` repo references into links
pub const GITHUB_BASE_URL: &str = "https://github.com";

/// One offering in the remote catalog (templates.yml / starters.yml)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteManifestEntry {
    /// Display title, e.g. "Blog Template"
    pub title: String,

    /// Repository reference in `owner/name` form
    pub repo: String,
}

impl RemoteManifestEntry {
    /// Full GitHub URL of the referenced repository
    pub fn url(&self) -> String {
        format!("{}/{}", GITHUB_BASE_URL, self.repo)
    }

    /// Title with the first occurrence of `word` removed.
    /// Surrounding whitespace is left as is.
    pub fn label(&self, word: &str) -> String {
        self.title.replacen(word, "", 1)
    }
}

/// Outcome of a catalog fetch
///
/// Callers only branch on availability; failure causes never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestFetchResult {
    Available(Vec<RemoteManifestEntry>),
    Unavailable,
}

impl ManifestFetchResult {
    pub fn is_available(&self) -> bool {
        matches!(self, ManifestFetchResult::Available(_))
    }
}

/// GitHub contents API response (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEnvelope {
    /// Base64 file content, wrapped at 60 columns by GitHub
    pub content: String,
}

impl ContentEnvelope {
    /// Decode the base64 payload into the file's text
    pub fn decode(&self) -> Result<String> {
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .context("Catalog content is not valid base64")?;
        String::from_utf8(bytes).context("Catalog content is not valid UTF-8")
    }
}

/// Parse the decoded catalog document.
/// Any record missing `title` or `repo` rejects the whole document.
pub fn parse_entries(document: &str) -> Result<Vec<RemoteManifestEntry>> {
    let entries: Vec<RemoteManifestEntry> =
        serde_yaml::from_str(document).context("Failed to parse catalog manifest")?;

    if entries.is_empty() {
        anyhow::bail!("Catalog manifest lists no entries");
    }

    Ok(entries)
}

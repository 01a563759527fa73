//! On-disk cache for catalog responses.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar metadata stored next to each cached response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Request URL the body was fetched from.
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheMetadata {
    fn new(url: &str, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            url: url.to_string(),
            fetched_at: now,
            expires_at: now + chrono::Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Whether the entry is still within its TTL.
    pub fn is_fresh(&self) -> bool {
        Utc::now() <= self.expires_at
    }
}

/// A cache hit: the stored body plus freshness.
#[derive(Debug)]
pub struct CachedResponse {
    pub body: String,
    pub fresh: bool,
}

/// Response cache keyed by SHA-256 of the request URL.
///
/// Each entry is a body file plus a `.meta.json` sidecar. Corrupt or
/// half-written entries read as misses; the cache is an optimization,
/// never a source of failure.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    root: PathBuf,
}

impl CatalogCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn body_path(&self, url: &str) -> PathBuf {
        let hash = Sha256::digest(url.as_bytes());
        self.root.join(hex::encode(&hash[..16]))
    }

    fn meta_path(&self, url: &str) -> PathBuf {
        self.body_path(url).with_extension("meta.json")
    }

    /// Store a response body for a URL.
    pub fn store(&self, url: &str, body: &str, ttl_seconds: u64) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;

        fs::write(self.body_path(url), body)?;

        let metadata = CacheMetadata::new(url, ttl_seconds);
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(self.meta_path(url), json)?;

        Ok(())
    }

    /// Look up the cached response for a URL.
    ///
    /// Returns `None` on a miss or a corrupt entry.
    pub fn lookup(&self, url: &str) -> Option<CachedResponse> {
        let meta_json = fs::read_to_string(self.meta_path(url)).ok()?;
        let metadata: CacheMetadata = serde_json::from_str(&meta_json).ok()?;
        let body = fs::read_to_string(self.body_path(url)).ok()?;

        Some(CachedResponse {
            body,
            fresh: metadata.is_fresh(),
        })
    }

    /// Remove all cached entries. Returns how many bodies were deleted.
    pub fn clear(&self) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() {
                if path.extension().is_none() {
                    removed += 1;
                }
                fs::remove_file(&path)?;
            }
        }

        Ok(removed)
    }
}

//! On-disk cache of tracker responses, revalidated with `ETag`s.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Longest URL prefix kept in a cache file name.
const MAX_NAME_PREFIX: usize = 64;

/// A response body stored together with the `ETag` it was served with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    /// Entity tag sent back in `If-None-Match`.
    pub etag: String,

    /// Response body.
    pub body: String,
}

/// Directory of cached GET responses, one JSON file per URL.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Creates a cache rooted at `dir`. The directory is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the cached response for `url`, if a readable one exists.
    pub fn load(&self, url: &str) -> Option<CachedResponse> {
        let path = self.path_for(url);
        let contents = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(cached) => Some(cached),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Ignoring unreadable cache entry");
                None
            }
        }
    }

    /// Stores `body` for `url` under `etag`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn store(&self, url: &str, etag: &str, body: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let entry = CachedResponse {
            etag: etag.to_string(),
            body: body.to_string(),
        };
        let contents = serde_json::to_string(&entry)?;
        std::fs::write(self.path_for(url), contents)
    }

    /// Maps a URL to a short, readable file name that stays the same across
    /// builds.
    fn path_for(&self, url: &str) -> PathBuf {
        let readable: String = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .take(MAX_NAME_PREFIX)
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        self.dir
            .join(format!("{readable}-{}.json", &digest[..16]))
    }
}

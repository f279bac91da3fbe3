//! Versioned offline asset cache: cache-first reads, fetch-and-store on miss,
//! and a root-document fallback when the fetch fails. Entirely independent of
//! the state store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::CacheError;

/// Asset served when a fetch fails and the requested path is not cached.
pub const FALLBACK_ASSET: &str = "/index.html";

/// Fetches an asset body from the network (or wherever assets originate).
pub trait AssetFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, CacheError>;
}

/// On-disk asset cache. Each version owns a directory under the cache root;
/// activating a version prunes every other version's directory.
#[derive(Debug, Clone)]
pub struct AssetCache {
    root: PathBuf,
    version: String,
}

impl AssetCache {
    pub fn new(root: PathBuf, version: impl Into<String>) -> Result<Self, CacheError> {
        let version = version.into();
        let cache = Self { root, version };
        fs::create_dir_all(cache.version_dir())?;
        Ok(cache)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Pre-warms the cache with the given asset paths, fetching each one.
    pub fn install(&self, paths: &[&str], fetcher: &dyn AssetFetcher) -> Result<(), CacheError> {
        for path in paths {
            let body = fetcher.fetch(path)?;
            self.store(path, &body)?;
        }
        Ok(())
    }

    /// Deletes cached versions other than the current one.
    pub fn activate(&self) -> Result<(), CacheError> {
        if !self.root.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if entry.file_name().to_str() != Some(self.version.as_str()) {
                tracing::info!(stale = %path.display(), "pruning stale asset cache");
                let _ = fs::remove_dir_all(&path);
            }
        }
        Ok(())
    }

    /// Cache-first read. On a miss the fetcher runs; a successful response is
    /// stored (store failures are logged, the response still returns). A
    /// failed fetch falls back to the cached root document.
    pub fn fetch(&self, path: &str, fetcher: &dyn AssetFetcher) -> Result<Vec<u8>, CacheError> {
        if let Some(body) = self.cached(path)? {
            return Ok(body);
        }
        match fetcher.fetch(path) {
            Ok(body) => {
                if let Err(err) = self.store(path, &body) {
                    tracing::warn!(path, %err, "failed to cache fetched asset");
                }
                Ok(body)
            }
            Err(err) => {
                tracing::warn!(path, %err, "fetch failed; serving fallback document");
                self.cached(FALLBACK_ASSET)?
                    .ok_or_else(|| CacheError::Unavailable(path.to_string()))
            }
        }
    }

    /// Returns the cached body for `path`, or `None` on a miss.
    pub fn cached(&self, path: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let file = self.asset_path(path);
        if !file.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(file)?))
    }

    fn store(&self, path: &str, body: &[u8]) -> Result<(), CacheError> {
        let file = self.asset_path(path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(file, body)?;
        Ok(())
    }

    fn version_dir(&self) -> PathBuf {
        self.root.join(&self.version)
    }

    fn asset_path(&self, path: &str) -> PathBuf {
        self.version_dir().join(asset_file_name(path))
    }
}

fn asset_file_name(path: &str) -> String {
    let sanitized: String = path
        .trim()
        .trim_start_matches('/')
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "root".into()
    } else {
        sanitized
    }
}

/// Prunes stale versions, then installs the asset list. Mirrors the
/// install/activate lifecycle of a service worker.
pub fn bootstrap(
    root: &Path,
    version: &str,
    assets: &[&str],
    fetcher: &dyn AssetFetcher,
) -> Result<AssetCache, CacheError> {
    let cache = AssetCache::new(root.to_path_buf(), version)?;
    cache.install(assets, fetcher)?;
    cache.activate()?;
    Ok(cache)
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use glassbudget::cache::{bootstrap, AssetCache, AssetFetcher, FALLBACK_ASSET};
use glassbudget::errors::CacheError;
use tempfile::tempdir;

/// Scripted fetcher: serves fixed bodies and counts hits; unknown paths fail
/// like a dead network.
struct ScriptedFetcher {
    bodies: HashMap<String, Vec<u8>>,
    hits: RefCell<usize>,
}

impl ScriptedFetcher {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            bodies: entries
                .iter()
                .map(|(path, body)| (path.to_string(), body.as_bytes().to_vec()))
                .collect(),
            hits: RefCell::new(0),
        }
    }

    fn hits(&self) -> usize {
        *self.hits.borrow()
    }
}

impl AssetFetcher for ScriptedFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, CacheError> {
        *self.hits.borrow_mut() += 1;
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| CacheError::Fetch {
                path: path.to_string(),
                reason: "network unreachable".into(),
            })
    }
}

#[test]
fn second_fetch_serves_from_cache_without_network() {
    let dir = tempdir().unwrap();
    let cache = AssetCache::new(dir.path().to_path_buf(), "v1").unwrap();
    let fetcher = ScriptedFetcher::new(&[("/app.js", "console.log(1)")]);

    let first = cache.fetch("/app.js", &fetcher).unwrap();
    let second = cache.fetch("/app.js", &fetcher).unwrap();
    assert_eq!(first, second);
    assert_eq!(fetcher.hits(), 1);
}

#[test]
fn failed_fetch_falls_back_to_cached_root_document() {
    let dir = tempdir().unwrap();
    let cache = AssetCache::new(dir.path().to_path_buf(), "v1").unwrap();
    let fetcher = ScriptedFetcher::new(&[(FALLBACK_ASSET, "<html>offline</html>")]);
    cache.install(&[FALLBACK_ASSET], &fetcher).unwrap();

    let body = cache.fetch("/styles.css", &fetcher).unwrap();
    assert_eq!(body, b"<html>offline</html>");
}

#[test]
fn failed_fetch_without_fallback_is_unavailable() {
    let dir = tempdir().unwrap();
    let cache = AssetCache::new(dir.path().to_path_buf(), "v1").unwrap();
    let fetcher = ScriptedFetcher::new(&[]);

    let err = cache.fetch("/styles.css", &fetcher).unwrap_err();
    assert!(matches!(err, CacheError::Unavailable(path) if path == "/styles.css"));
}

#[test]
fn activate_prunes_other_cache_versions() {
    let dir = tempdir().unwrap();
    let old = AssetCache::new(dir.path().to_path_buf(), "glassbudget-v1").unwrap();
    let fetcher = ScriptedFetcher::new(&[("/app.js", "old")]);
    old.install(&["/app.js"], &fetcher).unwrap();

    let new = AssetCache::new(dir.path().to_path_buf(), "glassbudget-v2").unwrap();
    new.activate().unwrap();

    assert!(!dir.path().join("glassbudget-v1").exists());
    assert!(dir.path().join("glassbudget-v2").exists());
}

#[test]
fn bootstrap_installs_assets_and_prunes_stale_versions() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("glassbudget-v0")).unwrap();
    let fetcher = ScriptedFetcher::new(&[
        ("/", "<html>root</html>"),
        ("/index.html", "<html>index</html>"),
        ("/app.js", "console.log(1)"),
    ]);

    let cache = bootstrap(
        dir.path(),
        "glassbudget-v1",
        &["/", "/index.html", "/app.js"],
        &fetcher,
    )
    .unwrap();

    assert!(!dir.path().join("glassbudget-v0").exists());
    assert_eq!(fetcher.hits(), 3);
    // All pre-installed, so no further network traffic.
    cache.fetch("/index.html", &fetcher).unwrap();
    assert_eq!(fetcher.hits(), 3);
}

#[test]
fn install_propagates_fetch_failures() {
    let dir = tempdir().unwrap();
    let cache = AssetCache::new(dir.path().to_path_buf(), "v1").unwrap();
    let fetcher = ScriptedFetcher::new(&[("/", "ok")]);
    let err = cache.install(&["/", "/missing.js"], &fetcher).unwrap_err();
    assert!(matches!(err, CacheError::Fetch { .. }));
}

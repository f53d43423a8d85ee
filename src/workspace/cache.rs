//! File Content Cache
//!
//! Time-bounded cache for workspace documents so repeated checks within one
//! hook run (and across runs in a long-lived process) skip disk reads.
//! Entries older than the freshness window are re-read on access; nothing is
//! evicted proactively.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use tracing::{debug, error};

/// File content cache keyed by path
pub struct FileCache {
    cache: RwLock<HashMap<PathBuf, CachedFile>>,
    ttl: Duration,
    stats: RwLock<CacheStats>,
}

/// Cached file entry
struct CachedFile {
    content: String,
    read_at: Instant,
}

/// Cache statistics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// Reads that went to disk, successful or not
    pub misses: u64,
    pub failures: u64,
}

impl FileCache {
    /// Create a cache whose entries stay fresh for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Read a file, serving it from cache while the entry is fresh.
    ///
    /// Returns `None` when the file cannot be read; the failure is logged.
    pub fn read(&self, path: &Path) -> Option<String> {
        if let Some(content) = self.get_fresh(path) {
            debug!("Cache hit: {}", path.display());
            return Some(content);
        }

        self.record(|stats| stats.misses += 1);

        match std::fs::read_to_string(path) {
            Ok(content) => {
                self.store(path.to_path_buf(), content.clone());
                Some(content)
            }
            Err(e) => {
                self.record(|stats| stats.failures += 1);
                error!("Failed to read file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_fresh(&self, path: &Path) -> Option<String> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(path)?;

        if entry.read_at.elapsed() >= self.ttl {
            return None;
        }

        self.record(|stats| stats.hits += 1);
        Some(entry.content.clone())
    }

    fn store(&self, path: PathBuf, content: String) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(
                path,
                CachedFile {
                    content,
                    read_at: Instant::now(),
                },
            );
        }
    }

    fn record(&self, update: impl FnOnce(&mut CacheStats)) {
        if let Ok(mut stats) = self.stats.write() {
            update(&mut stats);
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.stats.read().map(|s| *s).unwrap_or_default()
    }

    /// Current number of cached entries, stale ones included
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_hit_skips_disk() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("WORKSPACE.md");
        std::fs::write(&file, "version 1").unwrap();

        let cache = FileCache::new(Duration::from_secs(300));
        assert_eq!(cache.read(&file).as_deref(), Some("version 1"));

        // Changed on disk, but the entry is still fresh
        std::fs::write(&file, "version 2").unwrap();
        assert_eq!(cache.read(&file).as_deref(), Some("version 1"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_stale_entry_is_reread() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("WORKSPACE.md");
        std::fs::write(&file, "version 1").unwrap();

        let cache = FileCache::new(Duration::from_millis(20));
        assert_eq!(cache.read(&file).as_deref(), Some("version 1"));

        std::thread::sleep(Duration::from_millis(40));
        std::fs::write(&file, "version 2").unwrap();

        assert_eq!(cache.read(&file).as_deref(), Some("version 2"));
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_ttl_always_reads() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("rules.md");
        std::fs::write(&file, "a").unwrap();

        let cache = FileCache::new(Duration::ZERO);
        cache.read(&file);
        cache.read(&file);

        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_missing_file_returns_none() {
        let temp = TempDir::new().unwrap();
        let cache = FileCache::new(Duration::from_secs(300));

        assert!(cache.read(&temp.path().join("absent.md")).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn test_failed_reread_keeps_nothing_new() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("WORKSPACE.md");
        std::fs::write(&file, "content").unwrap();

        let cache = FileCache::new(Duration::ZERO);
        assert!(cache.read(&file).is_some());

        std::fs::remove_file(&file).unwrap();
        assert!(cache.read(&file).is_none());
    }
}

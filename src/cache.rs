use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

const CACHED_FILES: [&str; 2] = ["index.html", "hello.html"];

/// Load-once cache for static content. Populated at startup from the
/// working directory and never refreshed; a file changed on disk after
/// startup has no effect until restart.
pub struct ContentCache {
    entries: HashMap<String, Vec<u8>>,
}

impl ContentCache {
    /// Reads every cached file into memory. Any I/O error is propagated
    /// so startup fails before the server binds.
    pub fn populate() -> io::Result<Self> {
        Self::load(Path::new("."), &CACHED_FILES)
    }

    pub(crate) fn load(dir: &Path, names: &[&str]) -> io::Result<Self> {
        let mut entries = HashMap::new();
        for &name in names {
            let content = fs::read(dir.join(name))?;
            log::info!("📄 Cached {} ({} bytes)", name, content.len());
            entries.insert(name.to_string(), content);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(|c| c.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("userinfo-cache-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_populate_and_get() {
        let dir = temp_dir("basic");
        fs::write(dir.join("index.html"), b"<html>index</html>").unwrap();
        fs::write(dir.join("hello.html"), b"<html>hello</html>").unwrap();

        let cache = ContentCache::load(&dir, &CACHED_FILES).unwrap();
        assert_eq!(cache.get("index.html"), Some(b"<html>index</html>".as_slice()));
        assert_eq!(cache.get("hello.html"), Some(b"<html>hello</html>".as_slice()));
        assert_eq!(cache.get("missing.html"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = temp_dir("missing");
        fs::write(dir.join("index.html"), b"<html></html>").unwrap();
        // hello.html deliberately absent
        let _ = fs::remove_file(dir.join("hello.html"));

        assert!(ContentCache::load(&dir, &CACHED_FILES).is_err());
    }

    #[test]
    fn test_disk_changes_do_not_affect_cache() {
        let dir = temp_dir("stale");
        fs::write(dir.join("index.html"), b"original").unwrap();
        fs::write(dir.join("hello.html"), b"hello").unwrap();

        let cache = ContentCache::load(&dir, &CACHED_FILES).unwrap();
        fs::write(dir.join("index.html"), b"modified").unwrap();

        assert_eq!(cache.get("index.html"), Some(b"original".as_slice()));
    }
}

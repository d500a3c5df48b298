//! # Local Cache
//!
//! The mirror is a per-device key-value copy of each remote document, kept
//! as small JSON files in the user's data directory. It is not a write-ahead
//! log: every mutating operation overwrites it with the in-memory state,
//! whether or not the remote write later succeeds, so it is always the
//! "last known good" local state.
//!
//! Writes are best effort and never fail observably; a mirror that cannot
//! be written only costs the fast path on the next startup.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub trait Mirror {
    fn read(&self, key: &str) -> Option<String>;

    /// Unconditional overwrite. Failures are logged and swallowed.
    fn write(&mut self, key: &str, content: &str);
}

/// Production mirror: one `<key>.json` file per document under a root
/// directory.
pub struct FileMirror {
    root: PathBuf,
}

impl FileMirror {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> std::io::Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl Mirror for FileMirror {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&mut self, key: &str, content: &str) {
        if let Err(e) = self
            .ensure_root()
            .and_then(|_| fs::write(self.key_path(key), content))
        {
            warn!(key, error = %e, "failed to write mirror");
        }
    }
}

/// In-memory mirror for tests.
#[derive(Default)]
pub struct InMemoryMirror {
    entries: HashMap<String, String>,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mirror for InMemoryMirror {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, content: &str) {
        self.entries.insert(key.to_string(), content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn file_mirror_read_missing_is_none() {
        let dir = env::temp_dir().join("mull_test_mirror_missing");
        let _ = fs::remove_dir_all(&dir);

        let mirror = FileMirror::new(dir);
        assert!(mirror.read("diary").is_none());
    }

    #[test]
    fn file_mirror_write_then_read() {
        let dir = env::temp_dir().join("mull_test_mirror_rw");
        let _ = fs::remove_dir_all(&dir);

        let mut mirror = FileMirror::new(dir.clone());
        mirror.write("diary", "{\"entries\":[]}");
        assert_eq!(mirror.read("diary").unwrap(), "{\"entries\":[]}");

        // Overwrite is unconditional.
        mirror.write("diary", "{}");
        assert_eq!(mirror.read("diary").unwrap(), "{}");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn in_memory_mirror_round_trip() {
        let mut mirror = InMemoryMirror::new();
        assert!(mirror.read("reflections").is_none());
        mirror.write("reflections", "data");
        assert_eq!(mirror.read("reflections").unwrap(), "data");
    }
}

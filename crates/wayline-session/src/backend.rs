//! Storage backends: where the session record physically lives.
//!
//! The store doesn't care whether bytes land in memory, a file, or a
//! browser origin's local storage — it needs three operations on string
//! values keyed by name. The [`StorageBackend`] trait captures exactly
//! that, so tests run against [`MemoryBackend`] while a deployed shell
//! uses [`FileBackend`] (or its own implementation over whatever durable
//! store the host provides).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A durable string key-value store.
///
/// Implementations must be plain and synchronous — the store is owned
/// by a single task and all calls happen on the event loop, so there is
/// nothing to lock and nothing to await.
pub trait StorageBackend {
    /// Reads the value under `key`. `Ok(None)` when the key is absent.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryBackend
// ---------------------------------------------------------------------------

/// An in-process backend. Nothing survives the process — useful for
/// tests and for shells that explicitly want an ephemeral session.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileBackend
// ---------------------------------------------------------------------------

/// A backend that keeps one file per key under a directory.
///
/// This is the durable per-origin store analogue for native shells:
/// `read` after a process restart sees what the previous run wrote.
/// Keys are internal constants (see
/// [`SESSION_KEY`](crate::SESSION_KEY)), never user input, so they are
/// used as file names directly.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`. The directory is created
    /// lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Helpers ----------------------------------------------------------

    /// A unique scratch directory per test, cleaned up on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "wayline-backend-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            Self(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    // =====================================================================
    // MemoryBackend
    // =====================================================================

    #[test]
    fn test_memory_read_absent_key_returns_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_write_then_read_returns_value() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_write_replaces_previous_value() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "old").unwrap();
        backend.write("k", "new").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_memory_remove_absent_key_is_ok() {
        let mut backend = MemoryBackend::new();
        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn test_memory_remove_deletes_value() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }

    // =====================================================================
    // FileBackend
    // =====================================================================

    #[test]
    fn test_file_read_absent_key_returns_none() {
        let scratch = ScratchDir::new("read-absent");
        let backend = FileBackend::new(&scratch.0);
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_file_write_then_read_returns_value() {
        let scratch = ScratchDir::new("write-read");
        let mut backend = FileBackend::new(&scratch.0);
        backend.write("k", "{\"a\":1}").unwrap();
        assert_eq!(
            backend.read("k").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[test]
    fn test_file_survives_backend_recreation() {
        // The whole point of the file backend: a fresh instance over the
        // same directory sees the previous instance's writes.
        let scratch = ScratchDir::new("survive");
        let mut backend = FileBackend::new(&scratch.0);
        backend.write("k", "persisted").unwrap();
        drop(backend);

        let backend = FileBackend::new(&scratch.0);
        assert_eq!(
            backend.read("k").unwrap().as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_file_remove_absent_key_is_ok() {
        let scratch = ScratchDir::new("remove-absent");
        let mut backend = FileBackend::new(&scratch.0);
        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn test_file_remove_deletes_value() {
        let scratch = ScratchDir::new("remove");
        let mut backend = FileBackend::new(&scratch.0);
        backend.write("k", "v").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}

//! In-memory filesystem for tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use exforge_core::{application::ports::Filesystem, error::ExforgeResult};

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Paths in the order they were written, for ordering assertions.
    write_log: Vec<PathBuf>,
}

/// Filesystem fake that records everything and touches nothing.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    inner: Mutex<Inner>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a previously written file.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner
            .lock()
            .expect("memory filesystem lock")
            .files
            .get(path.as_ref())
            .cloned()
    }

    /// Every file written, in write order.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.inner
            .lock()
            .expect("memory filesystem lock")
            .write_log
            .clone()
    }

    pub fn file_count(&self) -> usize {
        self.inner.lock().expect("memory filesystem lock").files.len()
    }

    pub fn is_empty(&self) -> bool {
        let inner = self.inner.lock().expect("memory filesystem lock");
        inner.files.is_empty() && inner.directories.is_empty()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExforgeResult<()> {
        let mut inner = self.inner.lock().expect("memory filesystem lock");
        // Register each ancestor, mirroring std::fs::create_dir_all.
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ExforgeResult<()> {
        let mut inner = self.inner.lock().expect("memory filesystem lock");
        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_log.push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("memory filesystem lock");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

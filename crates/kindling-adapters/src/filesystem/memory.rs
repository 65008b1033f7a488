//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kindling_core::{
    application::ports::Filesystem,
    error::{KindlingError, KindlingResult},
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a directory so `exists` reports it (e.g. a fake `.git`).
    pub fn seed_directory(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        inner.directories.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    fn write_inner(&self) -> KindlingResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| KindlingError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KindlingResult<()> {
        let mut inner = self.write_inner()?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KindlingResult<()> {
        let mut inner = self.write_inner()?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn make_executable(&self, path: &Path) -> KindlingResult<()> {
        let mut inner = self.write_inner()?;
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_files_are_visible() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("a/b.txt"), "content").unwrap();

        assert!(fs.exists(Path::new("a/b.txt")));
        assert_eq!(fs.read_file(Path::new("a/b.txt")).as_deref(), Some("content"));
    }

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();

        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn executable_bit_is_tracked() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("hook"), "#!/bin/sh\n").unwrap();
        assert!(!fs.is_executable(Path::new("hook")));

        fs.make_executable(Path::new("hook")).unwrap();
        assert!(fs.is_executable(Path::new("hook")));
    }

    #[test]
    fn seeded_directories_exist() {
        let fs = MemoryFilesystem::new();
        fs.seed_directory("proj/.git");
        assert!(fs.exists(Path::new("proj/.git")));
    }
}

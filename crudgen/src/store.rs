//! Artifact stores.
//!
//! Generated text moves between passes only through an [`ArtifactStore`]: the
//! SDL is written, read back and parsed before any TypeScript is emitted.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory-addressable text store.
pub trait ArtifactStore {
    /// Returns true if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates the directory at `path` and any missing parents.
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory cannot be created.
    fn ensure_dir(&mut self, path: &Path) -> Result<()>;

    /// Reads the whole file at `path`.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file is missing or unreadable.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Writes `content` to `path`, replacing any existing file.
    ///
    /// The content is durable when this returns.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be written.
    fn write_text(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// File-system store resolving relative paths against a root directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `path` against the root. Absolute paths are kept as is.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        let full = self.resolve(path);
        fs::create_dir_all(&full).map_err(|e| Error::io(&full, e))
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|e| Error::io(&full, e))
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        let full = self.resolve(path);
        let mut file = File::create(&full).map_err(|e| Error::io(&full, e))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .and_then(|()| file.sync_all())
            .map_err(|e| Error::io(&full, e))
    }
}

/// In-memory store for tests and dry runs.
///
/// Mirrors the file-system contract: writing into a directory that was never
/// created fails with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content of the file at `path`, if any.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Iterates over stored file paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.dirs.contains(path)
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.dir_exists(path) || self.files.contains_key(path)
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        if self.files.contains_key(path) {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path is a file"),
            ));
        }
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.dir_exists(parent) {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FsStore::new(dir.path());
        let out = Path::new("generated");

        assert!(!store.exists(out));
        store.ensure_dir(out).unwrap();
        assert!(store.exists(out));

        let file = out.join("user.schema.graphql");
        store.write_text(&file, "type User { _id: ID! }\n").unwrap();
        assert_eq!(store.read_text(&file).unwrap(), "type User { _id: ID! }\n");
        assert!(dir.path().join("generated/user.schema.graphql").is_file());
    }

    #[test]
    fn test_fs_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        let err = store.read_text(Path::new("missing.graphql")).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("missing.graphql")));
    }

    #[test]
    fn test_memory_store_requires_dir() {
        let mut store = MemoryStore::new();
        let file = Path::new("out/user.graphql.ts");

        assert!(store.write_text(file, "x").is_err());
        store.ensure_dir(Path::new("out")).unwrap();
        store.write_text(file, "x").unwrap();

        assert!(store.exists(Path::new("out")));
        assert_eq!(store.get("out/user.graphql.ts"), Some("x"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_root_level_write() {
        let mut store = MemoryStore::new();
        store.write_text(Path::new("top.txt"), "x").unwrap();
        assert_eq!(store.read_text(Path::new("top.txt")).unwrap(), "x");
    }

    #[test]
    fn test_memory_store_nested_dirs() {
        let mut store = MemoryStore::new();
        store.ensure_dir(Path::new("a/b/c")).unwrap();
        assert!(store.exists(Path::new("a")));
        assert!(store.exists(Path::new("a/b")));
        assert!(!store.exists(Path::new("a/x")));
    }
}

//! Existence checks against the store that holds asset files
//!
//! [`AssetPath`] itself never touches the filesystem. Operations that need
//! to know whether something exists ask a [`BackingStore`].

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{AssetPath, ProjectRoots};

/// Read-only view of the files and folders behind asset paths.
///
/// Calls are synchronous and may block on I/O.
pub trait BackingStore: Send + Sync {
    /// Check if a folder exists at the given path.
    fn directory_exists(&self, path: &AssetPath) -> bool;

    /// Check if a file exists at the given path.
    fn file_exists(&self, path: &AssetPath) -> bool;
}

/// [`BackingStore`] over the real filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    roots: ProjectRoots,
}

impl FsStore {
    pub fn new(roots: ProjectRoots) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &ProjectRoots {
        &self.roots
    }
}

impl BackingStore for FsStore {
    fn directory_exists(&self, path: &AssetPath) -> bool {
        path.to_native(&self.roots).is_dir()
    }

    fn file_exists(&self, path: &AssetPath) -> bool {
        path.to_native(&self.roots).is_file()
    }
}

/// In-memory [`BackingStore`].
///
/// Adding an entry also registers every ancestor folder. Clones share the
/// same contents.
///
/// ```
/// use assetdb_path::{AssetPath, BackingStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.add_file(&AssetPath::parse("Assets/sub/a.txt").unwrap());
/// assert!(store.directory_exists(&AssetPath::parse("Assets/sub").unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Arc<RwLock<HashSet<String>>>,
    directories: Arc<RwLock<HashSet<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: &AssetPath) {
        if let Some(parent) = path.parent() {
            self.add_directory(&parent);
        }
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.as_str().to_string());
    }

    pub fn add_directory(&self, path: &AssetPath) {
        let mut directories = self
            .directories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut current = Some(path.clone());
        while let Some(dir) = current {
            current = dir.parent();
            directories.insert(dir.into());
        }
    }

    /// Forget a file or folder; entries below a removed folder stay.
    pub fn remove(&self, path: &AssetPath) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path.as_str());
        self.directories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path.as_str());
    }
}

impl BackingStore for MemoryStore {
    fn directory_exists(&self, path: &AssetPath) -> bool {
        self.directories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path.as_str())
    }

    fn file_exists(&self, path: &AssetPath) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path.as_str())
    }
}

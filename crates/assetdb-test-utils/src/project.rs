//! [`TestProject`] builder for asset path scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with `Assets/` and `Packages/` folders.
///
/// # Example
///
/// ```rust,no_run
/// use assetdb_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_file("Assets/sub/data.txt", "hello");
/// project.assert_file_exists("Assets/sub/data.txt");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create a project with empty `Assets/` and `Packages/` folders.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Assets")).unwrap();
        fs::create_dir_all(temp_dir.path().join("Packages")).unwrap();
        Self { temp_dir }
    }

    /// Return the project directory (parent of `Assets/`).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("Assets")
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.root().join("Packages")
    }

    /// Absolute path of `relative` with forward slashes.
    pub fn full(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.root().to_string_lossy().replace('\\', "/"),
            relative
        )
    }

    /// Create a folder (and its parents) relative to the project root.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a file relative to the project root, creating parent folders.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let file = self.root().join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, content).unwrap();
        file
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}

//! Project root configuration
//!
//! [`ProjectRoots`] tells [`AssetPath`](crate::AssetPath) where the project
//! lives on disk so absolute paths can be converted to relative ones and
//! back. It is passed explicitly or installed once per process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::constants::AssetArea;
use crate::error::InvalidReason;
use crate::normalize;
use crate::{ConfigStore, Error, Result};

static GLOBAL_ROOTS: OnceLock<ProjectRoots> = OnceLock::new();

/// Filesystem locations of the project and its two recognized areas.
///
/// All locations are stored with forward slashes and without a trailing
/// separator. The project root is the parent of the assets root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoots {
    project_root: String,
    assets_root: String,
    packages_root: String,
}

/// On-disk form of [`ProjectRoots`].
///
/// Relative directories are resolved against the directory holding the
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_dir: Option<PathBuf>,
}

fn clean_root(path: &str) -> String {
    let forward = normalize::to_forward_slashes(path);
    let trimmed = forward.trim_end_matches('/');
    if trimmed.is_empty() && forward.starts_with('/') {
        // Filesystem root; joining adds the separator back
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl ProjectRoots {
    /// Create roots from the assets folder and the packages folder.
    pub fn new(assets_root: impl AsRef<Path>, packages_root: impl AsRef<Path>) -> Self {
        let assets_root = clean_root(&lossy(assets_root.as_ref()));
        let packages_root = clean_root(&lossy(packages_root.as_ref()));
        let project_root = match assets_root.rfind('/') {
            Some(idx) => assets_root[..idx].to_string(),
            None => String::new(),
        };
        Self {
            project_root,
            assets_root,
            packages_root,
        }
    }

    /// Roots for the conventional `<dir>/Assets` + `<dir>/Packages` layout.
    pub fn from_project_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(AssetArea::Assets.as_str()),
            dir.join(AssetArea::Packages.as_str()),
        )
    }

    /// Walk up from `start` to the first directory that has an `Assets` folder.
    pub fn detect(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let canonical = dunce::canonicalize(start).map_err(|e| Error::io(start, e))?;

        for dir in canonical.ancestors() {
            if dir.join(AssetArea::Assets.as_str()).is_dir() {
                tracing::debug!(project = %dir.display(), "Detected project root");
                return Ok(Self::from_project_dir(dir));
            }
        }

        Err(Error::ProjectNotFound {
            start: start.to_path_buf(),
        })
    }

    /// Load roots from a TOML, JSON or YAML [`ProjectConfig`] file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ProjectConfig = ConfigStore::new().load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self::from_config(&config, base))
    }

    /// Resolve a [`ProjectConfig`] against `base`.
    pub fn from_config(config: &ProjectConfig, base: &Path) -> Self {
        let project = base.join(&config.project_dir);
        let assets = match &config.assets_dir {
            Some(dir) => project.join(dir),
            None => project.join(AssetArea::Assets.as_str()),
        };
        let packages = match &config.packages_dir {
            Some(dir) => project.join(dir),
            None => project.join(AssetArea::Packages.as_str()),
        };
        Self::new(assets, packages)
    }

    /// Install these roots as the process-wide default.
    ///
    /// Can succeed only once per process.
    pub fn install(self) -> Result<()> {
        tracing::debug!(project = %self.project_root, "Installing project roots");
        GLOBAL_ROOTS
            .set(self)
            .map_err(|_| Error::RootsAlreadyConfigured)
    }

    /// The process-wide roots, if [`ProjectRoots::install`] was called.
    pub fn global() -> Option<&'static ProjectRoots> {
        GLOBAL_ROOTS.get()
    }

    /// Parent of the assets folder.
    pub fn project_root(&self) -> &str {
        &self.project_root
    }

    pub fn assets_root(&self) -> &str {
        &self.assets_root
    }

    pub fn packages_root(&self) -> &str {
        &self.packages_root
    }

    /// Convert an absolute path below the project into canonical relative form.
    ///
    /// Paths below the packages root map to `Packages/...` even when the
    /// packages folder lives outside the project root. The result must be
    /// inside one of the two areas.
    pub fn to_relative(&self, full_path: &str) -> Result<String> {
        let normalized = normalize::normalize(full_path);
        let not_a_project_path = || Error::invalid("path", full_path, InvalidReason::NotAProjectPath);

        if normalize::has_parent_segment(&normalized) {
            return Err(not_a_project_path());
        }

        let packages = normalize::trim_separators(&self.packages_root);
        if let Some(rest) = normalize::strip_root(&normalized, packages) {
            let rest = normalize::trim_separators(rest);
            if !rest.is_empty() {
                return Ok(format!("{}/{}", AssetArea::Packages.as_str(), rest));
            }
        }

        let project = normalize::trim_separators(&self.project_root);
        let rest = normalize::strip_root(&normalized, project).ok_or_else(not_a_project_path)?;
        let rest = normalize::trim_separators(rest);
        if !normalize::is_relative_normalized(rest) {
            return Err(not_a_project_path());
        }
        // `Packages/...` must map back through packages_root
        if AssetArea::of(rest) == AssetArea::Packages && !self.has_default_packages_root() {
            return Err(not_a_project_path());
        }
        Ok(rest.to_string())
    }

    /// Whether the packages folder is `<project>/Packages`.
    fn has_default_packages_root(&self) -> bool {
        let default = format!("{}/{}", self.project_root, AssetArea::Packages.as_str());
        normalize::trim_separators(&default) == normalize::trim_separators(&self.packages_root)
    }

    /// Absolute location of a canonical relative path.
    pub(crate) fn to_full(&self, relative: &str) -> String {
        match AssetArea::of(relative) {
            AssetArea::Packages => {
                let rest = relative
                    .split_once('/')
                    .map(|(_, rest)| rest)
                    .unwrap_or_default();
                format!("{}/{}", self.packages_root, rest)
            }
            AssetArea::Assets => format!("{}/{}", self.project_root, relative),
        }
    }
}

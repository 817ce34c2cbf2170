//! Constants and enums for the recognized project areas.

use std::path::Path;

/// Extension applied when a path is built from parts without one.
pub const DEFAULT_EXTENSION: &str = "asset";

/// Extension of the sidecar file stored next to every asset.
pub const META_EXTENSION: &str = "meta";

/// The two top-level areas every asset path lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetArea {
    /// The `Assets` folder (primary area, also the default path)
    Assets,
    /// The `Packages` folder (secondary area)
    Packages,
}

impl AssetArea {
    /// Get the folder name of the area as it appears in relative paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::Packages => "Packages",
        }
    }

    /// Classify a canonical relative path by its first segment.
    ///
    /// The check ignores ASCII case, matching the relative-path rule.
    pub(crate) fn of(canonical: &str) -> Self {
        let first = canonical.split('/').next().unwrap_or_default();
        if first.eq_ignore_ascii_case(Self::Packages.as_str()) {
            Self::Packages
        } else {
            Self::Assets
        }
    }
}

impl AsRef<Path> for AssetArea {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AssetArea {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AssetArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

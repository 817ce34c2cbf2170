//! Canonical project-relative asset paths
//!
//! An [`AssetPath`] always holds text of the form `Assets`, `Assets/...` or
//! `Packages/...`: forward slashes only, no leading or trailing separator,
//! case preserved exactly as given. Construction is the only place where
//! input is validated; every accessor afterwards is a pure string operation.

use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{AssetArea, DEFAULT_EXTENSION, META_EXTENSION};
use crate::error::InvalidReason;
use crate::normalize;
use crate::store::BackingStore;
use crate::{Error, ProjectRoots, Result};

/// A validated path relative to the project root.
///
/// Equality, ordering and hashing use the canonical text ordinally; use
/// [`AssetPath::eq_ignore_case`] for case-insensitive comparison.
///
/// # Examples
///
/// ```
/// use assetdb_path::AssetPath;
///
/// let path = AssetPath::parse("\\Assets\\Textures/hero.png/").unwrap();
/// assert_eq!(path, "Assets/Textures/hero.png");
/// assert_eq!(path.extension(), ".png");
/// assert_eq!(path.directory_name(), "Assets/Textures");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetPath {
    inner: String,
}

impl AssetPath {
    /// The `Assets` folder itself.
    pub fn assets_root() -> Self {
        Self {
            inner: AssetArea::Assets.as_str().to_string(),
        }
    }

    /// Parse a relative or absolute path.
    ///
    /// Absolute paths are resolved against the process-wide
    /// [`ProjectRoots`]; see [`AssetPath::parse_in`] to pass roots
    /// explicitly.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for blank input, for input that is
    ///   neither `Assets`/`Packages/` relative nor absolute, for `..`
    ///   segments, and for absolute paths outside the installed roots.
    /// - [`Error::RootsNotConfigured`] for any absolute path, foreign or
    ///   not, while no roots are installed. `FromStr`, `TryFrom` and serde
    ///   go through this function and report the same.
    pub fn parse(path: &str) -> Result<Self> {
        Self::parse_with(path, ProjectRoots::global())
    }

    /// Parse a path, resolving absolute input against `roots`.
    pub fn parse_in(path: &str, roots: &ProjectRoots) -> Result<Self> {
        Self::parse_with(path, Some(roots))
    }

    /// Like [`AssetPath::parse`], but a missing path is a
    /// [`Error::NullArgument`].
    pub fn parse_nullable(path: Option<&str>) -> Result<Self> {
        let path = path.ok_or(Error::NullArgument { name: "path" })?;
        Self::parse(path)
    }

    /// Build `folder/file_name.asset`.
    pub fn from_parts(folder: &str, file_name: &str) -> Result<Self> {
        PathParts::new().folder(folder).file_name(file_name).build()
    }

    /// Build `folder/file_name.extension`; a leading dot on `extension` is optional.
    pub fn from_parts_with_extension(folder: &str, file_name: &str, extension: &str) -> Result<Self> {
        PathParts::new()
            .folder(folder)
            .file_name(file_name)
            .extension(extension)
            .build()
    }

    fn parse_with(path: &str, roots: Option<&ProjectRoots>) -> Result<Self> {
        if normalize::is_blank(path) {
            tracing::debug!(path, "Rejected blank path");
            return Err(Error::invalid("path", path, InvalidReason::Empty));
        }

        let normalized = normalize::normalize(path);
        if normalize::has_parent_segment(&normalized) {
            tracing::debug!(path, "Rejected path with parent segment");
            return Err(Error::invalid("path", path, InvalidReason::NotAProjectPath));
        }
        if normalize::is_relative_normalized(&normalized) {
            tracing::trace!(input = path, canonical = %normalized, "Normalized relative path");
            return Ok(Self { inner: normalized });
        }

        if !normalize::looks_absolute(path) {
            tracing::debug!(path, "Rejected path outside Assets and Packages");
            return Err(Error::invalid("path", path, InvalidReason::NotAProjectPath));
        }

        let roots = roots.ok_or_else(|| Error::RootsNotConfigured {
            path: path.to_string(),
        })?;
        let relative = roots.to_relative(path).inspect_err(|_| {
            tracing::debug!(path, project = roots.project_root(), "Rejected absolute path outside project");
        })?;
        tracing::debug!(input = path, canonical = %relative, "Converted absolute path");
        Ok(Self { inner: relative })
    }

    /// Get the canonical relative text.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Area the path belongs to.
    pub fn area(&self) -> AssetArea {
        AssetArea::of(&self.inner)
    }

    pub fn is_assets(&self) -> bool {
        self.area() == AssetArea::Assets
    }

    pub fn is_packages(&self) -> bool {
        self.area() == AssetArea::Packages
    }

    /// Final segment, extension included.
    pub fn file_name(&self) -> &str {
        match self.inner.rfind('/') {
            Some(idx) => &self.inner[idx + 1..],
            None => &self.inner,
        }
    }

    /// Extension of the final segment including the dot, or `""`.
    pub fn extension(&self) -> &str {
        normalize::extension_of(self.file_name())
    }

    pub fn file_name_without_extension(&self) -> &str {
        let name = self.file_name();
        &name[..name.len() - self.extension().len()]
    }

    /// All segments but the last; empty only for a single-segment path.
    pub fn directory_name(&self) -> &str {
        match self.inner.rfind('/') {
            Some(idx) => &self.inner[..idx],
            None => "",
        }
    }

    /// Containing folder, or `None` for `Assets` and for direct children
    /// of `Packages`, whose folder is not itself an asset path.
    pub fn parent(&self) -> Option<Self> {
        let dir = self.directory_name();
        if !normalize::is_relative_normalized(dir) {
            None
        } else {
            Some(Self {
                inner: dir.to_string(),
            })
        }
    }

    /// Append one or more segments and re-normalize.
    pub fn join(&self, segment: &str) -> Result<Self> {
        if normalize::is_blank(segment) {
            return Err(Error::invalid("segment", segment, InvalidReason::Empty));
        }
        Self::parse_with(&format!("{}/{}", self.inner, segment), None)
    }

    /// Replace the extension (or add one if there is none).
    ///
    /// Fails with [`Error::InvalidArgument`] on `Assets` itself, since
    /// `Assets.ext` is not an asset path.
    pub fn with_extension(&self, extension: &str) -> Result<Self> {
        let extension = validated_extension(extension)?;
        let stem = &self.inner[..self.inner.len() - self.extension().len()];
        Self::parse_with(&format!("{stem}.{extension}"), None)
    }

    /// The `.meta` sidecar of this path.
    ///
    /// Fails with [`Error::InvalidArgument`] on `Assets` itself.
    pub fn to_meta_path(&self) -> Result<Self> {
        Self::parse_with(&format!("{}.{}", self.inner, META_EXTENSION), None)
    }

    /// The asset a `.meta` sidecar belongs to, if this is one.
    pub fn from_meta_path(&self) -> Option<Self> {
        let stem = self.inner.strip_suffix(META_EXTENSION)?.strip_suffix('.')?;
        normalize::is_relative_normalized(stem).then(|| Self {
            inner: stem.to_string(),
        })
    }

    /// Compare canonical text ignoring ASCII case.
    pub fn eq_ignore_case(&self, other: &AssetPath) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }

    /// Absolute location with forward slashes, independent of the host OS.
    pub fn full_path(&self, roots: &ProjectRoots) -> String {
        roots.to_full(&self.inner)
    }

    /// Absolute location as a native path for I/O.
    pub fn to_native(&self, roots: &ProjectRoots) -> PathBuf {
        PathBuf::from(self.full_path(roots))
    }

    pub fn exists<S: BackingStore + ?Sized>(&self, store: &S) -> bool {
        store.directory_exists(self) || store.file_exists(self)
    }

    pub fn is_file<S: BackingStore + ?Sized>(&self, store: &S) -> bool {
        store.file_exists(self)
    }

    pub fn is_folder<S: BackingStore + ?Sized>(&self, store: &S) -> bool {
        store.directory_exists(self)
    }

    /// Folder this path denotes or lives in.
    ///
    /// An existing directory is returned as is, an existing file yields its
    /// directory.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if the path exists neither as a file nor
    /// as a directory, or if it is a file directly under `Packages`.
    pub fn folder_path<S: BackingStore + ?Sized>(&self, store: &S) -> Result<Self> {
        self.existing_folder(store).unwrap_or_else(|| {
            Err(Error::InvalidOperation {
                path: self.inner.clone(),
                reason: "path does not exist as file or folder".into(),
            })
        })
    }

    /// Folder this path denotes or lives in, guessing for missing paths.
    ///
    /// Missing paths whose final segment contains a dot are taken to be
    /// files, all others to be folders. A missing folder whose name has a
    /// dot is therefore misread as a file.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] only when the (real or assumed) file lies
    /// directly under `Packages`.
    pub fn folder_path_assumed<S: BackingStore + ?Sized>(&self, store: &S) -> Result<Self> {
        if let Some(folder) = self.existing_folder(store) {
            return folder;
        }

        let assume_file = self.file_name().contains('.');
        tracing::warn!(path = %self.inner, assume_file, "Guessing folder of missing path");
        if assume_file {
            self.containing_folder()
        } else {
            Ok(self.clone())
        }
    }

    fn existing_folder<S: BackingStore + ?Sized>(&self, store: &S) -> Option<Result<Self>> {
        if store.directory_exists(self) {
            Some(Ok(self.clone()))
        } else if store.file_exists(self) {
            Some(self.containing_folder())
        } else {
            None
        }
    }

    fn containing_folder(&self) -> Result<Self> {
        self.parent().ok_or_else(|| Error::InvalidOperation {
            path: self.inner.clone(),
            reason: "containing folder is not an asset path".into(),
        })
    }
}

fn validated_extension(extension: &str) -> Result<&str> {
    let trimmed = normalize::normalize_extension(extension);
    if normalize::is_blank(trimmed) {
        return Err(Error::invalid("extension", extension, InvalidReason::Empty));
    }
    if normalize::contains_separator(trimmed) {
        return Err(Error::invalid(
            "extension",
            extension,
            InvalidReason::ContainsSeparator,
        ));
    }
    Ok(trimmed)
}

/// Builder combining a folder, a file name and an optional extension.
///
/// Unset folder or file name fails with [`Error::NullArgument`]; an unset
/// extension falls back to [`DEFAULT_EXTENSION`].
///
/// ```
/// use assetdb_path::PathParts;
///
/// let path = PathParts::new()
///     .folder("Assets/")
///     .file_name("file name")
///     .build()
///     .unwrap();
/// assert_eq!(path, "Assets/file name.asset");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParts<'a> {
    folder: Option<&'a str>,
    file_name: Option<&'a str>,
    extension: Option<&'a str>,
    roots: Option<&'a ProjectRoots>,
}

impl<'a> PathParts<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(mut self, folder: &'a str) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn file_name(mut self, file_name: &'a str) -> Self {
        self.file_name = Some(file_name);
        self
    }

    pub fn extension(mut self, extension: &'a str) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Resolve an absolute folder against these roots instead of the global ones.
    pub fn roots(mut self, roots: &'a ProjectRoots) -> Self {
        self.roots = Some(roots);
        self
    }

    pub fn build(self) -> Result<AssetPath> {
        let folder = self.folder.ok_or(Error::NullArgument { name: "folder" })?;
        let file_name = self.file_name.ok_or(Error::NullArgument { name: "file_name" })?;

        if normalize::is_blank(folder) {
            return Err(Error::invalid("folder", folder, InvalidReason::Empty));
        }
        if normalize::is_blank(file_name) {
            return Err(Error::invalid("file_name", file_name, InvalidReason::Empty));
        }
        if normalize::contains_separator(file_name) {
            return Err(Error::invalid(
                "file_name",
                file_name,
                InvalidReason::ContainsSeparator,
            ));
        }
        let extension = validated_extension(self.extension.unwrap_or(DEFAULT_EXTENSION))?;

        // Leading separators stay so absolute folders are still recognized
        let folder = normalize::to_forward_slashes(folder);
        let folder = folder.trim_end_matches('/');
        let combined = format!("{folder}/{file_name}.{extension}");
        let roots = self.roots.or_else(|| ProjectRoots::global());
        AssetPath::parse_with(&combined, roots)
    }
}

/// Parse a path against the process-wide roots.
///
/// Same as [`AssetPath::parse`].
pub fn parse_path(path: &str) -> Result<AssetPath> {
    AssetPath::parse(path)
}

impl Default for AssetPath {
    fn default() -> Self {
        Self::assets_root()
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for AssetPath {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl FromStr for AssetPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AssetPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AssetPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<AssetPath> for String {
    fn from(path: AssetPath) -> Self {
        path.inner
    }
}

impl PartialEq<str> for AssetPath {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for AssetPath {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl PartialEq<String> for AssetPath {
    fn eq(&self, other: &String) -> bool {
        &self.inner == other
    }
}

impl PartialEq<AssetPath> for str {
    fn eq(&self, other: &AssetPath) -> bool {
        self == other.inner
    }
}

impl PartialEq<AssetPath> for &str {
    fn eq(&self, other: &AssetPath) -> bool {
        *self == other.inner
    }
}

impl PartialEq<AssetPath> for String {
    fn eq(&self, other: &AssetPath) -> bool {
        *self == other.inner
    }
}

//! Project-relative asset paths for the asset database
//!
//! Provides the canonical [`AssetPath`] value, the [`ProjectRoots`] it is
//! resolved against, and the [`BackingStore`] seam used for existence checks.

pub mod config;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod path;
pub mod roots;
pub mod store;

pub use config::ConfigStore;
pub use constants::{AssetArea, DEFAULT_EXTENSION, META_EXTENSION};
pub use error::{Error, InvalidReason, Result};
pub use normalize::is_relative_path;
pub use path::{AssetPath, PathParts, parse_path};
pub use roots::{ProjectConfig, ProjectRoots};
pub use store::{BackingStore, FsStore, MemoryStore};

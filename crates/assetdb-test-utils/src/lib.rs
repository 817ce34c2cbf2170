//! Shared test utilities for the assetdb workspace.
//!
//! This crate provides standardised test fixtures. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`](project::TestProject) builder for an on-disk project
//! - [`logging`] — one-shot tracing setup for test binaries

pub mod logging;
pub mod project;

pub use logging::init_tracing;
pub use project::TestProject;

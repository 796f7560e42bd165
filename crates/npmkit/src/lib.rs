//! # npmkit
//!
//! npm package-manager operations for project scaffolding: the external
//! project generator, lockfile-aware installs, silent package additions,
//! manifest script merging, and the blocking dev-server hand-off.
//!
//! Subprocess calls are strictly sequential and never retried; failures
//! surface as categorized [`Error`]s and the caller decides what is fatal.

pub mod backend;
pub mod error;
pub mod manifest;

pub use backend::{Backend, NpmBackend};
pub use error::{Error, ErrorCategory, Result};
pub use manifest::{LOCKFILE, PackageManifest, has_lockfile};

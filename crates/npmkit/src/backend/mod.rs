//! Backends for executing package-manager operations.

mod npm;

pub use npm::NpmBackend;

use std::path::Path;
use std::process::ExitStatus;

use crate::error::Result;

/// Operations the scaffolding flow needs from a package manager.
///
/// Interactive operations (generator, installs, dev server) inherit stdio
/// and return the child's exit status so the caller decides what is fatal.
/// Silent operations capture output and surface categorized errors.
pub trait Backend {
    /// Whether the backend's executable is reachable.
    fn is_available(&self) -> bool;

    /// Invoke the project generator for `name` inside `cwd`.
    fn create_project(&self, cwd: &Path, name: &str, template: &str) -> Result<ExitStatus>;

    /// Regular dependency install.
    fn install(&self, project: &Path) -> Result<ExitStatus>;

    /// Fast, reproducible install from the lockfile.
    fn clean_install(&self, project: &Path) -> Result<ExitStatus>;

    /// Install additional packages silently.
    fn add_packages(&self, project: &Path, packages: &[&str]) -> Result<()>;

    /// Bump manifest versions to latest and reinstall.
    fn update_packages(&self, project: &Path) -> Result<()>;

    /// Run a manifest script, handing over the terminal until it exits.
    fn run_script(&self, project: &Path, script: &str) -> Result<ExitStatus>;
}

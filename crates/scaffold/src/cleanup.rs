//! Recursive cleanup of stray dependency-cache directories.
//!
//! Package managers occasionally leave nested `node_modules` directories
//! behind (interrupted installs, hoisting quirks inside transitive
//! packages). Only the cache directly under the project root is legitimate;
//! anything deeper is dead weight that slows editors and file watchers.
//!
//! Cleanup is best-effort by policy: a setup flow must never be blocked by
//! an unreadable or half-deleted subtree, so every traversal and deletion
//! error is logged, counted, and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Reserved names treated as dependency caches by default.
pub const DEFAULT_DEPENDENCY_DIRS: &[&str] = &["node_modules"];

/// Reserved names treated as version-control metadata by default.
pub const DEFAULT_VCS_DIRS: &[&str] = &[".git"];

/// Outcome of a cleanup pass.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Subtrees that were deleted.
    pub removed: Vec<PathBuf>,
    /// Traversal or deletion errors that were skipped over.
    pub failures: usize,
}

impl CleanupReport {
    /// Whether the pass completed without deleting or skipping anything.
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty() && self.failures == 0
    }
}

/// Removes nested dependency-cache directories below a project root.
///
/// The reserved names are configurable sets rather than literals: an
/// ecosystem with a different (or more than one) cache directory name plugs
/// in via [`Cleaner::with_dependency_dirs`].
#[derive(Debug, Clone)]
pub struct Cleaner {
    dependency_dirs: Vec<String>,
    vcs_dirs: Vec<String>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            dependency_dirs: DEFAULT_DEPENDENCY_DIRS
                .iter()
                .map(ToString::to_string)
                .collect(),
            vcs_dirs: DEFAULT_VCS_DIRS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Cleaner {
    /// Create a cleaner with the default reserved names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dependency-cache name set.
    pub fn with_dependency_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependency_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the version-control name set.
    pub fn with_vcs_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vcs_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    fn is_dependency_dir(&self, name: &str) -> bool {
        self.dependency_dirs.iter().any(|d| d == name)
    }

    fn is_vcs_dir(&self, name: &str) -> bool {
        self.vcs_dirs.iter().any(|d| d == name)
    }

    /// Walk `root` depth-first and delete every dependency-cache directory
    /// that is not the root's own.
    ///
    /// Policy per entry:
    /// - a cache directly under `root` is kept and never descended into,
    /// - a cache anywhere deeper is deleted wholesale,
    /// - version-control directories are never entered or touched,
    /// - ordinary directories are recursed into, non-directories ignored.
    ///
    /// A missing or unreadable root is a no-op. Sibling order is whatever
    /// the OS yields; callers must only rely on final absence.
    pub fn clean(&self, root: &Path) -> CleanupReport {
        let mut report = CleanupReport::default();

        if !root.is_dir() {
            log::debug!("cleanup root missing or not a directory: {}", root.display());
            return report;
        }

        let mut walker = WalkDir::new(root).into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("cleanup skipping unreadable entry: {err}");
                    report.failures += 1;
                    continue;
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            if self.is_vcs_dir(name) {
                walker.skip_current_dir();
                continue;
            }

            if self.is_dependency_dir(name) {
                // Never descend into a cache, neither the root's own nor a
                // stray one about to be deleted.
                walker.skip_current_dir();

                if entry.depth() > 1 {
                    match fs::remove_dir_all(entry.path()) {
                        Ok(()) => {
                            log::debug!("removed stray cache {}", entry.path().display());
                            report.removed.push(entry.path().to_path_buf());
                        }
                        Err(err) => {
                            log::warn!("could not remove {}: {err}", entry.path().display());
                            report.failures += 1;
                        }
                    }
                }
            }
        }

        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_keeps_root_cache_removes_nested() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("node_modules/react/index.js"));
        touch(&root.join("node_modules/react/node_modules/loose-envify/index.js"));
        touch(&root.join("src/vendor/node_modules/left-pad/index.js"));

        let report = Cleaner::new().clean(root);

        assert!(root.join("node_modules/react/index.js").exists());
        assert!(!root.join("node_modules/react/node_modules").exists());
        assert!(!root.join("src/vendor/node_modules").exists());
        assert_eq!(report.removed.len(), 2);
        assert_eq!(report.failures, 0);
    }

    #[test]
    fn test_never_enters_vcs_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        // A cache inside .git must survive untouched.
        let sentinel = root.join(".git/node_modules/objects/pack");
        touch(&sentinel);

        let report = Cleaner::new().clean(root);

        assert!(sentinel.exists());
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_missing_root_is_noop() {
        let temp = TempDir::new().unwrap();
        let report = Cleaner::new().clean(&temp.path().join("does-not-exist"));
        assert!(report.is_clean());
    }

    #[test]
    fn test_root_without_cache_is_clean() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("src/main.js"));

        let report = Cleaner::new().clean(temp.path());
        assert!(report.is_clean());
    }

    #[test]
    fn test_configurable_cache_names() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("vendor/pkg/file"));
        touch(&root.join("lib/deep/vendor/pkg/file"));
        touch(&root.join("lib/deep/node_modules/pkg/file"));

        let cleaner = Cleaner::new().with_dependency_dirs(["vendor"]);
        let report = cleaner.clean(root);

        assert!(root.join("vendor/pkg/file").exists());
        assert!(!root.join("lib/deep/vendor").exists());
        // node_modules is not in the configured set, so it survives
        assert!(root.join("lib/deep/node_modules/pkg/file").exists());
        assert_eq!(report.removed.len(), 1);
    }

    #[test]
    fn test_non_directories_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        // A plain file named like a cache is not a cache.
        touch(&root.join("src/node_modules"));

        let report = Cleaner::new().clean(root);
        assert!(root.join("src/node_modules").exists());
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_deeply_nested_caches_all_removed() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("a/b/c/node_modules/x/file"));
        touch(&root.join("a/node_modules/y/file"));
        touch(&root.join("d/node_modules/z/node_modules/w/file"));

        Cleaner::new().clean(root);

        assert!(!root.join("a/b/c/node_modules").exists());
        assert!(!root.join("a/node_modules").exists());
        assert!(!root.join("d/node_modules").exists());
        assert!(root.join("a/b/c").exists());
    }
}

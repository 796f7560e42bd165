//! Opinionated source tree for a freshly scaffolded project.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Directories created inside every new project.
pub const PROJECT_DIRS: &[&str] = &[
    "src/components/ui",
    "src/components/layout",
    "src/pages",
    "src/hooks",
    "src/services",
    "src/utils",
    "src/context",
    "src/assets/images",
    "src/assets/icons",
    "src/styles",
    "public",
];

/// Create the full directory layout under `base`. Idempotent.
pub fn create_layout(base: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = base.join(dir);
        fs::create_dir_all(&path).map_err(|source| Error::CreateDir { path, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_every_directory() {
        let temp = TempDir::new().unwrap();
        create_layout(temp.path()).unwrap();
        for dir in PROJECT_DIRS {
            assert!(temp.path().join(dir).is_dir(), "missing {dir}");
        }
    }

    #[test]
    fn test_is_idempotent() {
        let temp = TempDir::new().unwrap();
        create_layout(temp.path()).unwrap();
        create_layout(temp.path()).unwrap();
        assert!(temp.path().join("src/pages").is_dir());
    }
}

//! Collision-free project folder naming.

use std::path::Path;

/// Fallback used when the user submits an empty folder name.
pub const DEFAULT_PROJECT_NAME: &str = "my-vite-app";

/// Resolve a user-supplied folder name to one that does not collide with an
/// existing entry under `parent`.
///
/// Empty or whitespace-only input falls back to [`DEFAULT_PROJECT_NAME`].
/// On collision, an incrementing `-1`, `-2`, … suffix is appended to the
/// base name until an unused name is found. Nothing is created here; the
/// check is only valid at the moment it runs.
pub fn resolve_project_name(raw: &str, parent: &Path) -> String {
    let base = match raw.trim() {
        "" => DEFAULT_PROJECT_NAME,
        trimmed => trimmed,
    };

    let mut candidate = base.to_string();
    let mut counter = 1usize;
    while parent.join(&candidate).exists() {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    candidate
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unused_name_kept_as_is() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_project_name("shop", temp.path()), "shop");
    }

    #[test]
    fn test_empty_input_uses_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_project_name("", temp.path()), DEFAULT_PROJECT_NAME);
        assert_eq!(
            resolve_project_name("   ", temp.path()),
            DEFAULT_PROJECT_NAME
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_project_name("  shop  ", temp.path()), "shop");
    }

    #[test]
    fn test_collision_appends_counter() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("shop")).unwrap();
        assert_eq!(resolve_project_name("shop", temp.path()), "shop-1");
    }

    #[test]
    fn test_counter_increments_past_taken_suffixes() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("shop")).unwrap();
        fs::create_dir(temp.path().join("shop-1")).unwrap();
        assert_eq!(resolve_project_name("shop", temp.path()), "shop-2");
    }

    #[test]
    fn test_default_name_also_resolves_collisions() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DEFAULT_PROJECT_NAME)).unwrap();
        assert_eq!(
            resolve_project_name("", temp.path()),
            format!("{DEFAULT_PROJECT_NAME}-1")
        );
    }

    #[test]
    fn test_plain_file_counts_as_collision() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("shop"), b"not a dir").unwrap();
        assert_eq!(resolve_project_name("shop", temp.path()), "shop-1");
    }
}

//! `package.json` manipulation.
//!
//! The manifest is held as a raw `serde_json::Value` so keys this tool does
//! not know about survive a load/save round-trip untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// npm lockfile whose presence enables the reproducible install mode.
pub const LOCKFILE: &str = "package-lock.json";

/// Whether `dir` holds a lockfile (enables `npm ci`).
pub fn has_lockfile(dir: &Path) -> bool {
    dir.join(LOCKFILE).is_file()
}

/// A `package.json` loaded for in-place editing.
#[derive(Debug)]
pub struct PackageManifest {
    path: PathBuf,
    document: Value,
}

impl PackageManifest {
    /// Load `package.json` from a project directory.
    pub fn load(project: &Path) -> Result<Self> {
        let path = project.join("package.json");
        if !path.is_file() {
            return Err(Error::ManifestNotFound(path));
        }
        let raw = fs::read_to_string(&path)?;
        let document = serde_json::from_str(&raw)?;
        Ok(Self { path, document })
    }

    /// The package name, when present.
    pub fn name(&self) -> Option<&str> {
        self.document.get("name")?.as_str()
    }

    /// Merge script entries under `scripts`, overwriting the given keys and
    /// preserving every other key in the document and every other script.
    pub fn merge_scripts(&mut self, entries: &[(&str, &str)]) {
        let Some(root) = self.document.as_object_mut() else {
            log::warn!("package.json root is not an object; scripts left unchanged");
            return;
        };

        let scripts = root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));

        if let Some(map) = scripts.as_object_mut() {
            for (key, value) in entries {
                map.insert((*key).to_string(), Value::String((*value).to_string()));
            }
        } else {
            log::warn!("package.json scripts is not an object; left unchanged");
        }
    }

    /// Write the manifest back, pretty-printed with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(&self.document)?;
        rendered.push('\n');
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
  "name": "demo",
  "private": true,
  "version": "0.0.0",
  "scripts": {
    "dev": "vite"
  },
  "dependencies": {
    "react": "^18.2.0"
  }
}"#;

    fn write_sample(dir: &Path) {
        fs::write(dir.join("package.json"), SAMPLE).unwrap();
    }

    #[test]
    fn test_load_reads_name() {
        let temp = TempDir::new().unwrap();
        write_sample(temp.path());

        let manifest = PackageManifest::load(temp.path()).unwrap();
        assert_eq!(manifest.name(), Some("demo"));
    }

    #[test]
    fn test_load_missing_manifest_errors() {
        let temp = TempDir::new().unwrap();
        let err = PackageManifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound(_)));
    }

    #[test]
    fn test_merge_preserves_unrelated_keys_and_scripts() {
        let temp = TempDir::new().unwrap();
        write_sample(temp.path());

        let mut manifest = PackageManifest::load(temp.path()).unwrap();
        manifest.merge_scripts(&[("build", "vite build"), ("preview", "vite preview")]);
        manifest.save().unwrap();

        let raw = fs::read_to_string(temp.path().join("package.json")).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["dependencies"]["react"], "^18.2.0");
        assert_eq!(value["private"], true);
        assert_eq!(value["scripts"]["dev"], "vite");
        assert_eq!(value["scripts"]["build"], "vite build");
        assert_eq!(value["scripts"]["preview"], "vite preview");
    }

    #[test]
    fn test_merge_creates_scripts_when_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "bare"}"#).unwrap();

        let mut manifest = PackageManifest::load(temp.path()).unwrap();
        manifest.merge_scripts(&[("lint", "eslint .")]);
        manifest.save().unwrap();

        let raw = fs::read_to_string(temp.path().join("package.json")).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["scripts"]["lint"], "eslint .");
    }

    #[test]
    fn test_merge_overwrites_listed_keys() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"scripts": {"build": "old"}}"#,
        )
        .unwrap();

        let mut manifest = PackageManifest::load(temp.path()).unwrap();
        manifest.merge_scripts(&[("build", "vite build")]);
        manifest.save().unwrap();

        let raw = fs::read_to_string(temp.path().join("package.json")).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["scripts"]["build"], "vite build");
    }

    #[test]
    fn test_save_ends_with_newline() {
        let temp = TempDir::new().unwrap();
        write_sample(temp.path());

        let manifest = PackageManifest::load(temp.path()).unwrap();
        manifest.save().unwrap();

        let raw = fs::read_to_string(temp.path().join("package.json")).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_has_lockfile() {
        let temp = TempDir::new().unwrap();
        assert!(!has_lockfile(temp.path()));

        fs::write(temp.path().join(LOCKFILE), "{}").unwrap();
        assert!(has_lockfile(temp.path()));
    }
}

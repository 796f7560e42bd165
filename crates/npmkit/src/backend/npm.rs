//! Real npm CLI backend.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::backend::Backend;
use crate::error::{Error, Result};

/// Backend that executes real `npm` (and `npx`) commands.
pub struct NpmBackend {
    npm: String,
    npx: String,
}

impl NpmBackend {
    /// Create a new backend, verifying that npm is reachable.
    pub fn new() -> Result<Self> {
        let backend = Self {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
        };
        if !backend.is_available() {
            return Err(Error::NpmNotFound);
        }
        Ok(backend)
    }

    /// Run npm with inherited stdio, blocking until the child exits.
    fn run_inherited(&self, cwd: &Path, args: &[&str]) -> Result<ExitStatus> {
        log::debug!("running: npm {}", args.join(" "));
        let status = Command::new(&self.npm)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status)
    }

    /// Run npm with captured output, categorizing failures.
    fn run_checked(&self, cwd: &Path, args: &[&str], package: Option<&str>) -> Result<String> {
        log::debug!("running: npm {}", args.join(" "));
        let output = Command::new(&self.npm)
            .args(args)
            .current_dir(cwd)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::from_npm_output(&stderr, package));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Backend for NpmBackend {
    fn is_available(&self) -> bool {
        Command::new(&self.npm)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn create_project(&self, cwd: &Path, name: &str, template: &str) -> Result<ExitStatus> {
        self.run_inherited(
            cwd,
            &["create", "vite@latest", name, "--", "--template", template],
        )
    }

    fn install(&self, project: &Path) -> Result<ExitStatus> {
        self.run_inherited(project, &["install"])
    }

    fn clean_install(&self, project: &Path) -> Result<ExitStatus> {
        self.run_inherited(project, &["ci"])
    }

    fn add_packages(&self, project: &Path, packages: &[&str]) -> Result<()> {
        let mut args = vec!["install", "--silent"];
        args.extend_from_slice(packages);
        self.run_checked(project, &args, packages.first().copied())?;
        Ok(())
    }

    fn update_packages(&self, project: &Path) -> Result<()> {
        log::debug!("running: npx npm-check-updates -u");
        let output = Command::new(&self.npx)
            .args(["npm-check-updates", "-u", "--silent"])
            .current_dir(project)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::from_npm_output(&stderr, None));
        }

        // Versions were bumped in the manifest; bring the tree up to date.
        self.run_checked(project, &["install", "--silent"], None)?;
        Ok(())
    }

    fn run_script(&self, project: &Path, script: &str) -> Result<ExitStatus> {
        self.run_inherited(project, &["run", script])
    }
}

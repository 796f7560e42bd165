//! Scaffold a new Vite + React project.
//!
//! A linear sequence of blocking steps. Only the project generator is
//! fatal; installs, cleanup, and the update pass are best-effort so a flaky
//! registry or a half-broken cache never blocks the user from getting a
//! working project directory.

use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use npmkit::{Backend, NpmBackend, PackageManifest, has_lockfile};
use scaffold::cleanup::{Cleaner, CleanupReport};
use scaffold::naming::{DEFAULT_PROJECT_NAME, resolve_project_name};
use scaffold::{layout, templates};

use crate::Context;
use crate::cli::NewArgs;
use crate::ui;

const TOTAL_STEPS: usize = 6;

pub fn run(ctx: &Context, args: NewArgs) -> Result<()> {
    if !ctx.quiet {
        ui::banner();
    }
    ui::header("New Vite + React Project");

    let parent = resolve_parent_dir(&args.dir)?;

    let raw_name = match args.name {
        Some(name) => name,
        None if args.yes => DEFAULT_PROJECT_NAME.to_string(),
        None => prompt_for_name()?,
    };

    let base = match raw_name.trim() {
        "" => DEFAULT_PROJECT_NAME,
        trimmed => trimmed,
    };
    let name = resolve_project_name(&raw_name, &parent);
    if name != base {
        ui::warn(&format!("Folder '{base}' exists. Using '{name}' instead."));
    }

    let project = parent.join(&name);
    let npm = NpmBackend::new().context("npm is required to scaffold a project")?;

    // The generator is the one fatal step: without its output there is no
    // project to set up.
    ui::step(1, TOTAL_STEPS, "Running the Vite project generator");
    let status = npm
        .create_project(&parent, &name, &args.template)
        .context("Failed to launch the project generator")?;
    if !status.success() {
        bail!("project generator exited with status {status}");
    }

    ui::step(2, TOTAL_STEPS, "Installing dependencies");
    let install = if has_lockfile(&project) {
        log::info!("lockfile present, using reproducible install");
        npm.clean_install(&project)
    } else {
        npm.install(&project)
    };
    match install {
        Ok(status) if status.success() => {}
        Ok(status) => ui::warn(&format!(
            "Dependency install exited with status {status} — continuing"
        )),
        Err(err) => ui::warn(&format!("Dependency install failed: {err} — continuing")),
    }

    if let Err(err) = with_spinner("Installing axios, react-router-dom, tailwindcss", || {
        npm.add_packages(&project, templates::RUNTIME_PACKAGES)
    }) {
        ui::warn(&format!(
            "Extra package install failed ({}): {err} — continuing",
            err.category().description()
        ));
    }

    ui::step(3, TOTAL_STEPS, "Removing stray dependency directories");
    report_cleanup(ctx, &Cleaner::new().clean(&project));

    ui::step(4, TOTAL_STEPS, "Writing project files");
    layout::create_layout(&project).context("Failed to create the project layout")?;
    templates::write_all(&project, &name).context("Failed to write template files")?;

    ui::step(5, TOTAL_STEPS, "Updating package.json scripts");
    match PackageManifest::load(&project) {
        Ok(mut manifest) => {
            manifest.merge_scripts(templates::MANIFEST_SCRIPTS);
            if let Err(err) = manifest.save() {
                ui::warn(&format!("Could not save package.json: {err} — continuing"));
            }
        }
        Err(err) => ui::warn(&format!("Could not update package.json: {err} — continuing")),
    }

    // Installs can re-create strays, so sweep once more before handing off.
    ui::step(6, TOTAL_STEPS, "Final cleanup");
    report_cleanup(ctx, &Cleaner::new().clean(&project));

    if !args.no_update {
        if let Err(err) = with_spinner("Updating packages to latest versions", || {
            npm.update_packages(&project)
        }) {
            ui::warn(&format!("Package update skipped: {err}"));
        }
    }

    println!();
    ui::success("Setup completed successfully!");
    ui::kv("Project", &name);
    ui::kv("Location", &project.display().to_string());

    if args.no_dev {
        println!();
        ui::info(&format!("Next: cd {name} && npm run dev"));
        return Ok(());
    }

    println!();
    ui::info("Starting development server (Ctrl-C to stop)...");
    let status = npm
        .run_script(&project, "dev")
        .context("Failed to launch the dev server")?;
    if !status.success() {
        ui::warn(&format!("Dev server exited with status {status}"));
    }

    Ok(())
}

fn prompt_for_name() -> Result<String> {
    Input::new()
        .with_prompt("Folder name for your Vite React project")
        .default(DEFAULT_PROJECT_NAME.to_string())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read folder name")
}

fn resolve_parent_dir(dir: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(dir).unwrap_or(Cow::Borrowed(dir));
    let path = PathBuf::from(expanded.as_ref());
    if !path.is_dir() {
        bail!("target directory does not exist: {}", path.display());
    }
    Ok(path)
}

fn report_cleanup(ctx: &Context, report: &CleanupReport) {
    if report.removed.is_empty() {
        ui::dim("nothing to remove");
    } else {
        ui::dim(&format!(
            "removed {} stray director{}",
            report.removed.len(),
            if report.removed.len() == 1 { "y" } else { "ies" }
        ));
        if ctx.verbose > 0 {
            for path in &report.removed {
                ui::dim(&format!("  {}", path.display()));
            }
        }
    }
    if report.failures > 0 {
        log::debug!("{} cleanup entries skipped", report.failures);
    }
}

/// Run a silent (captured-output) operation behind a spinner.
fn with_spinner<T>(
    message: &str,
    work: impl FnOnce() -> npmkit::Result<T>,
) -> npmkit::Result<T> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{message} — done")),
        Err(_) => spinner.finish_and_clear(),
    }
    result
}

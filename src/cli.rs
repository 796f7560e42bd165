use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "vitesse")]
#[command(version)]
#[command(about = "Instant Vite + React scaffolding with built-in reference tables", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scaffold a new Vite + React project
    New(NewArgs),

    /// Browse the JavaScript reference chapters
    Chapters(ChaptersArgs),

    /// Print the git command reference tables
    Git(GitArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// New
// ============================================================================

#[derive(Parser)]
pub struct NewArgs {
    /// Project folder name (prompted for when omitted)
    pub name: Option<String>,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// Template passed to the Vite generator
    #[arg(short, long, default_value = "react")]
    pub template: String,

    /// Do not launch the dev server after setup
    #[arg(long)]
    pub no_dev: bool,

    /// Skip the best-effort "update packages to latest" pass
    #[arg(long)]
    pub no_update: bool,

    /// Accept the default folder name without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

// ============================================================================
// Reference browsers
// ============================================================================

#[derive(Parser)]
pub struct ChaptersArgs {
    /// Chapter to print non-interactively (number or name fragment)
    pub chapter: Option<String>,

    /// Dump the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct GitArgs {
    /// Dump the reference data as JSON
    #[arg(long)]
    pub json: bool,
}

//! Git command reference printer.

use anyhow::Result;

use crate::Context;
use crate::catalog;
use crate::cli::GitArgs;
use crate::commands::render_topic;
use crate::ui;

pub fn run(_ctx: &Context, args: GitArgs) -> Result<()> {
    let catalog = catalog::git::catalog();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    ui::header("Git Command Reference");
    for topic in catalog.topics() {
        render_topic(topic);
    }

    Ok(())
}

//! Interactive JavaScript reference browser.

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::{Confirm, Select};

use crate::Context;
use crate::catalog::{self, Catalog};
use crate::cli::ChaptersArgs;
use crate::commands::render_topic;
use crate::ui;

pub fn run(_ctx: &Context, args: ChaptersArgs) -> Result<()> {
    let catalog = catalog::javascript::catalog();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if let Some(query) = args.chapter.as_deref() {
        match catalog.find(query) {
            Some(topic) => render_topic(topic),
            None => ui::warn(&format!("No chapter matches '{query}'")),
        }
        return Ok(());
    }

    browse(&catalog)
}

/// Selection loop: one blocking prompt per round until the user exits.
fn browse(catalog: &Catalog) -> Result<()> {
    ui::header("JavaScript Chapter Navigator");

    loop {
        let mut items = catalog.names();
        items.push("Exit");

        let selection = Select::new()
            .with_prompt("Select a chapter to view its details")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to read chapter selection")?;

        if selection == items.len() - 1 {
            break;
        }

        if let Some(topic) = catalog.get(items[selection]) {
            render_topic(topic);
        }

        let again = Confirm::new()
            .with_prompt("View another chapter?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !again {
            break;
        }
    }

    println!();
    println!("{}", "Goodbye!".green());
    Ok(())
}

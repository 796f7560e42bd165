pub mod chapters;
pub mod git;
pub mod new;

use colored::Colorize;

use crate::catalog::Topic;
use crate::ui;

/// Render every table of a topic, in registration order. A topic with no
/// registered tables gets a notice instead of an error.
pub(crate) fn render_topic(topic: &Topic) {
    if topic.tables.is_empty() {
        ui::warn(&format!(
            "No reference data registered for '{}' yet",
            topic.name
        ));
        return;
    }

    println!();
    println!("{}", topic.name.yellow().bold());
    for table in &topic.tables {
        ui::table(table.title, table.columns, table.rows);
    }
    println!();
}

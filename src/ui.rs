#![allow(dead_code)]

use colored::Colorize;
use console::measure_text_width;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a step indicator
pub fn step(num: usize, total: usize, msg: &str) {
    println!("{} {}", format!("[{}/{}]", num, total).blue().bold(), msg);
}

/// Print the vitesse banner
pub fn banner() {
    println!();
    println!(
        "{}",
        format!("⚡ vitesse v{}", env!("CARGO_PKG_VERSION"))
            .cyan()
            .bold()
    );
}

// ============================================================================
// Table Rendering
// ============================================================================

/// Render a titled table: bold header row, a rule, then the data rows.
///
/// Column widths are derived from the widest cell, measured with
/// `console` so wide glyphs line up.
pub fn table(title: &str, columns: &[&str], rows: &[&[&str]]) {
    println!();
    println!("{}", title.magenta().bold());
    println!();

    let widths = column_widths(columns, rows);

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, width)| pad(col, *width))
        .collect();
    println!("  {}", header.join("  ").bold());

    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    println!("  {}", "─".repeat(rule_len).dimmed());

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| pad(row.get(i).copied().unwrap_or(""), *width))
            .collect();
        println!("  {}", cells.join("  "));
    }
}

fn pad(text: &str, width: usize) -> String {
    let measured = measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(measured)))
}

fn column_widths(columns: &[&str], rows: &[&[&str]]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|c| measure_text_width(c)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }
    }
    widths
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_tracks_widest_cell() {
        let rows: &[&[&str]] = &[&["a", "longest-cell"], &["bb", "x"]];
        assert_eq!(column_widths(&["Col", "C"], rows), vec![3, 12]);
    }

    #[test]
    fn test_column_widths_ignores_extra_cells() {
        let rows: &[&[&str]] = &[&["a", "b", "spilled-over"]];
        assert_eq!(column_widths(&["X", "Y"], rows), vec![1, 1]);
    }

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab", 5), "ab   ");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abcdef", 3), "abcdef");
    }
}

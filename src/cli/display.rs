//! Console output: result tables, status messages and the busy spinner.

use crate::error::{AppError, Result};
use crate::models::QueryResult;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const NULL_CELL: &str = "NULL";

/// Renders a result set as a bordered table.
pub fn render_table(result: &QueryResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            result
                .columns
                .iter()
                .map(|c| Cell::new(c).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );

    for row in &result.rows {
        table.add_row(
            row.iter()
                .map(|cell| cell.as_deref().unwrap_or(NULL_CELL))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Prints a result set, or `empty_message` when it has no rows.
pub fn print_result(result: &QueryResult, empty_message: &str) {
    if result.is_empty() {
        warning(empty_message);
        return;
    }
    println!("{}", render_table(result));
    println!("{}", format!("{} row(s)", result.len()).dimmed());
}

pub fn banner(title: &str) {
    let rule = "=".repeat(title.chars().count() + 8);
    println!("\n{}", rule.blue());
    println!("{}", format!("    {}    ", title).cyan().bold());
    println!("{}", rule.blue());
}

pub fn success(message: &str) {
    println!("{} {}", "✔".green(), message.green());
}

pub fn warning(message: &str) {
    println!("{} {}", "!".yellow(), message.yellow());
}

/// Reports a failed action without ending the session.
pub fn failure(err: &AppError) {
    let prefix = match err {
        AppError::Validation(_) => "Invalid input:",
        AppError::NotFound { .. } => "Not found:",
        e if e.is_constraint_violation() => "Rejected by the database:",
        _ => "Error:",
    };
    println!("{} {}", prefix.red().bold(), err.to_string().red());
}

/// Spinner shown while a statement runs.
pub fn spinner(message: &str) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_headers_and_null_placeholder() {
        let result = QueryResult::new(
            vec!["Customer ID".into(), "Email".into()],
            vec![
                vec![Some("1".into()), Some("jane@ups.com".into())],
                vec![Some("2".into()), None],
            ],
        );

        let rendered = render_table(&result).to_string();
        assert!(rendered.contains("Customer ID"));
        assert!(rendered.contains("jane@ups.com"));
        assert!(rendered.contains(NULL_CELL));
    }

    #[test]
    fn empty_result_renders_header_only() {
        let result = QueryResult::new(vec!["role_id".into()], Vec::new());
        let table = render_table(&result);
        assert_eq!(table.row_iter().count(), 0);
        assert!(table.to_string().contains("role_id"));
    }
}
